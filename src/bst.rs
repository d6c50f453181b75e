//! An unbalanced Binary Search Tree. Nothing here ever rebalances, so the
//! shape of the tree is entirely determined by the insertion order. That
//! makes it the baseline for the benchmarks: feed it ascending keys and it
//! degrades into a linked list with `O(n)` operations.
//!
//! # Examples
//!
//! ```
//! use search_trees::bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(1));
//!
//! tree.insert(1);
//! assert!(tree.contains(1));
//!
//! // Inserting the same key again is a no-op.
//! tree.insert(1);
//!
//! tree.delete(1);
//! assert!(!tree.contains(1));
//!
//! // So is deleting a key that isn't there.
//! tree.delete(42);
//! ```

use std::cmp::Ordering;

type Link = Option<Box<Node>>;

/// An unbalanced Binary Search Tree storing `i32` keys. This can be used for
/// inserting, searching for, and deleting keys. Keys are unique - inserting
/// a duplicate leaves the tree untouched.
#[derive(Clone, Debug)]
pub struct Tree {
    root: Link,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Inserts the given key into the tree. Inserting a key that is already
    /// present is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1);
    /// assert!(tree.contains(1));
    /// ```
    pub fn insert(&mut self, key: i32) {
        self.root = insert(self.root.take(), key);
    }

    /// Returns whether the given key is in the tree. This is a read-only
    /// descent from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(1));
    /// assert!(!tree.contains(42));
    /// ```
    pub fn contains(&self, key: i32) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Deletes the given key from the tree. Deleting a key that isn't in the
    /// tree is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.delete(1);
    ///
    /// assert!(!tree.contains(1));
    /// ```
    pub fn delete(&mut self, key: i32) {
        self.root = delete(self.root.take(), key);
    }
}

#[derive(Clone, Debug)]
struct Node {
    key: i32,
    left: Link,
    right: Link,
}

impl Node {
    fn new(key: i32) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
        })
    }
}

/// Inserts `key` into the subtree, consuming it and returning the new owner.
/// A parent rewires its child link to whatever this returns.
fn insert(link: Link, key: i32) -> Link {
    let mut node = match link {
        None => return Some(Node::new(key)),
        Some(node) => node,
    };

    match key.cmp(&node.key) {
        Ordering::Less => node.left = insert(node.left.take(), key),
        // Duplicate keys are not stored.
        Ordering::Equal => {}
        Ordering::Greater => node.right = insert(node.right.take(), key),
    }

    Some(node)
}

/// Deletes `key` from the subtree, consuming it and returning the new owner.
fn delete(link: Link, key: i32) -> Link {
    let mut node = link?;

    match key.cmp(&node.key) {
        Ordering::Less => node.left = delete(node.left.take(), key),
        Ordering::Greater => node.right = delete(node.right.take(), key),
        Ordering::Equal => {
            return match (node.left.take(), node.right.take()) {
                // At most one child: splice it into our position.
                (None, right) => right,
                (left, None) => left,
                // Two children: overwrite our key with the in-order
                // successor's and delete that key from the right subtree
                // instead. The successor has no left child, so the recursive
                // delete bottoms out in the splice cases above.
                (left, Some(right)) => {
                    node.key = min_key(&right);
                    node.left = left;
                    node.right = delete(Some(right), node.key);
                    Some(node)
                }
            };
        }
    }

    Some(node)
}

/// The smallest key in the subtree rooted at `node`.
fn min_key(node: &Node) -> i32 {
    let mut current = node;
    while let Some(left) = current.left.as_deref() {
        current = left;
    }
    current.key
}

#[cfg(test)]
impl Tree {
    /// All keys in ascending order. Test-only: the public API deliberately
    /// has no iteration.
    pub(crate) fn in_order_keys(&self) -> Vec<i32> {
        fn walk(link: &Link, out: &mut Vec<i32>) {
            if let Some(node) = link {
                walk(&node.left, out);
                out.push(node.key);
                walk(&node.right, out);
            }
        }

        let mut out = Vec::new();
        walk(&self.root, &mut out);
        out
    }

    /// The number of levels in the tree. An empty tree has height 0.
    pub(crate) fn height(&self) -> usize {
        fn walk(link: &Link) -> usize {
            match link {
                None => 0,
                Some(node) => walk(&node.left).max(walk(&node.right)) + 1,
            }
        }

        walk(&self.root)
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a `BTreeSet`. This way we
    /// can ensure that after a random smattering of inserts and deletes we
    /// have the same set of keys in both.
    fn do_ops(ops: &[Op<i8>], tree: &mut Tree, set: &mut BTreeSet<i32>) {
        for op in ops {
            match *op {
                Op::Insert(key) => {
                    tree.insert(i32::from(key));
                    set.insert(i32::from(key));
                }
                Op::Remove(key) => {
                    tree.delete(i32::from(key));
                    set.remove(&i32::from(key));
                }
            }
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            tree.in_order_keys() == set.iter().copied().collect::<Vec<_>>()
                && set.iter().all(|&key| tree.contains(key))
        }
    }

    quickcheck::quickcheck! {
        fn contains(xs: Vec<i8>) -> bool {
            let mut tree = Tree::new();
            for x in &xs {
                tree.insert(i32::from(*x));
            }

            xs.iter().all(|x| tree.contains(i32::from(*x)))
        }
    }

    quickcheck::quickcheck! {
        fn in_order_is_strictly_increasing(xs: Vec<i8>) -> bool {
            let mut tree = Tree::new();
            for x in &xs {
                tree.insert(i32::from(*x));
            }

            tree.in_order_keys().windows(2).all(|pair| pair[0] < pair[1])
        }
    }
}
