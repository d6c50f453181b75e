//! A self-balancing Binary Search Tree (specifically, an AVL tree). Every
//! node caches the height of its subtree and the tree rotates nodes on the
//! way back up from a mutation whenever the heights of a node's children
//! differ by more than one. That keeps the overall height - and therefore
//! every operation - at `O(lg n)` no matter how adversarial the insertion
//! order is.
//!
//! # Examples
//!
//! ```
//! use search_trees::avl::Tree;
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

/// A self-balancing Binary Search Tree storing `i32` keys. This can be used
/// for inserting, searching for, and deleting keys. Keys are unique -
/// inserting a duplicate leaves the tree untouched.
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

    /// Inserts the given key into the tree, rebalancing as needed. Inserting
    /// a key that is already present is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::avl::Tree;
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
    /// use search_trees::avl::Tree;
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

    /// Deletes the given key from the tree, rebalancing as needed. Deleting
    /// a key that isn't in the tree is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::avl::Tree;
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

    /// How many levels are in the subtree rooted at this node. A node with
    /// no children has a height of 1.
    height: usize,
}

impl Node {
    fn new(key: i32) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// Adjusts the height of `self` to be the max of its children's heights
    /// plus one. Must be called after any structural change below `self` and
    /// before `self` is handed back to its parent.
    fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }

    /// The difference in height between the left and right subtrees.
    /// Positive means left-heavy, negative means right-heavy; outside
    /// `-1..=1` the AVL invariant is broken and a rotation is due.
    fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

fn height(link: &Link) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

fn balance_factor(link: &Link) -> isize {
    link.as_ref().map_or(0, |node| node.balance_factor())
}

/// Rotates the left child up to become the subtree root. The left child's
/// right subtree moves over to become the demoted node's left subtree, which
/// preserves the ordering invariant. Heights are fixed child-first since the
/// demoted node is the new root's child.
///
/// # Panics
///
/// When called on a node without a left child. Callers only rotate right
/// when the left subtree is the taller one, so it cannot be empty.
fn rotate_right(mut node: Box<Node>) -> Box<Node> {
    let mut child = node.left.take().expect("Rotate right => left child");
    node.left = child.right.take();
    node.fix_height();
    child.right = Some(node);
    child.fix_height();
    child
}

/// Mirror of [`rotate_right`]: rotates the right child up to become the
/// subtree root.
///
/// # Panics
///
/// When called on a node without a right child.
fn rotate_left(mut node: Box<Node>) -> Box<Node> {
    let mut child = node.right.take().expect("Rotate left => right child");
    node.right = child.left.take();
    node.fix_height();
    child.left = Some(node);
    child.fix_height();
    child
}

/// Inserts `key` into the subtree, consuming it and returning the new owner.
///
/// Rebalancing happens on the unwind: every ancestor on the path re-checks
/// its own balance factor after the recursive call returns, since a single
/// rotation at one level does not guarantee the levels above it are fine.
/// The inserted key's position relative to the taller child picks between
/// the single and double rotation.
fn insert(link: Link, key: i32) -> Link {
    let mut node = match link {
        None => return Some(Node::new(key)),
        Some(node) => node,
    };

    match key.cmp(&node.key) {
        Ordering::Less => node.left = insert(node.left.take(), key),
        // Duplicate: nothing moved, so no height or balance updates either.
        Ordering::Equal => return Some(node),
        Ordering::Greater => node.right = insert(node.right.take(), key),
    }

    node.fix_height();

    let node = if node.balance_factor() > 1 {
        let left_key = node
            .left
            .as_deref()
            .expect("left-heavy node has a left child")
            .key;
        if key > left_key {
            // Left-right: the new key landed in the left child's right
            // subtree, so a single right rotation would just mirror the
            // imbalance. Rotate the left child first to reduce to left-left.
            node.left = node.left.take().map(rotate_left);
        }
        rotate_right(node)
    } else if node.balance_factor() < -1 {
        let right_key = node
            .right
            .as_deref()
            .expect("right-heavy node has a right child")
            .key;
        if key < right_key {
            // Right-left, the mirror of the above.
            node.right = node.right.take().map(rotate_right);
        }
        rotate_left(node)
    } else {
        node
    };

    // In debug builds, assert that we've restored/maintained the AVL
    // invariant before handing the subtree back up.
    if cfg!(debug_assertions) {
        assert!(node.balance_factor().abs() <= 1);
        assert_eq!(node.height, height(&node.left).max(height(&node.right)) + 1);
    }

    Some(node)
}

/// Deletes `key` from the subtree, consuming it and returning the new owner.
/// Every ancestor on the unwind path goes through [`rebalance`].
fn delete(link: Link, key: i32) -> Link {
    let mut node = link?;

    match key.cmp(&node.key) {
        Ordering::Less => node.left = delete(node.left.take(), key),
        Ordering::Greater => node.right = delete(node.right.take(), key),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            // At most one child: splice it into our position. The child (if
            // any) is a lone leaf here - the balance invariant leaves no
            // room for grandchildren - so it needs no rebalancing itself.
            (None, right) => return right,
            (left, None) => return left,
            // Two children: overwrite our key with the in-order successor's
            // and delete that key from the right subtree instead.
            (left, Some(right)) => {
                node.key = min_key(&right);
                node.left = left;
                node.right = delete(Some(right), node.key);
            }
        },
    }

    Some(rebalance(node))
}

/// Restores the balance invariant at `node` after a deletion somewhere below
/// it. Unlike on the insert path there is no freshly-placed key to compare
/// against, so the taller child's own balance factor picks between the
/// single and double rotation.
fn rebalance(mut node: Box<Node>) -> Box<Node> {
    node.fix_height();

    if node.balance_factor() > 1 {
        if balance_factor(&node.left) < 0 {
            node.left = node.left.take().map(rotate_left);
        }
        node = rotate_right(node);
    } else if node.balance_factor() < -1 {
        if balance_factor(&node.right) > 0 {
            node.right = node.right.take().map(rotate_right);
        }
        node = rotate_left(node);
    }

    if cfg!(debug_assertions) {
        assert!(node.balance_factor().abs() <= 1);
        assert_eq!(node.height, height(&node.left).max(height(&node.right)) + 1);
    }

    node
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

    /// The number of levels in the tree, read from the root's cached height.
    pub(crate) fn height(&self) -> usize {
        height(&self.root)
    }

    /// Walks the whole tree asserting the cached-height and balance
    /// invariants at every node. Returns the recomputed height.
    pub(crate) fn check_invariants(&self) -> usize {
        fn walk(link: &Link) -> usize {
            let node = match link {
                None => return 0,
                Some(node) => node,
            };

            let left_height = walk(&node.left);
            let right_height = walk(&node.right);

            assert_eq!(node.height, left_height.max(right_height) + 1);
            assert!(
                left_height.abs_diff(right_height) <= 1,
                "balance factor out of range at key {}",
                node.key
            );

            node.height
        }

        walk(&self.root)
    }
}
