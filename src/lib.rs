//! This crate exposes two Binary Search Trees (BSTs) over integer keys - a
//! plain unbalanced one and a self-balancing AVL tree - along with criterion
//! benchmarks pitting them against each other (and against a linear scan
//! over a flat `Vec`).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, search for, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching a BST takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`), and that is exactly
//! where the two implementations part ways. [`bst::Tree`] never reshapes
//! itself, so sorted input degrades it into a list with height `n`.
//! [`avl::Tree`] additionally maintains the AVL invariant:
//!
//! 3. For every `Node`, the heights of its two subtrees differ by at most
//!    one.
//!
//! It restores that invariant with rotations on the way back up from every
//! insert and delete, which caps the height - and the cost of every
//! operation - at `O(lg n)`.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod bst;

#[cfg(test)]
mod test;
