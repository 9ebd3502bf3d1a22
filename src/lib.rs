//! An unbalanced Binary Search Tree (BST) over records of three integers,
//! buildable under either of two orderings.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert
//! and find stored records. BSTs are typically defined recursively using the
//! notion of a `Node`. A `Node` stores some record and will sometimes have
//! child `Node`s. The invariants of the trees in this crate are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key less
//!    than or equal to its own key.
//! 2. For every `Node`, all the `Node`s in its right subtree have a key
//!    greater than its own key.
//!
//! Note the "or equal" in the first invariant: these trees keep duplicate
//! keys, and an equal key always descends to the left. Nothing rebalances,
//! so the height of a tree is driven entirely by insertion order.
//!
//! Searching takes `O(height)`, and sorted iteration falls out of visiting
//! the left subtree, then the subtree root, then the right subtree. The
//! search offered here never comes back empty-handed on a populated tree:
//! when a key is absent it answers with the last node on the path toward
//! where the key would have been.

#![deny(missing_docs)]

pub mod input;
pub mod tree;
