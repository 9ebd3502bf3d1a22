//! The tree itself: records, key policies, insertion, search, traversal.
//!
//! A [`Tree`] stores [`Triple`] records and is generic over a [`Key`]
//! policy choosing which field orders it, so `Tree<ByX>` and `Tree<ByY>`
//! share one insertion and one search algorithm. Equal keys always descend
//! to the left, which pins down the shape produced by repeated keys.
//!
//! # Examples
//!
//! ```
//! use triple_bst::tree::{ByX, ByY, Tree, Triple};
//!
//! let mut by_x = Tree::<ByX>::new();
//! by_x.insert(Triple::new(2, 20, 0));
//! by_x.insert(Triple::new(1, 10, 0));
//! by_x.insert(Triple::new(3, 30, 0));
//!
//! // In-order traversal ascends in the tree's own key.
//! let xs: Vec<i32> = by_x.in_order().map(|record| record.x).collect();
//! assert_eq!(xs, [1, 2, 3]);
//!
//! // The same records, re-ordered under the other key.
//! let by_y = Tree::<ByY>::rekeyed(&by_x);
//! let ys: Vec<i32> = by_y.in_order().map(|record| record.y).collect();
//! assert_eq!(ys, [10, 20, 30]);
//!
//! // A missing key answers with the last node on the way toward it.
//! assert_eq!(by_y.search(15).map(|record| record.y), Some(10));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// A record of three integers. Which one acts as the search key is decided
/// by the tree holding the record, not by the record itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Triple {
    /// First field; the ordering key of [`ByX`] trees.
    pub x: i32,
    /// Second field; the ordering key of [`ByY`] trees.
    pub y: i32,
    /// Third field; never compared, only carried.
    pub z: i32,
}

impl Triple {
    /// Builds a record from its three fields. Any values are accepted.
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// Prints the record as `(X, Y, Z)`.
impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Selects the field of a [`Triple`] that orders a tree.
///
/// Implementations are uninhabited marker types: a policy only ever appears
/// as a type parameter, never as a value.
pub trait Key {
    /// Extracts the ordering key from a record.
    fn key(record: &Triple) -> i32;
}

/// Orders a tree by the `x` field.
#[derive(Clone, Copy, Debug)]
pub enum ByX {}

impl Key for ByX {
    fn key(record: &Triple) -> i32 {
        record.x
    }
}

/// Orders a tree by the `y` field.
#[derive(Clone, Copy, Debug)]
pub enum ByY {}

impl Key for ByY {
    fn key(record: &Triple) -> i32 {
        record.y
    }
}

/// A Binary Search Tree over [`Triple`] records, ordered by the key policy
/// `P`. Duplicate keys are kept (ties descend left) and nothing rebalances.
pub enum Tree<P> {
    /// A marker for the empty pointer at the bottom of a subtree.
    Leaf,
    /// A subtree with a root node. This enum trivially wraps the [`Node`]
    /// struct.
    Node(Node<P>),
}

/// A `Node` has the record it stores and two children (which are both
/// [`Tree`]s, possibly [`Leaf`][Tree::Leaf]s). The record is set at
/// construction and never touched again; each child link is assigned at
/// most once, by the insertion that reaches it.
pub struct Node<P> {
    record: Triple,
    left: Box<Tree<P>>,
    right: Box<Tree<P>>,
    _key: PhantomData<P>,
}

impl<P> Default for Tree<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Manual implementation of `Clone` so we don't require the key policy
/// (an uninhabited marker type) to be `Clone` itself.
impl<P> Clone for Tree<P> {
    fn clone(&self) -> Self {
        match self {
            Self::Leaf => Self::Leaf,
            Self::Node(n) => Self::Node(n.clone()),
        }
    }
}

impl<P> Clone for Node<P> {
    fn clone(&self) -> Self {
        Self {
            record: self.record,
            left: self.left.clone(),
            right: self.right.clone(),
            _key: PhantomData,
        }
    }
}

impl<P> Tree<P> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Leaf
    }

    /// Whether the tree holds no records at all.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    /// Visits every record left subtree first, then the node, then the
    /// right subtree: ascending in the tree's key, with equal keys oldest
    /// last. An empty tree yields nothing.
    pub fn in_order(&self) -> InOrder<'_, P> {
        InOrder::new(self)
    }

    /// Visits every record node first, then the left subtree, then the
    /// right subtree. Feeding this order back through insertion under the
    /// same policy reproduces the tree shape exactly, which is what
    /// [`rekeyed`][Self::rekeyed] relies on for its seeding order.
    pub fn pre_order(&self) -> PreOrder<'_, P> {
        PreOrder::new(self)
    }

    /// Visits both subtrees before the node itself. An empty tree yields
    /// nothing.
    pub fn post_order(&self) -> PostOrder<'_, P> {
        PostOrder::new(self)
    }
}

impl<P: Key> Tree<P> {
    /// Inserts a record, descending left on keys less than or **equal to**
    /// the node's key and right otherwise, until an empty child slot takes
    /// the new node. Inserting into an empty tree creates the root.
    ///
    /// There is no rebalancing, so insertion is `O(height)` and sorted
    /// input degrades the tree to a list.
    ///
    /// # Examples
    ///
    /// ```
    /// use triple_bst::tree::{ByY, Tree, Triple};
    ///
    /// let mut tree = Tree::<ByY>::new();
    /// tree.insert(Triple::new(0, 7, 0));
    /// tree.insert(Triple::new(1, 7, 0));
    ///
    /// // Both records survive; duplicates are kept, not overwritten.
    /// assert_eq!(tree.in_order().count(), 2);
    /// ```
    pub fn insert(&mut self, record: Triple) {
        match self {
            Self::Leaf => *self = Self::Node(Node::new(record)),
            Self::Node(n) => n.insert(record),
        }
    }

    /// Finds the record whose key equals `key`, or the closest ancestor on
    /// the search path when there is none: descending stops where the key's
    /// node would have been, and the last node visited answers.
    ///
    /// Only an empty tree produces `None`; a populated tree always answers
    /// with some record.
    ///
    /// # Examples
    ///
    /// ```
    /// use triple_bst::tree::{ByY, Tree, Triple};
    ///
    /// let mut tree = Tree::<ByY>::new();
    /// assert!(tree.search(7).is_none());
    ///
    /// tree.insert(Triple::new(0, 10, 0));
    /// tree.insert(Triple::new(0, 20, 0));
    ///
    /// assert_eq!(tree.search(20).map(|record| record.y), Some(20));
    /// // 13 is absent; its path ends below the 20 node.
    /// assert_eq!(tree.search(13).map(|record| record.y), Some(20));
    /// ```
    pub fn search(&self, key: i32) -> Option<&Triple> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => Some(n.nearest(key)),
        }
    }

    /// Builds a tree ordered by `P` holding every record of `source`,
    /// whatever policy `source` is ordered by.
    ///
    /// Records are drawn from the source in preorder (root first) and fed
    /// through [`insert`][Self::insert], so the new shape is decided purely
    /// by `P`-ordering and the tie-break, not by the source's shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use triple_bst::tree::{ByX, ByY, Tree, Triple};
    ///
    /// let mut by_x = Tree::<ByX>::new();
    /// by_x.insert(Triple::new(1, 30, 0));
    /// by_x.insert(Triple::new(2, 10, 0));
    ///
    /// let by_y = Tree::<ByY>::rekeyed(&by_x);
    /// let ys: Vec<i32> = by_y.in_order().map(|record| record.y).collect();
    /// assert_eq!(ys, [10, 30]);
    /// ```
    pub fn rekeyed<Q>(source: &Tree<Q>) -> Self {
        let mut tree = Self::new();
        for record in source.pre_order() {
            tree.insert(*record);
        }
        tree
    }
}

impl<P> Node<P> {
    fn new(record: Triple) -> Self {
        Self {
            record,
            left: Box::new(Tree::Leaf),
            right: Box::new(Tree::Leaf),
            _key: PhantomData,
        }
    }
}

impl<P: Key> Node<P> {
    fn insert(&mut self, record: Triple) {
        // Ties go left, and the same comparison picks the slot a new leaf
        // attaches to.
        let child = if P::key(&record) <= P::key(&self.record) {
            &mut self.left
        } else {
            &mut self.right
        };
        child.insert(record);
    }

    fn nearest(&self, key: i32) -> &Triple {
        let child = match key.cmp(&P::key(&self.record)) {
            Ordering::Equal => return &self.record,
            Ordering::Less => &self.left,
            Ordering::Greater => &self.right,
        };
        match child.as_ref() {
            Tree::Leaf => &self.record,
            Tree::Node(n) => n.nearest(key),
        }
    }
}

/// Lazy left-node-right traversal, created by [`Tree::in_order`].
pub struct InOrder<'a, P> {
    stack: Vec<&'a Node<P>>,
}

impl<'a, P> InOrder<'a, P> {
    fn new(tree: &'a Tree<P>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(tree);
        iter
    }

    fn push_left_spine(&mut self, mut tree: &'a Tree<P>) {
        while let Tree::Node(n) = tree {
            self.stack.push(n);
            tree = &n.left;
        }
    }
}

impl<'a, P> Iterator for InOrder<'a, P> {
    type Item = &'a Triple;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(&node.record)
    }
}

/// Lazy node-left-right traversal, created by [`Tree::pre_order`].
pub struct PreOrder<'a, P> {
    stack: Vec<&'a Node<P>>,
}

impl<'a, P> PreOrder<'a, P> {
    fn new(tree: &'a Tree<P>) -> Self {
        let mut stack = Vec::new();
        if let Tree::Node(n) = tree {
            stack.push(n);
        }
        Self { stack }
    }
}

impl<'a, P> Iterator for PreOrder<'a, P> {
    type Item = &'a Triple;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right below left so the left subtree pops first.
        if let Tree::Node(right) = node.right.as_ref() {
            self.stack.push(right);
        }
        if let Tree::Node(left) = node.left.as_ref() {
            self.stack.push(left);
        }
        Some(&node.record)
    }
}

/// Lazy left-right-node traversal, created by [`Tree::post_order`].
pub struct PostOrder<'a, P> {
    // The flag records whether a node's children have already been pushed;
    // a node is yielded only the second time it surfaces.
    stack: Vec<(&'a Node<P>, bool)>,
}

impl<'a, P> PostOrder<'a, P> {
    fn new(tree: &'a Tree<P>) -> Self {
        let mut stack = Vec::new();
        if let Tree::Node(n) = tree {
            stack.push((n, false));
        }
        Self { stack }
    }
}

impl<'a, P> Iterator for PostOrder<'a, P> {
    type Item = &'a Triple;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, children_done)) = self.stack.pop() {
            if children_done {
                return Some(&node.record);
            }
            self.stack.push((node, true));
            if let Tree::Node(right) = node.right.as_ref() {
                self.stack.push((right, false));
            }
            if let Tree::Node(left) = node.left.as_ref() {
                self.stack.push((left, false));
            }
        }
        None
    }
}
