//! Node reference handles.

use serde::Serialize;
use serde::ser::SerializeStruct;

use crate::{NodeId, Tree};

/// A copyable view of one node inside a [`Tree`].
///
/// A `NodeRef` pairs a tree borrow with a [`NodeId`], giving navigation and
/// payload access without threading the tree through every call site. It is
/// `Copy`, so handles can be stored, cloned into collections, and handed to
/// callbacks freely.
///
/// # Example
///
/// ```rust
/// use ramus_tree::Tree;
///
/// let mut tree = Tree::new("root");
/// let a = tree.add_child(tree.root_id(), "a");
/// tree.add_child(a, "a1");
///
/// let node = tree.get(a).unwrap();
/// assert_eq!(*node.data(), "a");
/// assert_eq!(node.parent().map(|p| *p.data()), Some("root"));
/// assert_eq!(node.level(), 1);
/// ```
pub struct NodeRef<'t, D> {
    tree: &'t Tree<D>,
    id: NodeId,
}

impl<'t, D> NodeRef<'t, D> {
    #[inline]
    pub(crate) fn new(tree: &'t Tree<D>, id: NodeId) -> Self {
        Self { tree, id }
    }

    /// Returns the id of this node.
    #[inline]
    pub fn id(self) -> NodeId {
        self.id
    }

    /// Returns the tree this node belongs to.
    #[inline]
    pub fn tree(self) -> &'t Tree<D> {
        self.tree
    }

    /// Returns the payload of this node.
    #[inline]
    pub fn data(self) -> &'t D {
        self.tree.data(self.id)
    }

    /// Returns the parent node, or `None` for the root.
    pub fn parent(self) -> Option<NodeRef<'t, D>> {
        self.tree
            .parent_id(self.id)
            .map(|id| NodeRef::new(self.tree, id))
    }

    /// Iterates over the ordered children of this node.
    pub fn children(self) -> impl Iterator<Item = NodeRef<'t, D>> {
        self.tree
            .child_ids(self.id)
            .iter()
            .map(move |&id| NodeRef::new(self.tree, id))
    }

    /// Returns the number of direct children.
    #[inline]
    pub fn child_count(self) -> usize {
        self.tree.child_ids(self.id).len()
    }

    /// Returns true if this node has at least one child.
    #[inline]
    pub fn has_children(self) -> bool {
        !self.tree.child_ids(self.id).is_empty()
    }

    /// Returns true if this node is the root of its tree.
    #[inline]
    pub fn is_root(self) -> bool {
        self.tree.parent_id(self.id).is_none()
    }

    /// Returns the depth of this node, counted as the number of parent
    /// lookups to reach the root (the root itself is at level 0).
    pub fn level(self) -> usize {
        let mut level = 0;
        let mut current = self.id;
        while let Some(parent) = self.tree.parent_id(current) {
            level += 1;
            current = parent;
        }
        level
    }
}

impl<D> Clone for NodeRef<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for NodeRef<'_, D> {}

impl<D> PartialEq for NodeRef<'_, D> {
    /// Two refs are equal when they name the same node of the same tree.
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl<D> Eq for NodeRef<'_, D> {}

impl<D: std::fmt::Debug> std::fmt::Debug for NodeRef<'_, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("data", self.data())
            .finish()
    }
}

impl<D: Serialize> Serialize for NodeRef<'_, D> {
    /// Serializes the subtree rooted at this node.
    ///
    /// Leaf nodes serialize as `{"data": ..}`; nodes with children add a
    /// `children` array of the same shape.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let len = if self.has_children() { 2 } else { 1 };
        let mut state = serializer.serialize_struct("Node", len)?;
        state.serialize_field("data", self.data())?;
        if self.has_children() {
            let children: Vec<NodeRef<'_, D>> = self.children().collect();
            state.serialize_field("children", &children)?;
        }
        state.end()
    }
}
