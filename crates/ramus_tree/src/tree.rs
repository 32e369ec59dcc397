//! The arena-backed tree container.

use std::cmp::Ordering;
use std::mem;

use serde::Serialize;

use crate::{NodeId, NodeRef};

/// Storage for a single node in the arena.
#[derive(Debug, Clone)]
pub(crate) struct NodeEntry<D> {
    pub(crate) data: D,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

/// An ordered tree of payload values.
///
/// A `Tree` owns all of its nodes in a single arena and always has exactly
/// one root. Nodes are addressed by [`NodeId`]; the parent relation is a
/// lookup into the arena, so upward navigation never creates ownership
/// cycles.
///
/// Payload absence, if needed, is expressed by choosing `D = Option<T>`;
/// the tree itself stores exactly one `D` per node.
///
/// # Example
///
/// ```rust
/// use ramus_tree::Tree;
///
/// let mut tree = Tree::new(0u32);
/// let left = tree.add_child(tree.root_id(), 1);
/// let right = tree.add_child(tree.root_id(), 2);
/// tree.add_child(left, 3);
///
/// assert_eq!(tree.child_ids(tree.root_id()), [left, right]);
/// assert_eq!(*tree.data(right), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Tree<D> {
    entries: Vec<NodeEntry<D>>,
    root: NodeId,
}

impl<D> Tree<D> {
    /// Creates a tree consisting of a single root node carrying `root_data`.
    pub fn new(root_data: D) -> Self {
        let root = NodeId::new(0);
        Self {
            entries: vec![NodeEntry {
                data: root_data,
                parent: None,
                children: Vec::new(),
            }],
            root,
        }
    }

    /// Returns the id of the root node.
    #[inline]
    pub fn root_id(&self) -> NodeId {
        self.root
    }

    /// Returns a reference handle to the root node.
    #[inline]
    pub fn root(&self) -> NodeRef<'_, D> {
        NodeRef::new(self, self.root)
    }

    /// Appends a new child carrying `data` to `parent` and returns its id.
    ///
    /// Children keep insertion order until re-sorted.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this tree.
    pub fn add_child(&mut self, parent: NodeId, data: D) -> NodeId {
        let id = NodeId::new(self.entries.len());
        self.entries[parent.index()].children.push(id);
        self.entries.push(NodeEntry {
            data,
            parent: Some(parent),
            children: Vec::new(),
        });
        id
    }

    /// Returns a reference handle for `id`, or `None` if the id is out of
    /// range for this tree.
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_, D>> {
        self.entries.get(id.index()).map(|_| NodeRef::new(self, id))
    }

    /// Returns the payload of `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    #[inline]
    pub fn data(&self, id: NodeId) -> &D {
        &self.entries[id.index()].data
    }

    /// Returns the payload of `id` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    #[inline]
    pub fn data_mut(&mut self, id: NodeId) -> &mut D {
        &mut self.entries[id.index()].data
    }

    /// Returns the parent id of `id`, or `None` for the root.
    #[inline]
    pub fn parent_id(&self, id: NodeId) -> Option<NodeId> {
        self.entries[id.index()].parent
    }

    /// Returns the ordered child ids of `id`.
    #[inline]
    pub fn child_ids(&self, id: NodeId) -> &[NodeId] {
        &self.entries[id.index()].children
    }

    /// Returns the total number of nodes in the tree (at least 1).
    #[inline]
    pub fn node_count(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over all nodes in id (insertion) order.
    pub fn iter(&self) -> impl Iterator<Item = NodeRef<'_, D>> {
        (0..self.entries.len()).map(|i| NodeRef::new(self, NodeId::new(i)))
    }

    /// Re-sorts the direct children of `id` by comparing their payloads.
    ///
    /// The sort is stable, so children whose payloads compare equal keep
    /// their relative order.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    pub fn sort_children_by<F>(&mut self, id: NodeId, mut compare: F)
    where
        F: FnMut(&D, &D) -> Ordering,
    {
        let mut children = mem::take(&mut self.entries[id.index()].children);
        children.sort_by(|a, b| {
            compare(&self.entries[a.index()].data, &self.entries[b.index()].data)
        });
        self.entries[id.index()].children = children;
    }

    /// Re-sorts the children of every node by comparing payloads.
    pub fn sort_all_children_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&D, &D) -> Ordering,
    {
        for index in 0..self.entries.len() {
            let mut children = mem::take(&mut self.entries[index].children);
            children.sort_by(|a, b| {
                compare(&self.entries[a.index()].data, &self.entries[b.index()].data)
            });
            self.entries[index].children = children;
        }
    }
}

impl<D: Ord> Tree<D> {
    /// Re-sorts the direct children of `id` by their payloads' natural order.
    pub fn sort_children(&mut self, id: NodeId) {
        self.sort_children_by(id, D::cmp);
    }

    /// Re-sorts the children of every node by their payloads' natural order.
    pub fn sort_all_children(&mut self) {
        self.sort_all_children_by(D::cmp);
    }
}

impl<D: Serialize> Serialize for Tree<D> {
    /// Serializes the tree as its root node, nesting children recursively.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.root().serialize(serializer)
    }
}
