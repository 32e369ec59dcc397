//! Walking `ramus_tree` trees.
//!
//! [`NodeRef`] implements both node capabilities, so a [`Tree`] can be
//! walked out of the box; the functions here are thin conveniences that
//! start the walk at the tree's root.

use ramus_tree::{NodeRef, Tree};

use crate::adapter::HasData;
use crate::callback::VisitorCallback;
use crate::error::VisitError;
use crate::provider::{ChildrenProvider, HasChildren};
use crate::walk::{walk, walk_data, walk_data_with, walk_with};

impl<'t, D> HasChildren for NodeRef<'t, D> {
    fn child_nodes(&self) -> Vec<Self> {
        self.children().collect()
    }
}

impl<D> HasData for NodeRef<'_, D> {
    type Data = D;

    fn data(&self) -> &D {
        NodeRef::data(*self)
    }
}

/// Walks `tree` from its root.
pub fn walk_tree<'t, D, C>(tree: &'t Tree<D>, callback: &mut C) -> Result<(), VisitError>
where
    C: VisitorCallback<NodeRef<'t, D>> + ?Sized,
{
    walk(&tree.root(), callback)
}

/// Walks `tree` from its root with an explicit fan-out strategy.
pub fn walk_tree_with<'t, D, P, C>(
    tree: &'t Tree<D>,
    provider: &P,
    callback: &mut C,
) -> Result<(), VisitError>
where
    P: ChildrenProvider<NodeRef<'t, D>> + ?Sized,
    C: VisitorCallback<NodeRef<'t, D>> + ?Sized,
{
    walk_with(&tree.root(), provider, callback)
}

/// Walks `tree` from its root, handing payloads to the callback.
pub fn walk_tree_data<D, C>(tree: &Tree<D>, data_callback: &mut C) -> Result<(), VisitError>
where
    C: VisitorCallback<D> + ?Sized,
{
    walk_data(&tree.root(), data_callback)
}

/// Walks `tree` from its root with an explicit fan-out strategy, handing
/// payloads to the callback.
pub fn walk_tree_data_with<'t, D, P, C>(
    tree: &'t Tree<D>,
    provider: &P,
    data_callback: &mut C,
) -> Result<(), VisitError>
where
    P: ChildrenProvider<NodeRef<'t, D>> + ?Sized,
    C: VisitorCallback<D> + ?Sized,
{
    walk_data_with(&tree.root(), provider, data_callback)
}
