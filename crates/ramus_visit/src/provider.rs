//! Child fan-out strategies.

use crate::VisitError;

/// Capability of node types that expose their own child list.
///
/// This is what the default [`NodeChildrenProvider`] reads. Node handles are
/// returned by value, so the trait fits cheap-to-copy handles (ids,
/// reference wrappers) as well as owned clones.
pub trait HasChildren: Sized {
    /// Returns this node's children, in order. Empty means leaf.
    fn child_nodes(&self) -> Vec<Self>;
}

/// Strategy mapping a node to its ordered children.
///
/// Implementations must be deterministic and side-effect-free; the walker
/// may call them more than once per node. An error return aborts the walk
/// and propagates unchanged to the caller.
pub trait ChildrenProvider<N> {
    /// Returns the ordered children of `node`. Empty means leaf.
    fn children(&self, node: &N) -> Result<Vec<N>, VisitError>;

    /// Returns true if `node` has at least one child.
    fn has_children(&self, node: &N) -> Result<bool, VisitError> {
        Ok(!self.children(node)?.is_empty())
    }

    /// Returns the number of direct children of `node`.
    fn child_count(&self, node: &N) -> Result<usize, VisitError> {
        Ok(self.children(node)?.len())
    }
}

/// The default strategy: read children straight from the node's own
/// [`HasChildren`] accessor.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeChildrenProvider;

impl<N: HasChildren> ChildrenProvider<N> for NodeChildrenProvider {
    fn children(&self, node: &N) -> Result<Vec<N>, VisitError> {
        Ok(node.child_nodes())
    }
}

/// Closures act as providers, which keeps one-off fan-out rules (filtering,
/// reordering, synthesized hierarchies) out of newtype boilerplate.
impl<N, F> ChildrenProvider<N> for F
where
    F: Fn(&N) -> Result<Vec<N>, VisitError>,
{
    fn children(&self, node: &N) -> Result<Vec<N>, VisitError> {
        self(node)
    }
}
