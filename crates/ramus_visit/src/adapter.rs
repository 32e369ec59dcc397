//! Adapting payload-level callbacks to node-level callbacks.

use crate::{VisitDirective, VisitError, VisitorCallback};

/// Capability of node types that carry a payload value.
///
/// The payload extractor of [`DataAdapterCallback`]: given a node handle,
/// yield the data it carries.
pub trait HasData {
    /// The payload type.
    type Data;

    /// Returns the payload carried by this node.
    fn data(&self) -> &Self::Data;
}

/// Wraps a payload-level callback into a node-level callback.
///
/// The notification hooks (`begin`, `end`, level changes) forward
/// unchanged; the directive hooks extract the node's payload via
/// [`HasData`] before delegating, and the returned directive passes through
/// untouched.
///
/// The `walk_data` entry points wrap the callback by mutable reference, so
/// its state stays accessible after the walk:
///
/// ```rust
/// use ramus_tree::Tree;
/// use ramus_visit::{VisitDirective, VisitError, VisitorCallback, walk_tree_data};
///
/// #[derive(Default)]
/// struct Sum(u64);
///
/// impl VisitorCallback<u64> for Sum {
///     fn on_before_children(&mut self, data: &u64) -> Result<VisitDirective, VisitError> {
///         self.0 += *data;
///         Ok(VisitDirective::Continue)
///     }
/// }
///
/// let mut tree = Tree::new(1u64);
/// tree.add_child(tree.root_id(), 2);
/// tree.add_child(tree.root_id(), 3);
///
/// let mut sum = Sum::default();
/// walk_tree_data(&tree, &mut sum)?;
/// assert_eq!(sum.0, 6);
/// # Ok::<(), VisitError>(())
/// ```
pub struct DataAdapterCallback<C> {
    inner: C,
}

impl<C> DataAdapterCallback<C> {
    /// Wraps `inner` so it can be driven with node arguments.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Unwraps the adapter, returning the payload-level callback.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<N, C> VisitorCallback<N> for DataAdapterCallback<C>
where
    N: HasData,
    C: VisitorCallback<N::Data>,
{
    fn begin(&mut self) {
        self.inner.begin();
    }

    fn on_level_down(&mut self) {
        self.inner.on_level_down();
    }

    fn on_level_up(&mut self) {
        self.inner.on_level_up();
    }

    fn on_before_children(&mut self, node: &N) -> Result<VisitDirective, VisitError> {
        self.inner.on_before_children(node.data())
    }

    fn on_after_children(&mut self, node: &N) -> Result<VisitDirective, VisitError> {
        self.inner.on_after_children(node.data())
    }

    fn end(&mut self) {
        self.inner.end();
    }
}
