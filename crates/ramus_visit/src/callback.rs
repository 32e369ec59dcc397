//! The visitor callback capability.

use crate::{VisitDirective, VisitError};

/// Hook points invoked by the walker during a traversal.
///
/// Every hook has a default body, so an implementation overrides only the
/// events it cares about. The notification hooks (`begin`, `end`,
/// `on_level_down`, `on_level_up`) are infallible; the two directive hooks
/// return a [`VisitDirective`] and may fail with a [`VisitError`], which
/// aborts the walk.
///
/// A callback instance is stateful across one traversal (`begin` .. `end`)
/// and must not be driven by two walks at the same time.
///
/// # Example
///
/// ```rust
/// use ramus_visit::{VisitDirective, VisitError, VisitorCallback};
///
/// /// Counts nodes, pruning any subtree labeled "skip".
/// #[derive(Default)]
/// struct Counter {
///     seen: usize,
/// }
///
/// impl VisitorCallback<&'static str> for Counter {
///     fn on_before_children(
///         &mut self,
///         node: &&'static str,
///     ) -> Result<VisitDirective, VisitError> {
///         self.seen += 1;
///         if *node == "skip" {
///             Ok(VisitDirective::SkipChildren)
///         } else {
///             Ok(VisitDirective::Continue)
///         }
///     }
/// }
/// ```
pub trait VisitorCallback<N> {
    /// Invoked exactly once, before the first node is visited.
    fn begin(&mut self) {}

    /// Invoked immediately before descending into a node's first child.
    fn on_level_down(&mut self) {}

    /// Invoked immediately after returning from a node's last child.
    fn on_level_up(&mut self) {}

    /// Invoked when a node is first reached, before its children.
    fn on_before_children(&mut self, node: &N) -> Result<VisitDirective, VisitError> {
        let _ = node;
        Ok(VisitDirective::Continue)
    }

    /// Invoked once a node and any visited children are fully processed.
    fn on_after_children(&mut self, node: &N) -> Result<VisitDirective, VisitError> {
        let _ = node;
        Ok(VisitDirective::Continue)
    }

    /// Invoked exactly once, after the traversal completes or stops early.
    fn end(&mut self) {}
}

/// Forwarding impl so callbacks can be lent out without giving up ownership,
/// e.g. to a [`DataAdapterCallback`](crate::DataAdapterCallback).
impl<N, C: VisitorCallback<N> + ?Sized> VisitorCallback<N> for &mut C {
    fn begin(&mut self) {
        (**self).begin();
    }

    fn on_level_down(&mut self) {
        (**self).on_level_down();
    }

    fn on_level_up(&mut self) {
        (**self).on_level_up();
    }

    fn on_before_children(&mut self, node: &N) -> Result<VisitDirective, VisitError> {
        (**self).on_before_children(node)
    }

    fn on_after_children(&mut self, node: &N) -> Result<VisitDirective, VisitError> {
        (**self).on_after_children(node)
    }

    fn end(&mut self) {
        (**self).end();
    }
}
