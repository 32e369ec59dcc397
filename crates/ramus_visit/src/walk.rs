//! The depth-first traversal engine.
//!
//! All entry points share one recursive core, `visit_node`. The walk is
//! call-stack based, so stack depth is proportional to tree depth.
//!
//! Hook order per node: `on_before_children`, then (for a `Continue`
//! directive and a non-empty child list) `on_level_down`, the children in
//! order, `on_level_up`, and finally `on_after_children`. `begin` and `end`
//! frame the whole walk and fire exactly once each on every non-error
//! traversal, no matter how early a [`VisitDirective::Stop`] occurs.
//!
//! A `Stop` suppresses `on_after_children` for the node that returned it
//! and for every ancestor it unwinds through; level notifications stay
//! paired regardless. An `Err` from a provider or hook aborts harder: it
//! propagates unchanged without any further hooks, `end` included.

use tracing::trace;

use crate::adapter::{DataAdapterCallback, HasData};
use crate::callback::VisitorCallback;
use crate::directive::VisitDirective;
use crate::error::VisitError;
use crate::provider::{ChildrenProvider, HasChildren, NodeChildrenProvider};

/// Bookkeeping for one traversal.
#[derive(Debug, Default)]
struct WalkState {
    level: usize,
    visited: usize,
}

/// Walks the hierarchy rooted at `root`, reading fan-out from the nodes'
/// own child accessors.
///
/// # Example
///
/// ```rust
/// use ramus_visit::{HasChildren, VisitDirective, VisitError, VisitorCallback, walk};
///
/// #[derive(Clone)]
/// struct Item(u32, Vec<Item>);
///
/// impl HasChildren for Item {
///     fn child_nodes(&self) -> Vec<Self> {
///         self.1.clone()
///     }
/// }
///
/// #[derive(Default)]
/// struct Count(usize);
///
/// impl VisitorCallback<Item> for Count {
///     fn on_before_children(&mut self, _: &Item) -> Result<VisitDirective, VisitError> {
///         self.0 += 1;
///         Ok(VisitDirective::Continue)
///     }
/// }
///
/// let root = Item(0, vec![Item(1, vec![]), Item(2, vec![])]);
/// let mut count = Count::default();
/// walk(&root, &mut count)?;
/// assert_eq!(count.0, 3);
/// # Ok::<(), VisitError>(())
/// ```
pub fn walk<N, C>(root: &N, callback: &mut C) -> Result<(), VisitError>
where
    N: HasChildren,
    C: VisitorCallback<N> + ?Sized,
{
    walk_with(root, &NodeChildrenProvider, callback)
}

/// Walks the hierarchy rooted at `root` with an explicit fan-out strategy.
pub fn walk_with<N, P, C>(root: &N, provider: &P, callback: &mut C) -> Result<(), VisitError>
where
    P: ChildrenProvider<N> + ?Sized,
    C: VisitorCallback<N> + ?Sized,
{
    let mut state = WalkState::default();
    callback.begin();
    let outcome = visit_node(root, provider, callback, &mut state)?;
    callback.end();
    debug_assert_eq!(state.level, 0, "level notifications must balance");
    trace!(
        "hierarchy walk finished: {} nodes visited, outcome {:?}",
        state.visited, outcome
    );
    Ok(())
}

/// Like [`walk`], but the callback observes payloads instead of nodes.
pub fn walk_data<N, C>(root: &N, data_callback: &mut C) -> Result<(), VisitError>
where
    N: HasChildren + HasData,
    C: VisitorCallback<N::Data> + ?Sized,
{
    walk_data_with(root, &NodeChildrenProvider, data_callback)
}

/// Like [`walk_with`], but the callback observes payloads instead of nodes.
///
/// The data callback is wrapped in a [`DataAdapterCallback`] and driven
/// through the identical traversal.
pub fn walk_data_with<N, P, C>(
    root: &N,
    provider: &P,
    data_callback: &mut C,
) -> Result<(), VisitError>
where
    N: HasData,
    P: ChildrenProvider<N> + ?Sized,
    C: VisitorCallback<N::Data> + ?Sized,
{
    let mut adapter = DataAdapterCallback::new(data_callback);
    walk_with(root, provider, &mut adapter)
}

/// Walks only the descendants of `start`: no hooks fire for `start` itself,
/// and its children form the top-level sibling sequence.
///
/// Useful when the starting node is an artificial root that should stay
/// invisible to the callback.
pub fn walk_below<N, C>(start: &N, callback: &mut C) -> Result<(), VisitError>
where
    N: HasChildren,
    C: VisitorCallback<N> + ?Sized,
{
    walk_below_with(start, &NodeChildrenProvider, callback)
}

/// Like [`walk_below`], but with an explicit fan-out strategy.
pub fn walk_below_with<N, P, C>(start: &N, provider: &P, callback: &mut C) -> Result<(), VisitError>
where
    P: ChildrenProvider<N> + ?Sized,
    C: VisitorCallback<N> + ?Sized,
{
    let mut state = WalkState::default();
    callback.begin();
    for child in &provider.children(start)? {
        let outcome = visit_node(child, provider, callback, &mut state)?;
        if outcome >= VisitDirective::SkipSiblings {
            break;
        }
    }
    callback.end();
    trace!(
        "hierarchy walk below start finished: {} nodes visited",
        state.visited
    );
    Ok(())
}

/// Visits one node and its subtree, returning the directive the parent
/// frame must honor: the stronger of the node's before/after hook results.
fn visit_node<N, P, C>(
    node: &N,
    provider: &P,
    callback: &mut C,
    state: &mut WalkState,
) -> Result<VisitDirective, VisitError>
where
    P: ChildrenProvider<N> + ?Sized,
    C: VisitorCallback<N> + ?Sized,
{
    state.visited += 1;

    let before = callback.on_before_children(node)?;
    if before.is_stop() {
        // Stop suppresses this node's after hook.
        return Ok(VisitDirective::Stop);
    }

    if before == VisitDirective::Continue {
        let children = provider.children(node)?;
        if !children.is_empty() {
            callback.on_level_down();
            state.level += 1;
            let mut stopped = false;
            for child in &children {
                match visit_node(child, provider, callback, state)? {
                    VisitDirective::Stop => {
                        stopped = true;
                        break;
                    }
                    VisitDirective::SkipSiblings => break,
                    VisitDirective::Continue | VisitDirective::SkipChildren => {}
                }
            }
            state.level -= 1;
            // Paired with the on_level_down above even when a Stop unwinds.
            callback.on_level_up();
            if stopped {
                return Ok(VisitDirective::Stop);
            }
        }
    }

    let after = callback.on_after_children(node)?;
    Ok(before.strongest(after))
}
