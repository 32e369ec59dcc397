//! # ramus_visit
//!
//! Hierarchy visitor engine for the ramus toolkit.
//!
//! This crate walks a caller-supplied hierarchy depth-first and drives a
//! [`VisitorCallback`] through six hook points: `begin`, level-down,
//! level-up, before-children, after-children, and `end`. The before/after
//! hooks return a [`VisitDirective`] that steers the walk: continue, skip a
//! node's children, skip its remaining siblings, or stop the whole
//! traversal.
//!
//! Fan-out is pluggable through [`ChildrenProvider`]; by default a node's
//! own child accessor ([`HasChildren`]) is used. Callbacks can operate on
//! nodes directly, or on the payloads they carry via the `walk_data`
//! entry points and [`DataAdapterCallback`].
//!
//! ## Example
//!
//! ```rust
//! use ramus_tree::Tree;
//! use ramus_visit::{VisitDirective, VisitError, VisitorCallback, walk_tree_data};
//!
//! struct Collector(Vec<String>);
//!
//! impl VisitorCallback<&'static str> for Collector {
//!     fn on_before_children(
//!         &mut self,
//!         data: &&'static str,
//!     ) -> Result<VisitDirective, VisitError> {
//!         self.0.push(data.to_string());
//!         Ok(VisitDirective::Continue)
//!     }
//! }
//!
//! let mut tree = Tree::new("root");
//! let a = tree.add_child(tree.root_id(), "a");
//! tree.add_child(a, "a1");
//! tree.add_child(tree.root_id(), "b");
//!
//! let mut collector = Collector(Vec::new());
//! walk_tree_data(&tree, &mut collector)?;
//! assert_eq!(collector.0, ["root", "a", "a1", "b"]);
//! # Ok::<(), VisitError>(())
//! ```

mod adapter;
mod callback;
mod directive;
mod error;
mod provider;
mod tree;
mod walk;

pub use adapter::{DataAdapterCallback, HasData};
pub use callback::VisitorCallback;
pub use directive::VisitDirective;
pub use error::VisitError;
pub use provider::{ChildrenProvider, HasChildren, NodeChildrenProvider};
pub use tree::{walk_tree, walk_tree_data, walk_tree_data_with, walk_tree_with};
pub use walk::{walk, walk_below, walk_below_with, walk_data, walk_data_with, walk_with};
