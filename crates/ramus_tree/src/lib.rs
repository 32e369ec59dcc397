//! # ramus_tree
//!
//! Tree data model for the ramus traversal toolkit.
//!
//! This crate provides a caller-owned, in-memory tree: an arena of nodes
//! addressed by [`NodeId`], wrapped by [`Tree`]. Parent and child relations
//! are index lookups into the arena, never ownership pointers, so trees with
//! upward navigation stay free of cyclic ownership.
//!
//! ## Architecture
//!
//! - All nodes of a tree live in a single `Vec`-backed arena
//! - A [`NodeId`] is a plain index handle, cheap to copy and store
//! - [`NodeRef`] combines a tree borrow with an id for ergonomic navigation
//! - A tree always has exactly one root; children keep insertion order
//!   until re-sorted
//!
//! ## Example
//!
//! ```rust
//! use ramus_tree::Tree;
//!
//! let mut tree = Tree::new("root");
//! let a = tree.add_child(tree.root_id(), "a");
//! tree.add_child(a, "a1");
//! tree.add_child(tree.root_id(), "b");
//!
//! assert_eq!(tree.node_count(), 4);
//! assert_eq!(tree.root().child_count(), 2);
//! ```

mod id;
mod node;
mod tree;

pub use id::NodeId;
pub use node::NodeRef;
pub use tree::Tree;
