//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized, serializable representation of the component tree.

pub mod component_tree_view_builder;
pub mod component_view;

pub use component_tree_view_builder::ComponentTreeViewBuilder;
pub use component_view::{ComponentTreeView, ComponentView};
