//! The build-graph model: rule nodes, the rule lookup table, and graph loading.
//!
//! This crate defines the [`Rule`] node shape (label, own content digest,
//! ordered dependency-edge labels), the read-only [`Graph`] lookup table, and
//! JSON graph loading for the CLI pipeline.

#![warn(missing_docs)]

pub mod error;
pub mod graph;
pub mod loader;
pub mod rule;

pub use error::GraphError;
pub use graph::Graph;
pub use loader::{load_graph, load_graph_from_str};
pub use rule::Rule;
