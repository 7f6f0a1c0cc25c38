//! Error types for graph loading.

use std::path::PathBuf;

/// Errors that can occur when loading or validating a build graph file.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// An I/O error occurred while reading the graph file.
    #[error("failed to read graph file {path}: {source}")]
    Io {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The JSON content could not be parsed.
    #[error("failed to parse graph: {0}")]
    Parse(String),

    /// A rule entry is missing its label or the label is empty.
    #[error("rule at index {0} has an empty label")]
    EmptyLabel(usize),

    /// Two rule entries share the same label.
    #[error("duplicate rule label '{0}'")]
    DuplicateLabel(String),
}
