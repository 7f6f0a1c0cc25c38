//! Parsing and validation of `ripple.toml` project configuration files.
//!
//! The configuration names the graph file to load and the hashing
//! parameters: the fine-grained external-repository set, the optional seed,
//! and the optional depth budget.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::{GraphConfig, HashConfig, RippleConfig};
