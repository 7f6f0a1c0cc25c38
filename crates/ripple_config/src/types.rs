//! Configuration types deserialized from `ripple.toml`.

use std::collections::BTreeSet;

use serde::Deserialize;

/// The top-level configuration parsed from `ripple.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct RippleConfig {
    /// Where to find the build graph.
    #[serde(default)]
    pub graph: GraphConfig,
    /// Hashing parameters.
    #[serde(default)]
    pub hash: HashConfig,
}

/// Graph-loading settings.
#[derive(Debug, Deserialize)]
pub struct GraphConfig {
    /// Path to the JSON graph file, relative to the config file's directory.
    #[serde(default = "default_graph_file")]
    pub file: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            file: default_graph_file(),
        }
    }
}

fn default_graph_file() -> String {
    "graph.json".to_string()
}

/// Hashing parameters applied to every rule digest.
#[derive(Debug, Default, Deserialize)]
pub struct HashConfig {
    /// External repositories that expose individual file-level dependency
    /// labels; repositories outside this set contribute one coarse edge.
    #[serde(default)]
    pub fine_grained_repos: BTreeSet<String>,

    /// Optional seed string whose raw bytes are mixed into every digest.
    /// Changing it invalidates all digests at once. Omitted means no seed.
    #[serde(default)]
    pub seed: Option<String>,

    /// Optional recursion depth budget. Omitted means unbounded.
    #[serde(default)]
    pub depth: Option<u32>,
}
