//! Shared digest caches for cross-call memoization.

use std::collections::HashMap;
use std::sync::Mutex;

use ripple_common::ContentDigest;

use crate::depth::DepthBudget;

/// The shared digest stores consulted and populated by every engine call in
/// a run.
///
/// Holds two maps: completed rule digests keyed by `(rule label, depth
/// budget)` — the same rule digested under different budgets legitimately
/// yields different bytes, so budgets must not collide — and source digests
/// keyed by dependency label.
///
/// Both maps support concurrent access from many worker threads. Values are
/// pure functions of their keys, so exactly-once computation is not
/// enforced: two workers racing on the same key compute the same value and
/// the second insert is a harmless overwrite. Entries are never removed;
/// the cache lives for one run.
pub struct DigestCache {
    rules: Mutex<HashMap<(String, DepthBudget), ContentDigest>>,
    sources: Mutex<HashMap<String, ContentDigest>>,
}

impl DigestCache {
    /// Creates an empty cache pair.
    pub fn new() -> Self {
        Self {
            rules: Mutex::new(HashMap::new()),
            sources: Mutex::new(HashMap::new()),
        }
    }

    /// Looks up a completed rule digest for a label at a given depth budget.
    pub fn get_rule(&self, label: &str, depth: DepthBudget) -> Option<ContentDigest> {
        let rules = self.rules.lock().unwrap();
        rules.get(&(label.to_string(), depth)).copied()
    }

    /// Records a completed rule digest for a label at a given depth budget.
    pub fn put_rule(&self, label: &str, depth: DepthBudget, digest: ContentDigest) {
        let mut rules = self.rules.lock().unwrap();
        rules.insert((label.to_string(), depth), digest);
    }

    /// Looks up a cached source digest for a dependency label.
    pub fn get_source(&self, label: &str) -> Option<ContentDigest> {
        let sources = self.sources.lock().unwrap();
        sources.get(label).copied()
    }

    /// Records a source digest for a dependency label.
    pub fn put_source(&self, label: &str, digest: ContentDigest) {
        let mut sources = self.sources.lock().unwrap();
        sources.insert(label.to_string(), digest);
    }

    /// Number of rule digest entries currently stored.
    pub fn rule_entries(&self) -> usize {
        self.rules.lock().unwrap().len()
    }

    /// Number of source digest entries currently stored.
    pub fn source_entries(&self) -> usize {
        self.sources.lock().unwrap().len()
    }
}

impl Default for DigestCache {
    fn default() -> Self {
        Self::new()
    }
}
