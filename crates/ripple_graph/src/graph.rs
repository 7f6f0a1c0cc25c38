//! The rule lookup table.

use std::collections::HashMap;

use crate::rule::Rule;

/// A read-only lookup table from rule label to [`Rule`].
///
/// Covers all rules known in one invocation. The graph is never mutated
/// while digests are being computed, so it can be shared freely across
/// worker threads by reference.
#[derive(Debug, Default)]
pub struct Graph {
    rules: HashMap<String, Rule>,
}

impl Graph {
    /// Builds a graph from a list of rules, indexing them by label.
    ///
    /// If two rules carry the same label, the later one wins; callers are
    /// expected to supply unique labels.
    pub fn from_rules(rules: Vec<Rule>) -> Self {
        let rules = rules
            .into_iter()
            .map(|rule| (rule.label.clone(), rule))
            .collect();
        Self { rules }
    }

    /// Looks up a rule by label.
    pub fn get(&self, label: &str) -> Option<&Rule> {
        self.rules.get(label)
    }

    /// Returns the number of rules in the graph.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the graph contains no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over all rules in the graph, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.values()
    }
}
