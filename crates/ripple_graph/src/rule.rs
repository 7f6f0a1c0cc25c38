//! Rule nodes and dependency-edge label transformation.

use std::collections::{BTreeSet, HashSet};

use ripple_common::ContentDigest;

/// A single rule node in the build dependency graph.
///
/// A rule carries its own content digest — a summary of its declared
/// attributes, excluding its dependencies — and an ordered list of raw
/// dependency-edge labels. The order is significant: digest bytes are
/// concatenated in this order, so two graphs must present inputs in the same
/// order to compare equal.
#[derive(Debug, Clone)]
pub struct Rule {
    /// The rule's label, unique within a graph (e.g. `//lib:util`).
    pub label: String,

    /// Content digest of the rule's own declared attributes.
    pub digest: ContentDigest,

    /// Raw dependency-edge labels, in declaration order.
    pub inputs: Vec<String>,
}

impl Rule {
    /// Creates a rule from its label, own digest, and raw input labels.
    pub fn new(
        label: impl Into<String>,
        digest: ContentDigest,
        inputs: Vec<String>,
    ) -> Self {
        Self {
            label: label.into(),
            digest,
            inputs,
        }
    }

    /// Returns the ordered dependency-edge identifier sequence for hashing.
    ///
    /// Labels into external repositories that are *not* in the fine-grained
    /// set collapse to a single coarse identifier (`//external:<repo>`), so
    /// such a repository contributes one opaque edge instead of per-file
    /// edges. Fine-grained repositories and in-workspace labels pass through
    /// unchanged. Duplicates produced by the collapse are removed, keeping
    /// the first occurrence.
    pub fn input_labels(&self, fine_grained_repos: &BTreeSet<String>) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut labels = Vec::with_capacity(self.inputs.len());
        for input in &self.inputs {
            let label = transform_input(input, fine_grained_repos);
            if seen.insert(label.clone()) {
                labels.push(label);
            }
        }
        labels
    }
}

/// Maps one raw input label to its hashing identifier.
///
/// An external-repository label (`@repo//pkg:file` or `@@repo//pkg:file`)
/// whose repository is outside the fine-grained set becomes
/// `//external:repo`. Everything else is returned verbatim.
fn transform_input(input: &str, fine_grained_repos: &BTreeSet<String>) -> String {
    if input.starts_with('@')
        && !fine_grained_repos
            .iter()
            .any(|repo| is_repo_label(input, repo))
    {
        let parts: Vec<&str> = input.splitn(2, "//").collect();
        if parts.len() == 2 {
            let repo = parts[0].trim_start_matches('@');
            return format!("//external:{repo}");
        }
    }
    input.to_string()
}

/// Returns `true` if `input` is a label into the given external repository.
fn is_repo_label(input: &str, repo: &str) -> bool {
    let rest = input.trim_start_matches('@');
    // Accept both single- and double-at canonical forms.
    match rest.strip_prefix(repo) {
        Some(tail) => tail.is_empty() || tail.starts_with("//"),
        None => false,
    }
}
