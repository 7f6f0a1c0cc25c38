//! Build-graph file loading and validation.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use ripple_common::ContentDigest;

use crate::error::GraphError;
use crate::graph::Graph;
use crate::rule::Rule;

/// The top-level graph document parsed from JSON.
#[derive(Debug, Deserialize)]
struct GraphDoc {
    rules: Vec<RuleEntry>,
}

/// One rule entry in a graph document.
///
/// A rule's own digest is either supplied directly as `digest` (64 hex
/// chars) or derived by hashing the serialized `attrs` value. `attrs`
/// serialization is deterministic (object keys are sorted), so identical
/// attribute sets produce identical digests across runs.
#[derive(Debug, Deserialize)]
struct RuleEntry {
    label: String,
    #[serde(default)]
    inputs: Vec<String>,
    #[serde(default)]
    digest: Option<ContentDigest>,
    #[serde(default)]
    attrs: serde_json::Value,
}

/// Loads and validates a build graph from a JSON file.
pub fn load_graph(path: &Path) -> Result<Graph, GraphError> {
    let content = std::fs::read_to_string(path).map_err(|source| GraphError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_graph_from_str(&content)
}

/// Parses and validates a build graph from a JSON string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_graph_from_str(content: &str) -> Result<Graph, GraphError> {
    let doc: GraphDoc =
        serde_json::from_str(content).map_err(|e| GraphError::Parse(e.to_string()))?;

    let mut seen = HashSet::new();
    let mut rules = Vec::with_capacity(doc.rules.len());
    for (index, entry) in doc.rules.into_iter().enumerate() {
        if entry.label.is_empty() {
            return Err(GraphError::EmptyLabel(index));
        }
        if !seen.insert(entry.label.clone()) {
            return Err(GraphError::DuplicateLabel(entry.label));
        }
        let digest = match entry.digest {
            Some(digest) => digest,
            None => digest_of_attrs(&entry.attrs)?,
        };
        rules.push(Rule::new(entry.label, digest, entry.inputs));
    }
    Ok(Graph::from_rules(rules))
}

/// Hashes a rule's serialized attribute value into its own content digest.
fn digest_of_attrs(attrs: &serde_json::Value) -> Result<ContentDigest, GraphError> {
    let bytes = serde_json::to_vec(attrs).map_err(|e| GraphError::Parse(e.to_string()))?;
    Ok(ContentDigest::of(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_graph() {
        let json = r#"{ "rules": [ { "label": "//lib:util" } ] }"#;
        let graph = load_graph_from_str(json).unwrap();
        assert_eq!(graph.len(), 1);
        let rule = graph.get("//lib:util").unwrap();
        assert!(rule.inputs.is_empty());
    }

    #[test]
    fn parse_rule_with_inputs() {
        let json = r#"
        { "rules": [
            { "label": "//app:main", "inputs": ["//lib:util", "//app:main.rs"] },
            { "label": "//lib:util" }
        ] }"#;
        let graph = load_graph_from_str(json).unwrap();
        assert_eq!(graph.len(), 2);
        let rule = graph.get("//app:main").unwrap();
        assert_eq!(rule.inputs, vec!["//lib:util", "//app:main.rs"]);
    }

    #[test]
    fn explicit_digest_is_used() {
        let hex = format!("{}", ContentDigest::of(b"rule attrs"));
        let json = format!(
            r#"{{ "rules": [ {{ "label": "//a", "digest": "{hex}" }} ] }}"#
        );
        let graph = load_graph_from_str(&json).unwrap();
        assert_eq!(graph.get("//a").unwrap().digest, ContentDigest::of(b"rule attrs"));
    }

    #[test]
    fn attrs_digest_is_deterministic() {
        let json = r#"{ "rules": [ { "label": "//a", "attrs": { "srcs": ["a.rs"], "opt": true } } ] }"#;
        let first = load_graph_from_str(json).unwrap();
        let second = load_graph_from_str(json).unwrap();
        assert_eq!(
            first.get("//a").unwrap().digest,
            second.get("//a").unwrap().digest
        );
    }

    #[test]
    fn different_attrs_produce_different_digests() {
        let a = r#"{ "rules": [ { "label": "//a", "attrs": { "opt": true } } ] }"#;
        let b = r#"{ "rules": [ { "label": "//a", "attrs": { "opt": false } } ] }"#;
        let ga = load_graph_from_str(a).unwrap();
        let gb = load_graph_from_str(b).unwrap();
        assert_ne!(ga.get("//a").unwrap().digest, gb.get("//a").unwrap().digest);
    }

    #[test]
    fn empty_label_rejected() {
        let json = r#"{ "rules": [ { "label": "" } ] }"#;
        let err = load_graph_from_str(json).unwrap_err();
        assert!(matches!(err, GraphError::EmptyLabel(0)));
    }

    #[test]
    fn duplicate_label_rejected() {
        let json = r#"{ "rules": [ { "label": "//a" }, { "label": "//a" } ] }"#;
        let err = load_graph_from_str(json).unwrap_err();
        assert!(matches!(err, GraphError::DuplicateLabel(label) if label == "//a"));
    }

    #[test]
    fn invalid_json_rejected() {
        let err = load_graph_from_str("not json").unwrap_err();
        assert!(matches!(err, GraphError::Parse(_)));
    }

    #[test]
    fn bad_digest_hex_rejected() {
        let json = r#"{ "rules": [ { "label": "//a", "digest": "abcd" } ] }"#;
        let err = load_graph_from_str(json).unwrap_err();
        assert!(matches!(err, GraphError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.json");
        std::fs::write(&path, r#"{ "rules": [ { "label": "//a" } ] }"#).unwrap();
        let graph = load_graph(&path).unwrap();
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn load_missing_file_errors() {
        let err = load_graph(Path::new("/nonexistent/graph.json")).unwrap_err();
        assert!(matches!(err, GraphError::Io { .. }));
    }
}
