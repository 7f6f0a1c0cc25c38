//! Per-branch dependency path tracking for cycle detection.

/// The ordered set of rule labels on the current recursive branch.
///
/// Each recursive descent clones the path rather than sharing it by
/// reference, so sibling branches explored concurrently never observe each
/// other's ancestry. Paths stay short (bounded by graph depth), so
/// membership is a linear scan over the backing vector.
#[derive(Debug, Clone, Default)]
pub struct DepPath {
    labels: Vec<String>,
}

impl DepPath {
    /// Creates an empty path for a new top-level call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the label is already on this branch.
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Appends a label to the branch.
    pub fn push(&mut self, label: impl Into<String>) {
        self.labels.push(label.into());
    }

    /// Number of labels on the branch.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if the branch is empty.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Renders the cycle closed by re-encountering `begin`.
    ///
    /// The trace is the sub-sequence of the path from the first occurrence
    /// of `begin` through the end, closed with `begin` again, e.g.
    /// `A -> B -> C -> A`.
    pub fn cycle_trace(&self, begin: &str) -> String {
        let start = self
            .labels
            .iter()
            .position(|l| l == begin)
            .unwrap_or(0);
        let mut parts: Vec<&str> = self.labels[start..].iter().map(String::as_str).collect();
        parts.push(begin);
        parts.join(" -> ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path() {
        let path = DepPath::new();
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert!(!path.contains("//a"));
    }

    #[test]
    fn push_and_contains() {
        let mut path = DepPath::new();
        path.push("//a");
        path.push("//b");
        assert_eq!(path.len(), 2);
        assert!(path.contains("//a"));
        assert!(path.contains("//b"));
        assert!(!path.contains("//c"));
    }

    #[test]
    fn clone_is_independent() {
        let mut parent = DepPath::new();
        parent.push("//a");

        let mut left = parent.clone();
        left.push("//b");
        let mut right = parent.clone();
        right.push("//c");

        assert!(!left.contains("//c"));
        assert!(!right.contains("//b"));
        assert_eq!(parent.len(), 1);
    }

    #[test]
    fn cycle_trace_full_loop() {
        let mut path = DepPath::new();
        path.push("A");
        path.push("B");
        path.push("C");
        assert_eq!(path.cycle_trace("A"), "A -> B -> C -> A");
    }

    #[test]
    fn cycle_trace_inner_loop() {
        // A depends on B, B on C, C back on B: the trace starts at B.
        let mut path = DepPath::new();
        path.push("A");
        path.push("B");
        path.push("C");
        assert_eq!(path.cycle_trace("B"), "B -> C -> B");
    }

    #[test]
    fn cycle_trace_single_node() {
        let mut path = DepPath::new();
        path.push("A");
        assert_eq!(path.cycle_trace("A"), "A -> A");
    }
}
