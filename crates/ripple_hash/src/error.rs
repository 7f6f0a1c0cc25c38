//! Error types for the digest engine.

/// Errors that can abort a top-level digest request.
///
/// Unresolvable inputs are not errors: they degrade to observations and a
/// digest is still produced for any acyclic graph, even with partial
/// information. Only a dependency cycle is fatal, and it is never retried.
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    /// The dependency graph contains a cycle reachable from the requested
    /// rule. The trace names the cycle in order, closed on the repeated
    /// rule, e.g. `//a -> //b -> //c -> //a`.
    #[error("circular dependency detected: {trace}")]
    CircularDependency {
        /// The ordered cycle, rendered as `A -> B -> ... -> A`.
        trace: String,
    },
}
