//! Recursion depth budgets.

/// How far fine-grained recursion may descend into dependency rules.
///
/// The budget is decremented on every recursive step into a dependency rule;
/// at `Bounded(0)` the engine stops recursing and falls back to source
/// digests. This bounds cost on deep graphs and is distinct from cycle
/// prevention — a finite acyclic graph can still need bounding.
///
/// Modeled as an explicit variant rather than a sentinel integer so that
/// "unbounded" can never be confused with any numeric depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DepthBudget {
    /// No depth limit; recursion descends through the whole subgraph.
    Unbounded,
    /// At most this many further recursive steps.
    Bounded(u32),
}

impl DepthBudget {
    /// Returns `true` if no further recursion is allowed.
    pub fn is_exhausted(self) -> bool {
        matches!(self, DepthBudget::Bounded(0))
    }

    /// The budget carried into a dependency rule: one less for a bounded
    /// budget, unchanged for an unbounded one.
    pub fn descend(self) -> Self {
        match self {
            DepthBudget::Unbounded => DepthBudget::Unbounded,
            DepthBudget::Bounded(n) => DepthBudget::Bounded(n.saturating_sub(1)),
        }
    }
}

impl From<Option<u32>> for DepthBudget {
    fn from(value: Option<u32>) -> Self {
        match value {
            Some(n) => DepthBudget::Bounded(n),
            None => DepthBudget::Unbounded,
        }
    }
}
