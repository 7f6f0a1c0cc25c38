//! Best-effort source digest resolution.

use ripple_common::ContentDigest;

/// Resolves a dependency label with no matching rule to a content digest.
///
/// This is a best-effort boundary: `None` means "could not be found or
/// read", not an error, and the engine degrades to an observation instead
/// of failing. Implementations may read from disk or any other store and
/// must be callable from many worker threads at once.
pub trait SourceResolver: Sync {
    /// Attempts to produce a content digest for the given label.
    fn resolve(&self, label: &str) -> Option<ContentDigest>;
}

/// A resolver that never resolves anything.
///
/// Useful when the caller has no source tree available and wants every
/// unresolvable input to degrade to an observation.
#[derive(Debug, Default)]
pub struct NoResolver;

impl SourceResolver for NoResolver {
    fn resolve(&self, _label: &str) -> Option<ContentDigest> {
        None
    }
}
