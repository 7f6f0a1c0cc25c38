//! Filesystem-backed source resolution.

use std::path::PathBuf;

use ripple_common::ContentDigest;
use ripple_hash::SourceResolver;

/// Resolves workspace labels to file content digests under a root directory.
///
/// A label of the form `//pkg/sub:file` maps to `<root>/pkg/sub/file`.
/// Labels into external repositories (leading `@`), labels without the `//`
/// prefix, and unreadable files all resolve to `None`; resolution is
/// best-effort.
pub struct FileResolver {
    root: PathBuf,
}

impl FileResolver {
    /// Creates a resolver rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SourceResolver for FileResolver {
    fn resolve(&self, label: &str) -> Option<ContentDigest> {
        let rel = label.strip_prefix("//")?;
        let rel = rel.replace(':', "/");
        let path = self.root.join(rel.trim_start_matches('/'));
        let content = std::fs::read(&path).ok()?;
        Some(ContentDigest::of(&content))
    }
}
