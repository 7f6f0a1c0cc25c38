//! The rule digest engine: recursive, cycle-safe, cache-backed digesting of
//! build rules.
//!
//! [`RuleDigester`] computes a stable, content-derived digest for each rule
//! in a build graph: two graphs produce the same digest for a rule exactly
//! when that rule and everything it transitively depends on (within the
//! configured [`DepthBudget`]) are unchanged. All root invocations in a run
//! share one [`DigestCache`]; collaborators for source resolution and
//! observation reporting are injected via the [`SourceResolver`] and
//! [`EventSink`] traits.

#![warn(missing_docs)]

pub mod cache;
pub mod depth;
pub mod engine;
pub mod error;
pub mod event;
pub mod path;
pub mod resolve;

pub use cache::DigestCache;
pub use depth::DepthBudget;
pub use engine::RuleDigester;
pub use error::HashError;
pub use event::{Event, EventSink, MemorySink, Severity};
pub use path::DepPath;
pub use resolve::{NoResolver, SourceResolver};
