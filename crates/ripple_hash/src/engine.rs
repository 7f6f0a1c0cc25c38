//! The recursive rule digest engine.

use std::collections::BTreeSet;

use ripple_common::{ContentDigest, DigestAccumulator};
use ripple_graph::{Graph, Rule};

use crate::cache::DigestCache;
use crate::depth::DepthBudget;
use crate::error::HashError;
use crate::event::{Event, EventSink};
use crate::path::DepPath;
use crate::resolve::SourceResolver;

/// Computes content-derived digests for rules in a build graph.
///
/// One digester is created per run with the configured fine-grained
/// external-repository set. Each call to [`digest`](Self::digest) walks the
/// rule's dependency subgraph depth-first on its own call stack; concurrency
/// comes from callers invoking `digest` for many root rules in parallel with
/// a shared [`DigestCache`]. The engine itself spawns nothing.
pub struct RuleDigester {
    fine_grained_repos: BTreeSet<String>,
}

impl RuleDigester {
    /// Creates a digester for the given fine-grained external-repository set.
    pub fn new(fine_grained_repos: BTreeSet<String>) -> Self {
        Self { fine_grained_repos }
    }

    /// Produces the digest of one rule.
    ///
    /// The digest is a pure function of the rule's own digest, the seed, and
    /// — for each dependency edge in declared order — the edge label plus
    /// either a source digest or the recursive digest of the dependency rule
    /// at `depth.descend()`. An absent seed contributes zero bytes. Callers
    /// start with an empty [`DepPath`] and whatever depth budget they want;
    /// completed results are memoized in `cache` under `(label, depth)`.
    ///
    /// Fails only with [`HashError::CircularDependency`]; every other
    /// unresolved-input condition degrades to an event on `sink` and the
    /// computation proceeds.
    #[allow(clippy::too_many_arguments)]
    pub fn digest(
        &self,
        rule: &Rule,
        graph: &Graph,
        cache: &DigestCache,
        resolver: &dyn SourceResolver,
        sink: &dyn EventSink,
        seed: Option<&[u8]>,
        path: &DepPath,
        depth: DepthBudget,
    ) -> Result<ContentDigest, HashError> {
        let mut path = path.clone();
        if path.contains(&rule.label) {
            return Err(HashError::CircularDependency {
                trace: path.cycle_trace(&rule.label),
            });
        }
        path.push(rule.label.clone());

        // A cached value already completed without cycling, so the lookup
        // needs no cycle check of its own.
        if let Some(cached) = cache.get_rule(&rule.label, depth) {
            return Ok(cached);
        }

        let mut acc = DigestAccumulator::new();
        acc.put_digest(&rule.digest);
        acc.put_opt(seed);

        for input in rule.input_labels(&self.fine_grained_repos) {
            // The label itself always contributes: a changed dependency set
            // must change the digest even when downstream content does not.
            acc.put(input.as_bytes());

            let input_rule = graph.get(&input);
            let cached_source = if depth.is_exhausted() || input_rule.is_none() {
                cache.get_source(&input)
            } else {
                None
            };

            if let Some(source_digest) = cached_source {
                acc.put_digest(&source_digest);
            } else if let Some(input_rule) =
                input_rule.filter(|r| !depth.is_exhausted() && r.label != rule.label)
            {
                let input_digest = self.digest(
                    input_rule,
                    graph,
                    cache,
                    resolver,
                    sink,
                    seed,
                    &path,
                    depth.descend(),
                )?;
                acc.put_digest(&input_digest);
            } else {
                match resolver.resolve(&input) {
                    Some(source_digest) => {
                        sink.emit(Event::info(format!(
                            "source file {input} picked up as an input for rule {}",
                            rule.label
                        )));
                        cache.put_source(&input, source_digest);
                        acc.put_digest(&source_digest);
                    }
                    None => {
                        // An exhausted budget means the caller chose not to
                        // go deeper; "cannot resolve" is expected there.
                        if !depth.is_exhausted() {
                            sink.emit(Event::warning(format!(
                                "unable to compute digest for input {input} of rule {}",
                                rule.label
                            )));
                        }
                    }
                }
            }
        }

        let digest = acc.finish();
        cache.put_rule(&rule.label, depth, digest);
        Ok(digest)
    }
}
