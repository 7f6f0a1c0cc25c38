//! Observational events emitted during digesting.
//!
//! The engine reports non-fatal observations — a source file picked up as a
//! heuristic input, an input it could not resolve — through an injected
//! [`EventSink`]. Events never influence control flow or digest bytes.

use std::fmt;
use std::sync::Mutex;

/// How serious an observation is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Expected, informational observation.
    Info,
    /// Unexpected but recoverable; the digest is still produced.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => f.write_str("info"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// One observation emitted by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// The observation's severity.
    pub severity: Severity,
    /// Human-readable description naming the input and the referring rule.
    pub message: String,
}

impl Event {
    /// Creates an informational event.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    /// Creates a warning event.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// Receiver for engine observations.
///
/// Implementations must be callable from many worker threads at once.
/// Purely observational: nothing an implementation does may affect digest
/// results.
pub trait EventSink: Sync {
    /// Accepts one observation.
    fn emit(&self, event: Event);
}

/// A thread-safe sink that accumulates events in memory.
///
/// Used by tests to assert on emitted observations and by the CLI to report
/// warnings after a run completes.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<Event>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all accumulated events.
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    /// Returns the accumulated events with the given severity.
    pub fn events_with(&self, severity: Severity) -> Vec<Event> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.severity == severity)
            .cloned()
            .collect()
    }

    /// Takes all accumulated events, leaving the sink empty.
    pub fn take_all(&self) -> Vec<Event> {
        let mut events = self.events.lock().unwrap();
        std::mem::take(&mut *events)
    }
}

impl EventSink for MemorySink {
    fn emit(&self, event: Event) {
        let mut events = self.events.lock().unwrap();
        events.push(event);
    }
}
