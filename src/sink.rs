//! Diagnostic sinks.
//!
//! Classifier misses and submission failures are reported to a sink
//! collaborator instead of being surfaced through return values. Sinks must
//! never fail; the default implementation routes everything to the `log`
//! crate.

use std::sync::Mutex;

/// Receiver for human-readable diagnostics.
///
/// Two logically distinct sinks flow through this trait: the diagnostics
/// sink (classifier misses) and the error sink (submission failures).
pub trait DiagnosticSink: Send + Sync {
    /// Report a non-fatal diagnostic (e.g. a classifier miss).
    fn warn(&self, message: &str);

    /// Report a failure (e.g. a rejected batch submission).
    fn error(&self, message: &str) {
        self.warn(message);
    }
}

/// Sink backed by the `log` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn warn(&self, message: &str) {
        log::warn!("{}", message);
    }

    fn error(&self, message: &str) {
        log::error!("{}", message);
    }
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn warn(&self, _message: &str) {}
}

/// Sink that collects messages in memory, for tests and reporting.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Create a new empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of messages collected so far.
    pub fn len(&self) -> usize {
        self.messages.lock().map(|m| m.len()).unwrap_or(0)
    }

    /// Check if no messages were collected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the collected messages.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }
}

impl DiagnosticSink for MemorySink {
    fn warn(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}
