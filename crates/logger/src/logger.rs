//! Logger - a named handle on a running pipeline

use std::sync::Arc;

use scribe_pipeline::{Pipeline, PipelineSnapshot};
use scribe_protocol::{Level, Record};

/// Named producer handle
///
/// Cheap to share: the logger is usually wrapped in an `Arc` and cloned
/// into every thread that logs. All methods are non-blocking; records are
/// staged and the pipeline's worker threads do the rest.
pub struct Logger {
    name: String,
    pipeline: Arc<Pipeline>,
}

impl Logger {
    /// Create a logger over an already-running pipeline
    pub fn new(name: impl Into<String>, pipeline: Arc<Pipeline>) -> Self {
        Self {
            name: name.into(),
            pipeline,
        }
    }

    /// Get the logger's name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Emit a record at the given level
    ///
    /// `file` and `line` identify the call site; the macros capture them
    /// automatically. The payload must already be expanded text.
    pub fn log(&self, level: Level, file: &str, line: u32, payload: impl Into<String>) {
        self.pipeline
            .push(Record::new(level, self.name.as_str(), file, line, payload));
    }

    /// Emit a DEBUG record
    pub fn debug(&self, file: &str, line: u32, payload: impl Into<String>) {
        self.log(Level::Debug, file, line, payload);
    }

    /// Emit an INFO record
    pub fn info(&self, file: &str, line: u32, payload: impl Into<String>) {
        self.log(Level::Info, file, line, payload);
    }

    /// Emit a WARN record
    pub fn warn(&self, file: &str, line: u32, payload: impl Into<String>) {
        self.log(Level::Warn, file, line, payload);
    }

    /// Emit an ERROR record
    pub fn error(&self, file: &str, line: u32, payload: impl Into<String>) {
        self.log(Level::Error, file, line, payload);
    }

    /// Emit a FATAL record
    pub fn fatal(&self, file: &str, line: u32, payload: impl Into<String>) {
        self.log(Level::Fatal, file, line, payload);
    }

    /// Stop the underlying pipeline, draining every accepted record
    ///
    /// Idempotent; later log calls on this logger are silently dropped.
    pub fn shutdown(&self) {
        self.pipeline.shutdown();
    }

    /// Get a snapshot of the underlying pipeline's counters
    pub fn metrics(&self) -> PipelineSnapshot {
        self.pipeline.metrics()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("pipeline", &self.pipeline)
            .finish()
    }
}
