//! Logger builder
//!
//! Collects a name, sinks, and pipeline knobs, then starts the pipeline
//! and hands back the logger. A builder with no sinks gets stdout, so a
//! bare `LoggerBuilder::new("app").build()` works out of the box.

use std::sync::Arc;

use scribe_pipeline::{Pipeline, PipelineConfig, Result};
use scribe_sinks::{Sink, StdoutSink};

use crate::logger::Logger;

/// Builder for a logger and its pipeline
pub struct LoggerBuilder {
    name: String,
    config: PipelineConfig,
    sinks: Vec<Arc<dyn Sink>>,
    backup_sink: Option<Arc<dyn Sink>>,
}

impl LoggerBuilder {
    /// Start building a logger with the given name
    ///
    /// An empty name falls back to `"scribe"`.
    pub fn new(name: impl Into<String>) -> Self {
        let mut name = name.into();
        if name.is_empty() {
            name = "scribe".into();
        }
        Self {
            name,
            config: PipelineConfig::default(),
            sinks: Vec::new(),
            backup_sink: None,
        }
    }

    /// Set the pipeline configuration
    #[must_use]
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a sink; sinks receive batches in the order they were added
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Set the backup sink for ERROR+ forwarding
    #[must_use]
    pub fn with_backup_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.backup_sink = Some(sink);
        self
    }

    /// Start the pipeline and build the logger
    ///
    /// Fails only on construction errors (a pipeline that cannot start its
    /// threads); the failure leaves nothing running.
    pub fn build(self) -> Result<Arc<Logger>> {
        let mut sinks = self.sinks;
        if sinks.is_empty() {
            sinks.push(Arc::new(StdoutSink::new()));
        }

        let pipeline = match self.backup_sink {
            Some(backup) => Pipeline::start_with_backup(self.config, sinks, backup)?,
            None => Pipeline::start(self.config, sinks)?,
        };

        Ok(Arc::new(Logger::new(self.name, Arc::new(pipeline))))
    }
}
