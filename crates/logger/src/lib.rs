//! Scribe Logger - Producer façade for the scribe pipeline
//!
//! The façade is what application code holds: a named [`Logger`] backed by
//! a running pipeline. Level methods expand the message on the producing
//! thread and hand the pipeline a finished record; the pipeline never sees
//! format strings.
//!
//! # Example
//!
//! ```ignore
//! use scribe_logger::{LoggerBuilder, scribe_info};
//! use scribe_sinks::{RollingFileConfig, RollingFileSink};
//! use std::sync::Arc;
//!
//! let sink = RollingFileSink::new(RollingFileConfig::default().with_path("./logfile"))?;
//! let logger = LoggerBuilder::new("asynclogger")
//!     .with_sink(Arc::new(sink))
//!     .build()?;
//!
//! scribe_info!(logger, "service listening on {}", 8080);
//! ```
//!
//! Loggers can also be registered process-wide and fetched by name:
//!
//! ```ignore
//! scribe_logger::register(logger);
//! let logger = scribe_logger::get_logger("asynclogger").unwrap();
//! ```

mod builder;
mod logger;
mod macros;
mod registry;

pub use builder::LoggerBuilder;
pub use logger::Logger;
pub use registry::{LoggerRegistry, get_logger, global, register};

// Re-export the types callers need alongside the façade
pub use scribe_pipeline::{PipelineConfig, PipelineError, PipelineSnapshot};
pub use scribe_protocol::Level;

// Test modules - only compiled during testing
#[cfg(test)]
mod builder_test;
#[cfg(test)]
mod logger_test;
#[cfg(test)]
mod registry_test;
