//! Scribe Pipeline - Asynchronous ordered log delivery
//!
//! The pipeline moves records from producing threads to sinks without ever
//! blocking producers on I/O, while keeping sink output in strict
//! production order.
//!
//! # Architecture
//!
//! ```text
//! [Producers]        [Dispatcher]        [Formatter Pool]      [Writer]
//!  thread ──┐                                 ┌─ format ─┐
//!  thread ──┼─→ staging ──seal──→ task queue ─┼─ format ─┼─→ reorder ─→ Sinks
//!  thread ──┘   buffer            (bounded)   └─ format ─┘     map
//! ```
//!
//! # Key Design
//!
//! - **Double-buffered staging**: producers append to the active buffer
//!   under one short mutex; the dispatcher seals it with an O(1) swap
//! - **Dense sequence ids**: allocated under the same critical section
//!   that stages the record, so staging order equals `seq` order
//! - **Parallel formatting**: N workers render records concurrently and
//!   deposit the bytes in a sequence-keyed reorder map
//! - **Single ordered writer**: drains the map contiguously from
//!   `next_seq_to_write`, coalesces into byte batches, and writes every
//!   sink in registration order
//! - **Drain-everything shutdown**: every record accepted before stop is
//!   on a sink by the time [`Pipeline::shutdown`] returns
//!
//! # Example
//!
//! ```ignore
//! use scribe_pipeline::{Pipeline, PipelineConfig};
//! use scribe_protocol::{Level, Record};
//! use scribe_sinks::MemorySink;
//! use std::sync::Arc;
//!
//! let sink = MemorySink::new();
//! let pipeline = Pipeline::start(PipelineConfig::default(), vec![Arc::new(sink.clone())])?;
//!
//! pipeline.push(Record::new(Level::Info, "core", file!(), line!(), "started"));
//!
//! pipeline.shutdown();
//! assert_eq!(sink.records()?.len(), 1);
//! ```

mod backup;
mod config;
mod dispatcher;
mod error;
mod formatter;
mod gate;
mod metrics;
mod pipeline;
mod reorder;
mod staging;
mod writer;

pub use backup::BackupPool;
pub use config::{BackupConfig, PipelineConfig};
pub use error::{PipelineError, Result};
pub use metrics::{PipelineMetrics, PipelineSnapshot};
pub use pipeline::Pipeline;
pub use reorder::ReorderBuffer;
pub use staging::{BatchTask, StagingBuffer};

// Re-export key types from dependencies for convenience
pub use scribe_protocol::{Level, Record};
pub use scribe_sinks::Sink;

/// Minimum number of formatter workers
pub const MIN_FORMATTER_THREADS: usize = 2;

/// Default capacity of the bounded task queue (sealed batches in flight)
pub const DEFAULT_TASK_QUEUE_CAPACITY: usize = 1024;

/// Advisory pre-reservation of the staging buffer (records)
pub const DEFAULT_STAGING_CAPACITY: usize = 1024;

/// Default number of backup pool workers
pub const DEFAULT_BACKUP_WORKERS: usize = 2;

/// Default capacity of the backup pool queue
pub const DEFAULT_BACKUP_QUEUE_CAPACITY: usize = 1024;

// Test modules - only compiled during testing
#[cfg(test)]
mod backup_test;
#[cfg(test)]
mod metrics_test;
#[cfg(test)]
mod staging_test;
