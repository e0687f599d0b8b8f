//! Pipeline metrics
//!
//! Counters for every stage, shared across the worker threads. Sink
//! failures in particular are only ever visible here: the writer suppresses
//! them because reporting a sink failure through the pipeline would
//! recurse.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters shared by all pipeline stages
#[derive(Debug, Default)]
pub struct PipelineMetrics {
    /// Records accepted by `push`
    records_pushed: AtomicU64,

    /// Records silently rejected because the pipeline was stopped
    records_rejected: AtomicU64,

    /// Sealed staging buffers moved onto the task queue
    batches_dispatched: AtomicU64,

    /// Records rendered by the formatter pool
    records_formatted: AtomicU64,

    /// ERROR+ renderings handed to the backup pool
    backup_submitted: AtomicU64,

    /// Backup submissions dropped (queue full or pool shut down)
    backup_rejected: AtomicU64,

    /// Byte batches the writer drained to sinks
    batches_written: AtomicU64,

    /// Records written out in sequence order
    records_written: AtomicU64,

    /// Bytes handed to each sink (counted once per batch, not per sink)
    bytes_written: AtomicU64,

    /// Failed sink write or flush calls
    sink_errors: AtomicU64,
}

impl PipelineMetrics {
    /// Create new metrics instance
    pub const fn new() -> Self {
        Self {
            records_pushed: AtomicU64::new(0),
            records_rejected: AtomicU64::new(0),
            batches_dispatched: AtomicU64::new(0),
            records_formatted: AtomicU64::new(0),
            backup_submitted: AtomicU64::new(0),
            backup_rejected: AtomicU64::new(0),
            batches_written: AtomicU64::new(0),
            records_written: AtomicU64::new(0),
            bytes_written: AtomicU64::new(0),
            sink_errors: AtomicU64::new(0),
        }
    }

    /// Record an accepted push
    #[inline]
    pub fn record_pushed(&self) {
        self.records_pushed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a push rejected after stop
    #[inline]
    pub fn record_rejected(&self) {
        self.records_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a dispatched batch
    #[inline]
    pub fn record_batch_dispatched(&self) {
        self.batches_dispatched.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a formatted record
    #[inline]
    pub fn record_formatted(&self) {
        self.records_formatted.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a backup submission
    #[inline]
    pub fn record_backup_submitted(&self) {
        self.backup_submitted.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a dropped backup submission
    #[inline]
    pub fn record_backup_rejected(&self) {
        self.backup_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a written byte batch
    #[inline]
    pub fn record_batch_written(&self, records: u64, bytes: u64) {
        self.batches_written.fetch_add(1, Ordering::Relaxed);
        self.records_written.fetch_add(records, Ordering::Relaxed);
        self.bytes_written.fetch_add(bytes, Ordering::Relaxed);
    }

    /// Record a failed sink call
    #[inline]
    pub fn record_sink_error(&self) {
        self.sink_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Get snapshot of all counters
    pub fn snapshot(&self) -> PipelineSnapshot {
        PipelineSnapshot {
            records_pushed: self.records_pushed.load(Ordering::Relaxed),
            records_rejected: self.records_rejected.load(Ordering::Relaxed),
            batches_dispatched: self.batches_dispatched.load(Ordering::Relaxed),
            records_formatted: self.records_formatted.load(Ordering::Relaxed),
            backup_submitted: self.backup_submitted.load(Ordering::Relaxed),
            backup_rejected: self.backup_rejected.load(Ordering::Relaxed),
            batches_written: self.batches_written.load(Ordering::Relaxed),
            records_written: self.records_written.load(Ordering::Relaxed),
            bytes_written: self.bytes_written.load(Ordering::Relaxed),
            sink_errors: self.sink_errors.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time snapshot of pipeline metrics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineSnapshot {
    pub records_pushed: u64,
    pub records_rejected: u64,
    pub batches_dispatched: u64,
    pub records_formatted: u64,
    pub backup_submitted: u64,
    pub backup_rejected: u64,
    pub batches_written: u64,
    pub records_written: u64,
    pub bytes_written: u64,
    pub sink_errors: u64,
}
