//! Pipeline configuration
//!
//! All fields have sensible defaults - you only need to specify what you
//! want to change. The structs deserialize from TOML so deployments can
//! keep pipeline knobs next to their other service configuration.

use serde::Deserialize;

use crate::{
    DEFAULT_BACKUP_QUEUE_CAPACITY, DEFAULT_BACKUP_WORKERS, DEFAULT_STAGING_CAPACITY,
    DEFAULT_TASK_QUEUE_CAPACITY, MIN_FORMATTER_THREADS,
};

/// Configuration consumed at pipeline construction
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Number of formatter workers
    /// Default: None (auto = number of CPU cores, minimum 2)
    pub formatter_threads: Option<usize>,

    /// Capacity of the bounded task queue (sealed batches in flight)
    /// Default: 1024
    pub task_queue_capacity: usize,

    /// Advisory pre-reservation of each staging buffer, in records
    /// Default: 1024
    pub staging_capacity: usize,

    /// Backup pool sizing for ERROR+ forwarding
    /// Only takes effect when a backup sink is supplied at construction
    pub backup: BackupConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            formatter_threads: None,
            task_queue_capacity: DEFAULT_TASK_QUEUE_CAPACITY,
            staging_capacity: DEFAULT_STAGING_CAPACITY,
            backup: BackupConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Set the number of formatter workers
    #[must_use]
    pub fn with_formatter_threads(mut self, count: usize) -> Self {
        self.formatter_threads = Some(count);
        self
    }

    /// Set the task queue capacity
    #[must_use]
    pub fn with_task_queue_capacity(mut self, capacity: usize) -> Self {
        self.task_queue_capacity = capacity;
        self
    }

    /// Set the staging buffer pre-reservation
    #[must_use]
    pub fn with_staging_capacity(mut self, capacity: usize) -> Self {
        self.staging_capacity = capacity;
        self
    }

    /// Set the backup pool sizing
    #[must_use]
    pub fn with_backup(mut self, backup: BackupConfig) -> Self {
        self.backup = backup;
        self
    }

    /// Get the effective number of formatter workers
    ///
    /// Returns the configured value, or the hardware parallelism when not
    /// set, clamped to the minimum of 2 either way.
    pub fn effective_formatter_threads(&self) -> usize {
        self.formatter_threads
            .unwrap_or_else(num_cpus)
            .max(MIN_FORMATTER_THREADS)
    }
}

/// Sizing for the owned ERROR+ backup pool
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackupConfig {
    /// Number of backup workers
    /// Default: 2
    pub workers: usize,

    /// Capacity of the backup queue; submissions beyond it are dropped
    /// Default: 1024
    pub queue_capacity: usize,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_BACKUP_WORKERS,
            queue_capacity: DEFAULT_BACKUP_QUEUE_CAPACITY,
        }
    }
}

impl BackupConfig {
    /// Set the number of backup workers
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the backup queue capacity
    #[must_use]
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// Get the effective worker count (never zero)
    pub fn effective_workers(&self) -> usize {
        self.workers.max(1)
    }
}

/// Get the number of available CPUs, defaulting to 4 if detection fails
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}
