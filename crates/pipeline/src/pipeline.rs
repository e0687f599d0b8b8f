//! Pipeline - construction, running state, and shutdown
//!
//! The `Pipeline` owns every worker thread and the shared state they
//! coordinate through. Shutdown is the delicate part: it walks the stages
//! in dependency order so that every record accepted before stop reaches
//! the sinks.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::thread::JoinHandle;

use crossbeam::channel::bounded;
use parking_lot::{Condvar, Mutex};
use scribe_protocol::Record;
use scribe_sinks::Sink;

use crate::backup::BackupPool;
use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use crate::gate::ProducerGate;
use crate::metrics::{PipelineMetrics, PipelineSnapshot};
use crate::reorder::ReorderBuffer;
use crate::staging::BatchTask;
use crate::{dispatcher, formatter, writer};

/// State shared by producers and all worker threads
pub(crate) struct Shared {
    /// Set once by the first `shutdown`; readable without locks
    pub(crate) stop: AtomicBool,

    /// Sequence allocator, scoped to this pipeline instance
    pub(crate) seq: AtomicU64,

    /// Producer staging area
    pub(crate) gate: ProducerGate,

    /// Renderings awaiting in-order emission
    pub(crate) reorder: Mutex<ReorderBuffer>,

    /// Signalled when the reorder buffer gains an entry and at drain
    pub(crate) writer_ready: Condvar,

    /// Formatters still running; the writer exits when this hits zero
    /// with an empty reorder buffer
    pub(crate) formatters_active: AtomicUsize,

    /// Owned ERROR+ forwarding pool, if configured
    pub(crate) backup: Option<Arc<BackupPool>>,

    pub(crate) metrics: Arc<PipelineMetrics>,
}

/// Worker thread handles, joined during shutdown
#[derive(Default)]
struct Workers {
    dispatcher: Option<JoinHandle<()>>,
    formatters: Vec<JoinHandle<()>>,
    writer: Option<JoinHandle<()>>,
}

/// Asynchronous ordered logging pipeline
///
/// See the crate docs for the stage layout. Construction starts every
/// thread or none ([`Pipeline::start`] joins partial starts before
/// returning the error); [`Pipeline::shutdown`] is idempotent and also
/// runs on drop.
pub struct Pipeline {
    shared: Arc<Shared>,
    workers: Mutex<Workers>,
}

impl Pipeline {
    /// Start a pipeline writing to `sinks`, without backup forwarding
    pub fn start(config: PipelineConfig, sinks: Vec<Arc<dyn Sink>>) -> Result<Self> {
        Self::start_inner(config, sinks, None)
    }

    /// Start a pipeline that also forwards ERROR+ records to `backup_sink`
    ///
    /// The backup pool is sized by `config.backup` and owned by the
    /// pipeline; its queue is drained and closed during shutdown.
    pub fn start_with_backup(
        config: PipelineConfig,
        sinks: Vec<Arc<dyn Sink>>,
        backup_sink: Arc<dyn Sink>,
    ) -> Result<Self> {
        Self::start_inner(config, sinks, Some(backup_sink))
    }

    fn start_inner(
        config: PipelineConfig,
        sinks: Vec<Arc<dyn Sink>>,
        backup_sink: Option<Arc<dyn Sink>>,
    ) -> Result<Self> {
        if sinks.is_empty() {
            return Err(PipelineError::NoSinks);
        }

        let formatter_count = config.effective_formatter_threads();
        let metrics = Arc::new(PipelineMetrics::new());

        let backup = match backup_sink {
            Some(sink) => Some(Arc::new(BackupPool::start(
                &config.backup,
                sink,
                Arc::clone(&metrics),
            )?)),
            None => None,
        };

        let shared = Arc::new(Shared {
            stop: AtomicBool::new(false),
            seq: AtomicU64::new(0),
            gate: ProducerGate::new(config.staging_capacity),
            reorder: Mutex::new(ReorderBuffer::new()),
            writer_ready: Condvar::new(),
            formatters_active: AtomicUsize::new(formatter_count),
            backup,
            metrics,
        });

        let (task_tx, task_rx) = bounded::<BatchTask>(config.task_queue_capacity.max(1));

        let pipeline = Self {
            shared: Arc::clone(&shared),
            workers: Mutex::new(Workers::default()),
        };

        tracing::info!(
            formatter_threads = formatter_count,
            sink_count = sinks.len(),
            task_queue_capacity = config.task_queue_capacity,
            backup = pipeline.shared.backup.is_some(),
            "pipeline starting"
        );

        // Spawn order matters for abort: each stage only outlives the ones
        // it feeds. On any spawn failure the already-started threads are
        // stopped and joined before the error is returned.
        {
            let mut workers = pipeline.workers.lock();

            let dispatcher_shared = Arc::clone(&shared);
            match std::thread::Builder::new()
                .name("scribe-dispatch".into())
                .spawn(move || dispatcher::run(dispatcher_shared, task_tx))
            {
                Ok(handle) => workers.dispatcher = Some(handle),
                Err(source) => {
                    drop(workers);
                    pipeline.abort_start();
                    return Err(PipelineError::Spawn {
                        role: "dispatcher",
                        source,
                    });
                }
            }

            for id in 0..formatter_count {
                let formatter_shared = Arc::clone(&shared);
                let rx = task_rx.clone();
                match std::thread::Builder::new()
                    .name(format!("scribe-format-{}", id))
                    .spawn(move || formatter::run(id, formatter_shared, rx))
                {
                    Ok(handle) => workers.formatters.push(handle),
                    Err(source) => {
                        drop(workers);
                        pipeline.abort_start();
                        return Err(PipelineError::Spawn {
                            role: "formatter",
                            source,
                        });
                    }
                }
            }

            let writer_shared = Arc::clone(&shared);
            match std::thread::Builder::new()
                .name("scribe-write".into())
                .spawn(move || writer::run(writer_shared, sinks))
            {
                Ok(handle) => workers.writer = Some(handle),
                Err(source) => {
                    drop(workers);
                    pipeline.abort_start();
                    return Err(PipelineError::Spawn {
                        role: "writer",
                        source,
                    });
                }
            }
        }

        Ok(pipeline)
    }

    /// Hand one record to the pipeline
    ///
    /// Assigns the sequence number, stages the record, and returns.
    /// Producers only ever contend on the gate mutex; the call never
    /// blocks on I/O. After shutdown the record is silently dropped.
    pub fn push(&self, record: Record) {
        if self.shared.stop.load(Ordering::Acquire) {
            self.shared.metrics.record_rejected();
            return;
        }
        self.shared.gate.stage(record, &self.shared.seq);
        self.shared.metrics.record_pushed();
    }

    /// Stop the pipeline, draining every accepted record to the sinks
    ///
    /// Idempotent: only the first call runs the protocol, later calls
    /// return immediately. The stages wind down in dependency order:
    ///
    /// 1. set `stop`
    /// 2. wake and join the dispatcher (it seals any final batch first)
    /// 3. shut down the backup pool (drains its own queue)
    /// 4. join the formatters (the closed task queue releases them once
    ///    it is empty)
    /// 5. wake and join the writer (exits when the reorder buffer drains)
    pub fn shutdown(&self) {
        if self.shared.stop.swap(true, Ordering::AcqRel) {
            return;
        }

        tracing::debug!("pipeline shutting down");
        let mut workers = self.workers.lock();

        self.shared.gate.wake_all();
        if let Some(dispatcher) = workers.dispatcher.take() {
            let _ = dispatcher.join();
        }

        if let Some(backup) = self.shared.backup.as_ref() {
            backup.shutdown();
        }

        for formatter in workers.formatters.drain(..) {
            let _ = formatter.join();
        }

        self.shared.writer_ready.notify_all();
        if let Some(writer) = workers.writer.take() {
            let _ = writer.join();
        }

        let snapshot = self.shared.metrics.snapshot();
        tracing::info!(
            records_pushed = snapshot.records_pushed,
            records_written = snapshot.records_written,
            records_rejected = snapshot.records_rejected,
            bytes_written = snapshot.bytes_written,
            sink_errors = snapshot.sink_errors,
            "pipeline stopped"
        );
    }

    /// Check whether shutdown has begun
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.shared.stop.load(Ordering::Acquire)
    }

    /// Get a point-in-time snapshot of the pipeline counters
    pub fn metrics(&self) -> PipelineSnapshot {
        self.shared.metrics.snapshot()
    }

    /// The sequence number the writer will emit next
    ///
    /// After shutdown this equals the number of records delivered to the
    /// sinks.
    pub fn next_seq_to_write(&self) -> u64 {
        self.shared.reorder.lock().next_seq_to_write()
    }

    /// Abort a partially started pipeline: stop and join whatever spawned
    fn abort_start(&self) {
        self.shared.stop.store(true, Ordering::Release);
        self.shared.gate.wake_all();

        let mut workers = self.workers.lock();
        if let Some(dispatcher) = workers.dispatcher.take() {
            let _ = dispatcher.join();
        }
        if let Some(backup) = self.shared.backup.as_ref() {
            backup.shutdown();
        }
        for formatter in workers.formatters.drain(..) {
            let _ = formatter.join();
        }
        self.shared.writer_ready.notify_all();
        if let Some(writer) = workers.writer.take() {
            let _ = writer.join();
        }
    }
}

impl Drop for Pipeline {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("stopped", &self.is_stopped())
            .field("next_seq", &self.shared.seq.load(Ordering::Relaxed))
            .finish()
    }
}
