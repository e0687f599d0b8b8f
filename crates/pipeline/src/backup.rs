//! Backup pool
//!
//! A small owned worker pool that forwards ERROR+ renderings to a backup
//! sink, off the main delivery path. Everything about it is best-effort:
//! a full queue drops the submission, a failed send is counted and
//! forgotten, and submissions after shutdown are rejected silently.

use std::sync::Arc;
use std::thread::JoinHandle;

use bytes::Bytes;
use crossbeam::channel::{Receiver, Sender, TrySendError, bounded};
use parking_lot::Mutex;
use scribe_sinks::Sink;

use crate::config::BackupConfig;
use crate::error::{PipelineError, Result};
use crate::metrics::PipelineMetrics;

/// Worker pool forwarding renderings to a backup sink
///
/// Owned by the pipeline; [`BackupPool::shutdown`] closes the queue, lets
/// the workers drain what was already accepted, and joins them.
pub struct BackupPool {
    /// Taken (and thereby closed) at shutdown
    sender: Mutex<Option<Sender<Bytes>>>,

    workers: Mutex<Vec<JoinHandle<()>>>,
}

impl BackupPool {
    /// Start the pool with `config.effective_workers()` threads
    pub fn start(
        config: &BackupConfig,
        sink: Arc<dyn Sink>,
        metrics: Arc<PipelineMetrics>,
    ) -> Result<Self> {
        let (tx, rx) = bounded::<Bytes>(config.queue_capacity.max(1));

        let worker_count = config.effective_workers();
        let mut workers = Vec::with_capacity(worker_count);
        for id in 0..worker_count {
            let rx = rx.clone();
            let sink = Arc::clone(&sink);
            let metrics = Arc::clone(&metrics);
            let handle = std::thread::Builder::new()
                .name(format!("scribe-backup-{}", id))
                .spawn(move || run_worker(id, rx, sink, metrics));
            match handle {
                Ok(h) => workers.push(h),
                Err(source) => {
                    // Close the queue so the already-started workers exit,
                    // then join them: no partial start
                    drop(tx);
                    for worker in workers {
                        let _ = worker.join();
                    }
                    return Err(PipelineError::Spawn {
                        role: "backup",
                        source,
                    });
                }
            }
        }

        Ok(Self {
            sender: Mutex::new(Some(tx)),
            workers: Mutex::new(workers),
        })
    }

    /// Submit one rendering, fire-and-forget
    ///
    /// Fails when the queue is full or the pool has shut down; callers
    /// count the rejection and move on.
    pub fn submit(&self, bytes: Bytes) -> std::result::Result<(), Bytes> {
        let sender = self.sender.lock();
        match sender.as_ref() {
            Some(tx) => tx.try_send(bytes).map_err(|e| match e {
                TrySendError::Full(b) => b,
                TrySendError::Disconnected(b) => b,
            }),
            None => Err(bytes),
        }
    }

    /// Close the queue, drain it, and join the workers
    ///
    /// Idempotent. Renderings accepted before the call are all forwarded
    /// before this returns.
    pub fn shutdown(&self) {
        let sender = self.sender.lock().take();
        drop(sender);

        let mut workers = self.workers.lock();
        for worker in workers.drain(..) {
            let _ = worker.join();
        }
    }
}

impl Drop for BackupPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Worker loop: drain the queue until it is closed and empty
fn run_worker(id: usize, rx: Receiver<Bytes>, sink: Arc<dyn Sink>, metrics: Arc<PipelineMetrics>) {
    tracing::debug!(worker = id, sink = %sink.name(), "backup worker starting");

    let mut forwarded = 0u64;
    while let Ok(bytes) = rx.recv() {
        // Best-effort: a failed send is counted, never retried here
        if sink.write(&bytes).is_err() {
            metrics.record_sink_error();
        } else {
            forwarded += 1;
        }
    }

    tracing::debug!(worker = id, forwarded, "backup worker exiting");
}
