//! Formatter pool worker
//!
//! N workers consume batch tasks from the queue, render each record to
//! bytes, and deposit the renderings in the reorder buffer keyed by
//! sequence number. Rendering happens without any lock held.

use std::sync::Arc;
use std::sync::atomic::Ordering;

use crossbeam::channel::Receiver;
use scribe_protocol::{Level, render_bytes};

use crate::pipeline::Shared;
use crate::staging::BatchTask;

/// Formatter loop: render batches until the queue is closed and drained
///
/// `recv` returns an error only once the dispatcher has dropped the
/// sender and every queued task has been taken, which is exactly the
/// "stop and queue empty" exit condition. The worker decrements the
/// active count only at terminal exit, then signals the writer one last
/// time so it can observe the drain.
pub(crate) fn run(id: usize, shared: Arc<Shared>, rx: Receiver<BatchTask>) {
    tracing::debug!(worker = id, "formatter starting");

    let mut rendered = 0u64;
    while let Ok(task) = rx.recv() {
        for record in task.into_records() {
            let seq = record.seq();
            let bytes = render_bytes(&record);

            // ERROR+ records also go to the backup pool, fire-and-forget
            if record.level() >= Level::Error {
                if let Some(backup) = shared.backup.as_ref() {
                    match backup.submit(bytes.clone()) {
                        Ok(()) => shared.metrics.record_backup_submitted(),
                        Err(_) => shared.metrics.record_backup_rejected(),
                    }
                }
            }

            {
                let mut reorder = shared.reorder.lock();
                reorder.insert(seq, bytes);
            }
            shared.writer_ready.notify_one();
            shared.metrics.record_formatted();
            rendered += 1;
        }
    }

    shared.formatters_active.fetch_sub(1, Ordering::AcqRel);
    shared.writer_ready.notify_one();

    tracing::debug!(worker = id, rendered, "formatter exiting");
}
