//! Dispatcher
//!
//! One long-lived thread between the producer gate and the task queue. A
//! dedicated dispatcher keeps producers off the hand-off path: they only
//! ever touch the gate mutex, while queue capacity waits land here.

use std::sync::Arc;

use crossbeam::channel::Sender;

use crate::pipeline::Shared;
use crate::staging::BatchTask;

/// Dispatcher loop: seal staged batches and move them onto the task queue
///
/// Exits when stop is observed with an empty staging buffer. A final
/// non-empty buffer is sealed and enqueued first, so shutdown never drops
/// staged records. The task queue's only sender is owned here; dropping it
/// on exit is what releases the formatter pool at shutdown.
pub(crate) fn run(shared: Arc<Shared>, tx: Sender<BatchTask>) {
    tracing::debug!("dispatcher starting");

    let mut dispatched = 0u64;
    while let Some(sealed) = shared.gate.next_batch(&shared.stop) {
        // The send may wait for queue capacity; the gate lock is not held
        if tx.send(BatchTask::new(sealed)).is_err() {
            break;
        }
        shared.metrics.record_batch_dispatched();
        dispatched += 1;
    }

    tracing::debug!(batches = dispatched, "dispatcher exiting");
}
