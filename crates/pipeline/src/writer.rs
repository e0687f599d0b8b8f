//! Reorder writer
//!
//! The single thread that turns parallel formatter output back into a
//! strictly ordered byte stream and drains it to the sinks.

use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use bytes::BytesMut;
use scribe_sinks::Sink;

use crate::pipeline::Shared;

/// Bound on each condition wait
///
/// Contiguous renderings cannot stall behind a hole under the gate's
/// sequencing invariant, but the timeout guarantees a liveness floor if a
/// signal is ever missed.
const WAIT_TIMEOUT: Duration = Duration::from_millis(100);

/// Initial capacity of the coalescing byte batch
const BATCH_CAPACITY: usize = 4 * 1024;

/// Writer loop: drain the reorder buffer in sequence order to all sinks
///
/// Exits once every formatter has finished and the reorder buffer is
/// empty. Each drained batch is contiguous and in order; it goes to every
/// sink in registration order, and sink failures are counted and
/// suppressed (reporting them through the pipeline would recurse).
pub(crate) fn run(shared: Arc<Shared>, sinks: Vec<Arc<dyn Sink>>) {
    tracing::debug!(sinks = sinks.len(), "writer starting");

    let mut batch = BytesMut::with_capacity(BATCH_CAPACITY);
    loop {
        let drained;
        {
            let mut reorder = shared.reorder.lock();
            loop {
                let formatters_done = shared.formatters_active.load(Ordering::Acquire) == 0;
                if (formatters_done && reorder.is_empty()) || reorder.contains_next() {
                    break;
                }
                shared.writer_ready.wait_for(&mut reorder, WAIT_TIMEOUT);
            }

            if shared.formatters_active.load(Ordering::Acquire) == 0 && reorder.is_empty() {
                break;
            }

            drained = reorder.drain_contiguous(&mut batch);
        }

        if !batch.is_empty() {
            for sink in &sinks {
                if sink.write(&batch).is_err() {
                    shared.metrics.record_sink_error();
                }
            }
            shared.metrics.record_batch_written(drained, batch.len() as u64);
            batch.clear();
        }
    }

    // Nothing is pending after exit; give buffered sinks a final flush
    for sink in &sinks {
        if sink.flush().is_err() {
            shared.metrics.record_sink_error();
        }
    }

    let next_seq = shared.reorder.lock().next_seq_to_write();
    tracing::debug!(records_written = next_seq, "writer exiting");
}
