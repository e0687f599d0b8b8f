//! Producer gate
//!
//! The single entry point records take into the pipeline. One mutex guards
//! the active staging buffer and serialises sequence allocation with the
//! append, which is what makes staging order equal `seq` order.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::{Condvar, Mutex};
use scribe_protocol::Record;

use crate::staging::StagingBuffer;

/// Single-writer staging area guarded by the producer mutex
pub(crate) struct ProducerGate {
    /// The active staging buffer producers append to
    staging: Mutex<StagingBuffer>,

    /// Signalled on every append and at shutdown
    available: Condvar,

    /// Capacity handed to each fresh staging buffer
    staging_capacity: usize,
}

impl ProducerGate {
    pub(crate) fn new(staging_capacity: usize) -> Self {
        Self {
            staging: Mutex::new(StagingBuffer::with_capacity(staging_capacity)),
            available: Condvar::new(),
            staging_capacity,
        }
    }

    /// Stage one record: allocate its sequence number and append
    ///
    /// The fetch-add happens under the mutex so that the order of records
    /// in the staging buffer equals the order of their `seq` values.
    /// Returns immediately; never touches I/O.
    pub(crate) fn stage(&self, mut record: Record, seq: &AtomicU64) {
        let mut staging = self.staging.lock();
        record.assign_seq(seq.fetch_add(1, Ordering::Relaxed));
        staging.push(record);
        drop(staging);
        self.available.notify_one();
    }

    /// Dispatcher side: wait for work and seal the active buffer
    ///
    /// Blocks until the staging buffer is non-empty or `stop` is set.
    /// Returns `None` when stop is observed with nothing staged - the
    /// final wake. A non-empty buffer is always sealed and returned, even
    /// after stop, so the last batch survives shutdown.
    pub(crate) fn next_batch(&self, stop: &AtomicBool) -> Option<StagingBuffer> {
        let mut staging = self.staging.lock();
        while !stop.load(Ordering::Acquire) && staging.is_empty() {
            self.available.wait(&mut staging);
        }

        if staging.is_empty() {
            return None;
        }
        Some(staging.seal(self.staging_capacity))
    }

    /// Wake the dispatcher (used by shutdown)
    pub(crate) fn wake_all(&self) {
        self.available.notify_all();
    }
}
