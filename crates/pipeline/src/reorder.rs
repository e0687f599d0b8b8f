//! Reorder buffer
//!
//! Formatters finish records in arbitrary order; the reorder buffer maps
//! each rendering back to its sequence number so the writer can emit a
//! strictly increasing, gap-free byte stream.

use std::collections::BTreeMap;

use bytes::{Bytes, BytesMut};

/// Sparse map from sequence number to rendered bytes
///
/// # Invariant
///
/// For every `seq < next_seq_to_write` no entry exists (already written);
/// entries at or above it exist exactly when some formatter has completed
/// that record. `next_seq_to_write` only ever increases.
#[derive(Debug)]
pub struct ReorderBuffer {
    entries: BTreeMap<u64, Bytes>,
    next_seq_to_write: u64,
}

impl ReorderBuffer {
    /// Create an empty reorder buffer starting at sequence 0
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_seq_to_write: 0,
        }
    }

    /// Deposit one completed rendering
    #[inline]
    pub fn insert(&mut self, seq: u64, bytes: Bytes) {
        self.entries.insert(seq, bytes);
    }

    /// Check whether the next sequence to write has arrived
    #[inline]
    pub fn contains_next(&self) -> bool {
        self.entries.contains_key(&self.next_seq_to_write)
    }

    /// Drain contiguously from `next_seq_to_write` into `out`
    ///
    /// Appends renderings while consecutive sequence numbers are present,
    /// erasing each entry and advancing the cursor. Returns the number of
    /// records drained; stops at the first hole.
    pub fn drain_contiguous(&mut self, out: &mut BytesMut) -> u64 {
        let mut drained = 0;
        while let Some(bytes) = self.entries.remove(&self.next_seq_to_write) {
            out.extend_from_slice(&bytes);
            self.next_seq_to_write += 1;
            drained += 1;
        }
        drained
    }

    /// The sequence number the writer will emit next
    #[inline]
    pub fn next_seq_to_write(&self) -> u64 {
        self.next_seq_to_write
    }

    /// Number of renderings waiting (contiguous or not)
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the buffer holds no renderings
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ReorderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
