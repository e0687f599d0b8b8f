//! Memory sink - in-process capture
//!
//! Accumulates every written byte in memory. The capture handle is
//! cheaply cloneable, so tests can keep one side and hand the other to a
//! pipeline.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use scribe_protocol::{ParsedRecord, parse_stream};

use crate::{Result, Sink};

/// Sink that captures batches in memory
///
/// Clones share the same underlying buffer.
#[derive(Debug, Clone)]
pub struct MemorySink {
    name: String,
    buffer: Arc<Mutex<Vec<u8>>>,
    write_count: Arc<AtomicU64>,
}

impl MemorySink {
    /// Create a new memory sink
    pub fn new() -> Self {
        Self::with_name("memory")
    }

    /// Create a new memory sink with a custom name
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            buffer: Arc::new(Mutex::new(Vec::new())),
            write_count: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Get a copy of everything written so far
    pub fn contents(&self) -> Vec<u8> {
        self.buffer.lock().clone()
    }

    /// Get the captured bytes as UTF-8 lines
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.contents())
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Parse the captured bytes back into records
    pub fn records(&self) -> scribe_protocol::Result<Vec<ParsedRecord>> {
        parse_stream(&self.contents())
    }

    /// Number of `write` calls observed
    pub fn write_count(&self) -> u64 {
        self.write_count.load(Ordering::Relaxed)
    }

    /// Total bytes captured
    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    /// Check whether anything has been captured
    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }
}

impl Sink for MemorySink {
    fn name(&self) -> &str {
        &self.name
    }

    fn write(&self, bytes: &[u8]) -> Result<()> {
        self.write_count.fetch_add(1, Ordering::Relaxed);
        self.buffer.lock().extend_from_slice(bytes);
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;
