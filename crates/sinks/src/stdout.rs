//! Stdout sink - terminal output
//!
//! Writes batches straight to standard output. Intended for development
//! and debugging; not for production throughput.

use std::io::Write;

use crate::{Result, Sink};

/// Sink that writes batches to standard output
#[derive(Debug)]
pub struct StdoutSink {
    name: String,
}

impl StdoutSink {
    /// Create a new stdout sink
    pub fn new() -> Self {
        Self::with_name("stdout")
    }

    /// Create a new stdout sink with a custom name
    pub fn with_name(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Sink for StdoutSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn write(&self, bytes: &[u8]) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(bytes)?;
        handle.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "stdout_test.rs"]
mod stdout_test;
