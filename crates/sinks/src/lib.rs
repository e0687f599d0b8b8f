//! Scribe Sinks - Byte consumers for the scribe logging pipeline
//!
//! A sink synchronously persists batches of rendered record bytes. Sinks
//! are opaque to the pipeline: the ordered writer hands every sink the same
//! contiguous, in-order byte batch and ignores everything except failure,
//! which it counts and suppresses (surfacing sink errors through the
//! logging system itself would recurse).
//!
//! # Provided sinks
//!
//! - [`StdoutSink`] - standard output, for development and debugging
//! - [`RollingFileSink`] - size-rolled files under a base directory
//! - [`MemorySink`] - in-memory capture for tests and tooling
//! - [`TcpBackupSink`] - best-effort per-send TCP forwarding
//!
//! # Threading
//!
//! The pipeline calls [`Sink::write`] from a single writer thread, but the
//! trait is `Send + Sync` so a pipeline can be moved across threads.

mod error;
mod memory;
mod rolling_file;
mod stdout;
mod tcp_backup;

pub use error::SinkError;
pub use memory::MemorySink;
pub use rolling_file::{RollingFileConfig, RollingFileSink};
pub use stdout::StdoutSink;
pub use tcp_backup::{TcpBackupConfig, TcpBackupSink};

/// Result type for sink operations
pub type Result<T> = std::result::Result<T, SinkError>;

/// Synchronous byte consumer
///
/// `write` persists one batch of rendered bytes; implementations decide
/// what persistence means (a file, a terminal, a socket, a buffer).
pub trait Sink: Send + Sync {
    /// Human-readable name for diagnostics
    fn name(&self) -> &str;

    /// Synchronously persist one batch of bytes
    fn write(&self, bytes: &[u8]) -> Result<()>;

    /// Flush any buffered state
    ///
    /// Called by the pipeline after the final batch at shutdown.
    fn flush(&self) -> Result<()> {
        Ok(())
    }
}
