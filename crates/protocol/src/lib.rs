//! Scribe Protocol - Core record types for the scribe logging pipeline
//!
//! This crate provides the foundational types that flow through the pipeline:
//! - `Record` - One log entry with metadata and already-expanded payload
//! - `Level` - Severity levels with a total order (`Debug < ... < Fatal`)
//! - `render` / `render_bytes` - The line wire format emitted to sinks
//! - `parse_line` / `parse_stream` - Decoders for rendered output
//!
//! # Design Principles
//!
//! - **Finished text only**: records carry an already-expanded payload;
//!   message formatting belongs to the producing façade
//! - **Cheap hand-off**: renderings are reference-counted `bytes::Bytes`
//!   so the backup path can share them without copying
//! - **Round-trippable**: every rendered line parses back into its fields
//!
//! # Wire Format
//!
//! ```text
//! [HH:MM:SS][<thread_tag>][<LEVEL>][<logger_name>][<file>:<line>]\t<payload>\n
//! ```
//!
//! Time is local wall-clock; the payload is emitted verbatim (producers are
//! responsible for sanitising embedded newlines if they care).

mod decode;
mod encode;
mod error;
mod level;
mod record;

pub use decode::{ParsedRecord, parse_line, parse_stream};
pub use encode::{render, render_bytes};
pub use error::ProtocolError;
pub use level::Level;
pub use record::Record;

// Re-export bytes for convenience
pub use bytes::{Bytes, BytesMut};

/// Result type for protocol operations
pub type Result<T> = std::result::Result<T, ProtocolError>;

// Test modules - only compiled during testing
#[cfg(test)]
mod decode_test;
