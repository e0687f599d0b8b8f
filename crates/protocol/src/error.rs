//! Protocol error types

use thiserror::Error;

/// Errors from encoding or decoding records
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// A line did not match the wire format
    #[error("malformed record line: {0:?}")]
    InvalidLine(String),

    /// An unknown level name was encountered
    #[error("unknown level: {0:?}")]
    InvalidLevel(String),

    /// Sink output was not valid UTF-8
    #[error("invalid UTF-8 in record stream")]
    Utf8(#[from] std::str::Utf8Error),
}
