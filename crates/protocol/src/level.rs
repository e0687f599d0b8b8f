//! Severity levels
//!
//! Levels carry a total order so the pipeline can compare them directly
//! (`level >= Level::Error` selects records for backup forwarding).

use std::str::FromStr;

use crate::error::ProtocolError;

/// Log severity level
///
/// The derived `Ord` follows declaration order: `Debug < Info < Warn <
/// Error < Fatal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    /// Detailed diagnostics, normally filtered out in production
    Debug = 0,
    /// Routine operational messages
    Info = 1,
    /// Suspicious conditions that do not interrupt service
    Warn = 2,
    /// Failures that lose a request or an operation
    Error = 3,
    /// Failures the process cannot recover from
    Fatal = 4,
}

impl Level {
    /// Get the upper-case name emitted in the wire format
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// Parse a level from raw byte value
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Debug),
            1 => Some(Self::Info),
            2 => Some(Self::Warn),
            3 => Some(Self::Error),
            4 => Some(Self::Fatal),
            _ => None,
        }
    }

    /// Convert to raw byte value
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Level {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARN" => Ok(Self::Warn),
            "ERROR" => Ok(Self::Error),
            "FATAL" => Ok(Self::Fatal),
            other => Err(ProtocolError::InvalidLevel(other.to_string())),
        }
    }
}
