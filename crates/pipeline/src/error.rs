//! Pipeline error types
//!
//! Errors only surface at construction. A running pipeline never
//! propagates errors through `push`; everything downstream is recovered
//! locally or counted in metrics.

use thiserror::Error;

/// Pipeline errors
#[derive(Debug, Error)]
pub enum PipelineError {
    /// At least one sink is required
    #[error("pipeline requires at least one sink")]
    NoSinks,

    /// An OS thread could not be spawned
    ///
    /// Construction joins every already-started worker before returning
    /// this, so a failed start leaves nothing running.
    #[error("failed to spawn {role} thread")]
    Spawn {
        role: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;
