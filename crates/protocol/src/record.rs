//! Record - The unit of work flowing through the pipeline
//!
//! A `Record` is created on the producing thread with an already-expanded
//! payload and all call-site metadata, then handed to the pipeline which
//! assigns its sequence number and owns it until a formatter renders it.

use crate::level::Level;

/// One log entry with metadata and payload
///
/// # Lifecycle
///
/// - Built by a producer via [`Record::new`] (no sequence number yet)
/// - [`Record::assign_seq`] is called exactly once, by the pipeline,
///   inside the same critical section that stages the record
/// - Owned by the staging buffer, then the task queue, then a formatter,
///   which consumes it into rendered bytes
#[derive(Debug, Clone)]
pub struct Record {
    /// Monotonic sequence id, dense per pipeline instance
    seq: u64,

    /// Severity level
    level: Level,

    /// Seconds since the Unix epoch, captured at construction
    timestamp: i64,

    /// Textual identifier of the producing thread
    thread_tag: String,

    /// Name of the logger that produced this record
    logger_name: String,

    /// Call-site file
    file: String,

    /// Call-site line
    line: u32,

    /// Already-expanded message text
    payload: String,
}

impl Record {
    /// Create a record on the current thread
    ///
    /// Captures the wall-clock timestamp and the producing thread's tag
    /// (its name, or its `ThreadId` rendering when unnamed). The sequence
    /// number is left unassigned until the pipeline accepts the record.
    pub fn new(
        level: Level,
        logger_name: impl Into<String>,
        file: impl Into<String>,
        line: u32,
        payload: impl Into<String>,
    ) -> Self {
        Self {
            seq: 0,
            level,
            timestamp: chrono::Utc::now().timestamp(),
            thread_tag: current_thread_tag(),
            logger_name: logger_name.into(),
            file: file.into(),
            line,
            payload: payload.into(),
        }
    }

    /// Assign the sequence number
    ///
    /// Called exactly once by the pipeline's producer gate, under the same
    /// mutex that appends the record to the staging buffer.
    #[inline]
    pub fn assign_seq(&mut self, seq: u64) {
        self.seq = seq;
    }

    /// Get the sequence number
    #[inline]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Get the severity level
    #[inline]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Get the timestamp (seconds since the Unix epoch)
    #[inline]
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Get the producing thread's tag
    #[inline]
    pub fn thread_tag(&self) -> &str {
        &self.thread_tag
    }

    /// Get the logger name
    #[inline]
    pub fn logger_name(&self) -> &str {
        &self.logger_name
    }

    /// Get the call-site file
    #[inline]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Get the call-site line
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Get the message text
    #[inline]
    pub fn payload(&self) -> &str {
        &self.payload
    }
}

/// Tag for the current thread: its name, or its id when unnamed
fn current_thread_tag() -> String {
    let thread = std::thread::current();
    match thread.name() {
        Some(name) => name.to_string(),
        None => format!("{:?}", thread.id()),
    }
}
