//! Rolling file sink - size-rolled log files
//!
//! Writes batches to a file under a base directory and starts a new file
//! whenever the current one would exceed the configured size cap. Rolled
//! files are never touched again; names carry the local roll time plus a
//! counter so same-second rolls stay distinct.
//!
//! # File naming
//!
//! ```text
//! logs/
//! ├── app-20250115-103045-0.log
//! ├── app-20250115-103052-1.log
//! └── app-20250115-103052-2.log
//! ```

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use chrono::Local;
use parking_lot::Mutex;

use crate::{Result, Sink, SinkError};

/// Configuration for the rolling file sink
#[derive(Debug, Clone)]
pub struct RollingFileConfig {
    /// Directory the log files are created in
    pub base_path: PathBuf,

    /// File name prefix (e.g. "app" -> "app-20250115-103045-0.log")
    pub file_prefix: String,

    /// Maximum size of one file in bytes before rolling
    pub max_file_size: u64,
}

impl Default for RollingFileConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("logs"),
            file_prefix: "scribe".into(),
            max_file_size: 64 * 1024 * 1024, // 64MB
        }
    }
}

impl RollingFileConfig {
    /// Create config with a custom base directory
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_path = path.into();
        self
    }

    /// Create config with a custom file prefix
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    /// Create config with a custom size cap
    #[must_use]
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }
}

/// State of the currently open file
struct RollState {
    writer: BufWriter<File>,
    written: u64,
    roll_index: u64,
}

/// Sink that writes size-rolled files
pub struct RollingFileSink {
    config: RollingFileConfig,
    name: String,
    state: Mutex<RollState>,
}

impl RollingFileSink {
    /// Create a new rolling file sink
    ///
    /// Creates the base directory and opens the first file eagerly so that
    /// an unwritable target fails construction instead of the first write.
    pub fn new(config: RollingFileConfig) -> Result<Self> {
        Self::with_name(config, "rolling_file")
    }

    /// Create a new rolling file sink with a custom name
    pub fn with_name(config: RollingFileConfig, name: impl Into<String>) -> Result<Self> {
        if config.max_file_size == 0 {
            return Err(SinkError::init("max_file_size must be non-zero"));
        }
        fs::create_dir_all(&config.base_path)?;

        let writer = open_file(&config, 0)?;
        Ok(Self {
            config,
            name: name.into(),
            state: Mutex::new(RollState {
                writer,
                written: 0,
                roll_index: 0,
            }),
        })
    }

    /// Path of the directory files are written to
    pub fn base_path(&self) -> &PathBuf {
        &self.config.base_path
    }

    /// Number of times the sink has rolled to a new file
    pub fn roll_count(&self) -> u64 {
        self.state.lock().roll_index
    }
}

impl Sink for RollingFileSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn write(&self, bytes: &[u8]) -> Result<()> {
        let mut state = self.state.lock();

        // Roll before the write that would exceed the cap. Batches larger
        // than the cap still land in a single file of their own.
        if state.written > 0 && state.written + bytes.len() as u64 > self.config.max_file_size {
            state.writer.flush()?;
            let next_index = state.roll_index + 1;
            state.writer = open_file(&self.config, next_index)?;
            state.written = 0;
            state.roll_index = next_index;
        }

        state.writer.write_all(bytes)?;
        state.written += bytes.len() as u64;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.state.lock().writer.flush()?;
        Ok(())
    }
}

/// Open the next log file for the given roll index
fn open_file(config: &RollingFileConfig, index: u64) -> Result<BufWriter<File>> {
    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    let path = config
        .base_path
        .join(format!("{}-{}-{}.log", config.file_prefix, stamp, index));
    let file = File::create(&path)?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
#[path = "rolling_file_test.rs"]
mod rolling_file_test;
