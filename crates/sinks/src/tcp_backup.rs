//! TCP backup sink - best-effort remote forwarding
//!
//! Forwards batches to a remote backup server over TCP. Each write opens a
//! fresh connection, sends the bytes, and closes; the remote end treats a
//! closed connection as end-of-message. Connection failures are retried a
//! bounded number of times, after which the write fails (the pipeline's
//! backup path treats that as best-effort and drops the batch).

use std::io::Write;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::{Result, Sink, SinkError};

/// Configuration for the TCP backup sink
#[derive(Debug, Clone)]
pub struct TcpBackupConfig {
    /// Backup server address (host:port)
    pub addr: String,

    /// Connection timeout per attempt
    pub connect_timeout: Duration,

    /// Write timeout per message
    pub write_timeout: Duration,

    /// Number of connection attempts before giving up
    pub retry_attempts: usize,

    /// Wait time between attempts
    pub retry_interval: Duration,
}

impl TcpBackupConfig {
    /// Create a new config for the given backup server address
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            connect_timeout: Duration::from_secs(10),
            write_timeout: Duration::from_secs(5),
            retry_attempts: 5,
            retry_interval: Duration::from_millis(500),
        }
    }

    /// Set the connection timeout
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the write timeout
    #[must_use]
    pub fn with_write_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout = timeout;
        self
    }

    /// Set the number of connection attempts
    #[must_use]
    pub fn with_retry_attempts(mut self, attempts: usize) -> Self {
        self.retry_attempts = attempts;
        self
    }

    /// Set the wait time between attempts
    #[must_use]
    pub fn with_retry_interval(mut self, interval: Duration) -> Self {
        self.retry_interval = interval;
        self
    }
}

/// Sink that forwards batches to a remote backup server
pub struct TcpBackupSink {
    config: TcpBackupConfig,
    name: String,
}

impl TcpBackupSink {
    /// Create a new TCP backup sink
    pub fn new(config: TcpBackupConfig) -> Self {
        Self::with_name(config, "tcp_backup")
    }

    /// Create a new TCP backup sink with a custom name
    pub fn with_name(config: TcpBackupConfig, name: impl Into<String>) -> Self {
        Self {
            config,
            name: name.into(),
        }
    }

    /// Resolve the configured address
    fn resolve(&self) -> Result<SocketAddr> {
        self.config
            .addr
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| SinkError::connection(format!("cannot resolve {}", self.config.addr)))
    }

    /// Connect with the bounded retry loop
    fn connect(&self) -> Result<TcpStream> {
        let addr = self.resolve()?;
        let attempts = self.config.retry_attempts.max(1);

        let mut last_err = None;
        for attempt in 0..attempts {
            match TcpStream::connect_timeout(&addr, self.config.connect_timeout) {
                Ok(stream) => return Ok(stream),
                Err(e) => {
                    last_err = Some(e);
                    if attempt + 1 < attempts {
                        std::thread::sleep(self.config.retry_interval);
                    }
                }
            }
        }

        Err(SinkError::connection(format!(
            "{} unreachable after {} attempts: {}",
            self.config.addr,
            attempts,
            last_err.expect("at least one attempt was made")
        )))
    }
}

impl Sink for TcpBackupSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn write(&self, bytes: &[u8]) -> Result<()> {
        let mut stream = self.connect()?;
        stream.set_write_timeout(Some(self.config.write_timeout))?;
        stream.write_all(bytes)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tcp_backup_test.rs"]
mod tcp_backup_test;
