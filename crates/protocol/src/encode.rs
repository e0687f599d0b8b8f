//! Line rendering for the wire format
//!
//! Formatters call [`render`] to turn a record into the byte sequence a
//! sink receives:
//!
//! ```text
//! [HH:MM:SS][<thread_tag>][<LEVEL>][<logger_name>][<file>:<line>]\t<payload>\n
//! ```

use std::fmt::Write as FmtWrite;

use bytes::{Bytes, BytesMut};
use chrono::{Local, TimeZone};

use crate::record::Record;

/// Render a record into `buf` in the line wire format
///
/// The payload is emitted verbatim; no escaping is performed.
pub fn render(record: &Record, buf: &mut BytesMut) {
    let mut line = String::with_capacity(64 + record.payload().len());

    let _ = write!(
        &mut line,
        "[{}][{}][{}][{}][{}:{}]\t{}\n",
        format_time(record.timestamp()),
        record.thread_tag(),
        record.level().as_str(),
        record.logger_name(),
        record.file(),
        record.line(),
        record.payload()
    );

    buf.extend_from_slice(line.as_bytes());
}

/// Render a record into a freshly allocated, reference-counted buffer
///
/// Cloning the returned `Bytes` is O(1), which lets the backup path share
/// the rendering with the reorder map.
pub fn render_bytes(record: &Record) -> Bytes {
    let mut buf = BytesMut::with_capacity(64 + record.payload().len());
    render(record, &mut buf);
    buf.freeze()
}

/// Format an epoch timestamp as local `HH:MM:SS`
fn format_time(epoch_secs: i64) -> String {
    Local
        .timestamp_opt(epoch_secs, 0)
        .single()
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| format!("{}", epoch_secs))
}
