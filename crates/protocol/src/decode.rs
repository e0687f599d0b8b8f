//! Line decoding
//!
//! Parses rendered output back into its fields. Used by tests to check the
//! round-trip property and by tooling that inspects sink output.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::ProtocolError;
use crate::level::Level;

/// Field-level view of one rendered line
///
/// `time` is the local wall-clock `HH:MM:SS` string as emitted; the
/// original epoch timestamp is not recoverable from a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecord {
    pub time: String,
    pub thread_tag: String,
    pub level: Level,
    pub logger_name: String,
    pub file: String,
    pub line: u32,
    pub payload: String,
}

fn line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^\[(\d\d:\d\d:\d\d)\]\[([^\]]+)\]\[(DEBUG|INFO|WARN|ERROR|FATAL)\]\[([^\]]+)\]\[([^:]+):(\d+)\]\t(.*)$",
        )
        .expect("line regex is valid")
    })
}

/// Parse one rendered line (without its trailing newline)
pub fn parse_line(line: &str) -> crate::Result<ParsedRecord> {
    let caps = line_regex()
        .captures(line)
        .ok_or_else(|| ProtocolError::InvalidLine(line.to_string()))?;

    let line_no: u32 = caps[6]
        .parse()
        .map_err(|_| ProtocolError::InvalidLine(line.to_string()))?;

    Ok(ParsedRecord {
        time: caps[1].to_string(),
        thread_tag: caps[2].to_string(),
        level: Level::from_str(&caps[3])?,
        logger_name: caps[4].to_string(),
        file: caps[5].to_string(),
        line: line_no,
        payload: caps[7].to_string(),
    })
}

/// Parse a byte stream of newline-terminated rendered records
///
/// The stream must be valid UTF-8 and every line must parse; this is the
/// strict decoder the ordering and no-loss tests rely on.
pub fn parse_stream(bytes: &[u8]) -> crate::Result<Vec<ParsedRecord>> {
    let text = std::str::from_utf8(bytes)?;
    text.lines().map(parse_line).collect()
}
