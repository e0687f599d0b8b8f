//! Tests for line decoding
//!
//! The round-trip property: parsing a rendered record recovers every field.

use crate::decode::{parse_line, parse_stream};
use crate::encode::render_bytes;
use crate::error::ProtocolError;
use crate::level::Level;
use crate::record::Record;

#[test]
fn test_round_trip_recovers_every_field() {
    let record = Record::new(Level::Warn, "storage", "manager.rs", 311, "disk usage at 91%");
    let bytes = render_bytes(&record);
    let line = std::str::from_utf8(&bytes).unwrap().trim_end_matches('\n');

    let parsed = parse_line(line).unwrap();
    assert_eq!(parsed.thread_tag, record.thread_tag());
    assert_eq!(parsed.level, Level::Warn);
    assert_eq!(parsed.logger_name, "storage");
    assert_eq!(parsed.file, "manager.rs");
    assert_eq!(parsed.line, 311);
    assert_eq!(parsed.payload, "disk usage at 91%");
    assert_eq!(parsed.time.len(), 8);
}

#[test]
fn test_parse_line_literal() {
    let parsed = parse_line("[09:15:02][main][INFO][core][boot.rs:7]\tready").unwrap();
    assert_eq!(parsed.time, "09:15:02");
    assert_eq!(parsed.thread_tag, "main");
    assert_eq!(parsed.level, Level::Info);
    assert_eq!(parsed.logger_name, "core");
    assert_eq!(parsed.file, "boot.rs");
    assert_eq!(parsed.line, 7);
    assert_eq!(parsed.payload, "ready");
}

#[test]
fn test_parse_line_empty_payload() {
    let parsed = parse_line("[23:59:59][main][DEBUG][core][x.rs:1]\t").unwrap();
    assert_eq!(parsed.payload, "");
}

#[test]
fn test_parse_line_rejects_malformed() {
    // Missing tab separator
    assert!(matches!(
        parse_line("[09:15:02][main][INFO][core][boot.rs:7] ready"),
        Err(ProtocolError::InvalidLine(_))
    ));
    // Unknown level
    assert!(parse_line("[09:15:02][main][TRACE][core][boot.rs:7]\tready").is_err());
    // No header at all
    assert!(parse_line("plain text").is_err());
}

#[test]
fn test_parse_stream_multiple_records() {
    let mut buf = Vec::new();
    for i in 0..5 {
        let record = Record::new(Level::Info, "core", "loop.rs", i, format!("record {}", i));
        buf.extend_from_slice(&render_bytes(&record));
    }

    let parsed = parse_stream(&buf).unwrap();
    assert_eq!(parsed.len(), 5);
    for (i, rec) in parsed.iter().enumerate() {
        assert_eq!(rec.payload, format!("record {}", i));
    }
}

#[test]
fn test_parse_stream_rejects_invalid_utf8() {
    assert!(matches!(
        parse_stream(&[0xff, 0xfe, b'\n']),
        Err(ProtocolError::Utf8(_))
    ));
}
