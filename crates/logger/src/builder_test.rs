//! Tests for LoggerBuilder

use std::sync::Arc;

use scribe_pipeline::PipelineConfig;
use scribe_protocol::Level;
use scribe_sinks::MemorySink;

use crate::builder::LoggerBuilder;

#[test]
fn test_build_with_explicit_sink() {
    let sink = MemorySink::new();
    let logger = LoggerBuilder::new("svc")
        .with_sink(Arc::new(sink.clone()))
        .build()
        .unwrap();

    assert_eq!(logger.name(), "svc");
    logger.info("b.rs", 1, "hello");
    logger.shutdown();

    assert_eq!(sink.records().unwrap().len(), 1);
}

#[test]
fn test_empty_name_falls_back() {
    let logger = LoggerBuilder::new("")
        .with_sink(Arc::new(MemorySink::new()))
        .build()
        .unwrap();
    assert_eq!(logger.name(), "scribe");
    logger.shutdown();
}

#[test]
fn test_build_with_config_and_multiple_sinks() {
    let first = MemorySink::with_name("first");
    let second = MemorySink::with_name("second");
    let logger = LoggerBuilder::new("svc")
        .with_config(PipelineConfig::default().with_formatter_threads(2))
        .with_sink(Arc::new(first.clone()))
        .with_sink(Arc::new(second.clone()))
        .build()
        .unwrap();

    logger.info("b.rs", 1, "fan out");
    logger.shutdown();

    assert_eq!(first.contents(), second.contents());
    assert_eq!(first.records().unwrap().len(), 1);
}

#[test]
fn test_build_with_backup_sink() {
    let main = MemorySink::with_name("main");
    let backup = MemorySink::with_name("backup");
    let logger = LoggerBuilder::new("svc")
        .with_sink(Arc::new(main.clone()))
        .with_backup_sink(Arc::new(backup.clone()))
        .build()
        .unwrap();

    logger.error("b.rs", 1, "boom");

    // Wait for the fire-and-forget forwarding before shutting down
    let deadline = std::time::Instant::now() + std::time::Duration::from_secs(2);
    while backup.write_count() < 1 && std::time::Instant::now() < deadline {
        std::thread::sleep(std::time::Duration::from_millis(1));
    }
    logger.shutdown();

    assert_eq!(main.records().unwrap().len(), 1);
    let forwarded = backup.records().unwrap();
    assert_eq!(forwarded.len(), 1);
    assert_eq!(forwarded[0].level, Level::Error);
    assert_eq!(forwarded[0].payload, "boom");
}
