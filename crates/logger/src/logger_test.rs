//! Tests for Logger and the call-site macros

use std::sync::Arc;

use scribe_pipeline::{Pipeline, PipelineConfig};
use scribe_protocol::Level;
use scribe_sinks::MemorySink;

use crate::logger::Logger;

fn logger_over(sink: &MemorySink) -> Logger {
    let pipeline =
        Pipeline::start(PipelineConfig::default(), vec![Arc::new(sink.clone())]).unwrap();
    Logger::new("app", Arc::new(pipeline))
}

#[test]
fn test_level_methods_stamp_level_and_name() {
    let sink = MemorySink::new();
    let logger = logger_over(&sink);

    logger.debug("a.rs", 1, "d");
    logger.info("a.rs", 2, "i");
    logger.warn("a.rs", 3, "w");
    logger.error("a.rs", 4, "e");
    logger.fatal("a.rs", 5, "f");
    logger.shutdown();

    let records = sink.records().unwrap();
    assert_eq!(records.len(), 5);
    let levels: Vec<Level> = records.iter().map(|r| r.level).collect();
    assert_eq!(
        levels,
        vec![
            Level::Debug,
            Level::Info,
            Level::Warn,
            Level::Error,
            Level::Fatal
        ]
    );
    assert!(records.iter().all(|r| r.logger_name == "app"));
    assert_eq!(records[3].line, 4);
}

#[test]
fn test_macros_capture_call_site() {
    let sink = MemorySink::new();
    let logger = logger_over(&sink);

    crate::scribe_info!(logger, "count = {}", 42);
    let expected_line = line!() - 1;
    crate::scribe_error!(logger, "failed: {}", "refused");
    logger.shutdown();

    let records = sink.records().unwrap();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].level, Level::Info);
    assert_eq!(records[0].payload, "count = 42");
    assert!(records[0].file.ends_with("logger_test.rs"));
    assert_eq!(records[0].line, expected_line);

    assert_eq!(records[1].level, Level::Error);
    assert_eq!(records[1].payload, "failed: refused");
}

#[test]
fn test_log_after_shutdown_is_silent() {
    let sink = MemorySink::new();
    let logger = logger_over(&sink);

    logger.info("a.rs", 1, "kept");
    logger.shutdown();
    logger.info("a.rs", 2, "dropped");

    assert_eq!(sink.records().unwrap().len(), 1);
    assert_eq!(logger.metrics().records_rejected, 1);
}

#[test]
fn test_logger_shared_across_threads() {
    let sink = MemorySink::new();
    let logger = Arc::new(logger_over(&sink));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let logger = Arc::clone(&logger);
            std::thread::spawn(move || {
                for i in 0..100 {
                    logger.info("a.rs", 1, format!("t{} m{}", t, i));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    logger.shutdown();

    assert_eq!(sink.records().unwrap().len(), 400);
}
