//! Tests for BackupPool

use std::sync::Arc;
use std::time::{Duration, Instant};

use bytes::Bytes;
use scribe_sinks::MemorySink;

use crate::backup::BackupPool;
use crate::config::BackupConfig;
use crate::metrics::PipelineMetrics;

fn wait_for(mut check: impl FnMut() -> bool, timeout: Duration) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if check() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(1));
    }
    false
}

#[test]
fn test_submissions_reach_the_sink() {
    let sink = MemorySink::new();
    let metrics = Arc::new(PipelineMetrics::new());
    let pool =
        BackupPool::start(&BackupConfig::default(), Arc::new(sink.clone()), metrics).unwrap();

    pool.submit(Bytes::from_static(b"error line\n")).unwrap();
    assert!(wait_for(|| sink.write_count() == 1, Duration::from_secs(2)));

    pool.shutdown();
    assert_eq!(sink.contents(), b"error line\n");
}

#[test]
fn test_shutdown_drains_accepted_submissions() {
    let sink = MemorySink::new();
    let metrics = Arc::new(PipelineMetrics::new());
    let pool = BackupPool::start(
        &BackupConfig::default().with_workers(1),
        Arc::new(sink.clone()),
        metrics,
    )
    .unwrap();

    for i in 0..100 {
        pool.submit(Bytes::from(format!("line {}\n", i))).unwrap();
    }
    pool.shutdown();

    // Everything accepted before shutdown was forwarded
    assert_eq!(sink.write_count(), 100);
}

#[test]
fn test_submit_after_shutdown_is_rejected() {
    let sink = MemorySink::new();
    let metrics = Arc::new(PipelineMetrics::new());
    let pool =
        BackupPool::start(&BackupConfig::default(), Arc::new(sink.clone()), metrics).unwrap();

    pool.shutdown();
    assert!(pool.submit(Bytes::from_static(b"too late\n")).is_err());
    assert!(sink.is_empty());
}

#[test]
fn test_shutdown_is_idempotent() {
    let sink = MemorySink::new();
    let metrics = Arc::new(PipelineMetrics::new());
    let pool = BackupPool::start(&BackupConfig::default(), Arc::new(sink), metrics).unwrap();

    pool.shutdown();
    pool.shutdown();
}
