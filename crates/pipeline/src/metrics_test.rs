//! Tests for PipelineMetrics

use crate::metrics::PipelineMetrics;

#[test]
fn test_metrics_start_at_zero() {
    let metrics = PipelineMetrics::new();
    let snapshot = metrics.snapshot();

    assert_eq!(snapshot.records_pushed, 0);
    assert_eq!(snapshot.records_rejected, 0);
    assert_eq!(snapshot.batches_dispatched, 0);
    assert_eq!(snapshot.records_formatted, 0);
    assert_eq!(snapshot.backup_submitted, 0);
    assert_eq!(snapshot.backup_rejected, 0);
    assert_eq!(snapshot.batches_written, 0);
    assert_eq!(snapshot.records_written, 0);
    assert_eq!(snapshot.bytes_written, 0);
    assert_eq!(snapshot.sink_errors, 0);
}

#[test]
fn test_record_counters() {
    let metrics = PipelineMetrics::new();

    metrics.record_pushed();
    metrics.record_pushed();
    metrics.record_rejected();
    metrics.record_batch_dispatched();
    metrics.record_formatted();
    metrics.record_backup_submitted();
    metrics.record_backup_rejected();
    metrics.record_sink_error();

    let snapshot = metrics.snapshot();
    assert_eq!(snapshot.records_pushed, 2);
    assert_eq!(snapshot.records_rejected, 1);
    assert_eq!(snapshot.batches_dispatched, 1);
    assert_eq!(snapshot.records_formatted, 1);
    assert_eq!(snapshot.backup_submitted, 1);
    assert_eq!(snapshot.backup_rejected, 1);
    assert_eq!(snapshot.sink_errors, 1);
}

#[test]
fn test_record_batch_written_accumulates() {
    let metrics = PipelineMetrics::new();

    metrics.record_batch_written(10, 800);
    metrics.record_batch_written(5, 400);

    let snapshot = metrics.snapshot();
    assert_eq!(snapshot.batches_written, 2);
    assert_eq!(snapshot.records_written, 15);
    assert_eq!(snapshot.bytes_written, 1200);
}
