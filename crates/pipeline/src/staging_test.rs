//! Tests for StagingBuffer and BatchTask

use scribe_protocol::{Level, Record};

use crate::staging::{BatchTask, StagingBuffer};

fn record(payload: &str) -> Record {
    Record::new(Level::Info, "core", "staging.rs", 1, payload)
}

#[test]
fn test_staging_buffer_starts_empty() {
    let buffer = StagingBuffer::with_capacity(16);
    assert!(buffer.is_empty());
    assert_eq!(buffer.len(), 0);
}

#[test]
fn test_staging_buffer_push_preserves_order() {
    let mut buffer = StagingBuffer::with_capacity(16);
    for i in 0..5 {
        buffer.push(record(&format!("r{}", i)));
    }
    assert_eq!(buffer.len(), 5);

    let records = buffer.into_records();
    for (i, rec) in records.iter().enumerate() {
        assert_eq!(rec.payload(), format!("r{}", i));
    }
}

#[test]
fn test_staging_buffer_grows_past_capacity() {
    // Capacity is advisory only
    let mut buffer = StagingBuffer::with_capacity(2);
    for i in 0..10 {
        buffer.push(record(&format!("r{}", i)));
    }
    assert_eq!(buffer.len(), 10);
}

#[test]
fn test_seal_swaps_in_fresh_buffer() {
    let mut buffer = StagingBuffer::with_capacity(16);
    buffer.push(record("one"));
    buffer.push(record("two"));

    let sealed = buffer.seal(16);

    assert!(buffer.is_empty());
    assert_eq!(sealed.len(), 2);

    // The active buffer keeps working after the swap
    buffer.push(record("three"));
    assert_eq!(buffer.len(), 1);
}

#[test]
fn test_batch_task_owns_sealed_records() {
    let mut buffer = StagingBuffer::with_capacity(16);
    buffer.push(record("a"));
    let task = BatchTask::new(buffer.seal(16));

    assert_eq!(task.len(), 1);
    assert!(!task.is_empty());

    let records = task.into_records();
    assert_eq!(records[0].payload(), "a");
}
