//! Tests for LoggerRegistry
//!
//! These tests use their own registry instances; the process-wide
//! registry is shared across the test binary and only exercised once.

use std::sync::Arc;

use scribe_sinks::MemorySink;

use crate::builder::LoggerBuilder;
use crate::registry::LoggerRegistry;

fn build_logger(name: &str) -> Arc<crate::logger::Logger> {
    LoggerBuilder::new(name)
        .with_sink(Arc::new(MemorySink::new()))
        .build()
        .unwrap()
}

#[test]
fn test_register_and_get() {
    let registry = LoggerRegistry::new();
    assert!(registry.is_empty());

    let logger = build_logger("svc");
    assert!(registry.register(Arc::clone(&logger)));

    let fetched = registry.get("svc").unwrap();
    assert_eq!(fetched.name(), "svc");
    assert_eq!(registry.len(), 1);

    logger.shutdown();
}

#[test]
fn test_unknown_name_is_none() {
    let registry = LoggerRegistry::new();
    assert!(registry.get("nope").is_none());
}

#[test]
fn test_duplicate_registration_keeps_first() {
    let registry = LoggerRegistry::new();
    let first = build_logger("svc");
    let second = build_logger("svc");

    assert!(registry.register(Arc::clone(&first)));
    assert!(!registry.register(Arc::clone(&second)));
    assert_eq!(registry.len(), 1);

    // The original registration survives
    assert!(Arc::ptr_eq(&registry.get("svc").unwrap(), &first));

    first.shutdown();
    second.shutdown();
}

#[test]
fn test_remove() {
    let registry = LoggerRegistry::new();
    let logger = build_logger("svc");
    registry.register(Arc::clone(&logger));

    let removed = registry.remove("svc").unwrap();
    assert_eq!(removed.name(), "svc");
    assert!(registry.get("svc").is_none());

    logger.shutdown();
}

#[test]
fn test_global_registry_round_trip() {
    let logger = build_logger("global-svc");
    assert!(crate::registry::register(Arc::clone(&logger)));

    let fetched = crate::registry::get_logger("global-svc").unwrap();
    assert_eq!(fetched.name(), "global-svc");

    crate::registry::global().remove("global-svc");
    logger.shutdown();
}
