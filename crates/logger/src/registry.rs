//! Logger registry
//!
//! A process-wide map from logger name to logger, so call sites can fetch
//! a configured logger without threading handles everywhere. Nothing is
//! created implicitly: a name that was never registered is `None`.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use crate::logger::Logger;

/// Map from logger name to registered logger
#[derive(Default)]
pub struct LoggerRegistry {
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a logger under its own name
    ///
    /// Returns `false` (and keeps the existing entry) if the name is
    /// already taken.
    pub fn register(&self, logger: Arc<Logger>) -> bool {
        let mut loggers = self.loggers.write();
        match loggers.entry(logger.name().to_string()) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(logger);
                true
            }
        }
    }

    /// Fetch a registered logger by name
    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        self.loggers.read().get(name).cloned()
    }

    /// Remove a logger, returning it if it was registered
    pub fn remove(&self, name: &str) -> Option<Arc<Logger>> {
        self.loggers.write().remove(name)
    }

    /// Number of registered loggers
    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    /// Check whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }
}

/// Get the process-wide registry
pub fn global() -> &'static LoggerRegistry {
    static REGISTRY: OnceLock<LoggerRegistry> = OnceLock::new();
    REGISTRY.get_or_init(LoggerRegistry::new)
}

/// Register a logger in the process-wide registry
pub fn register(logger: Arc<Logger>) -> bool {
    global().register(logger)
}

/// Fetch a logger from the process-wide registry
pub fn get_logger(name: &str) -> Option<Arc<Logger>> {
    global().get(name)
}
