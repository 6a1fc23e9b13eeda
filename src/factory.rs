//! Backend registry and construction.
//!
//! A factory maps backend names to constructor functions, so bootstrap code
//! can pick a backend by configuration alone and embedders can plug in their
//! own destinations without touching this crate.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::config::LogConfig;
use crate::error::{Error, Result};
use crate::file::FileLogger;
use crate::logger::{Logger, NullLogger};
use crate::stdout::StdOutLogger;

/// Constructor signature for a backend.
pub type LoggerCreator = fn(&LogConfig) -> Result<Box<dyn Logger>>;

/// Registry mapping backend names to constructors.
///
/// Three names are pre-registered: `""` (discard), `"std_out"`, `"file"`.
pub struct LoggerFactory {
    creators: HashMap<String, LoggerCreator>,
}

impl LoggerFactory {
    /// Creates a factory holding the built-in backends.
    pub fn new() -> Self {
        let mut factory = Self {
            creators: HashMap::new(),
        };
        factory.register("", |_config| Ok(Box::new(NullLogger)));
        factory.register("std_out", |config| Ok(Box::new(StdOutLogger::new(config))));
        factory.register("file", |config| Ok(Box::new(FileLogger::new(config)?)));
        factory
    }

    /// Registers `creator` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: &str, creator: LoggerCreator) {
        self.creators.insert(name.to_string(), creator);
    }

    /// Builds the backend selected by the configuration's `type` key.
    pub fn produce(&self, config: &LogConfig) -> Result<Box<dyn Logger>> {
        let kind = config.get("type").ok_or(Error::MissingType)?;
        let creator = self
            .creators
            .get(kind)
            .ok_or_else(|| Error::UnknownBackend(kind.to_string()))?;
        creator(config)
    }
}

impl Default for LoggerFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide registry consulted by the singleton accessor.
/// Registrations are honored until the singleton is first materialized;
/// after that the registry is effectively read-only.
static FACTORY: Lazy<RwLock<LoggerFactory>> = Lazy::new(|| RwLock::new(LoggerFactory::new()));

/// Registers an additional backend with the process-wide registry. Call
/// before the first [`get_logger`](crate::get_logger) or
/// [`configure`](crate::configure).
pub fn register_backend(name: &str, creator: LoggerCreator) {
    FACTORY.write().register(name, creator);
}

pub(crate) fn produce(config: &LogConfig) -> Result<Box<dyn Logger>> {
    FACTORY.read().produce(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    #[test]
    fn test_produce_std_out() {
        let factory = LoggerFactory::new();
        let logger = factory.produce(&LogConfig::std_out()).unwrap();
        assert!(logger.log("routed", Level::Error).is_ok());
    }

    #[test]
    fn test_produce_null() {
        let factory = LoggerFactory::new();
        let logger = factory.produce(&LogConfig::from([("type", "")])).unwrap();
        assert!(logger.log("discarded", Level::Error).is_ok());
    }

    #[test]
    fn test_produce_requires_type() {
        let factory = LoggerFactory::new();
        let err = factory.produce(&LogConfig::new()).unwrap_err();
        assert!(matches!(err, Error::MissingType));
    }

    #[test]
    fn test_produce_unknown_backend() {
        let factory = LoggerFactory::new();
        let err = factory
            .produce(&LogConfig::new().with("type", "nonexistent"))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownBackend(ref name) if name == "nonexistent"));
    }

    #[test]
    fn test_produce_file_without_name() {
        let factory = LoggerFactory::new();
        let err = factory
            .produce(&LogConfig::new().with("type", "file"))
            .unwrap_err();
        assert!(matches!(err, Error::MissingFileName));
    }

    #[test]
    fn test_register_custom_backend() {
        let mut factory = LoggerFactory::new();
        factory.register("discard", |_config| Ok(Box::new(NullLogger)));
        let logger = factory
            .produce(&LogConfig::new().with("type", "discard"))
            .unwrap();
        assert!(logger.log("routed", Level::Error).is_ok());
    }
}
