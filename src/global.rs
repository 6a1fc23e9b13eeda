//! Process-wide singleton and the free logging functions.

use once_cell::sync::OnceCell;

use crate::config::LogConfig;
use crate::error::Result;
use crate::factory;
use crate::level::Level;
use crate::logger::Logger;

/// The one logger for the process lifetime. Set on first use, never
/// replaced.
static LOGGER: OnceCell<Box<dyn Logger>> = OnceCell::new();

/// Returns the process-wide logger, constructing it from `config` on the
/// first call. Every later call returns the existing instance and ignores
/// the argument entirely. Construction is exactly-once under concurrent
/// first use; a construction failure leaves the cell empty, so a later call
/// may retry with a corrected configuration.
pub fn get_logger(config: &LogConfig) -> Result<&'static dyn Logger> {
    let logger = LOGGER.get_or_try_init(|| factory::produce(config))?;
    Ok(logger.as_ref())
}

/// Builds the singleton from `config` now, so configuration errors surface
/// at startup rather than on the first log call. Does nothing once logging
/// has started; the existing singleton is never replaced or reconfigured.
pub fn configure(config: &LogConfig) -> Result<()> {
    get_logger(config).map(|_| ())
}

fn default_logger() -> Result<&'static dyn Logger> {
    if let Some(logger) = LOGGER.get() {
        return Ok(logger.as_ref());
    }
    get_logger(&LogConfig::std_out())
}

/// Logs `message` at `level` through the singleton, constructing it with
/// the default configuration (colored standard output) if nothing was
/// configured.
pub fn log(message: &str, level: Level) -> Result<()> {
    default_logger()?.log(message, level)
}

/// Writes a raw, preformatted line through the singleton, bypassing level
/// filtering. Useful for custom labels; the caller owns the formatting,
/// including any trailing newline.
pub fn write(line: &str) -> Result<()> {
    default_logger()?.write(line)
}

/// Logs `message` at TRACE.
pub fn trace(message: &str) -> Result<()> {
    log(message, Level::Trace)
}

/// Logs `message` at DEBUG.
pub fn debug(message: &str) -> Result<()> {
    log(message, Level::Debug)
}

/// Logs `message` at INFO.
pub fn info(message: &str) -> Result<()> {
    log(message, Level::Info)
}

/// Logs `message` at WARN.
pub fn warn(message: &str) -> Result<()> {
    log(message, Level::Warn)
}

/// Logs `message` at ERROR.
pub fn error(message: &str) -> Result<()> {
    log(message, Level::Error)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The singleton is process state, so everything about it lives in this
    // one test; the other modules test their backends on owned instances.
    #[test]
    fn test_singleton_first_configuration_wins() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("test.log");
        let config = LogConfig::file(target.to_str().unwrap()).with("reopen_interval", "1");

        configure(&config).unwrap();
        error("boom").unwrap();

        // A second configuration must not replace the file backend.
        configure(&LogConfig::std_out()).unwrap();
        let first = get_logger(&LogConfig::std_out()).unwrap() as *const dyn Logger as *const ();
        let second = get_logger(&LogConfig::new()).unwrap() as *const dyn Logger as *const ();
        assert_eq!(first, second);

        error("still the file logger").unwrap();
        write("custom line\n").unwrap();
        if !Level::Trace.enabled() {
            trace("below the cutoff").unwrap();
        }

        let on_disk = dir.path().join(format!("{}-test.log", std::process::id()));
        let contents = std::fs::read_to_string(on_disk).unwrap();
        assert!(contents.contains(" [ERROR] boom\n"), "got {contents:?}");
        assert!(contents.contains(" [ERROR] still the file logger\n"));
        assert!(contents.contains("custom line\n"));
        assert!(!contents.contains("below the cutoff"));
    }
}
