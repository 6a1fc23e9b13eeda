//! The logger capability and its discard implementation.

use crate::error::Result;
use crate::level::Level;

/// The capability set shared by every backend.
///
/// Both operations default to no-ops, so the bare trait doubles as a null
/// logger. A single instance must support concurrent callers: each backend
/// serializes its writes so that two concurrent calls never interleave their
/// characters within one line. Failures surface through the crate `Result`
/// rather than being swallowed.
pub trait Logger: Send + Sync + std::fmt::Debug {
    /// Appends a preformatted line to the backend, bypassing level
    /// filtering. The caller owns the formatting, including any trailing
    /// newline.
    fn write(&self, _line: &str) -> Result<()> {
        Ok(())
    }

    /// Filters on `level`, formats `message` with metadata, and hands the
    /// finished line to [`Logger::write`].
    fn log(&self, _message: &str, _level: Level) -> Result<()> {
        Ok(())
    }
}

/// A logger that discards everything.
#[derive(Debug)]
pub struct NullLogger;

impl Logger for NullLogger {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_logger_accepts_everything() {
        let logger = NullLogger;
        assert!(logger.log("dropped", Level::Error).is_ok());
        assert!(logger.write("dropped\n").is_ok());
    }
}
