//! Error types for the logging facility.

use thiserror::Error;

/// Logging error type
#[derive(Debug, Error)]
pub enum Error {
    /// Factory configuration without a `type` key
    #[error("logging configuration requires a type of logger")]
    MissingType,

    /// `type` names a backend nobody registered
    #[error("couldn't produce logger for type: {0}")]
    UnknownBackend(String),

    /// File backend configuration without a `file_name` key
    #[error("no output file provided to file logger")]
    MissingFileName,

    /// `reopen_interval` that does not parse as whole seconds
    #[error("{0} is not a valid reopen interval")]
    InvalidReopenInterval(String),

    /// Unrecognized level name
    #[error("unknown log level: {0}")]
    UnknownLevel(String),

    /// Open, write, or flush failure on a backend
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file parse failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for logging operations
pub type Result<T> = std::result::Result<T, Error>;
