//! Minimal embeddable logging facility
//!
//! A process-wide singleton logger that formats leveled messages with
//! timestamps and process identifiers and hands them to a configurable
//! backend. The pieces:
//! - Hierarchical log levels (ERROR, WARN, INFO, DEBUG, TRACE) with plain or
//!   ANSI-colored labels
//! - Microsecond-precision UTC timestamps
//! - Standard-output and periodically-reopened file backends
//! - A name-keyed backend factory, open for extension
//! - A lazily-built process-wide singleton with one-time configuration
//! - A compile-time severity cutoff selected via cargo features
//!
//! # Usage
//!
//! ```no_run
//! use plainlog::{configure, info, LogConfig};
//!
//! // Without this, the first log call defaults to colored standard output.
//! configure(&LogConfig::file("service.log").with("reopen_interval", "60"))
//!     .expect("logging configuration rejected");
//! info("service starting").ok();
//! ```

mod bridge;
mod config;
mod error;
mod factory;
mod file;
mod global;
mod level;
mod logger;
mod stdout;
mod timestamp;

pub use bridge::install as install_log_bridge;
pub use config::LogConfig;
pub use error::{Error, Result};
pub use factory::{register_backend, LoggerCreator, LoggerFactory};
pub use file::FileLogger;
pub use global::{configure, debug, error, get_logger, info, log, trace, warn, write};
pub use level::Level;
pub use logger::{Logger, NullLogger};
pub use stdout::StdOutLogger;
pub use timestamp::timestamp;

/// Module version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
