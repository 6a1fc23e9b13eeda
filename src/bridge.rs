//! Adapter feeding the `log` facade into the singleton.
//!
//! Lets code written against the `log` macros (`log::info!` and friends)
//! land in the same backend as this crate's own functions.

use log::{LevelFilter, Metadata, Record, SetLoggerError};

use crate::level::Level;

/// The facade adapter. Stateless; all state lives in the singleton.
struct Bridge;

static BRIDGE: Bridge = Bridge;

impl log::Log for Bridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        level_from(metadata.level()).enabled()
    }

    fn log(&self, record: &Record) {
        let level = level_from(record.level());
        if !level.enabled() {
            return;
        }
        // The facade has no error channel; a failed write degrades to a
        // warning on stderr instead of disappearing.
        if let Err(err) = crate::log(&record.args().to_string(), level) {
            eprintln!("plainlog: dropped log record: {err}");
        }
    }

    fn flush(&self) {}
}

/// Routes `log` macro records into the process-wide logger. Call once at
/// startup, after [`configure`](crate::configure).
pub fn install() -> Result<(), SetLoggerError> {
    log::set_logger(&BRIDGE)?;
    log::set_max_level(max_level());
    Ok(())
}

fn level_from(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warn,
        log::Level::Info => Level::Info,
        log::Level::Debug => Level::Debug,
        log::Level::Trace => Level::Trace,
    }
}

/// The compile-time cutoff expressed as the facade's filter.
fn max_level() -> LevelFilter {
    if Level::Trace.enabled() {
        LevelFilter::Trace
    } else if Level::Debug.enabled() {
        LevelFilter::Debug
    } else if Level::Info.enabled() {
        LevelFilter::Info
    } else if Level::Warn.enabled() {
        LevelFilter::Warn
    } else if Level::Error.enabled() {
        LevelFilter::Error
    } else {
        LevelFilter::Off
    }
}
