//! Standard-output backend.

use std::io::{self, Write};

use crate::config::LogConfig;
use crate::error::Result;
use crate::level::{Level, COLORED, UNCOLORED};
use crate::logger::Logger;
use crate::timestamp::timestamp;

/// Logger that writes to the process standard output stream.
#[derive(Debug)]
pub struct StdOutLogger {
    /// Label table selected at construction; `color` key present means ANSI.
    labels: &'static [&'static str; 5],
    /// Process id, captured once at construction.
    pid: u32,
}

impl StdOutLogger {
    /// Builds a standard-output logger from `config`. Cannot fail; the only
    /// recognized key is `color`, whose presence selects the colored table.
    pub fn new(config: &LogConfig) -> Self {
        let labels = if config.contains("color") {
            &COLORED
        } else {
            &UNCOLORED
        };
        Self {
            labels,
            pid: std::process::id(),
        }
    }

    fn format(&self, message: &str, level: Level) -> String {
        let mut line = String::with_capacity(message.len() + 64);
        line.push_str(&timestamp());
        line.push_str(" [");
        line.push_str(&self.pid.to_string());
        line.push(']');
        line.push_str(self.labels[level as usize]);
        line.push_str(message);
        line.push('\n');
        line
    }
}

impl Logger for StdOutLogger {
    fn write(&self, line: &str) -> Result<()> {
        // The whole line goes out in one write call on the locked handle, so
        // lines from different threads cannot interleave.
        let mut out = io::stdout().lock();
        out.write_all(line.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    fn log(&self, message: &str, level: Level) -> Result<()> {
        if !level.enabled() {
            return Ok(());
        }
        self.write(&self.format(message, level))
    }
}
