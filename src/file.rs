//! File backend with timed reopen.
//!
//! The target file is closed and reopened on a fixed interval so that
//! external log-rotation tools that rename the file out from under the
//! process take effect: the reopen re-resolves the path. The on-disk name is
//! prefixed with the process id, which keeps concurrent processes sharing a
//! log directory distinguishable without any coordination between them.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::config::LogConfig;
use crate::error::{Error, Result};
use crate::level::Level;
use crate::logger::Logger;
use crate::timestamp::timestamp;

/// Seconds between reopens when the configuration does not say otherwise.
const DEFAULT_REOPEN_INTERVAL: Duration = Duration::from_secs(300);

/// Logger that appends to a pid-prefixed file.
#[derive(Debug)]
pub struct FileLogger {
    /// Resolved on-disk path, final component `<pid>-` prefixed.
    path: PathBuf,
    /// How long an open handle is kept before the path is re-resolved.
    reopen_interval: Duration,
    /// Handle and reopen bookkeeping, guarded together so the write and the
    /// reopen decision are atomic with respect to concurrent callers.
    state: Mutex<BackendState>,
}

#[derive(Debug)]
struct BackendState {
    /// `None` after a failed reopen, until a later write retries the open.
    file: Option<File>,
    last_reopen: Instant,
}

impl FileLogger {
    /// Builds a file logger from `config`. `file_name` is required;
    /// `reopen_interval` is whole seconds, defaulting to 300. The file is
    /// opened eagerly so a bad path fails here rather than on the first log
    /// call.
    pub fn new(config: &LogConfig) -> Result<Self> {
        let name = config.get("file_name").ok_or(Error::MissingFileName)?;
        let reopen_interval = match config.get("reopen_interval") {
            Some(raw) => {
                let seconds: u64 = raw
                    .parse()
                    .map_err(|_| Error::InvalidReopenInterval(raw.to_string()))?;
                Duration::from_secs(seconds)
            }
            None => DEFAULT_REOPEN_INTERVAL,
        };

        let path = pid_prefixed(name);
        let file = open_append(&path)?;
        Ok(Self {
            path,
            reopen_interval,
            state: Mutex::new(BackendState {
                file: Some(file),
                last_reopen: Instant::now(),
            }),
        })
    }

    /// The resolved on-disk path this logger appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Logger for FileLogger {
    fn write(&self, line: &str) -> Result<()> {
        let mut state = self.state.lock();

        // A failed reopen leaves no handle behind; retry before writing.
        if state.file.is_none() {
            state.file = Some(open_append(&self.path)?);
            state.last_reopen = Instant::now();
        }
        if let Some(file) = state.file.as_mut() {
            file.write_all(line.as_bytes())?;
            file.flush()?;
        }

        // Timed reopen, under the same lock as the write. On failure the
        // handle stays closed, the error propagates, and the next write
        // retries the open.
        if state.last_reopen.elapsed() > self.reopen_interval {
            state.file = None;
            state.file = Some(open_append(&self.path)?);
            state.last_reopen = Instant::now();
        }
        Ok(())
    }

    fn log(&self, message: &str, level: Level) -> Result<()> {
        if !level.enabled() {
            return Ok(());
        }
        // No pid segment and no colors in file output; the pid is already in
        // the file name.
        let mut line = String::with_capacity(message.len() + 64);
        line.push_str(&timestamp());
        line.push_str(level.label(false));
        line.push_str(message);
        line.push('\n');
        self.write(&line)
    }
}

/// Prefixes the final path component with the process id, preserving any
/// directory components so callers may point the log at another directory.
fn pid_prefixed(name: &str) -> PathBuf {
    let pid = std::process::id();
    let path = Path::new(name);
    match path.file_name().and_then(|base| base.to_str()) {
        Some(base) => path.with_file_name(format!("{pid}-{base}")),
        None => PathBuf::from(format!("{pid}-{name}")),
    }
}

fn open_append(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
