//! Append-only install log.
//!
//! Every install outcome is appended as a timestamped plain-text line so
//! there is a record of what moosup did even after the terminal output is
//! gone. Log writes are best-effort: a failure is reported through tracing
//! and never fails the install itself.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

/// Severity recorded with each log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

/// Handle to the append-only install log.
#[derive(Debug, Clone)]
pub struct InstallLog {
    path: PathBuf,
}

impl InstallLog {
    /// Open a log at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open the log at its default location.
    ///
    /// Root writes `/var/log/moosup.log`; everyone else gets
    /// `~/.local/state/moosup/install.log`.
    pub fn open_default() -> Self {
        Self::new(default_log_path())
    }

    /// The log file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one timestamped line.
    pub fn append(&self, level: LogLevel, message: &str) {
        if let Err(e) = self.try_append(level, message) {
            tracing::warn!("Could not write install log {}: {}", self.path.display(), e);
        }
    }

    fn try_append(&self, level: LogLevel, message: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        writeln!(file, "[{}] {} {}", stamp, level.label(), message)
    }
}

fn default_log_path() -> PathBuf {
    if crate::shell::is_elevated() {
        PathBuf::from("/var/log/moosup.log")
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".local/state/moosup/install.log")
    }
}
