//! The error-log collaborator behind the boundary functions

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Local;

/// Default log file name
pub const DEFAULT_LOG_FILE: &str = "error_log.txt";

/// Something that records diagnostic messages. Logging must never fail.
pub trait ErrorLog: Send + Sync {
    /// Record one message
    fn log(&self, message: &str);
}

impl<T: ErrorLog + ?Sized> ErrorLog for Arc<T> {
    fn log(&self, message: &str) {
        (**self).log(message)
    }
}

/// Appends `<timestamp>: <message>` lines to a text file.
///
/// The file is opened, appended to and closed on every call. Failures are
/// swallowed.
#[derive(Debug, Clone)]
pub struct FileErrorLog {
    path: PathBuf,
}

impl FileErrorLog {
    /// Log to `path`
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The log file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, message: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let timestamp = Local::now().format("%a %b %e %H:%M:%S %Y");
        writeln!(file, "{timestamp}: {message}")
    }
}

impl Default for FileErrorLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }
}

impl ErrorLog for FileErrorLog {
    fn log(&self, message: &str) {
        let _ = self.append(message);
    }
}

/// Keeps messages in memory
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: Mutex<Vec<String>>,
}

impl MemoryLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages logged so far, oldest first
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|e| e.clone())
            .unwrap_or_default()
    }
}

impl ErrorLog for MemoryLog {
    fn log(&self, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(message.to_owned());
        }
    }
}
