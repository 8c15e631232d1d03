//! crates/bench-log/src/sink.rs
//! Failure-absorbing append-mode file sink.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// File sink whose open outcome is decided once and never revisited.
///
/// Opening never returns an error: a sink that failed to open simply
/// reports `is_open() == false` and swallows every write. This mirrors the
/// benchmark contract where an unwritable log path must not disturb the
/// optimization run.
#[derive(Debug)]
pub struct LogFileSink {
    file: Option<File>,
}

impl LogFileSink {
    /// Attempts to open `path` for appending, creating it if absent.
    #[must_use]
    pub fn open(path: &Path) -> Self {
        Self {
            file: OpenOptions::new().append(true).create(true).open(path).ok(),
        }
    }

    /// A sink that was never given a path.
    #[must_use]
    pub const fn closed() -> Self {
        Self { file: None }
    }

    /// Whether writes reach a file.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// Writes formatted text and flushes it, so records survive an abrupt
    /// process exit. Closed sinks and write failures are silent no-ops.
    pub fn write(&mut self, args: fmt::Arguments<'_>) {
        if let Some(file) = self.file.as_mut() {
            let _ = file.write_fmt(args);
            let _ = file.flush();
        }
    }
}
