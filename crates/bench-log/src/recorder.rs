//! crates/bench-log/src/recorder.rs
//! Lazily opened, process-lifetime benchmark recorder.

use std::fmt;
use std::path::PathBuf;

use crate::clock::ProcessClock;
use crate::sink::LogFileSink;

/// One line of optimization progress metrics.
///
/// Rendered as six tab-separated fields in this fixed order; consumers
/// parse the file with nothing more than a split on tabs.
#[derive(Clone, Copy, Debug)]
pub struct BenchmarkRecord<'a> {
    /// Seconds since process start, from the recorder's clock.
    pub elapsed_seconds: f64,
    /// Free-form label for the optimization phase.
    pub tag: &'a str,
    /// Current codelength of the partition.
    pub codelength: f64,
    /// Number of top-level modules.
    pub num_top_modules: u32,
    /// Number of top-level modules with more than one member.
    pub num_non_trivial_top_modules: u32,
    /// Depth of the module hierarchy.
    pub num_levels: u32,
}

impl fmt::Display for BenchmarkRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}",
            self.elapsed_seconds,
            self.tag,
            self.codelength,
            self.num_top_modules,
            self.num_non_trivial_top_modules,
            self.num_levels
        )
    }
}

/// Appends [`BenchmarkRecord`] lines to a lazily opened log file.
///
/// The sink opens on the first [`benchmark`](Self::benchmark) call and the
/// outcome, success or failure, is kept for the rest of the recorder's
/// life: later calls never retry. With no filename configured, or a path
/// that cannot be opened, every call is a silent no-op.
#[derive(Debug)]
pub struct BenchmarkRecorder {
    filename: Option<PathBuf>,
    sink: Option<LogFileSink>,
    clock: ProcessClock,
}

impl BenchmarkRecorder {
    /// Creates a recorder with no filename and a clock anchored at now.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(ProcessClock::new())
    }

    /// Creates a recorder reading elapsed time from `clock`.
    #[must_use]
    pub const fn with_clock(clock: ProcessClock) -> Self {
        Self {
            filename: None,
            sink: None,
            clock,
        }
    }

    /// Configures the log path.
    ///
    /// Effective only before the first [`benchmark`](Self::benchmark) call;
    /// once the sink has opened (or failed to), the path is fixed.
    pub fn set_filename(&mut self, path: impl Into<PathBuf>) {
        self.filename = Some(path.into());
    }

    /// Open outcome of the one-shot sink acquisition.
    ///
    /// `None` until the first [`benchmark`](Self::benchmark) call, then
    /// `Some(is_open)` forever.
    #[must_use]
    pub fn sink_open(&self) -> Option<bool> {
        self.sink.as_ref().map(LogFileSink::is_open)
    }

    /// Appends one progress record, or just the tag line when
    /// `write_only_tag` is set (used to mark phase boundaries).
    pub fn benchmark(
        &mut self,
        tag: &str,
        codelength: f64,
        num_top_modules: u32,
        num_non_trivial_top_modules: u32,
        num_levels: u32,
        write_only_tag: bool,
    ) {
        let elapsed_seconds = self.clock.elapsed_seconds();
        let filename = &self.filename;
        let sink = self.sink.get_or_insert_with(|| match filename {
            Some(path) => LogFileSink::open(path),
            None => LogFileSink::closed(),
        });

        if write_only_tag {
            sink.write(format_args!("{tag}\n"));
        } else {
            let record = BenchmarkRecord {
                elapsed_seconds,
                tag,
                codelength,
                num_top_modules,
                num_non_trivial_top_modules,
                num_levels,
            };
            sink.write(format_args!("{record}\n"));
        }
    }
}

impl Default for BenchmarkRecorder {
    fn default() -> Self {
        Self::new()
    }
}
