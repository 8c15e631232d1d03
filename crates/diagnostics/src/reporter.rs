//! crates/diagnostics/src/reporter.rs
//! Service object tying the visibility policy, indent tracker, and sinks
//! together.

use std::cell::RefCell;
use std::io::Write;

use crate::config::VisibilityConfig;
use crate::indent::{IndentTracker, PopLevel};
use crate::stream::LogStream;

/// Nesting depth above which indented emission is dropped, unless the
/// embedding process tunes it via [`Reporter::set_max_indent_level`].
pub const DEFAULT_MAX_INDENT_LEVEL: u32 = 10;

/// Owner of all diagnostic state for one logical thread of control.
///
/// `W` is the data sink every [`LogStream`] writes to; `E` is the separate
/// warning sink used for the facility's own faults (currently only indent
/// underflow). The process-wide instance lives in [`crate::global`]; tests
/// construct their own reporter over `Vec<u8>` sinks for isolation.
#[derive(Debug)]
pub struct Reporter<W, E> {
    config: VisibilityConfig,
    indent: IndentTracker,
    max_indent_level: u32,
    sink: RefCell<W>,
    warn_sink: RefCell<E>,
}

impl<W, E> Reporter<W, E> {
    /// Creates a reporter with a default (level 0, non-silent) policy.
    pub fn new(sink: W, warn_sink: E, indent_width: usize) -> Self {
        Self {
            config: VisibilityConfig::default(),
            indent: IndentTracker::new(indent_width),
            max_indent_level: DEFAULT_MAX_INDENT_LEVEL,
            sink: RefCell::new(sink),
            warn_sink: RefCell::new(warn_sink),
        }
    }

    /// Replaces the visibility policy. Last call wins; streams already
    /// constructed keep their snapshot.
    pub fn init(&mut self, verbose_level: u32, silent: bool, number_precision: usize) {
        self.config = VisibilityConfig::new(verbose_level, silent, number_precision);
    }

    /// Current policy snapshot.
    #[must_use]
    pub const fn config(&self) -> &VisibilityConfig {
        &self.config
    }

    /// Builds a stream gated at `level` with no upper bound.
    #[must_use]
    pub fn log(&self, level: u32) -> LogStream<'_, W> {
        LogStream::new(&self.config, &self.sink, level)
    }

    /// Builds a stream visible only while verbosity lies in
    /// `[level, max_level]`.
    #[must_use]
    pub fn log_ranged(&self, level: u32, max_level: u32) -> LogStream<'_, W> {
        LogStream::with_max_level(&self.config, &self.sink, level, max_level)
    }

    /// Mirrors [`VisibilityConfig::level_visible`] on the current policy.
    #[must_use]
    pub const fn level_visible(&self, level: u32, max_level: u32) -> bool {
        self.config.level_visible(level, max_level)
    }

    /// Enters one nesting level of structured output.
    pub fn push_indent_level(&mut self) {
        self.indent.push_level();
    }

    /// Indentation prefix for the current depth.
    pub fn indent(&mut self) -> &str {
        self.indent.indent()
    }

    /// Current nesting depth.
    #[must_use]
    pub const fn indent_level(&self) -> u32 {
        self.indent.level()
    }

    /// Depth bound applied to indented emission.
    #[must_use]
    pub const fn max_indent_level(&self) -> u32 {
        self.max_indent_level
    }

    /// Tunes the depth bound for indented emission.
    pub fn set_max_indent_level(&mut self, level: u32) {
        self.max_indent_level = level;
    }

    /// Borrows the data sink, e.g. to inspect captured test output.
    pub const fn sink(&self) -> &RefCell<W> {
        &self.sink
    }

    /// Borrows the warning sink.
    pub const fn warn_sink(&self) -> &RefCell<E> {
        &self.warn_sink
    }
}

impl<W, E: Write> Reporter<W, E> {
    /// Leaves one nesting level of structured output.
    ///
    /// A pop at depth zero emits exactly one warning line on the warning
    /// sink and leaves the depth at zero; it is never an error for the
    /// caller.
    pub fn pop_indent_level(&mut self) {
        if self.indent.pop_level() == PopLevel::Underflow {
            let _ = writeln!(
                self.warn_sink.borrow_mut(),
                "warning: popping indent level when already zero"
            );
        }
    }
}

impl<W: Write, E> Reporter<W, E> {
    /// Writes an unconditional informational line fragment to the data sink.
    ///
    /// This is the always-on channel; it bypasses the visibility policy.
    pub fn write_release(&self, args: std::fmt::Arguments<'_>) {
        let _ = self.sink.borrow_mut().write_fmt(args);
    }

    /// Like [`write_release`](Self::write_release) but prefixed with the
    /// current indentation, and dropped entirely above
    /// [`max_indent_level`](Self::max_indent_level).
    pub fn write_indented_release(&mut self, args: std::fmt::Arguments<'_>) {
        if self.indent.level() > self.max_indent_level {
            return;
        }
        let prefix = self.indent.indent();
        let mut sink = self.sink.borrow_mut();
        let _ = sink.write_all(prefix.as_bytes());
        let _ = sink.write_fmt(args);
    }
}
