//! crates/diagnostics/src/global.rs
//! Thread-local reporter instance and the free-function entry points the
//! optimizer calls.
//!
//! The facility assumes a single logical thread of control; `thread_local!`
//! gives each thread its own [`Reporter`] so nothing needs locking and test
//! threads cannot corrupt each other's indent depth.

use std::cell::RefCell;
use std::fmt;
use std::io::{self, Stderr, Stdout};

use crate::reporter::Reporter;
use crate::stream::LogStream;

/// Indent width of the process-wide reporter.
///
/// The core types take the width as a parameter; this is merely the value
/// the embedding process settled on for console output.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

thread_local! {
    static REPORTER: RefCell<Reporter<Stdout, Stderr>> =
        RefCell::new(Reporter::new(io::stdout(), io::stderr(), DEFAULT_INDENT_WIDTH));
}

/// Sets the process-wide visibility policy.
///
/// Safe to call repeatedly; the last call wins. Streams already constructed
/// keep the visibility they snapshotted.
pub fn init(verbose_level: u32, silent: bool, number_precision: usize) {
    REPORTER.with(|r| r.borrow_mut().init(verbose_level, silent, number_precision));
}

/// Evaluates the visibility predicate against the current policy.
#[must_use]
pub fn level_visible(level: u32, max_level: u32) -> bool {
    REPORTER.with(|r| r.borrow().level_visible(level, max_level))
}

/// Runs `f` with a stream gated at `level` writing to standard output.
///
/// The closure must not call back into other `global` functions; the
/// reporter is borrowed for its duration.
pub fn with_log<F>(level: u32, f: F)
where
    F: FnOnce(&mut LogStream<'_, Stdout>),
{
    REPORTER.with(|r| {
        let r = r.borrow();
        let mut stream = r.log(level);
        f(&mut stream);
    });
}

/// Runs `f` with a stream visible only while verbosity lies in
/// `[level, max_level]`.
pub fn with_log_ranged<F>(level: u32, max_level: u32, f: F)
where
    F: FnOnce(&mut LogStream<'_, Stdout>),
{
    REPORTER.with(|r| {
        let r = r.borrow();
        let mut stream = r.log_ranged(level, max_level);
        f(&mut stream);
    });
}

/// Enters one nesting level of structured output.
pub fn push_indent_level() {
    REPORTER.with(|r| r.borrow_mut().push_indent_level());
}

/// Leaves one nesting level; a pop at depth zero warns on stderr and is
/// otherwise ignored.
pub fn pop_indent_level() {
    REPORTER.with(|r| r.borrow_mut().pop_indent_level());
}

/// Indentation prefix for the current depth.
#[must_use]
pub fn indent() -> String {
    REPORTER.with(|r| r.borrow_mut().indent().to_owned())
}

/// Current nesting depth.
#[must_use]
pub fn indent_level() -> u32 {
    REPORTER.with(|r| r.borrow().indent_level())
}

/// Tunes the depth bound applied to indented emission.
pub fn set_max_indent_level(level: u32) {
    REPORTER.with(|r| r.borrow_mut().set_max_indent_level(level));
}

/// Depth bound applied to indented emission.
#[must_use]
pub fn max_indent_level() -> u32 {
    REPORTER.with(|r| r.borrow().max_indent_level())
}

/// Backend of [`release_out!`](crate::release_out): unconditional write to
/// the data sink.
pub fn emit_release(args: fmt::Arguments<'_>) {
    REPORTER.with(|r| r.borrow().write_release(args));
}

/// Backend of [`indented_release_out!`](crate::indented_release_out).
pub fn emit_indented_release(args: fmt::Arguments<'_>) {
    REPORTER.with(|r| r.borrow_mut().write_indented_release(args));
}

#[cfg(all(feature = "debug-logging", feature = "debug-time-prefix"))]
fn time_prefix() -> String {
    chrono::Local::now().format("%H:%M:%S ").to_string()
}

#[cfg(all(feature = "debug-logging", not(feature = "debug-time-prefix")))]
fn time_prefix() -> &'static str {
    ""
}

/// Backend of [`debug_out!`](crate::debug_out) when no function-name prefix
/// is configured: indented, depth-bounded emission.
#[cfg(all(
    feature = "debug-logging",
    not(any(feature = "debug-fn-prefix", feature = "debug-pretty-fn-prefix"))
))]
pub fn emit_debug_plain(args: fmt::Arguments<'_>) {
    REPORTER.with(|r| {
        r.borrow_mut()
            .write_indented_release(format_args!("{}{args}", time_prefix()));
    });
}

/// Backend of [`debug_out!`](crate::debug_out) when a function-name prefix
/// is configured. `function` is the fully qualified path captured at the
/// call site; the short variant keeps only the last segment.
#[cfg(all(
    feature = "debug-logging",
    any(feature = "debug-fn-prefix", feature = "debug-pretty-fn-prefix")
))]
pub fn emit_debug_with_function(function: &str, args: fmt::Arguments<'_>) {
    #[cfg(feature = "debug-pretty-fn-prefix")]
    let name = function;
    #[cfg(not(feature = "debug-pretty-fn-prefix"))]
    let name = function.rsplit("::").next().unwrap_or(function);
    REPORTER.with(|r| {
        r.borrow()
            .write_release(format_args!("{}@{name}: {args}", time_prefix()));
    });
}
