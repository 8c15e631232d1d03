//! crates/diagnostics/src/stream.rs
//! Level-gated, chainable diagnostic stream.

use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};

use crate::config::VisibilityConfig;

/// A value that can be pushed into a [`LogStream`].
///
/// The trait exists so the stream can honour the configured float precision
/// without truncating strings or integers: floats format with the pending
/// precision, everything else formats through [`fmt::Display`] with only
/// the pending field width applied.
pub trait StreamValue {
    /// Writes the value, honouring the stream's pending directives.
    fn write_to(
        &self,
        sink: &mut dyn Write,
        width: Option<usize>,
        precision: Option<usize>,
    ) -> io::Result<()>;
}

macro_rules! plain_stream_value {
    ($($ty:ty),* $(,)?) => {$(
        impl StreamValue for $ty {
            fn write_to(
                &self,
                sink: &mut dyn Write,
                width: Option<usize>,
                _precision: Option<usize>,
            ) -> io::Result<()> {
                match width {
                    Some(w) => write!(sink, "{self:>w$}"),
                    None => write!(sink, "{self}"),
                }
            }
        }
    )*};
}

plain_stream_value!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char, &str, String,
);

macro_rules! float_stream_value {
    ($($ty:ty),* $(,)?) => {$(
        impl StreamValue for $ty {
            fn write_to(
                &self,
                sink: &mut dyn Write,
                width: Option<usize>,
                precision: Option<usize>,
            ) -> io::Result<()> {
                match (width, precision) {
                    (Some(w), Some(p)) => write!(sink, "{self:>w$.p$}"),
                    (Some(w), None) => write!(sink, "{self:>w$}"),
                    (None, Some(p)) => write!(sink, "{self:.p$}"),
                    (None, None) => write!(sink, "{self}"),
                }
            }
        }
    )*};
}

float_stream_value!(f32, f64);

impl StreamValue for fmt::Arguments<'_> {
    fn write_to(
        &self,
        sink: &mut dyn Write,
        width: Option<usize>,
        _precision: Option<usize>,
    ) -> io::Result<()> {
        match width {
            Some(w) => write!(sink, "{self:>w$}"),
            None => write!(sink, "{self}"),
        }
    }
}

/// Short-lived, value-semantics stream gated by the visibility policy.
///
/// A stream is built per diagnostic statement and decides once, at
/// construction, whether it is visible. Chained [`push`](Self::push) calls
/// then either forward to the shared sink or do nothing. Cloning duplicates
/// the gate decision and shares the sink borrow, so a clone of a hidden
/// stream stays hidden.
///
/// Sink write failures never surface: diagnostics are a best-effort side
/// channel that must not destabilize the host computation.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use diagnostics::{LogStream, VisibilityConfig};
///
/// let config = VisibilityConfig::new(1, false, 4);
/// let sink = RefCell::new(Vec::new());
///
/// LogStream::new(&config, &sink, 1)
///     .push("codelength: ")
///     .push(4.0 / 3.0)
///     .push('\n');
///
/// assert_eq!(sink.into_inner(), b"codelength: 1.3333\n");
/// ```
#[derive(Debug)]
pub struct LogStream<'a, W> {
    level: u32,
    max_level: u32,
    visible: bool,
    width: Option<usize>,
    precision: Option<usize>,
    config: &'a VisibilityConfig,
    sink: &'a RefCell<W>,
}

impl<'a, W> LogStream<'a, W> {
    /// Creates a stream gated at `level` with an unbounded upper level.
    #[must_use]
    pub fn new(config: &'a VisibilityConfig, sink: &'a RefCell<W>, level: u32) -> Self {
        Self::with_max_level(config, sink, level, u32::MAX)
    }

    /// Creates a stream visible only while the configured verbosity lies in
    /// `[level, max_level]`.
    #[must_use]
    pub fn with_max_level(
        config: &'a VisibilityConfig,
        sink: &'a RefCell<W>,
        level: u32,
        max_level: u32,
    ) -> Self {
        Self {
            level,
            max_level,
            visible: config.level_visible(level, max_level),
            width: None,
            precision: Some(config.number_precision),
            config,
            sink,
        }
    }

    /// Whether pushes currently reach the sink.
    #[must_use]
    pub const fn visible(&self) -> bool {
        self.visible
    }

    /// Mirrors [`VisibilityConfig::level_visible`] for this stream's own
    /// level band, evaluated against the current policy rather than the
    /// snapshot taken at construction.
    #[must_use]
    pub const fn level_visible(&self) -> bool {
        self.config.level_visible(self.level, self.max_level)
    }

    /// Forces the stream invisible, or recomputes visibility from the
    /// policy when `force` is `false`.
    pub fn hide(&mut self, force: bool) {
        self.visible = !force && self.level_visible();
    }

    /// Suppresses the remainder of the chain when `predicate` holds.
    ///
    /// Equivalent to [`hide`](Self::hide) but chainable, so a caller can
    /// write `stream.push(header).suppress_if(done).push(detail)`. The
    /// suppression persists beyond the current statement: it lasts until
    /// `suppress_if(false)`/`hide(false)` recomputes visibility, and clones
    /// taken afterwards inherit it.
    pub fn suppress_if(&mut self, predicate: bool) -> &mut Self {
        self.hide(predicate);
        self
    }

    /// Sets the field width for the next pushed value only.
    ///
    /// The directive is recorded whether or not the stream is visible.
    pub fn width(&mut self, width: usize) -> &mut Self {
        self.width = Some(width);
        self
    }

    /// Sets the float precision for all subsequent pushes on this stream.
    pub fn precision(&mut self, precision: usize) -> &mut Self {
        self.precision = Some(precision);
        self
    }
}

impl<W: Write> LogStream<'_, W> {
    /// Pushes one value into the stream.
    ///
    /// Hidden streams drop the value (but still consume a pending width
    /// directive, keeping directive/value pairing identical either way).
    pub fn push<T: StreamValue>(&mut self, value: T) -> &mut Self {
        let width = self.width.take();
        if self.visible {
            // Best-effort side channel: write errors are swallowed.
            let _ = value.write_to(&mut *self.sink.borrow_mut(), width, self.precision);
        }
        self
    }
}

impl<W> Clone for LogStream<'_, W> {
    fn clone(&self) -> Self {
        Self {
            level: self.level,
            max_level: self.max_level,
            visible: self.visible,
            width: self.width,
            precision: self.precision,
            config: self.config,
            sink: self.sink,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sink() -> RefCell<Vec<u8>> {
        RefCell::new(Vec::new())
    }

    fn contents(sink: &RefCell<Vec<u8>>) -> String {
        String::from_utf8(sink.borrow().clone()).expect("utf-8 output")
    }

    #[test]
    fn visible_stream_forwards_chained_pushes() {
        let config = VisibilityConfig::new(1, false, 6);
        let out = sink();
        LogStream::new(&config, &out, 1)
            .push("modules: ")
            .push(42u32)
            .push('\n');
        assert_eq!(contents(&out), "modules: 42\n");
    }

    #[test]
    fn hidden_stream_is_a_no_op() {
        let config = VisibilityConfig::new(0, false, 6);
        let out = sink();
        LogStream::new(&config, &out, 2).push("invisible");
        assert!(out.borrow().is_empty());
    }

    #[test]
    fn silent_mode_hides_level_zero() {
        let config = VisibilityConfig::new(0, true, 6);
        let out = sink();
        LogStream::new(&config, &out, 0).push("nothing");
        assert!(out.borrow().is_empty());
    }

    #[test]
    fn float_precision_comes_from_config() {
        let config = VisibilityConfig::new(0, false, 3);
        let out = sink();
        LogStream::new(&config, &out, 0).push(std::f64::consts::PI);
        assert_eq!(contents(&out), "3.142");
    }

    #[test]
    fn precision_directive_overrides_config_default() {
        let config = VisibilityConfig::new(0, false, 6);
        let out = sink();
        LogStream::new(&config, &out, 0)
            .precision(1)
            .push(2.55f64)
            .push(' ')
            .push(0.25f64);
        assert_eq!(contents(&out), "2.5 0.2");
    }

    #[test]
    fn width_applies_to_next_value_only() {
        let config = VisibilityConfig::new(0, false, 6);
        let out = sink();
        LogStream::new(&config, &out, 0).width(5).push(7u32).push(8u32);
        assert_eq!(contents(&out), "    78");
    }

    #[test]
    fn precision_does_not_truncate_strings() {
        let config = VisibilityConfig::new(0, false, 2);
        let out = sink();
        LogStream::new(&config, &out, 0).push("codelength");
        assert_eq!(contents(&out), "codelength");
    }

    #[test]
    fn hide_true_suppresses_until_recomputed() {
        let config = VisibilityConfig::new(2, false, 6);
        let out = sink();
        let mut stream = LogStream::new(&config, &out, 1);
        stream.hide(true);
        stream.push("hidden");
        assert!(out.borrow().is_empty());
        stream.hide(false);
        stream.push("shown");
        assert_eq!(contents(&out), "shown");
    }

    #[test]
    fn hide_false_respects_policy() {
        let config = VisibilityConfig::new(0, false, 6);
        let out = sink();
        let mut stream = LogStream::new(&config, &out, 2);
        stream.hide(false);
        stream.push("still hidden");
        assert!(out.borrow().is_empty());
    }

    #[test]
    fn suppress_if_cuts_the_rest_of_the_chain() {
        let config = VisibilityConfig::new(1, false, 6);
        let out = sink();
        LogStream::new(&config, &out, 1)
            .push("head ")
            .suppress_if(true)
            .push("tail");
        assert_eq!(contents(&out), "head ");
    }

    #[test]
    fn suppress_if_false_keeps_writing() {
        let config = VisibilityConfig::new(1, false, 6);
        let out = sink();
        LogStream::new(&config, &out, 1)
            .push("head ")
            .suppress_if(false)
            .push("tail");
        assert_eq!(contents(&out), "head tail");
    }

    #[test]
    fn clone_preserves_gate_decision() {
        let config = VisibilityConfig::new(1, false, 6);
        let out = sink();
        let mut stream = LogStream::new(&config, &out, 1);
        stream.hide(true);
        let mut copy = stream.clone();
        copy.push("dropped");
        assert!(out.borrow().is_empty());
    }

    #[test]
    fn level_visible_tracks_band() {
        let config = VisibilityConfig::new(1, false, 6);
        let out = sink();
        let in_band = LogStream::with_max_level(&config, &out, 0, 1);
        assert!(in_band.level_visible());
        let above = LogStream::new(&config, &out, 2);
        assert!(!above.level_visible());
        let capped = LogStream::with_max_level(&config, &out, 0, 0);
        assert!(!capped.level_visible());
    }

    #[test]
    fn hidden_stream_still_consumes_width_directive() {
        let config = VisibilityConfig::new(0, false, 6);
        let out = sink();
        let mut stream = LogStream::new(&config, &out, 0);
        stream.hide(true);
        stream.width(8).push("skipped");
        stream.hide(false);
        stream.push(1u32);
        // The width set while hidden paired with the hidden value, not this one.
        assert_eq!(contents(&out), "1");
    }
}
