//! crates/diagnostics/src/indent.rs
//! Nesting-depth tracking for structured diagnostic blocks.

/// Outcome of [`IndentTracker::pop_level`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use = "an Underflow outcome should be reported on the warning sink"]
pub enum PopLevel {
    /// The depth counter was decremented.
    Popped,
    /// The counter was already zero; depth is left at zero.
    Underflow,
}

/// Process-wide nesting-depth counter with a memoized indentation string.
///
/// Every structured diagnostic block pushes one level on entry and pops it
/// on exit. The call graph of the optimizer is not hierarchical, so pushes
/// and pops can become unbalanced; extra pops are absorbed (the counter
/// never goes negative) and missing pops merely leave the depth elevated.
///
/// The indentation string is regenerated lazily: it is rebuilt only when
/// its length no longer equals `level * width`.
#[derive(Clone, Debug)]
pub struct IndentTracker {
    level: u32,
    width: usize,
    cached: String,
}

impl IndentTracker {
    /// Creates a tracker at depth zero.
    ///
    /// `width` is the number of fill characters per nesting level. There is
    /// no universal default; the embedding process chooses one.
    #[must_use]
    pub const fn new(width: usize) -> Self {
        Self {
            level: 0,
            width,
            cached: String::new(),
        }
    }

    /// Increments the depth counter. Never fails.
    pub fn push_level(&mut self) {
        self.level += 1;
    }

    /// Decrements the depth counter, saturating at zero.
    ///
    /// Returns [`PopLevel::Underflow`] when the counter was already zero so
    /// the caller can emit a warning; the tracker itself stays valid.
    pub fn pop_level(&mut self) -> PopLevel {
        if self.level == 0 {
            PopLevel::Underflow
        } else {
            self.level -= 1;
            PopLevel::Popped
        }
    }

    /// Returns the indentation prefix for the current depth.
    ///
    /// The returned string always has length `level() * width()`.
    pub fn indent(&mut self) -> &str {
        let wanted = self.level as usize * self.width;
        if self.cached.len() != wanted {
            self.cached.clear();
            self.cached.extend(std::iter::repeat(' ').take(wanted));
        }
        &self.cached
    }

    /// Current nesting depth.
    #[must_use]
    pub const fn level(&self) -> u32 {
        self.level
    }

    /// Fill width per nesting level.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indent_length_tracks_depth() {
        for width in [1usize, 2, 4] {
            let mut tracker = IndentTracker::new(width);
            assert_eq!(tracker.indent().len(), 0);
            for depth in 1..=5u32 {
                tracker.push_level();
                assert_eq!(tracker.indent().len(), depth as usize * width);
                assert_eq!(tracker.level(), depth);
            }
        }
    }

    #[test]
    fn push_then_pop_restores_depth() {
        let mut tracker = IndentTracker::new(2);
        tracker.push_level();
        let before = tracker.level();
        tracker.push_level();
        assert_eq!(tracker.pop_level(), PopLevel::Popped);
        assert_eq!(tracker.level(), before);
    }

    #[test]
    fn pop_at_zero_underflows_and_stays_at_zero() {
        let mut tracker = IndentTracker::new(2);
        assert_eq!(tracker.pop_level(), PopLevel::Underflow);
        assert_eq!(tracker.level(), 0);
        assert_eq!(tracker.indent(), "");
    }

    #[test]
    fn cached_string_is_all_fill_characters() {
        let mut tracker = IndentTracker::new(3);
        tracker.push_level();
        tracker.push_level();
        assert_eq!(tracker.indent(), "      ");
    }

    #[test]
    fn cache_regenerates_after_pop() {
        let mut tracker = IndentTracker::new(2);
        tracker.push_level();
        tracker.push_level();
        assert_eq!(tracker.indent().len(), 4);
        assert_eq!(tracker.pop_level(), PopLevel::Popped);
        assert_eq!(tracker.indent().len(), 2);
    }
}
