//! crates/bench-log/src/clock.rs
//! Elapsed-time source for benchmark records.

use std::time::Instant;

/// Monotonic clock anchored at its own construction.
///
/// The process-wide recorder constructs one on first touch, so its readings
/// approximate seconds since process start. Tests construct their own to
/// control the anchor.
#[derive(Clone, Copy, Debug)]
pub struct ProcessClock {
    started: Instant,
}

impl ProcessClock {
    /// Starts a clock anchored at now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Seconds elapsed since the anchor.
    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

impl Default for ProcessClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_non_negative_and_monotonic() {
        let clock = ProcessClock::new();
        let first = clock.elapsed_seconds();
        let second = clock.elapsed_seconds();
        assert!(first >= 0.0);
        assert!(second >= first);
    }
}
