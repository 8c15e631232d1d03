//! crates/diagnostics/src/config.rs
//! Visibility policy shared by every diagnostic stream.

/// Visibility policy for diagnostic output.
///
/// A statement constructed at `level` with an upper bound `max_level` is
/// emitted when the configured verbosity falls inside `[level, max_level]`
/// and silent mode is off. Streams snapshot the decision at construction
/// time, so changing the policy afterwards only affects streams built later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibilityConfig {
    /// Verbosity threshold selected by the caller (`-v`, `-vv`, ...).
    pub verbose_level: u32,
    /// Suppress all gated output regardless of level.
    pub silent: bool,
    /// Default number of decimal places applied to floats pushed into a
    /// stream. Applied to every stream built after [`set`](Self) updates.
    pub number_precision: usize,
}

impl VisibilityConfig {
    /// Default float precision when no explicit configuration was supplied.
    pub const DEFAULT_PRECISION: usize = 6;

    /// Creates a policy from the three user-facing switches.
    #[must_use]
    pub const fn new(verbose_level: u32, silent: bool, number_precision: usize) -> Self {
        Self {
            verbose_level,
            silent,
            number_precision,
        }
    }

    /// Pure visibility predicate.
    ///
    /// Returns `true` when `!silent && verbose_level >= level &&
    /// verbose_level <= max_level`. A statement with `level > max_level`
    /// can never be visible; that is treated as a valid (always-off)
    /// configuration rather than an error.
    #[must_use]
    pub const fn level_visible(&self, level: u32, max_level: u32) -> bool {
        !self.silent && self.verbose_level >= level && self.verbose_level <= max_level
    }
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self::new(0, false, Self::DEFAULT_PRECISION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_shows_level_zero_only() {
        let config = VisibilityConfig::default();
        assert!(config.level_visible(0, u32::MAX));
        assert!(!config.level_visible(1, u32::MAX));
    }

    #[test]
    fn silent_suppresses_every_level() {
        let config = VisibilityConfig::new(3, true, 6);
        for level in 0..5 {
            assert!(!config.level_visible(level, u32::MAX));
        }
    }

    #[test]
    fn visibility_matches_band_predicate() {
        for verbose_level in 0..4 {
            for silent in [false, true] {
                let config = VisibilityConfig::new(verbose_level, silent, 6);
                for level in 0..4 {
                    for max_level in 0..4 {
                        let expected =
                            !silent && verbose_level >= level && verbose_level <= max_level;
                        assert_eq!(
                            config.level_visible(level, max_level),
                            expected,
                            "verbose={verbose_level} silent={silent} level={level} max={max_level}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn inverted_band_is_never_visible() {
        let config = VisibilityConfig::new(2, false, 6);
        assert!(!config.level_visible(3, 1));
    }

    #[test]
    fn max_level_caps_visibility() {
        // A high verbosity hides statements bounded below it, which lets
        // callers emit condensed summaries only at low verbosity.
        let config = VisibilityConfig::new(2, false, 6);
        assert!(!config.level_visible(0, 1));
        assert!(config.level_visible(0, 2));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_serde_roundtrip() {
        let config = VisibilityConfig::new(2, false, 10);
        let json = serde_json::to_string(&config).expect("serialize");
        let decoded: VisibilityConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(config, decoded);
    }
}
