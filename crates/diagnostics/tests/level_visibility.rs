//! Integration tests for verbosity-gated stream visibility.
//!
//! These exercise the visibility predicate end to end through a reporter
//! with captured sinks: a stream constructed at (level, max_level) emits
//! iff `!silent && verbose_level >= level && verbose_level <= max_level`.

use diagnostics::{Reporter, VisibilityConfig};

fn reporter() -> Reporter<Vec<u8>, Vec<u8>> {
    Reporter::new(Vec::new(), Vec::new(), 2)
}

fn output(reporter: &Reporter<Vec<u8>, Vec<u8>>) -> String {
    String::from_utf8(reporter.sink().borrow().clone()).expect("utf-8 output")
}

// ============================================================================
// Predicate sweep
// ============================================================================

/// Exhausts a small (level, max_level, verbose_level, silent) grid and
/// checks each stream's gate against the predicate.
#[test]
fn visibility_matches_predicate_for_all_combinations() {
    for verbose_level in 0..4u32 {
        for silent in [false, true] {
            for level in 0..4u32 {
                for max_level in 0..4u32 {
                    let mut r = reporter();
                    r.init(verbose_level, silent, 6);
                    let expected =
                        !silent && verbose_level >= level && verbose_level <= max_level;
                    assert_eq!(
                        r.log_ranged(level, max_level).visible(),
                        expected,
                        "verbose={verbose_level} silent={silent} level={level} max={max_level}"
                    );
                }
            }
        }
    }
}

// ============================================================================
// End-to-end scenarios
// ============================================================================

/// init(1, false, 6): level 0 emits, level 2 does not.
#[test]
fn verbose_level_one_scenario() {
    let mut r = reporter();
    r.init(1, false, 6);

    assert!(r.log(0).visible());
    assert!(!r.log(2).visible());

    r.log(0).push("visible\n");
    r.log(2).push("hidden\n");
    assert_eq!(output(&r), "visible\n");
}

/// Silent mode swallows every level, including zero.
#[test]
fn silent_mode_swallows_everything() {
    let mut r = reporter();
    r.init(5, true, 6);
    for level in 0..6 {
        r.log(level).push("line\n");
    }
    assert!(output(&r).is_empty());
}

/// A stream whose level exceeds its max_level is simply never visible.
#[test]
fn inverted_band_is_accepted_and_never_emits() {
    let mut r = reporter();
    r.init(2, false, 6);
    r.log_ranged(3, 1).push("never\n");
    assert!(output(&r).is_empty());
}

/// The configured precision becomes the float default for new streams.
#[test]
fn init_precision_formats_floats() {
    let mut r = reporter();
    r.init(0, false, 4);
    r.log(0).push(2.0f64 / 3.0).push('\n');
    assert_eq!(output(&r), "0.6667\n");
}

/// Policy changes do not retroactively alter constructed streams.
#[test]
fn snapshot_semantics_across_reinit() {
    let mut r = reporter();
    r.init(1, false, 6);
    {
        let mut stream = r.log(1);
        stream.push("first");
    }
    r.init(0, false, 6);
    r.log(1).push(" second");
    assert_eq!(output(&r), "first");
}

/// The standalone config predicate agrees with the reporter's.
#[test]
fn config_predicate_agrees_with_reporter() {
    let mut r = reporter();
    r.init(2, false, 6);
    let config = VisibilityConfig::new(2, false, 6);
    for level in 0..4 {
        for max in 0..4 {
            assert_eq!(r.level_visible(level, max), config.level_visible(level, max));
        }
    }
}
