//! crates/bench-log/src/global.rs
//! Thread-local process-wide recorder and the free functions the optimizer
//! calls.

use std::cell::RefCell;
use std::path::PathBuf;

use crate::recorder::BenchmarkRecorder;

thread_local! {
    static RECORDER: RefCell<BenchmarkRecorder> = RefCell::new(BenchmarkRecorder::new());
}

/// Configures the benchmark log path for this thread's recorder.
///
/// Must happen before the first [`benchmark`] call to take effect; the sink
/// opens lazily exactly once.
pub fn set_benchmark_filename(path: impl Into<PathBuf>) {
    RECORDER.with(|r| r.borrow_mut().set_filename(path));
}

/// Appends one progress record (or a tag-only line) to the benchmark log.
///
/// A silent no-op when no filename was configured or the file could not be
/// opened on the first call.
pub fn benchmark(
    tag: &str,
    codelength: f64,
    num_top_modules: u32,
    num_non_trivial_top_modules: u32,
    num_levels: u32,
    write_only_tag: bool,
) {
    RECORDER.with(|r| {
        r.borrow_mut().benchmark(
            tag,
            codelength,
            num_top_modules,
            num_non_trivial_top_modules,
            num_levels,
            write_only_tag,
        );
    });
}
