#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `bench-log` persists optimization progress metrics for the mapflow
//! optimizer: one tab-separated record per measurement, appended to a log
//! file that is opened lazily, exactly once, and reused for the rest of the
//! process. Recording must never disturb the computation it measures, so
//! every failure path is a silent no-op.
//!
//! # Design
//!
//! - [`ProcessClock`] supplies elapsed seconds since process start.
//! - [`LogFileSink`] wraps the append-mode file handle and absorbs open and
//!   write failures.
//! - [`BenchmarkRecorder`] ties the two together: the first
//!   [`benchmark`](BenchmarkRecorder::benchmark) call decides the sink's
//!   fate for good, later calls reuse the outcome.
//! - [`global`] hosts the thread-local process-wide recorder behind the two
//!   free functions the optimizer calls.
//!
//! # Record format
//!
//! Full records carry six tab-separated fields terminated by a newline:
//!
//! ```text
//! <elapsed_seconds>\t<tag>\t<codelength>\t<num_top_modules>\t<num_non_trivial_top_modules>\t<num_levels>\n
//! ```
//!
//! Tag-only records (phase markers) are just `<tag>\n`.
//!
//! # Errors
//!
//! None surface. An unset path or failed open turns every later call into a
//! no-op; write failures are swallowed.
//!
//! # Examples
//!
//! ```
//! use bench_log::BenchmarkRecorder;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().join("bench.tsv");
//!
//! let mut recorder = BenchmarkRecorder::new();
//! recorder.set_filename(&path);
//! recorder.benchmark("fine-tune", 3.4157, 7, 4, 2, false);
//!
//! let line = std::fs::read_to_string(&path).unwrap();
//! assert_eq!(line.trim_end().split('\t').count(), 6);
//! ```

mod clock;
mod recorder;
mod sink;

pub mod global;

pub use clock::ProcessClock;
pub use recorder::{BenchmarkRecord, BenchmarkRecorder};
pub use sink::LogFileSink;
