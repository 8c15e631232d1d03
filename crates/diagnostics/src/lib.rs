#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `diagnostics` is the instrumentation core of the mapflow optimizer: a
//! leveled, verbosity-gated output stream, a nesting-depth indent tracker
//! for structured progress output, and a build-time macro layer that lets
//! debug emission vanish entirely from release builds. The optimizer calls
//! it on every refinement pass, so suppression must be decided cheaply and
//! disabled paths must cost nothing.
//!
//! # Design
//!
//! - [`VisibilityConfig`] is the pure policy: one verbosity level, one
//!   silence flag, one default float precision.
//! - [`LogStream`] is a short-lived value object built per diagnostic
//!   statement. It snapshots its visibility at construction and then either
//!   forwards chained [`push`](LogStream::push) calls to the shared sink or
//!   does nothing. [`suppress_if`](LogStream::suppress_if) cuts a chain
//!   mid-statement without breaking the fluent syntax.
//! - [`IndentTracker`] counts nesting depth and memoizes the indentation
//!   prefix, regenerating it lazily.
//! - [`Reporter`] owns policy, tracker, and sinks as one injectable service
//!   object; [`global`] hosts the thread-local process-wide instance plus
//!   the free functions and macros the rest of the codebase uses.
//!
//! # Invariants
//!
//! - A stream's visibility is fixed at construction; policy changes affect
//!   only streams built later (or explicit `hide(false)` recomputation).
//! - `indent()` always has length `indent_level() * width`.
//! - Extra indent pops warn and saturate at zero; they never underflow and
//!   never fail the caller.
//!
//! # Errors
//!
//! None. Every fault degrades to a silent or warned no-op; the facility is
//! a best-effort side channel that must never destabilize the optimization
//! it instruments.
//!
//! # Examples
//!
//! ```
//! use std::cell::RefCell;
//! use diagnostics::{LogStream, VisibilityConfig};
//!
//! let config = VisibilityConfig::new(1, false, 6);
//! let sink = RefCell::new(Vec::new());
//!
//! // Visible: verbosity 1 covers a level-1 statement.
//! LogStream::new(&config, &sink, 1)
//!     .push("pass ")
//!     .push(3u32)
//!     .push('\n');
//!
//! // Not visible: level 2 exceeds the configured verbosity.
//! LogStream::new(&config, &sink, 2).push("detail\n");
//!
//! assert_eq!(sink.into_inner(), b"pass 3\n");
//! ```

mod config;
mod indent;
mod macros;
mod reporter;
mod stream;

pub mod global;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::VisibilityConfig;
pub use indent::{IndentTracker, PopLevel};
pub use reporter::{Reporter, DEFAULT_MAX_INDENT_LEVEL};
pub use stream::{LogStream, StreamValue};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{init_tracing, VerbosityLayer};
