//! crates/diagnostics/src/tracing_bridge.rs
//! Bridge between the tracing crate and the verbosity policy.
//!
//! This lets subsystems that already speak `tracing` participate in the
//! optimizer's verbosity gating: events are mapped onto a verbosity level,
//! checked against the thread-local policy, and rendered through the
//! indented release channel.
//!
//! # Usage
//!
//! ```rust,ignore
//! diagnostics::global::init(2, false, 6);
//! diagnostics::init_tracing();
//!
//! tracing::info!("aggregated {} modules", count);
//! tracing::debug!("codelength delta {:.6}", delta);
//! ```

use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::global;

/// A tracing layer that filters events through the verbosity policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct VerbosityLayer;

impl VerbosityLayer {
    /// Creates the layer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Maps a tracing level onto a verbosity level.
    ///
    /// Errors and warnings surface already at the quietest setting; info
    /// lines need `-v`, debug `-vv`, trace `-vvv`.
    const fn verbosity_level(level: &Level) -> u32 {
        match *level {
            Level::ERROR | Level::WARN => 0,
            Level::INFO => 1,
            Level::DEBUG => 2,
            Level::TRACE => 3,
        }
    }
}

impl<S> Layer<S> for VerbosityLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let level = Self::verbosity_level(event.metadata().level());
        if !global::level_visible(level, u32::MAX) {
            return;
        }
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            global::emit_indented_release(format_args!("{message}\n"));
        }
    }
}

/// Visitor extracting the `message` field from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a global tracing subscriber backed by [`VerbosityLayer`].
///
/// Call [`global::init`] first so the policy is in place; tracing events
/// then obey the same verbosity switches as native diagnostic streams.
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry().with(VerbosityLayer::new()).init();
}
