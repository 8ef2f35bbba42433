//! Tracing initialization.
//!
//! Sets up the `tracing` subscriber for the CLI. Spans and events go to
//! stderr so they never interleave with rendered results on stdout.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber.
///
/// The filter is taken from `RUST_LOG` when set, falling back to the
/// configured trace level (default `"info"`). Idempotent: only the first call
/// installs a subscriber.
pub fn init_tracing(trace_level: Option<&str>) {
    let fallback = trace_level.unwrap_or("info").to_string();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
