//! Debug tracing setup for embedding hosts.
//!
//! The crate itself only emits `tracing` events; installing a subscriber
//! is the host's choice. `init` wires a console subscriber for hosts and
//! examples that want one without assembling it themselves.
//!
//! Configure via the RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=markpad::bridge=trace` - module-level filtering

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize a console tracing subscriber.
///
/// Respects RUST_LOG for filtering and defaults to `warn`, which surfaces
/// the absorbed failures (clipboard access, HTML conversion) without any
/// of the state-transition chatter.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer().with_target(true).with_line_number(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .init();
}
