//! Tracing subscriber setup for the CLI binary
//!
//! Console output respects the RUST_LOG environment variable for filtering:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=stanza::source=debug` - module-level filtering
//!
//! The library itself only emits `tracing` events; only the binary installs
//! a subscriber.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize the console tracing subscriber
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_filter(filter);

    tracing_subscriber::registry().with(console_layer).init();
}
