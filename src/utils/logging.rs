//! Diagnostic logging setup.
//!
//! Report output goes to stdout; tracing events go to stderr so they never
//! mix with the statistics. Verbosity is controlled with `RUST_LOG`
//! (default `warn`), e.g. `RUST_LOG=bikeshare=debug`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr);

    // try_init: a second call (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
