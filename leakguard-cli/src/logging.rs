//! Diagnostic logging to stderr
//!
//! stdout carries the JSON envelope only. Library crates log through the
//! `log` facade; the subscriber installed here picks those records up too.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber
///
/// An unparsable filter falls back to `warn`. Calling this twice is harmless.
pub fn init(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_target(true).with_writer(std::io::stderr))
        .try_init();

    if result.is_err() {
        tracing::debug!("Logging already initialized");
    }
}
