//! Structured logging for simulation runs.
//!
//! Logging is opt-in: the library itself only emits `tracing` events, and a
//! binary (or a debugging session) installs a subscriber through one of the
//! helpers here. `RUST_LOG` overrides the programmatic level, e.g.
//! `RUST_LOG=tandem_core::replication=trace` to watch every event the
//! driver processes.

use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging at the default `info` level.
pub fn init_logging() {
    init_logging_with_level("info");
}

/// Initialize logging at a specific level ("trace", "debug", "info",
/// "warn", or "error"). The `RUST_LOG` environment variable, when set,
/// takes precedence.
pub fn init_logging_with_level(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("tandem_core={level},tandem_cli={level}").into());

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_level(true))
        .with(filter)
        .init();
}
