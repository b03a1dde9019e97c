//! Logging infrastructure for fitplan.
//!
//! Centralized tracing setup shared by the binaries.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging with sensible defaults
///
/// Filtering follows RUST_LOG when set; otherwise the default level is INFO.
/// Output uses the compact format.
pub fn init() {
    init_with_level("info")
}

/// Initialize logging with a specific default level
///
/// `default_level` is one of debug, info, warn, error. RUST_LOG still
/// overrides it when present.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}
