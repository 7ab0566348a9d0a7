//! Diagnostic tracing for leafops commands.
//!
//! Diagnostics go to stderr and are filtered by `RUST_LOG`. Command results
//! are always printed to stdout and are unaffected by the filter.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=leafops=debug cargo run -- running-max 3 1 4
/// ```
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
