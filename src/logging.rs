//! Logging initialization.
//!
//! All diagnostics go to stderr. `RUST_LOG` takes precedence over the
//! configured level when set.

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Initialize stderr logging from the configured level.
///
/// Safe to call more than once per process; later calls are ignored.
pub fn init(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
