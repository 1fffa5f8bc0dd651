//! Diagnostics logging setup for the binary.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the diagnostics filter.
pub const LOG_ENV_VAR: &str = "TODO_CLI_LOG";

/// Filter used when nothing else is configured.
const DEFAULT_FILTER: &str = "warn";

/// Build the filter from `TODO_CLI_LOG`, then `configured`, then the default.
///
/// An unparsable directive falls back to the default filter.
#[must_use]
pub fn build_filter(configured: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(configured.unwrap_or(DEFAULT_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a stderr subscriber. Calling this more than once is harmless.
pub fn init(configured: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(configured))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
