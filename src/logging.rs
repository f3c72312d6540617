//! Diagnostic logging to stderr via `tracing`.
//!
//! Operator-facing output goes through the renderer on stdout; log lines go to
//! stderr so a redirected session can split them. Anything the renderer
//! already shows the operator is logged at `debug`, so the default `warn`
//! filter does not echo it on the terminal.

use crate::config::{Config, LoggingConfig, DEFAULT_LOG_FILTER};
use tracing_subscriber::EnvFilter;

/// Parse a filter directive, falling back to [`DEFAULT_LOG_FILTER`].
///
/// The second element carries the parse error when the fallback was used.
pub fn resolve_filter(logging: &LoggingConfig) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(logging.filter.trim()) {
        Ok(filter) => (filter, None),
        Err(e) => (
            EnvFilter::new(DEFAULT_LOG_FILTER),
            Some(format!("invalid log filter `{}`: {e}", logging.filter)),
        ),
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(config: &Config) {
    let (filter, problem) = resolve_filter(&config.logging);
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(config.display.color)
        .with_target(false)
        .try_init()
        .is_ok();
    if let (true, Some(problem)) = (installed, problem) {
        tracing::warn!("{problem}; using `{DEFAULT_LOG_FILTER}`");
    }
}
