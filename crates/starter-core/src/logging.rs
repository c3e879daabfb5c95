//! Diagnostic logging setup
//!
//! User-facing progress goes through the prompt layer; this only configures
//! the `tracing` subscriber used for per-file diagnostics on stderr.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber
///
/// The filter is read from `env_var` when set, otherwise `debug` when
/// `verbose` is true and `error` when it is not. Calling this twice is a no-op.
pub fn init_logging(env_var: &str, verbose: bool) {
    let default_filter = if verbose { "debug" } else { "error" };
    let filter = EnvFilter::try_from_env(env_var).unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
