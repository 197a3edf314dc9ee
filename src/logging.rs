//! Diagnostic logging setup
//!
//! Diagnostics go to stderr so they never mix with the console report.
//! `RUST_LOG` takes precedence over the level picked from the CLI.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
