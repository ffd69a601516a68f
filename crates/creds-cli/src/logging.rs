//! Logging bootstrap.
//!
//! The subscriber writes to stderr so stdout stays reserved for table and
//! JSON bodies.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Default level INFO, DEBUG with `--verbose`; `RUST_LOG` overrides both.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
