//! Tracing setup
//!
//! Logs go to stderr and are filtered by `RUST_LOG`; without it only
//! warnings are shown, or everything from debug up with `--verbose`.

use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();

    tracing::debug!("Verbose mode enabled");
}
