//! Log output setup.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs a stderr subscriber.
///
/// `RUST_LOG` takes precedence. Without it the level is `warn`, or `debug` when
/// `verbose` is set.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // Keeps an already installed subscriber.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
