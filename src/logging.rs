//! Diagnostic logging setup
//!
//! Library code logs through the `log` facade. The binary installs a
//! tracing-subscriber formatter on stderr, which also receives `log` records.

use tracing_subscriber::EnvFilter;

use crate::constants::LOG_ENV_VAR;

/// Install the stderr subscriber.
///
/// `LOGTALLY_LOG` wins when set; otherwise `debug` when verbose, `warn` when not.
/// Calling this twice is harmless: the second install is ignored.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
