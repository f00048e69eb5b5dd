//! Tracing bootstrap for binaries and test harnesses embedding the classifier.

use tracing_subscriber::EnvFilter;

use crate::constants::LOG_ENV_VAR;

/// Default filter directive when `SIFT_LOG` is unset or unparsable.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Build the env filter from `SIFT_LOG`, falling back to [`DEFAULT_DIRECTIVE`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install a global fmt subscriber.
///
/// Returns `false` if a global subscriber was already set; calling this more
/// than once is harmless.
pub fn init_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .try_init()
        .is_ok()
}
