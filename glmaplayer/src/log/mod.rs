//! Tracing bootstrap for embedding applications.
//!
//! The bridge itself only emits `tracing` events; installing a subscriber
//! is the embedding application's call. This module offers the standard
//! setup so hosts do not have to repeat it: env-filtered, formatted to
//! stderr.

use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

/// Subscriber initialization error (another subscriber already set, or
/// the filter directive failed to parse).
pub type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Install the default subscriber: `RUST_LOG` filter, `info` fallback.
pub fn init() -> Result<(), InitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    init_with_filter(filter)
}

/// Install a subscriber with an explicit filter.
pub fn init_with_filter(filter: EnvFilter) -> Result<(), InitError> {
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_safe_to_call_twice() {
        // The first call installs a subscriber, the second reports the
        // conflict instead of panicking. Either outcome is acceptable
        // here since other tests may have installed one already.
        let _ = init();
        assert!(init().is_err());
    }
}
