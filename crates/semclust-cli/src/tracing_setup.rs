//! Tracing initialization for the `semclust` binary.

use std::sync::Once;

use semclust_core::config::defaults::DEFAULT_LOG_FILTER;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Per-target log levels, e.g. `SEMCLUST_LOG=semclust_clustering=debug,semclust_io=warn`.
pub const LOG_ENV: &str = "SEMCLUST_LOG";

/// Filter for a `-v` count. Zero reads `SEMCLUST_LOG` and falls back to
/// `DEFAULT_LOG_FILTER`. Targets match by prefix, so `semclust` covers every
/// `semclust_*` crate.
pub fn filter_for(verbosity: u8) -> EnvFilter {
    match verbosity {
        0 => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        1 => EnvFilter::new("semclust=debug"),
        _ => EnvFilter::new("semclust=trace"),
    }
}

/// Install the global subscriber. Idempotent. Logs go to stderr.
pub fn init_tracing(verbosity: u8) {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter_for(verbosity))
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_flags_raise_the_level() {
        assert_eq!(filter_for(1).to_string(), "semclust=debug");
        assert_eq!(filter_for(3).to_string(), "semclust=trace");
    }

    #[test]
    fn init_is_idempotent() {
        init_tracing(0);
        init_tracing(2);
    }
}
