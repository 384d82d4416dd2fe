//! Tracing setup for the command-line tool.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding per-target log levels,
/// e.g. `HEAVYMETAL_LOG=heavymetal_index=debug`.
pub const LOG_ENV: &str = "HEAVYMETAL_LOG";

/// Default filter when neither the environment nor the config sets one.
pub const DEFAULT_FILTER: &str = "heavymetal_index=info";

/// Install the global subscriber. Output goes to stderr.
///
/// `fallback` is used when `HEAVYMETAL_LOG` is unset or invalid.
/// Safe to call more than once; only the first call has an effect.
pub fn init_tracing(fallback: Option<&str>) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_new(fallback.unwrap_or(DEFAULT_FILTER)))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
