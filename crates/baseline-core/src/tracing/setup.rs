//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "BASELINE_LOG";

/// Initialize the tracing/logging system.
///
/// Reads `BASELINE_LOG` for per-module log levels, for example
/// `BASELINE_LOG=baseline_analysis::engine=debug,baseline_analysis=info`.
/// Falls back to `baseline=info` if unset or invalid.
///
/// Idempotent: calling it more than once is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("baseline=info"));

        // Another subscriber may already be installed by the embedding application.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
