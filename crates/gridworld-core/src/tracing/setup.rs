//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "GRIDWORLD_LOG";

/// Filter used when `GRIDWORLD_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "gridworld=info";

/// Initialize the tracing/logging system.
///
/// Reads `GRIDWORLD_LOG` for per-target log levels, e.g.
/// `GRIDWORLD_LOG=gridworld_mdp=trace,gridworld_core=warn`.
///
/// Idempotent: only the first call installs a subscriber. Output goes to
/// stderr so value tables on stdout stay clean.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // A test harness may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
