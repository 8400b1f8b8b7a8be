//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "WORKPULSE_LOG";

/// Filter used when `WORKPULSE_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "workpulse=info";

/// Initialize the Workpulse tracing/logging system.
///
/// Reads `WORKPULSE_LOG` for per-crate log levels.
/// Format: `WORKPULSE_LOG=workpulse_feed=debug,workpulse_store=warn`
///
/// Falls back to `workpulse=info` if `WORKPULSE_LOG` is not set or is invalid.
/// Idempotent; later calls are no-ops.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        install(filter);
    });
}

/// Initialize tracing with an explicit filter string (for embedding hosts and tests).
pub fn init_tracing_with_filter(filter: &str) {
    let filter = filter.to_string();
    INIT.call_once(move || {
        let filter = EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        install(filter);
    });
}

fn install(filter: EnvFilter) {
    // A host may already own the global subscriber; keep theirs.
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();
}
