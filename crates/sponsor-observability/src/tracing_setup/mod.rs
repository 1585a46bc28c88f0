//! Tracing setup — structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use std::sync::Once;

use sponsor_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `SPONSOR_LOG` environment variable for filtering.
/// Defaults to `info` level if not set. Safe to call more than once.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("SPONSOR_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    install(filter);
}

/// Initialize tracing from config; `SPONSOR_LOG` still wins when set.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env("SPONSOR_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter);
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter));
}

fn install(filter: EnvFilter) {
    INIT.call_once(|| {
        // A host may already own the global subscriber; keep theirs.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init();
    });
}
