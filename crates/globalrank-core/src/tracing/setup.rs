//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the GlobalRank tracing/logging system.
///
/// Reads `GLOBALRANK_LOG` for per-module log levels.
/// Format: `GLOBALRANK_LOG=globalrank_scoring=debug,globalrank_core=warn`
///
/// Falls back to `globalrank=info` if `GLOBALRANK_LOG` is unset or invalid.
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("globalrank=info"));
        install(filter);
    });
}

/// Initialize tracing with an explicit filter string (for embedding or tests).
/// Shares the once-guard with [`init_tracing`].
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);
    INIT.call_once(|| install(filter));
}

fn install(filter: EnvFilter) {
    // try_init: a host application may already own the global subscriber.
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();
}
