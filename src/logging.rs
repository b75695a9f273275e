//! Tracing setup

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a tracing filter (e.g. `budget_easy=debug`)
pub const LOG_ENV: &str = "BUDGET_EASY_LOG";

static TRACING_INIT: Once = Once::new();

/// Filter used when `BUDGET_EASY_LOG` is unset
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "budget_easy=info"
    } else {
        "budget_easy=warn"
    }
}

/// Install the global subscriber, writing to stderr. Later calls do nothing.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
