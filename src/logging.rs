//! Logging configuration using tracing

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_ENV: &str = "SECTION_NAV_LOG";

/// Initialize the logging subsystem
///
/// Logs go to stderr so that rendered output on stdout stays clean.
/// Log level is controlled by the `SECTION_NAV_LOG` environment variable.
pub fn init() {
    // Default to info, allow override via SECTION_NAV_LOG
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new("section_nav=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();
}
