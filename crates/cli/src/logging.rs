//! Diagnostic logging via `tracing`.
//!
//! Logs go to stderr so they never mix with command output on stdout.
//! The level is controlled by the `MOCKUP_LOG` environment variable:
//!
//! ```bash
//! MOCKUP_LOG=debug mockup serve
//! MOCKUP_LOG=mockup_storage=trace mockup generate "une app de recettes"
//! ```

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub(crate) const ENV_LOG: &str = "MOCKUP_LOG";

const DEFAULT_FILTER: &str = "mockup=info,warn";

/// Install the global subscriber. Quiet mode only lets errors through.
pub(crate) fn init(quiet: bool) {
    let env_filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| {
        if quiet {
            EnvFilter::new("error")
        } else {
            EnvFilter::new(DEFAULT_FILTER)
        }
    });

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .without_time(),
        )
        .try_init();
}
