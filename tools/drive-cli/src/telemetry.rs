//! Log subscriber setup.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// The `RUST_LOG` default when the variable is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "drive=debug"
    } else {
        "drive=info"
    }
}

/// Install the global subscriber. Logs go to stderr so that stdout stays
/// clean for `--json` output.
pub fn init(verbose: bool, json: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(verbose),
            )
            .try_init()
    };
    installed.context("Failed to install log subscriber")
}
