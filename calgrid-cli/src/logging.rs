//! Stderr logging for the CLI.
//!
//! `RUST_LOG` wins over the configured level; `--verbose` wins over both.

use anyhow::{Context, Result};
use flexi_logger::{Logger, LoggerHandle};
use log::debug;

const DEFAULT_LEVEL: &str = "warn";

/// Start the logger. The returned handle must be kept alive for the run.
pub fn init(verbose: bool, configured: Option<&str>) -> Result<LoggerHandle> {
    let logger = if verbose {
        Logger::try_with_str("debug")
    } else {
        Logger::try_with_env_or_str(configured.unwrap_or(DEFAULT_LEVEL))
    }
    .context("Invalid log level")?;

    let handle = logger
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .context("Could not start logger")?;

    debug!(
        "event=cli_start version={} verbose={}",
        env!("CARGO_PKG_VERSION"),
        verbose
    );

    Ok(handle)
}
