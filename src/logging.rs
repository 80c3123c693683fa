use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;

use crate::config::{Config, LOG_ENV};

/// Send tracing output to the log file. The terminal belongs to the TUI, so
/// nothing is ever written to stdout or stderr from here.
pub(crate) fn init(config: &Config) -> Result<()> {
    let path = config.log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))?;

    if let Some(ref raw) = config.rejected_level {
        tracing::warn!(value = %raw, var = LOG_ENV, "unknown log level, using info");
    }
    tracing::debug!(path = %path.display(), "logging initialised");
    Ok(())
}
