// File: src/logging.rs
// Purpose: tracing subscriber setup driven by the [logging] config section

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use tracing::Level;

/// Installs a `tracing_subscriber::fmt` subscriber
///
/// Only the first call installs anything; later calls (tests, embedding
/// apps with their own subscriber) are logged and ignored.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let level = parse_level(&config.level)?;

    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(config.ansi)
        .with_target(false)
        .try_init();

    if let Err(err) = installed {
        tracing::debug!("tracing subscriber already installed: {}", err);
    }

    Ok(())
}

/// Parses a level name, case-insensitively
pub fn parse_level(level: &str) -> Result<Level> {
    level
        .trim()
        .parse::<Level>()
        .with_context(|| format!("Invalid log level: {:?}", level))
}
