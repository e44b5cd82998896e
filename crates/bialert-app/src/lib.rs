//! The `bialert` command-line entry point.

pub mod logging;
pub mod report;

use anyhow::Context;
use bialert_core::config::load_config;

use crate::logging::LogHandle;

/// ## Summary
/// Loads and validates configuration, then applies its log level.
///
/// ## Errors
/// Returns an error wrapping [`bialert_core::ManagerError`] if the
/// configuration cannot be loaded or fails validation.
pub fn run(log: &LogHandle) -> anyhow::Result<()> {
    let settings = load_config().context("failed to load configuration")?;

    log.apply(&settings.logging)?;

    tracing::info!(config = ?settings, "Configuration loaded");

    Ok(())
}
