use bialert_core::ManagerResult;
use bialert_core::config::{DEFAULT_LOG_LEVEL, LoggingConfig};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

/// Lets the level chosen at startup be replaced once settings are loaded.
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
}

/// ## Summary
/// Installs the global subscriber, writing to stderr at the default level.
///
/// ## Errors
/// Returns an error if a global subscriber is already set.
pub fn init() -> anyhow::Result<LogHandle> {
    let (filter_layer, filter) = reload::Layer::new(EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()?;

    Ok(LogHandle { filter })
}

impl LogHandle {
    /// ## Summary
    /// Swaps in the level from `logging`. A failed reload only warns.
    ///
    /// ## Errors
    /// Returns [`bialert_core::ManagerError::InvalidConfig`] if the level is
    /// not recognized.
    pub fn apply(&self, logging: &LoggingConfig) -> ManagerResult<()> {
        let level = logging.level_filter()?;

        if let Err(e) = self.filter.modify(|current| *current = filter_for(level)) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }

        Ok(())
    }
}

#[must_use]
pub fn filter_for(level: LevelFilter) -> EnvFilter {
    EnvFilter::new(level.to_string())
}
