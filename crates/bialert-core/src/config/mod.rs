use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, Source};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;

use crate::error::{InvalidConfigError, ManagerError, ManagerResult};

/// Optional settings file, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "bialert.toml";

/// Prefix for environment overrides, e.g. `BIALERT_LOGGING_LEVEL`.
pub const ENV_PREFIX: &str = "BIALERT";

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl LoggingConfig {
    /// ## Summary
    /// Parses the configured level into a [`LevelFilter`].
    ///
    /// Accepts `off`, `error`, `warn`, `info`, `debug` and `trace` in any case,
    /// or their numeric forms `0` through `5`.
    ///
    /// ## Errors
    /// Returns [`ManagerError::InvalidConfig`] if the level is empty or not
    /// recognized.
    pub fn level_filter(&self) -> ManagerResult<LevelFilter> {
        let level = self.level.trim();
        if level.is_empty() {
            return Err(InvalidConfigError::new("logging.level must not be empty").into());
        }

        level.parse::<LevelFilter>().map_err(|err| {
            InvalidConfigError::new(format!(
                "invalid value for logging.level: {:?} ({err})",
                self.level
            ))
            .into()
        })
    }
}

impl Settings {
    /// ## Summary
    /// Returns a config builder holding only the built-in defaults.
    ///
    /// ## Errors
    /// Returns an error if a default cannot be set.
    pub fn defaults() -> ManagerResult<ConfigBuilder<DefaultState>> {
        Config::builder()
            .set_default("logging.level", DEFAULT_LOG_LEVEL)
            .map_err(|err| invalid_config(&err))
    }

    /// ## Summary
    /// Loads settings from the defaults, then `bialert.toml`, then `BIALERT_*`
    /// environment variables. Later sources take precedence.
    ///
    /// ## Errors
    /// Returns [`ManagerError::InvalidConfig`] if building, deserializing or
    /// validating the configuration fails.
    pub fn load() -> ManagerResult<Self> {
        Self::layered(
            config::File::with_name(CONFIG_FILE_NAME).required(false),
            environment(),
        )
    }

    /// ## Summary
    /// Stacks `file` over the defaults and `env` over both, then builds.
    ///
    /// ## Errors
    /// Returns [`ManagerError::InvalidConfig`] if building, deserializing or
    /// validating the configuration fails.
    pub fn layered<F>(file: F, env: Environment) -> ManagerResult<Self>
    where
        F: Source + Send + Sync + 'static,
    {
        let config = Self::defaults()?
            // TOML file
            .add_source(file)
            // Env, including anything `.env` put there
            .add_source(env)
            .build()
            .map_err(|err| invalid_config(&err))?;

        Self::from_config(config)
    }

    /// ## Summary
    /// Deserializes and validates an already-built configuration.
    ///
    /// ## Errors
    /// Returns [`ManagerError::InvalidConfig`] if deserializing or validating
    /// fails.
    pub fn from_config(config: Config) -> ManagerResult<Self> {
        let settings = config
            .try_deserialize::<Self>()
            .map_err(|err| invalid_config(&err))?;
        settings.validate()?;

        tracing::debug!(level = %settings.logging.level, "Settings validated");
        Ok(settings)
    }

    /// ## Errors
    /// Returns [`ManagerError::InvalidConfig`] naming the first rule that fails.
    pub fn validate(&self) -> ManagerResult<()> {
        self.logging.level_filter()?;
        Ok(())
    }
}

/// ## Summary
/// Environment source for `BIALERT_*` variables; `BIALERT_LOGGING_LEVEL`
/// maps to `logging.level`.
#[must_use]
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("_")
        .ignore_empty(true)
        .try_parsing(true)
}

fn invalid_config(err: &ConfigError) -> ManagerError {
    InvalidConfigError::new(err.to_string()).into()
}

/// ## Summary
/// Accepts the outcome of reading `.env`. Only a missing file is ignored.
///
/// ## Errors
/// Returns [`ManagerError::InvalidConfig`] if the file exists but cannot be
/// read or parsed.
pub fn accept_env_file<T>(loaded: Result<T, dotenvy::Error>) -> ManagerResult<()> {
    match loaded {
        Ok(_) => Ok(()),
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(InvalidConfigError::new(format!("invalid .env file: {err}")).into()),
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns [`ManagerError::InvalidConfig`] if `.env` is malformed, or if
/// loading or validating the configuration fails.
pub fn load_config() -> ManagerResult<Settings> {
    accept_env_file(dotenvy::dotenv())?;

    Settings::load()
}
