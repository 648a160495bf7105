//! Application configuration
//!
//! Sources, later ones winning:
//! - built-in defaults
//! - optional `co2-calculator.{toml,yaml,json}` in the working directory
//! - `CO2CALC_`-prefixed environment variables, with `__` between nested
//!   keys (e.g. `CO2CALC_ORS__BASE_URL`, `CO2CALC_ORS__TIMEOUT_SECS`)
//!
//! The ORS token is usually supplied separately through `ORS_TOKEN` and
//! applied with [`AppConfig::with_token_override`].

use std::path::Path;

use integration_ors::OrsConfig;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Base name of the optional configuration file
pub const CONFIG_FILE_NAME: &str = "co2-calculator";

/// Prefix for configuration environment variables
pub const ENV_PREFIX: &str = "CO2CALC";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// OpenRouteService client settings
    #[serde(default)]
    pub ors: OrsConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value has the wrong
    /// type.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name(CONFIG_FILE_NAME).required(false))
    }

    /// Load configuration from an explicit file plus environment
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed.
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = OrsConfig::default();
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("ors.base_url", defaults.base_url)?
            .set_default("ors.timeout_secs", defaults.timeout_secs)?
            .set_default("ors.connect_timeout_secs", defaults.connect_timeout_secs)?
            .set_default("ors.user_agent", defaults.user_agent)?
            .add_source(file)
            // No try_parsing: numeric-looking tokens must stay strings
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(base_url = %config.ors.base_url, "Configuration loaded");
        Ok(config)
    }

    /// Replace the configured ORS token when one was given explicitly
    #[must_use]
    pub fn with_token_override(mut self, token: Option<SecretString>) -> Self {
        if let Some(token) = token {
            self.ors.api_key = Some(token);
        }
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending setting.
    pub fn validate(&self) -> Result<(), String> {
        self.ors.validate().map_err(|e| format!("ors: {e}"))
    }
}
