//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `HEMOLINK` prefix
//! and `__` (double underscore) separating nested keys.
//!
//! # Example
//!
//! ```no_run
//! use hemolink::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod features;
mod reminders;

pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use reminders::ReminderConfig;

use serde::Deserialize;

/// Root application configuration.
///
/// Every section has sensible defaults, so `load()` succeeds with no
/// environment at all.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Reminder schedule configuration
    #[serde(default)]
    pub reminders: ReminderConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `HEMOLINK` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `HEMOLINK__REMINDERS__OFFSET_HOURS=72,24,2`
    /// - `HEMOLINK__FEATURES__LEGACY_CLEAR_POOL_ON_CLAIM=true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("HEMOLINK")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("reminders.offset_hours")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.reminders.validate()?;
        Ok(())
    }
}
