//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TOPSIS_SORT` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use topsis_sort_c::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Normalization: {}", config.sorting.method);
//! ```

mod error;
mod logging;
mod sorting;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use sorting::SortingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so loading succeeds with an empty environment.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Default options for classification runs
    #[serde(default)]
    pub sorting: SortingConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TOPSIS_SORT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TOPSIS_SORT__SORTING__METHOD=interval` -> `sorting.method = interval`
    /// - `TOPSIS_SORT__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TOPSIS_SORT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the log filter is empty or malformed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sorting::{
        AssignmentMode, DegenerateCriterionPolicy, NormalizationMethod, ReferenceRows,
    };
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "TOPSIS_SORT__SORTING__METHOD",
        "TOPSIS_SORT__SORTING__REFERENCE_ROWS",
        "TOPSIS_SORT__SORTING__MODE",
        "TOPSIS_SORT__SORTING__DEGENERATE_CRITERION",
        "TOPSIS_SORT__LOGGING__LEVEL",
        "TOPSIS_SORT__LOGGING__JSON",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.sorting, SortingConfig::default());
        assert_eq!(config.logging, LoggingConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_sorting_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TOPSIS_SORT__SORTING__METHOD", "interval");
        env::set_var("TOPSIS_SORT__SORTING__REFERENCE_ROWS", "alternatives");
        env::set_var("TOPSIS_SORT__SORTING__MODE", "binary");
        env::set_var("TOPSIS_SORT__SORTING__DEGENERATE_CRITERION", "reject");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.sorting.method, NormalizationMethod::Interval);
        assert_eq!(config.sorting.reference_rows, ReferenceRows::Alternatives);
        assert_eq!(config.sorting.mode, AssignmentMode::Binary);
        assert_eq!(
            config.sorting.degenerate_criterion,
            DegenerateCriterionPolicy::Reject
        );
    }

    #[test]
    fn test_load_logging_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TOPSIS_SORT__LOGGING__LEVEL", "warn");
        env::set_var("TOPSIS_SORT__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.logging.level, "warn");
        assert!(config.logging.json);
    }

    #[test]
    fn test_unknown_method_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TOPSIS_SORT__SORTING__METHOD", "zscore");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate_rejects_empty_log_level() {
        let config = AppConfig {
            logging: LoggingConfig {
                level: String::new(),
                json: false,
            },
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
