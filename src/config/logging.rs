//! Logging configuration

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::ValidationError;

/// Log output settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directives (default: "info,topsis_sort_c=debug")
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    "info,topsis_sort_c=debug".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

impl LoggingConfig {
    /// Build the filter described by `level`
    pub fn env_filter(&self) -> Result<EnvFilter, ValidationError> {
        EnvFilter::try_new(&self.level).map_err(|e| ValidationError::InvalidLogFilter {
            filter: self.level.clone(),
            reason: e.to_string(),
        })
    }

    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.level.trim().is_empty() {
            return Err(ValidationError::MissingRequired("logging.level"));
        }
        self.env_filter().map(|_| ())
    }
}
