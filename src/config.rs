//! Session configuration.
//!
//! Only the driver is configurable.  Stat ranges, starting values and
//! thresholds are fixed constants in [`crate::pet::stats`].
//! Values can be overridden from a JSON file passed with `--config`.

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;

/// Name used when the player leaves the name prompt blank.
pub const DEFAULT_PET_NAME: &str = "Buddy";

/// Driver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Substituted for a blank pet name.
    pub default_name: String,
    /// `env_logger` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Print the title banner and stat scale on start.
    pub show_banner: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_name: DEFAULT_PET_NAME.to_string(),
            log_filter: "warn".to_string(),
            show_banner: true,
        }
    }
}

impl SessionConfig {
    /// Reject values the driver cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_name.trim().is_empty() {
            return Err(ConfigError::ValidationFailed("default_name must not be blank"));
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::ValidationFailed("log_filter must not be blank"));
        }
        Ok(())
    }

    /// The name to adopt with: trimmed input, or the default if blank.
    pub fn resolve_name(&self, input: &str) -> String {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            self.default_name.trim().to_string()
        } else {
            trimmed.to_string()
        }
    }
}
