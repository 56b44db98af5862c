//! JSON file configuration adapter.
//!
//! Implements [`ConfigPort`] on top of a single JSON document on disk.
//! Both `load` and `save` validate, so a hand-edited file with a blank
//! default name is refused rather than patched up.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::SessionConfig;

/// [`ConfigPort`] backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonConfigFile {
    path: PathBuf,
}

impl JsonConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load, or fall back to defaults when the file does not exist.
    ///
    /// Any other failure (corrupt JSON, validation) is still an error.
    pub fn load_or_default(&self) -> Result<SessionConfig, ConfigError> {
        match self.load() {
            Err(ConfigError::NotFound) => {
                info!(
                    "JsonConfigFile: {} not found, using defaults",
                    self.path.display()
                );
                Ok(SessionConfig::default())
            }
            other => other,
        }
    }
}

impl ConfigPort for JsonConfigFile {
    fn load(&self) -> Result<SessionConfig, ConfigError> {
        let text = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::NotFound,
            _ => ConfigError::IoError,
        })?;
        let cfg: SessionConfig = serde_json::from_str(&text).map_err(|e| {
            warn!("JsonConfigFile: {} is not valid config: {}", self.path.display(), e);
            ConfigError::Corrupted
        })?;
        cfg.validate()?;
        info!("JsonConfigFile: loaded config from {}", self.path.display());
        Ok(cfg)
    }

    fn save(&self, config: &SessionConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let text = serde_json::to_string_pretty(config).map_err(|_| ConfigError::Corrupted)?;
        fs::write(&self.path, text).map_err(|_| ConfigError::IoError)?;
        info!("JsonConfigFile: saved config to {}", self.path.display());
        Ok(())
    }
}
