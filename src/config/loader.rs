use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/phonebook/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("phonebook").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The base URL parses, uses http or https and has no query or fragment
    /// - The collection path is not empty, has no query or fragment, and
    ///   joins with the base URL into a valid URL
    /// - Display and tick durations are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = reqwest::Url::parse(&self.server.base_url).map_err(|e| {
            ConfigError::ValidationError {
                message: format!("Invalid base_url '{}': {}", self.server.base_url, e),
            }
        })?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "base_url must use http or https, got '{}'",
                    base_url.scheme()
                ),
            });
        }

        if base_url.query().is_some() || base_url.fragment().is_some() {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "base_url must not carry a query or fragment: '{}'",
                    self.server.base_url
                ),
            });
        }

        if self.server.resource.trim_matches('/').trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "resource must not be empty".to_string(),
            });
        }

        if self.server.resource.contains(['?', '#']) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "resource must be a plain path, got '{}'",
                    self.server.resource
                ),
            });
        }

        let collection = self.server.collection_url();
        reqwest::Url::parse(&collection).map_err(|e| ConfigError::ValidationError {
            message: format!("Invalid collection url '{}': {}", collection, e),
        })?;

        if self.notification.display_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "notification.display_ms must be greater than zero".to_string(),
            });
        }

        if self.ui.tick_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
