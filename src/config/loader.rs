use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur while loading or validating configuration.
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
    /// Returns the default configuration file path:
    /// `<config dir>/larder/config.toml`.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("larder").join("config.toml")
    }

    /// Loads configuration from the default path.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from a specific file.
    ///
    /// A missing file is not an error; defaults are returned so that
    /// the store URL can still arrive via `LARDER_STORE_URL` or
    /// `--store-url`. Validation is a separate step (`validate`) run
    /// after those overrides have been applied.
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

        Ok(config)
    }

    /// Replaces the store URL if the override carries one. Callers pass
    /// overrides weakest first; the last non-empty value wins.
    pub fn override_store_url(&mut self, url: Option<String>) {
        if let Some(url) = url.filter(|candidate| !candidate.is_empty()) {
            self.store.base_url = url;
        }
    }

    /// Validates the effective configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.base_url.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "store.base_url is not set; configure it in config.toml, \
                          set LARDER_STORE_URL, or pass --store-url"
                    .to_string(),
            });
        }

        if !self.store.base_url.starts_with("http://")
            && !self.store.base_url.starts_with("https://")
        {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "store.base_url must be an http(s) URL, got '{}'",
                    self.store.base_url
                ),
            });
        }

        if self.store.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "store.timeout_seconds must be greater than zero".to_string(),
            });
        }

        if self.terminal.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "terminal.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
