use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable names read once at startup.
pub const ENV_API_URL: &str = "ITEMDESK_API_URL";
pub const ENV_OPEN_ID: &str = "ITEMDESK_OPEN_ID";
pub const ENV_API_TIMEOUT: &str = "ITEMDESK_API_TIMEOUT";
pub const ENV_API_RETRY_COUNT: &str = "ITEMDESK_API_RETRY_COUNT";
pub const ENV_API_RETRY_DELAY: &str = "ITEMDESK_API_RETRY_DELAY";
pub const ENV_AUTH_TOKEN: &str = "ITEMDESK_AUTH_TOKEN";

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
    /// Uses `~/.config/itemdesk/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("itemdesk").join("config.toml")
    }

    /// Loads configuration from the default config file, then applies
    /// environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_env(&Self::config_path(), |key| std::env::var(key).ok())
    }

    /// Loads configuration from `path` and the given environment lookup.
    ///
    /// - A missing file yields `Config::default()`.
    /// - Environment values win over file values.
    /// - The result is validated.
    pub fn load_with_env<F>(path: &Path, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = if path.exists() {
            Self::load_from(path)?
        } else {
            Config::default()
        };
        config.apply_env(env);
        config.validate()?;
        Ok(config)
    }

    /// Parses a TOML config file without environment overrides.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Applies environment overrides.
    ///
    /// Empty, zero or unparseable numeric values leave the current value in
    /// place. `ITEMDESK_OPEN_ID` enables auth for any non-empty value.
    pub fn apply_env<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| env(key).filter(|value| !value.trim().is_empty());

        if let Some(url) = non_empty(ENV_API_URL) {
            self.api.base_url = url;
        }
        if non_empty(ENV_OPEN_ID).is_some() {
            self.auth.enabled = true;
        }
        if let Some(timeout) = non_empty(ENV_API_TIMEOUT).and_then(|v| parse_positive(&v)) {
            self.api.timeout_ms = timeout;
        }
        if let Some(count) = non_empty(ENV_API_RETRY_COUNT).and_then(|v| parse_positive(&v)) {
            self.api.retry_count = u32::try_from(count).unwrap_or(u32::MAX);
        }
        if let Some(delay) = non_empty(ENV_API_RETRY_DELAY).and_then(|v| parse_positive(&v)) {
            self.api.retry_delay_ms = delay;
        }
        if let Some(token) = non_empty(ENV_AUTH_TOKEN) {
            self.auth.token = Some(token);
        }
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The base URL is an absolute http(s) URL
    /// - The timeout is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.api.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "api.base_url must not be empty".to_string(),
            });
        }

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("api.base_url '{}' must start with http:// or https://", base_url),
            });
        }

        if self.api.timeout_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "api.timeout_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

fn parse_positive(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().filter(|v| *v > 0)
}
