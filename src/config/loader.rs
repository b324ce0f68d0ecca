use reqwest::Url;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
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
    /// Uses `~/.config/amphibians/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("amphibians").join("config.toml")
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
    /// - The base URL is an absolute http(s) URL whose path ends in `/`
    /// - The path joins onto it
    /// - The UI tick rate is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.endpoint_url()?;

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Full URL of the amphibian list: `base_url` joined with `path`.
    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        let base = parse_http_url(&self.endpoint.base_url)?;
        // `Url::join` replaces the last segment of a base without a trailing slash.
        if !base.path().ends_with('/') {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "endpoint.base_url '{}' must end with '/'",
                    self.endpoint.base_url
                ),
            });
        }
        base.join(&self.endpoint.path)
            .map_err(|e| ConfigError::ValidationError {
                message: format!(
                    "Cannot join path '{}' onto '{}': {}",
                    self.endpoint.path, self.endpoint.base_url, e
                ),
            })
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }
}

/// Parses `raw` as an absolute http or https URL.
pub fn parse_http_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::ValidationError {
        message: format!("Invalid URL '{}': {}", raw, e),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::ValidationError {
            message: format!("Unsupported URL scheme '{}' in '{}'", other, raw),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_joins_path() {
        let url = Config::default().endpoint_url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://android-kotlin-fun-mars-server.appspot.com/amphibians"
        );
    }

    #[test]
    fn base_url_without_trailing_slash_is_rejected() {
        let mut config = Config::default();
        config.endpoint.base_url = "http://127.0.0.1:9000/api".to_string();
        assert!(matches!(
            config.endpoint_url(),
            Err(ConfigError::ValidationError { .. })
        ));
        assert!(config.validate().is_err());

        config.endpoint.base_url = "http://127.0.0.1:9000/api/".to_string();
        assert_eq!(
            config.endpoint_url().unwrap().as_str(),
            "http://127.0.0.1:9000/api/amphibians"
        );
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = parse_http_url("ftp://example.com/").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[test]
    fn rejects_zero_tick_rate() {
        let mut config = Config::default();
        config.ui.tick_rate_ms = 0;
        assert!(config.validate().is_err());
    }
}
