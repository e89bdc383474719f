//! Application configuration module
//!
//! Provides configuration types for the application.

use std::path::PathBuf;

use thiserror::Error;

/// Path under the server URL where API methods are exposed
pub const DEFAULT_SERVICE_PATH: &str = "/API.svc";

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Server URL
    pub server_url: Option<String>,
    /// Service path appended to the server URL before the method name
    pub service_path: String,
    /// Directory holding durable client state
    pub data_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.server_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }

        if self.service_path.is_empty() {
            return Err(ConfigError::MissingValue("service_path"));
        }

        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    service_path: Option<String>,
    data_dir: Option<PathBuf>,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: String) -> Self {
        self.server_url = Some(url);
        self
    }

    /// Set the service path (defaults to `/API.svc`)
    pub fn service_path(mut self, path: String) -> Self {
        self.service_path = Some(path);
        self
    }

    /// Set the directory for durable client state
    pub fn data_dir(mut self, dir: PathBuf) -> Self {
        self.data_dir = Some(dir);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            server_url: self.server_url.map(|url| url.trim_end_matches('/').to_string()),
            service_path: self
                .service_path
                .unwrap_or_else(|| DEFAULT_SERVICE_PATH.to_string()),
            data_dir: self.data_dir,
        };

        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_service_path() {
        let config = AppConfig::builder().build().unwrap();
        assert_eq!(config.service_path, DEFAULT_SERVICE_PATH);
        assert!(config.server_url.is_none());
    }

    #[test]
    fn test_builder_strips_trailing_slash() {
        let config = AppConfig::builder()
            .server_url("https://crm.example.com/".to_string())
            .build()
            .unwrap();
        assert_eq!(config.server_url.as_deref(), Some("https://crm.example.com"));
    }

    #[test]
    fn test_builder_rejects_non_http_url() {
        let result = AppConfig::builder()
            .server_url("ftp://crm.example.com".to_string())
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_builder_rejects_empty_service_path() {
        let result = AppConfig::builder().service_path(String::new()).build();
        assert!(matches!(result, Err(ConfigError::MissingValue("service_path"))));
    }
}
