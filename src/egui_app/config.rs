use std::path::{Path, PathBuf};

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Directory name under the platform data dir
const APP_DIR_NAME: &str = "contact-lookup";

/// Application configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
    data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let server_url = std::env::var("CONTACT_API_URL")
            .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());

        let data_dir = std::env::var("CONTACT_LOOKUP_DATA_DIR").ok().map(PathBuf::from);
        let mut builder = AppConfig::builder().server_url(server_url.clone());
        if let Some(dir) = data_dir.clone() {
            builder = builder.data_dir(dir);
        }

        let app = builder.build().unwrap_or_else(|e| {
            tracing::warn!("Ignoring CONTACT_API_URL={}: {}", server_url, e);
            AppConfig {
                server_url: Some(DEFAULT_SERVER_URL.to_string()),
                data_dir,
                ..AppConfig::default()
            }
        });

        Self::from_app(app)
    }
}

impl Config {
    /// Create a new configuration from the environment
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        Ok(Self::from_app(builder.build()?))
    }

    fn from_app(mut app: AppConfig) -> Self {
        if app.service_path.is_empty() {
            app.service_path = crate::shared::config::DEFAULT_SERVICE_PATH.to_string();
        }
        let data_dir = app.data_dir.clone().unwrap_or_else(default_data_dir);
        Self { app, data_dir }
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    /// Get the full URL for an API method
    pub fn method_url(&self, method: &str) -> String {
        format!("{}{}/{}", self.server_url(), self.app.service_path, method)
    }

    /// Directory holding durable client state
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// Platform data directory, or the temp dir when there is none
fn default_data_dir() -> PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
    path.push(APP_DIR_NAME);
    path
}
