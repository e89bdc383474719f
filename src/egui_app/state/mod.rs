use std::sync::Arc;

use crate::egui_app::search::{ApiClient, SearchController};
use crate::egui_app::storage::FileStore;
use crate::egui_app::Config;

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    /// Contact lookup widget state
    pub search: SearchController,
}

impl AppState {
    pub fn new() -> Self {
        let config = Config::new();
        tracing::info!(
            "AppState initialized (server: {}, data dir: {})",
            config.server_url(),
            config.data_dir().display()
        );

        let api = Arc::new(ApiClient::new(config.clone()));
        let store = FileStore::new(config.data_dir());

        Self {
            search: SearchController::new(api, Box::new(store)),
            config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
