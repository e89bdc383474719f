//! egui Native Desktop App Module
//!
//! This module provides a native desktop application using egui/eframe
//! that looks up CRM contacts by email.
//!
//! # Architecture
//!
//! The egui_app module is organized into focused submodules:
//!
//! - **`config`** - Configuration management (server URL, data directory)
//! - **`storage`** - Durable key/value storage
//! - **`search`** - API client, search controller, recent searches and components
//! - **`state`** - Top-level app state
//! - **`views`** - Top bar and main panel
//! - **`theme`** - Colors and frames
//! - **`main`** - Main application entry point (binary)
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the egui app:
//! // cargo run --bin contact_lookup
//! ```

pub mod config;
pub mod storage;
pub mod search;
pub mod state;
pub mod views;
pub mod theme;

// Re-export commonly used types
pub use config::Config;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use search::{ApiClient, ContactApi, RecentSearches, SearchController, SearchState};
pub use state::AppState;
