//! Contact Lookup - Main Library
//!
//! Contact Lookup is a small desktop client that looks up a CRM contact by
//! email address, shows the matching contact card and remembers the last few
//! successful searches between sessions.
//!
//! # Overview
//!
//! This library provides:
//! - Typed contact records decoded from the CRM `SearchContacts` method
//! - Profile picture classification (remote URL, inline base64 image, none)
//! - A search controller with one in-flight request at a time
//! - A bounded, deduplicated recent-search list kept in durable storage
//! - Native desktop UI via egui
//!
//! # Module Structure
//!
//! - **`shared`** - Platform-agnostic types
//!   - Contact wire types and the profile picture resolver
//!   - Configuration builder
//!   - Error types
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - HTTP API client
//!   - Key/value storage for the recent-search list
//!   - Search controller and views
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use contact_lookup::egui_app::{ApiClient, Config, MemoryStore, SearchController};
//!
//! let config = Config::new();
//! let api = Arc::new(ApiClient::new(config.clone()));
//! let mut controller = SearchController::new(api, Box::new(MemoryStore::new()));
//!
//! controller.search(Some("jane@example.com"));
//! controller.wait_for_result(Duration::from_secs(10));
//! ```
//!
//! # Thread Safety
//!
//! - **Native**: egui is single-threaded immediate mode GUI; requests run on a
//!   worker thread and report back over a channel polled once per frame

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
