//! Search Module
//!
//! This module contains everything behind the contact lookup widget: the
//! API client, the search controller, the recent-search list and the egui
//! components that render them.

pub mod state;
pub mod recent;
pub mod contact_api;
pub mod main_layout;
pub mod components;

pub use state::{SearchController, SearchResult, SearchState, NOT_FOUND_MESSAGE};
pub use recent::{RecentSearches, MAX_RECENT, RECENT_SEARCHES_KEY};
pub use contact_api::{ApiClient, ContactApi};
pub use main_layout::render_search_view;
