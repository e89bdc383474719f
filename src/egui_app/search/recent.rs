//! Recent Searches
//!
//! Most-recent-first list of emails that found a contact. At most
//! [`MAX_RECENT`] entries, no duplicates. Stored as a JSON array of strings
//! under [`RECENT_SEARCHES_KEY`] and replaced as a whole on every change.

use crate::egui_app::storage::KeyValueStore;

/// Maximum number of remembered searches
pub const MAX_RECENT: usize = 3;

/// Storage key of the persisted list
pub const RECENT_SEARCHES_KEY: &str = "recentSearches";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentSearches {
    entries: Vec<String>,
}

impl RecentSearches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the persisted list
    ///
    /// Anything but a JSON array of strings yields an empty list. A stored
    /// list that breaks the size or uniqueness rule is normalized.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let raw = match store.get(RECENT_SEARCHES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::new(),
            Err(e) => {
                tracing::warn!("Failed to read recent searches: {}", e);
                return Self::new();
            }
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(stored) => {
                let mut recent = Self::new();
                for email in stored.into_iter().rev() {
                    recent.record(&email);
                }
                recent
            }
            Err(e) => {
                tracing::warn!("Discarding malformed recent searches: {}", e);
                Self::new()
            }
        }
    }

    /// Move `email` to the front, dropping the oldest entry past [`MAX_RECENT`]
    pub fn record(&mut self, email: &str) {
        self.entries.retain(|entry| entry != email);
        self.entries.insert(0, email.to_string());
        self.entries.truncate(MAX_RECENT);
    }

    /// Replace the persisted list with this one
    pub fn persist(&self, store: &dyn KeyValueStore) -> crate::egui_app::storage::Result<()> {
        let json = serde_json::to_string(&self.entries)?;
        store.set(RECENT_SEARCHES_KEY, &json)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}
