//! Search State
//!
//! This module contains the state management for the contact search UI.

use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, TryRecvError};
use std::sync::Arc;
use std::time::Duration;

use super::contact_api::ContactApi;
use super::recent::RecentSearches;
use crate::egui_app::storage::KeyValueStore;
use crate::shared::contacts::{Contact, ContactsResponse};
use crate::shared::error::LookupError;

/// Inline message shown when the lookup returns no contact
pub const NOT_FOUND_MESSAGE: &str = "No contact found for this email.";

/// Outcome of one lookup request
pub type SearchResult = Result<ContactsResponse, LookupError>;

/// What the search widget is showing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchState {
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    Found(Contact),
    NotFound(String),
    /// The request itself failed (network, HTTP status, API error)
    Failed(String),
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }

    /// The displayed contact, if any
    pub fn contact(&self) -> Option<&Contact> {
        match self {
            SearchState::Found(contact) => Some(contact),
            _ => None,
        }
    }

    /// Inline error message, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            SearchState::NotFound(message) | SearchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// A request waiting for its result
struct PendingSearch {
    query: String,
    receiver: Receiver<SearchResult>,
}

/// Owns the input, the displayed result and the recent-search list
pub struct SearchController {
    /// Email input field
    pub input: String,
    state: SearchState,
    recent: RecentSearches,
    pending: Option<PendingSearch>,
    api: Arc<dyn ContactApi>,
    store: Box<dyn KeyValueStore>,
}

impl SearchController {
    /// Create a controller, loading the recent-search list from `store`
    pub fn new(api: Arc<dyn ContactApi>, store: Box<dyn KeyValueStore>) -> Self {
        let recent = RecentSearches::load(&*store);
        tracing::debug!("Loaded {} recent searches", recent.len());

        Self {
            input: String::new(),
            state: SearchState::Idle,
            recent,
            pending: None,
            api,
            store,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn recent(&self) -> &RecentSearches {
        &self.recent
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Whether the search button should be enabled
    pub fn can_submit(&self) -> bool {
        !self.input.is_empty() && !self.is_loading()
    }

    /// Start a lookup for `query`, or for the input field when `query` is empty
    ///
    /// Returns `false` without touching any state when there is nothing to
    /// search for or a lookup is already in flight.
    pub fn search(&mut self, query: Option<&str>) -> bool {
        if self.is_loading() {
            tracing::debug!("Search ignored, a lookup is already in flight");
            return false;
        }

        let query = match query.filter(|q| !q.is_empty()) {
            Some(query) => query.to_string(),
            None => self.input.clone(),
        };
        if query.is_empty() {
            return false;
        }

        self.state = SearchState::Loading;

        let api = Arc::clone(&self.api);
        let email = query.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = api.search_contacts(&email);
            if tx.send(result).is_err() {
                tracing::debug!("Lookup for {} finished after its controller went away", email);
            }
        });

        tracing::debug!("Dispatched contact lookup for {}", query);
        self.pending = Some(PendingSearch {
            query,
            receiver: rx,
        });
        true
    }

    /// Apply a finished lookup, if one is ready. Never blocks.
    pub fn poll(&mut self) -> bool {
        let received = match self.pending.as_ref() {
            Some(pending) => pending.receiver.try_recv(),
            None => return false,
        };

        match received {
            Ok(result) => self.finish(Some(result)),
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => self.finish(None),
        }
    }

    /// Wait up to `timeout` for the pending lookup and apply it
    pub fn wait_for_result(&mut self, timeout: Duration) -> bool {
        let received = match self.pending.as_ref() {
            Some(pending) => pending.receiver.recv_timeout(timeout),
            None => return false,
        };

        match received {
            Ok(result) => self.finish(Some(result)),
            Err(RecvTimeoutError::Timeout) => false,
            Err(RecvTimeoutError::Disconnected) => self.finish(None),
        }
    }

    fn finish(&mut self, result: Option<SearchResult>) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };

        let result = result.unwrap_or_else(|| {
            Err(LookupError::transport("lookup ended without a response"))
        });
        self.apply_response(&pending.query, result);
        true
    }

    /// Apply the outcome of a lookup for `query`
    ///
    /// The first returned contact is displayed and `query` moves to the front
    /// of the recent-search list, which is then persisted. An empty result
    /// shows [`NOT_FOUND_MESSAGE`]; a failed request shows its error. Neither
    /// touches the recent-search list. Any lookup still in flight is
    /// abandoned, its result is never applied.
    pub fn apply_response(&mut self, query: &str, result: SearchResult) {
        if self.pending.take().is_some() {
            tracing::debug!("Abandoning in-flight lookup, applying result for {}", query);
        }

        match result {
            Ok(response) => match response.first_contact() {
                Some(contact) => {
                    tracing::info!(
                        "Found contact {} for {}",
                        contact.item_guid.as_deref().unwrap_or("<no id>"),
                        query
                    );
                    self.state = SearchState::Found(contact);
                    self.recent.record(query);
                    if let Err(e) = self.recent.persist(&*self.store) {
                        tracing::warn!("Failed to persist recent searches: {}", e);
                    }
                }
                None => {
                    tracing::info!("No contact found for {}", query);
                    self.state = SearchState::NotFound(NOT_FOUND_MESSAGE.to_string());
                }
            },
            Err(e) => {
                tracing::error!("Contact lookup for {} failed: {}", query, e);
                self.state = SearchState::Failed(e.to_string());
            }
        }
    }
}
