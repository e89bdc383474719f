//! Common test utilities and helpers
//!
//! This module provides shared utilities for the integration tests:
//! - A scripted `ContactApi` that records every lookup
//! - Contact and profile picture fixtures

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use contact_lookup::egui_app::{ContactApi, KeyValueStore, SearchController};
use contact_lookup::egui_app::search::SearchResult;
use contact_lookup::shared::{Contact, ContactsResponse};

/// How long tests wait for a dispatched lookup
pub const RESULT_TIMEOUT: Duration = Duration::from_secs(5);

/// API double answering from a per-email script
///
/// Emails without a scripted answer get an empty result set.
#[derive(Clone, Default)]
pub struct ScriptedApi {
    answers: Arc<Mutex<HashMap<String, SearchResult>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(&self, email: &str, result: SearchResult) -> &Self {
        self.answers.lock().unwrap().insert(email.to_string(), result);
        self
    }

    /// Answer `email` with one contact carrying that email
    pub fn knows(&self, email: &str) -> &Self {
        self.answer(
            email,
            Ok(ContactsResponse::with_data(vec![contact_for(email)])),
        )
    }

    /// Emails looked up so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl ContactApi for ScriptedApi {
    fn search_contacts(&self, email: &str) -> SearchResult {
        self.calls.lock().unwrap().push(email.to_string());
        self.answers
            .lock()
            .unwrap()
            .get(email)
            .cloned()
            .unwrap_or_else(|| Ok(ContactsResponse::default()))
    }
}

pub fn contact_for(email: &str) -> Contact {
    Contact {
        full_name: Some(format!("Contact {}", email)),
        email1_address: Some(email.to_string()),
        ..Contact::default()
    }
}

/// Base64-looking payload of `len` characters starting with `prefix`
pub fn payload(prefix: &str, len: usize) -> String {
    let mut value = prefix.to_string();
    while value.len() < len {
        value.push('A');
    }
    value
}

pub fn controller(api: &ScriptedApi, store: impl KeyValueStore + 'static) -> SearchController {
    SearchController::new(Arc::new(api.clone()), Box::new(store))
}

/// Run one search to completion
pub fn search_and_wait(controller: &mut SearchController, email: &str) {
    assert!(controller.search(Some(email)), "search for {} was not dispatched", email);
    assert!(controller.wait_for_result(RESULT_TIMEOUT), "search for {} timed out", email);
}
