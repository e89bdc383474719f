//! Durable storage integration tests
//!
//! Exercises the file-backed store through the search controller.

mod common;

use std::fs;

use pretty_assertions::assert_eq;

use common::*;
use contact_lookup::egui_app::search::RECENT_SEARCHES_KEY;
use contact_lookup::egui_app::{FileStore, KeyValueStore};

#[test]
fn test_recent_searches_survive_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let api = ScriptedApi::new();
    api.knows("a@x.io").knows("b@x.io");

    let mut first = controller(&api, FileStore::new(dir.path()));
    search_and_wait(&mut first, "a@x.io");
    search_and_wait(&mut first, "b@x.io");
    drop(first);

    let second = controller(&api, FileStore::new(dir.path()));
    assert_eq!(second.recent().entries(), ["b@x.io", "a@x.io"]);
}

#[test]
fn test_invalid_persisted_value_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    store.set(RECENT_SEARCHES_KEY, "not valid json").unwrap();

    let controller = controller(&ScriptedApi::new(), store);
    assert!(controller.recent().is_empty());
}

#[test]
fn test_corrupt_store_file_starts_empty_and_recovers() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    fs::write(store.path(), "{ truncated").unwrap();

    let api = ScriptedApi::new();
    api.knows("a@x.io");

    let mut controller = controller(&api, store.clone());
    assert!(controller.recent().is_empty());

    search_and_wait(&mut controller, "a@x.io");
    assert_eq!(
        store.get(RECENT_SEARCHES_KEY).unwrap().as_deref(),
        Some("[\"a@x.io\"]")
    );
}

#[test]
fn test_unwritable_store_keeps_in_memory_list() {
    let dir = tempfile::tempdir().unwrap();
    // A regular file where the data directory should be
    let blocker = dir.path().join("blocked");
    fs::write(&blocker, "").unwrap();

    let api = ScriptedApi::new();
    api.knows("a@x.io");

    let mut controller = controller(&api, FileStore::new(&blocker));
    search_and_wait(&mut controller, "a@x.io");

    assert!(controller.state().contact().is_some());
    assert_eq!(controller.recent().entries(), ["a@x.io"]);
}
