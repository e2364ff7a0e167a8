//! End-to-end integration tests for the dispatch core and wishlist store
//!
//! These tests exercise the complete flow the shell drives: registry
//! population -> dispatch -> fallback notification, and wishlist toggle ->
//! persistence -> rehydration, across real crate boundaries and a real
//! file-backed store.

use std::sync::{Arc, Mutex};

use hub_store::{FileStore, MemoryStore, StateStore};
use hub_test_utils::temp_state_path;
use hub_tools::{
    BUILTIN_COUNT, DispatchResult, Notification, Notifier, Tool, ToolDispatcher, ToolRegistry,
    catalog,
};
use hub_wishlist::Wishlist;

/// Notifier that records every notification it is handed.
#[derive(Default)]
struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    fn count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        self.seen.lock().unwrap().push(notification.clone());
    }
}

struct StubTool;

impl Tool for StubTool {
    fn id(&self) -> &str {
        "calculator"
    }

    fn name(&self) -> &str {
        "Calculator"
    }

    fn description(&self) -> &str {
        "stub"
    }

    fn run(&self, input: &str) -> hub_tools::Result<String> {
        Ok(input.to_string())
    }
}

// --- Dispatch scenarios ---

#[test]
fn dispatching_against_an_empty_registry_notifies_once() {
    // Scenario A
    let recorder = Arc::new(RecordingNotifier::default());
    let mut dispatcher = ToolDispatcher::with_notifier(ToolRegistry::new(), recorder.clone());

    let result = dispatcher.dispatch("calculator");

    assert!(matches!(result, DispatchResult::Unimplemented));
    assert_eq!(recorder.count(), 1);
}

#[test]
fn dispatching_a_registered_id_returns_the_exact_implementation() {
    // Scenario B
    let tool: Arc<dyn Tool> = Arc::new(StubTool);
    let mut registry = ToolRegistry::new();
    registry.register(Arc::clone(&tool)).unwrap();

    let mut dispatcher = ToolDispatcher::new(registry);
    let result = dispatcher.dispatch("calculator");

    let bound = result.tool().expect("calculator should be bound");
    assert!(Arc::ptr_eq(bound, &tool));
}

#[test]
fn every_builtin_dispatches_bound() {
    let registry = ToolRegistry::with_builtins().unwrap();
    let ids: Vec<String> = registry.ids().map(String::from).collect();
    assert_eq!(ids.len(), BUILTIN_COUNT);

    let mut dispatcher = ToolDispatcher::new(registry);
    for id in ids {
        assert!(
            dispatcher.dispatch(&id).is_bound(),
            "builtin '{id}' should dispatch bound"
        );
    }
}

#[test]
fn catalog_only_ids_fall_back_with_one_toast_each() {
    let recorder = Arc::new(RecordingNotifier::default());
    let registry = ToolRegistry::with_builtins().unwrap();
    let mut dispatcher = ToolDispatcher::with_notifier(registry, recorder.clone());

    let unbound: Vec<_> = catalog::catalog()
        .iter()
        .filter(|info| !dispatcher.registry().contains(info.id))
        .map(|info| info.id)
        .collect();
    assert!(!unbound.is_empty(), "the directory lists upcoming tools");

    for id in &unbound {
        assert!(!dispatcher.dispatch(id).is_bound());
    }
    assert_eq!(recorder.count(), unbound.len());

    // Re-dispatching within the same cycle stays quiet
    for id in &unbound {
        dispatcher.dispatch(id);
    }
    assert_eq!(recorder.count(), unbound.len());

    // A fresh navigation notifies again
    dispatcher.begin_cycle();
    dispatcher.dispatch(unbound[0]);
    assert_eq!(recorder.count(), unbound.len() + 1);
}

#[test]
fn duplicate_registration_aborts_startup() {
    let mut registry = ToolRegistry::with_builtins().unwrap();
    let err = registry.register(Arc::new(StubTool)).unwrap_err();
    assert!(matches!(err, hub_tools::Error::DuplicateId { .. }));
}

// --- Wishlist scenarios ---

#[test]
fn toggle_on_then_off_round_trips_membership() {
    // Scenario C
    let mut wishlist = Wishlist::load(Box::new(MemoryStore::new()));

    assert!(wishlist.toggle("qr-generator", "QR Generator"));
    assert_eq!(wishlist.count(), 1);

    assert!(!wishlist.toggle("qr-generator", "QR Generator"));
    assert_eq!(wishlist.count(), 0);
}

#[test]
fn interleaved_toggles_leave_the_expected_set() {
    // Scenario D
    let mut wishlist = Wishlist::load(Box::new(MemoryStore::new()));
    wishlist.toggle("a", "A");
    wishlist.toggle("b", "B");
    wishlist.toggle("a", "A");

    let entries = wishlist.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "b");
    assert_eq!(entries[0].name, "B");
}

#[test]
fn wishlist_survives_a_real_restart() {
    let (_dir, path) = temp_state_path();

    let mut wishlist = Wishlist::load(Box::new(FileStore::open(&path)));
    wishlist.toggle("calculator", "Calculator");
    wishlist.toggle("hash-generator", "Hash Generator");
    wishlist.toggle("unit-converter", "Unit Converter");
    wishlist.toggle("hash-generator", "Hash Generator"); // removed again
    let before = wishlist.entries().to_vec();
    drop(wishlist);

    // Fresh session, same substrate
    let reloaded = Wishlist::load(Box::new(FileStore::open(&path)));
    assert_eq!(reloaded.entries(), before.as_slice());
    assert_eq!(reloaded.count(), 2);
    assert!(reloaded.is_member("calculator"));
    assert!(reloaded.is_member("unit-converter"));
    assert!(!reloaded.is_member("hash-generator"));
}

#[test]
fn externally_cleared_storage_degrades_to_empty() {
    let (_dir, path) = temp_state_path();

    let mut wishlist = Wishlist::load(Box::new(FileStore::open(&path)));
    wishlist.toggle("calculator", "Calculator");
    drop(wishlist);

    // Simulate the substrate being cleared behind our back
    std::fs::remove_file(&path).unwrap();

    let reloaded = Wishlist::load(Box::new(FileStore::open(&path)));
    assert_eq!(reloaded.count(), 0);
}

#[test]
fn wishlist_state_lives_under_the_well_known_key() {
    let (_dir, path) = temp_state_path();

    let mut wishlist = Wishlist::load(Box::new(FileStore::open(&path)));
    wishlist.toggle("calculator", "Calculator");
    drop(wishlist);

    let store = FileStore::open(&path);
    let raw = store.get(hub_wishlist::STORAGE_KEY).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed[0]["id"], "calculator");
    assert_eq!(parsed[0]["name"], "Calculator");
}
