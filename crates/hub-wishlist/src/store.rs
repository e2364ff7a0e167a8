//! The wishlist store

use std::sync::Arc;

use hub_store::StateStore;

use crate::entry::WishlistEntry;
use crate::observer::{WishlistEvent, WishlistObserver};

/// Well-known key the serialized entry set lives under in the substrate.
pub const STORAGE_KEY: &str = "wishlist";

/// Insertion-ordered set of saved tools, durable across sessions.
///
/// `toggle` is the single mutation entry point: there is no separate
/// add/remove pair, so repeated identical user actions are naturally
/// idempotent and "add when already added" inconsistencies cannot occur.
///
/// Every mutation persists the resulting set through the substrate before
/// notifying observers. A failed write is logged and swallowed; wishlist
/// data is a convenience cache, not a system of record, and the caller has
/// already observed the new in-memory state.
pub struct Wishlist {
    entries: Vec<WishlistEntry>,
    store: Box<dyn StateStore>,
    observers: Vec<Arc<dyn WishlistObserver>>,
}

impl Wishlist {
    /// Rehydrate the wishlist from the durable substrate.
    ///
    /// Missing or corrupt persisted data degrades to an empty store. This is
    /// a silent reset, not an error: the page must always have a definite
    /// state to show.
    pub fn load(store: Box<dyn StateStore>) -> Self {
        let entries = match store.get(STORAGE_KEY) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(error = %e, "persisted wishlist is corrupt, resetting to empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        Self {
            entries,
            store,
            observers: Vec::new(),
        }
    }

    /// Subscribe to state-change notifications.
    pub fn add_observer(&mut self, observer: Arc<dyn WishlistObserver>) {
        self.observers.push(observer);
    }

    /// Whether `id` is currently saved.
    pub fn is_member(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Number of saved tools, for badge surfaces.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Saved entries in insertion order.
    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
    }

    /// Flip membership of `id` and return the new state.
    ///
    /// Absent: inserts `{id, name, added_at: now}` and returns `true`.
    /// Present: removes the entry and returns `false`. The resulting set is
    /// persisted before observers are notified.
    pub fn toggle(&mut self, id: &str, name: &str) -> bool {
        let (is_member, event) = match self.entries.iter().position(|e| e.id == id) {
            Some(pos) => {
                self.entries.remove(pos);
                (false, WishlistEvent::Removed { id: id.to_string() })
            }
            None => {
                let entry = WishlistEntry::new(id, name);
                self.entries.push(entry.clone());
                (true, WishlistEvent::Added(entry))
            }
        };

        self.persist();
        self.emit(&event);
        is_member
    }

    /// Remove every entry. Explicit user action only, never implicit.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
        self.emit(&WishlistEvent::Cleared);
    }

    fn persist(&mut self) {
        let raw = match serde_json::to_string(&self.entries) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize wishlist, skipping persist");
                return;
            }
        };
        if let Err(e) = self.store.set(STORAGE_KEY, &raw) {
            tracing::warn!(error = %e, "failed to persist wishlist, in-memory state is unaffected");
        }
    }

    fn emit(&self, event: &WishlistEvent) {
        for observer in &self.observers {
            observer.on_change(event);
        }
    }
}
