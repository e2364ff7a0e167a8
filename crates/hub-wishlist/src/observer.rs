//! State-change notifications from the wishlist to its observers

use crate::entry::WishlistEntry;

/// A mutation the store has already applied.
#[derive(Debug, Clone, PartialEq)]
pub enum WishlistEvent {
    Added(WishlistEntry),
    Removed { id: String },
    Cleared,
}

/// Observer of wishlist mutations.
///
/// Observers are told about every change through the single mutation path
/// (`toggle`/`clear`); they never mutate the store themselves, which keeps
/// the single-writer invariant regardless of how many surfaces render from
/// the wishlist.
pub trait WishlistObserver: Send + Sync {
    fn on_change(&self, event: &WishlistEvent);
}
