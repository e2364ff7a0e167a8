//! Durable wishlist state store for ToolHub
//!
//! Tracks a user's saved tools across the whole shell: an insertion-ordered
//! set of `{id, name, added_at}` entries, rehydrated from the durable
//! substrate at session start and persisted after every mutation. Badge
//! counts, heart states, and listing surfaces all read from this one store;
//! `toggle` and `clear` are the only writers.

pub mod entry;
pub mod observer;
pub mod store;

pub use entry::WishlistEntry;
pub use observer::{WishlistEvent, WishlistObserver};
pub use store::{STORAGE_KEY, Wishlist};
