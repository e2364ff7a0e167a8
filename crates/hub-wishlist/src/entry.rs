//! Wishlist entry type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One saved tool.
///
/// `name` is a denormalized cache of the tool's display name at the time of
/// adding, so listing the wishlist never needs to consult the registry or
/// catalog. `id` is the durable contract; at most one entry per id exists in
/// a store at any time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistEntry {
    pub id: String,
    pub name: String,
    pub added_at: DateTime<Utc>,
}

impl WishlistEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            added_at: Utc::now(),
        }
    }
}
