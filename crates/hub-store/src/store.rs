//! Opaque string key/value store contract

use crate::Result;

/// Durable key/value substrate.
///
/// Callers treat this as an opaque string store keyed by well-known names.
/// Implementations decide where the bytes live; readers must tolerate an
/// implementation that has lost its backing data and degraded to empty.
pub trait StateStore: Send + Sync {
    /// Get the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// The write must be durable before this returns `Ok`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// All keys currently present, in no particular order.
    fn keys(&self) -> Vec<String>;
}
