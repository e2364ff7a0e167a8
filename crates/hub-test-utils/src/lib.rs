//! Shared test utilities for the ToolHub workspace

use std::path::PathBuf;

use hub_store::FileStore;
use tempfile::TempDir;

/// A file store backed by a fresh temporary directory.
///
/// Keep the returned `TempDir` alive for as long as the store is in use;
/// dropping it deletes the backing document.
pub fn temp_file_store() -> (TempDir, FileStore) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let store = FileStore::open(dir.path().join("state.json"));
    (dir, store)
}

/// A state-document path inside a fresh temporary directory, for tests that
/// need to reopen the same store several times.
pub fn temp_state_path() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let path = dir.path().join("state.json");
    (dir, path)
}
