//! File-backed state store with atomic writes

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{Error, Result};
use crate::store::StateStore;

/// State store persisted as a single JSON document on disk.
///
/// The whole key/value map lives in one file. Reads happen once at open;
/// every mutation rewrites the document atomically (write-to-temp-then-rename
/// under an exclusive advisory lock), so a crashed writer never leaves a
/// partial document behind.
///
/// A missing or unparseable file degrades to an empty store. Wishlist data
/// and the like are convenience caches, not systems of record, so losing the
/// backing file silently resets state rather than failing the caller.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    /// Open a store backed by the JSON document at `path`.
    ///
    /// The file does not need to exist; it is created on first write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "state document is corrupt, resetting to empty"
                    );
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        Self { path, entries }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite the backing document from the in-memory map.
    fn persist(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.entries)?;
        write_atomic(&self.path, content.as_bytes())
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_none() {
            return Ok(());
        }
        self.persist()
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename strategy to prevent partial writes.
/// Acquires an advisory lock to prevent concurrent access.
fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Generate temp file path in same directory (ensures same filesystem)
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: path.to_path_buf(),
        })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;

    // Flush to disk before the rename makes the document visible
    temp_file
        .sync_all()
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn open_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(dir.path().join("state.json"));
        assert!(store.get("wishlist").is_none());
        assert!(store.keys().is_empty());
    }

    #[test]
    fn set_then_get() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path().join("state.json"));
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme"), Some("dark".to_string()));
    }

    #[test]
    fn set_is_durable_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut store = FileStore::open(&path);
        store.set("wishlist", r#"[{"id":"calculator"}]"#).unwrap();
        drop(store);

        let reopened = FileStore::open(&path);
        assert_eq!(
            reopened.get("wishlist"),
            Some(r#"[{"id":"calculator"}]"#.to_string())
        );
    }

    #[test]
    fn write_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut store = FileStore::open(&path);
        store.set("a", "1").unwrap();

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty(), "temp file should be cleaned up");
    }

    #[test]
    fn corrupt_document_degrades_to_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{not json").unwrap();

        let store = FileStore::open(&path);
        assert!(store.keys().is_empty());
    }

    #[test]
    fn remove_absent_key_is_noop() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path().join("state.json"));
        store.remove("missing").unwrap();
        // No file should have been created by a no-op remove
        assert!(!dir.path().join("state.json").exists());
    }

    #[test]
    fn remove_deletes_key() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut store = FileStore::open(&path);
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.remove("a").unwrap();

        let reopened = FileStore::open(&path);
        assert!(reopened.get("a").is_none());
        assert_eq!(reopened.get("b"), Some("2".to_string()));
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("state.json");

        let mut store = FileStore::open(&path);
        store.set("k", "v").unwrap();
        assert!(path.exists());
    }
}
