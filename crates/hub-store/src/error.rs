//! Error types for hub-store

use std::path::PathBuf;

/// Result type for hub-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in hub-store operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize state document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },

    #[error("No platform data directory available")]
    NoDataDir,
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
