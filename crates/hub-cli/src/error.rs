//! Error types for hub-cli

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from hub-tools
    #[error(transparent)]
    Tools(#[from] hub_tools::Error),

    /// Error from hub-store
    #[error(transparent)]
    Store(#[from] hub_store::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON output serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Invalid shell configuration file
    #[error("Invalid config at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
