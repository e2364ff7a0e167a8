//! Error types for hub-tools

/// Result type for hub-tools operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in hub-tools operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A tool id was registered twice. Identifiers are part of the durable
    /// contract (they appear in persisted wishlists and shell invocations),
    /// so an ambiguous binding aborts startup instead of silently overriding.
    #[error("Tool id '{id}' is already registered")]
    DuplicateId { id: String },

    /// Input a tool could not make sense of.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unknown catalog category name.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId { id: id.into() }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
