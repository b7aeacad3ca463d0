//! Error Handling
//!
//! Unified error types for the application layers above the gist client.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

use crate::services::gist::GistError;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Gist API errors; the message surfaces verbatim to callers.
    #[error(transparent)]
    Gist(#[from] GistError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// No credentials have been saved yet.
    #[error("Sync is not configured. Add a token and gist id first.")]
    NotConfigured,

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Convert AppError to a string suitable for handler responses
impl From<AppError> for String {
    fn from(err: AppError) -> String {
        err.to_string()
    }
}
