//! Gist API Types
//!
//! Defines the wire shapes exchanged with the Gist API and the error
//! taxonomy every remote operation resolves to:
//! - `GistResponse` / `GistFile`: the remote gist as last observed
//! - `GistError`: the four error kinds callers branch on

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::transport::ApiResponse;

/// Fallback message when an API error body carries no usable `message` field.
const API_ERROR_FALLBACK: &str = "Failed to call GitHub Gist API";

// ============================================================================
// Responses
// ============================================================================

/// A single file within a gist.
///
/// The API omits `content` in some listings; deserialization normalizes the
/// missing field to an empty string so downstream code never sees an absent
/// body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GistFile {
    /// Raw text content of the file.
    #[serde(default)]
    pub content: String,
}

/// The remote gist's current state as last observed by the client.
///
/// Never cached; re-fetched on every repository operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GistResponse {
    /// Opaque gist identifier.
    pub id: String,
    /// Filename → file mapping. Entries are normalized, never dropped.
    #[serde(default)]
    pub files: HashMap<String, GistFile>,
}

// ============================================================================
// Errors
// ============================================================================

/// Error kinds produced by the gist client.
///
/// The `Display` text is the user-facing message; callers render it directly.
/// `status()` exposes the HTTP status (0 for network-level failures) so
/// callers can branch without matching variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GistError {
    /// The token was rejected (HTTP 401).
    #[error("Invalid or expired token")]
    Unauthorized,

    /// The gist does not exist or is not visible to the token (HTTP 404).
    #[error("Gist not found")]
    NotFound,

    /// Any other non-success HTTP response, carrying the upstream message
    /// when the body provided one.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Connection-level failure with no HTTP response, after retries.
    #[error("Network error. Please check your connection.")]
    Network,
}

/// Result type alias for gist client operations
pub type GistResult<T> = Result<T, GistError>;

impl GistError {
    /// HTTP status associated with this error; 0 for transport failures.
    pub fn status(&self) -> u16 {
        match self {
            GistError::Unauthorized => 401,
            GistError::NotFound => 404,
            GistError::Api { status, .. } => *status,
            GistError::Network => 0,
        }
    }

    /// Map a received non-success HTTP response to an error kind.
    ///
    /// 401 and 404 carry fixed messages; everything else keeps its status and
    /// takes the message from the body's JSON `message` field when present.
    pub fn from_response(response: &ApiResponse) -> Self {
        match response.status {
            401 => GistError::Unauthorized,
            404 => GistError::NotFound,
            status => GistError::Api {
                status,
                message: extract_api_message(&response.body),
            },
        }
    }

    /// Error for a success-status response whose body failed to parse.
    pub fn malformed_body(status: u16) -> Self {
        GistError::Api {
            status,
            message: API_ERROR_FALLBACK.to_string(),
        }
    }
}

/// Pull the `message` field out of an error body, falling back to a fixed
/// string when the body is not JSON or has no message.
fn extract_api_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| API_ERROR_FALLBACK.to_string())
}
