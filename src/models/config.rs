//! Sync Configuration
//!
//! The credential pair required to reach the remote gist.

use serde::{Deserialize, Serialize};

/// Personal access token and target gist identifier.
///
/// Both fields must be non-empty for the configuration to be considered
/// usable; the credential store treats a half-filled pair as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncConfig {
    /// GitHub personal access token with the `gist` scope.
    pub pat: String,
    /// Identifier of the gist holding the notes file.
    pub gist_id: String,
}

impl SyncConfig {
    /// Returns true when both fields are present and non-empty.
    pub fn is_complete(&self) -> bool {
        !self.pat.is_empty() && !self.gist_id.is_empty()
    }
}
