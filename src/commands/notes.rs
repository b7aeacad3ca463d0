//! Note Commands
//!
//! Handlers for reading and saving notes through the configured gist.

use serde::{Deserialize, Serialize};

use crate::models::{CommandResponse, Note};
use crate::state::AppState;
use crate::utils::error::AppResult;

/// Payload for [`save_note`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveNoteRequest {
    /// Issue key, conventionally `"owner/repo#number"`.
    pub key: String,
    /// New note body, replacing any previous note for the key.
    pub content: String,
}

/// Get the note for an issue key, `None` when no note exists.
pub async fn get_note(state: &AppState, key: &str) -> CommandResponse<Option<Note>> {
    fetch_note(state, key).await.into()
}

/// Save (create or overwrite) the note for an issue key.
pub async fn save_note(state: &AppState, request: SaveNoteRequest) -> CommandResponse<()> {
    store_note(state, &request).await.into()
}

async fn fetch_note(state: &AppState, key: &str) -> AppResult<Option<Note>> {
    let config = state.require_config().await?;
    let note = state
        .repository()
        .get(&config.pat, &config.gist_id, key)
        .await?;
    Ok(note)
}

async fn store_note(state: &AppState, request: &SaveNoteRequest) -> AppResult<()> {
    let config = state.require_config().await?;
    state
        .repository()
        .save(&config.pat, &config.gist_id, &request.key, &request.content)
        .await?;
    Ok(())
}
