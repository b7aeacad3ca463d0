//! Settings Commands
//!
//! Handlers for reading and updating the saved credential pair.

use crate::models::{CommandResponse, SyncConfig};
use crate::state::AppState;
use crate::storage::CredentialStore;

/// Get the saved configuration; `None` when sync has not been set up.
pub async fn get_config(state: &AppState) -> CommandResponse<Option<SyncConfig>> {
    state.credentials().read().await.into()
}

/// Persist a new credential pair, replacing any previous one.
pub async fn save_config(state: &AppState, config: SyncConfig) -> CommandResponse<()> {
    state.credentials().write(&config).await.into()
}
