//! Gist Setup Commands
//!
//! Handlers for first-time setup: creating the backing gist and validating
//! the saved credentials.

use crate::models::CommandResponse;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

/// Create a new private gist holding an empty notes file.
///
/// Runs before any configuration exists, so the token arrives as an argument
/// rather than through the credential store. Returns the new gist id; the
/// host is expected to save the full configuration afterwards.
pub async fn create_gist(state: &AppState, token: &str) -> CommandResponse<String> {
    state
        .client()
        .create(token, None)
        .await
        .map_err(AppError::from)
        .into()
}

/// Validate the saved configuration by fetching the configured gist.
pub async fn test_connection(state: &AppState) -> CommandResponse<bool> {
    check_connection(state).await.into()
}

async fn check_connection(state: &AppState) -> AppResult<bool> {
    let config = state.require_config().await?;
    state.client().fetch(&config.pat, &config.gist_id).await?;
    Ok(true)
}
