//! Application State
//!
//! Dependency container handed to the message-channel handlers. Built once
//! by the hosting application and passed in explicitly; the crate keeps no
//! process-wide state.

use std::sync::Arc;

use crate::models::SyncConfig;
use crate::services::gist::GistClient;
use crate::services::notes::{Clock, NotesRepository};
use crate::storage::{CredentialStore, JsonFileCredentialStore};
use crate::utils::error::{AppError, AppResult};

/// Services shared by all handlers.
pub struct AppState {
    credentials: Arc<dyn CredentialStore>,
    client: GistClient,
    repository: NotesRepository,
}

impl AppState {
    /// Create a state over an injected credential store and client.
    pub fn new(credentials: Arc<dyn CredentialStore>, client: GistClient) -> Self {
        let repository = NotesRepository::new(client.clone());
        Self {
            credentials,
            client,
            repository,
        }
    }

    /// Like [`AppState::new`] with an injected clock for note timestamps.
    pub fn with_clock(
        credentials: Arc<dyn CredentialStore>,
        client: GistClient,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let repository = NotesRepository::with_clock(client.clone(), clock);
        Self {
            credentials,
            client,
            repository,
        }
    }

    /// Production wiring: file-backed credentials and the real HTTP client.
    pub fn with_defaults() -> AppResult<Self> {
        let credentials = Arc::new(JsonFileCredentialStore::default_location()?);
        let client = GistClient::new().map_err(|e| AppError::config(e.to_string()))?;
        Ok(Self::new(credentials, client))
    }

    /// The credential store.
    pub fn credentials(&self) -> &dyn CredentialStore {
        self.credentials.as_ref()
    }

    /// The gist client, for operations that run before notes exist.
    pub fn client(&self) -> &GistClient {
        &self.client
    }

    /// The notes repository.
    pub fn repository(&self) -> &NotesRepository {
        &self.repository
    }

    /// The saved configuration, or `NotConfigured` when absent.
    pub(crate) async fn require_config(&self) -> AppResult<SyncConfig> {
        self.credentials
            .read()
            .await?
            .ok_or(AppError::NotConfigured)
    }
}
