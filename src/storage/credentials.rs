//! Credential Storage
//!
//! Persistence of the token/gist-id pair. The trait is the contract the rest
//! of the crate consumes; hosts with their own secret storage (extension
//! storage, OS keyring) implement it instead of using the file backend.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::models::SyncConfig;
use crate::utils::error::AppResult;
use crate::utils::paths::{credentials_path, ensure_gist_notes_dir};

/// Key-value persistence for the credential pair.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// The saved configuration, or `None` when either field is missing or
    /// empty.
    async fn read(&self) -> AppResult<Option<SyncConfig>>;

    /// Persist the pair, replacing any previous value.
    async fn write(&self, config: &SyncConfig) -> AppResult<()>;

    /// Remove any saved pair.
    async fn clear(&self) -> AppResult<()>;
}

/// File-backed credential store writing pretty JSON.
#[derive(Debug)]
pub struct JsonFileCredentialStore {
    path: PathBuf,
}

impl JsonFileCredentialStore {
    /// Create a store at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the default location, ensuring its directory exists.
    pub fn default_location() -> AppResult<Self> {
        ensure_gist_notes_dir()?;
        Ok(Self::new(credentials_path()?))
    }

    /// The file path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CredentialStore for JsonFileCredentialStore {
    async fn read(&self) -> AppResult<Option<SyncConfig>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let config: SyncConfig = serde_json::from_str(&content)?;
        if !config.is_complete() {
            return Ok(None);
        }
        Ok(Some(config))
    }

    async fn write(&self, config: &SyncConfig) -> AppResult<()> {
        let content = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
