//! gist-notes
//!
//! Stores personal notes for GitHub issues and pull requests as a single
//! JSON file inside a private Gist. It includes:
//! - A gist API client owning retry/backoff and error classification
//! - A read-merge-write notes repository over that client
//! - Credential storage behind a swappable trait
//! - Message-channel handlers for the hosting application to register
//!
//! The crate installs no logging subscriber and keeps no global state; hosts
//! build an [`AppState`] once and pass it to the handlers.

pub mod commands;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

// Re-export commonly used items from commands
pub use commands::{
    // Note commands
    get_note, save_note, SaveNoteRequest,
    // Settings commands
    get_config, save_config,
    // Gist setup commands
    create_gist, test_connection,
};
// Re-export models and service entry points
pub use models::response::CommandResponse;
pub use models::{Note, NotesData, SyncConfig};
pub use services::gist::{GistClient, GistError, GistResult, DEFAULT_FILENAME};
pub use services::notes::NotesRepository;
pub use state::AppState;
pub use storage::{CredentialStore, JsonFileCredentialStore};
pub use utils::error::{AppError, AppResult};
