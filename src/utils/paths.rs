//! Cross-Platform Path Utilities
//!
//! Functions for resolving where the credential file lives.

use std::path::PathBuf;

use crate::utils::error::{AppError, AppResult};

/// Get the user's home directory
pub fn home_dir() -> AppResult<PathBuf> {
    dirs::home_dir().ok_or_else(|| AppError::config("Could not determine home directory"))
}

/// Get the gist-notes directory (~/.gist-notes/)
pub fn gist_notes_dir() -> AppResult<PathBuf> {
    Ok(home_dir()?.join(".gist-notes"))
}

/// Get the credentials file path (~/.gist-notes/credentials.json)
pub fn credentials_path() -> AppResult<PathBuf> {
    Ok(gist_notes_dir()?.join("credentials.json"))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &PathBuf) -> AppResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Get the gist-notes directory, creating if it doesn't exist
pub fn ensure_gist_notes_dir() -> AppResult<PathBuf> {
    let path = gist_notes_dir()?;
    ensure_dir(&path)?;
    Ok(path)
}
