//! Note Types
//!
//! The stored shape of a single note and of the notes file as a whole.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single note attached to an issue or pull request.
///
/// Notes are replaced wholesale on save, never partially patched, so the
/// struct carries no identity beyond its position in the mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Free-text note body.
    pub content: String,
    /// RFC 3339 timestamp of the last save.
    pub updated_at: String,
}

/// The full contents of the notes file: issue key → note.
///
/// Keys follow the `"owner/repo#number"` convention but are treated as opaque
/// strings. A BTreeMap keeps serialization deterministic; ordering carries no
/// meaning.
pub type NotesData = BTreeMap<String, Note>;
