//! Notes Repository
//!
//! Presents the gist's designated notes file as a key-value note store with
//! merge-on-write semantics. Every operation establishes its own view of the
//! remote state; nothing is cached between calls, and a save or delete is a
//! full fetch-mutate-patch cycle. The later of two concurrent writers wins.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};

use crate::models::{Note, NotesData};
use crate::services::gist::{GistClient, GistResult, DEFAULT_FILENAME};

/// Injectable time source for note timestamps.
pub trait Clock: Send + Sync {
    /// Current time as an RFC 3339 string with millisecond precision.
    fn now_iso8601(&self) -> String;
}

/// Production clock reading UTC wall time.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_iso8601(&self) -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Key-value note store backed by a single gist file.
pub struct NotesRepository {
    client: GistClient,
    clock: Arc<dyn Clock>,
}

impl NotesRepository {
    /// Create a repository over the given client with the system clock.
    pub fn new(client: GistClient) -> Self {
        Self::with_clock(client, Arc::new(SystemClock))
    }

    /// Create a repository with an injected clock.
    pub fn with_clock(client: GistClient, clock: Arc<dyn Clock>) -> Self {
        Self { client, clock }
    }

    /// Fetch and parse the notes file.
    ///
    /// A missing file or content that is not a JSON object of notes yields an
    /// empty mapping rather than an error.
    async fn load(&self, token: &str, gist_id: &str) -> GistResult<NotesData> {
        let gist = self.client.fetch(token, gist_id).await?;
        let content = gist
            .files
            .get(DEFAULT_FILENAME)
            .map(|file| file.content.as_str())
            .unwrap_or("{}");
        Ok(parse_notes(content))
    }

    /// All notes currently stored in the gist.
    pub async fn list_all(&self, token: &str, gist_id: &str) -> GistResult<NotesData> {
        self.load(token, gist_id).await
    }

    /// The note for `key`, or `None` when no note exists for it.
    pub async fn get(&self, token: &str, gist_id: &str, key: &str) -> GistResult<Option<Note>> {
        Ok(self.load(token, gist_id).await?.get(key).cloned())
    }

    /// Set or overwrite the note for `key`, preserving all other entries.
    ///
    /// The timestamp is captured at call time from the injected clock.
    pub async fn save(
        &self,
        token: &str,
        gist_id: &str,
        key: &str,
        content: &str,
    ) -> GistResult<()> {
        let mut notes = self.load(token, gist_id).await?;
        notes.insert(
            key.to_string(),
            Note {
                content: content.to_string(),
                updated_at: self.clock.now_iso8601(),
            },
        );
        self.write_back(token, gist_id, &notes).await
    }

    /// Remove the note for `key` if present and write back the remainder.
    ///
    /// Deleting an absent key is not an error; the file is rewritten either
    /// way.
    pub async fn delete(&self, token: &str, gist_id: &str, key: &str) -> GistResult<()> {
        let mut notes = self.load(token, gist_id).await?;
        notes.remove(key);
        self.write_back(token, gist_id, &notes).await
    }

    async fn write_back(&self, token: &str, gist_id: &str, notes: &NotesData) -> GistResult<()> {
        let serialized =
            serde_json::to_string(notes).expect("notes mapping serializes to JSON");
        self.client
            .patch(token, gist_id, DEFAULT_FILENAME, &serialized)
            .await
    }
}

/// Parse notes file content, degrading to an empty mapping on anything that
/// is not a JSON object of notes.
fn parse_notes(content: &str) -> NotesData {
    serde_json::from_str(content).unwrap_or_default()
}
