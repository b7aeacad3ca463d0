//! Services
//!
//! Business logic services: the gist API client and the notes repository
//! built on top of it. Services are called by commands.

pub mod gist;
pub mod notes;

pub use gist::{GistClient, GistError, GistResult};
pub use notes::NotesRepository;
