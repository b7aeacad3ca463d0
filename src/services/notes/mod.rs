//! Notes Service
//!
//! The read-merge-write note store built on the gist client.

pub mod repository;

pub use repository::{Clock, NotesRepository, SystemClock};
