//! Message-Channel Commands
//!
//! The named operations exposed to the hosting application's request/response
//! channel. The channel transport itself is external; hosts register these
//! handlers on it and pass in the shared [`crate::state::AppState`].

pub mod gist;
pub mod notes;
pub mod settings;

pub use gist::*;
pub use notes::*;
pub use settings::*;
