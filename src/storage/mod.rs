//! Storage Layer
//!
//! Persistence of the credential pair behind a swappable trait.

pub mod credentials;

pub use credentials::*;
