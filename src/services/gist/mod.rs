//! Gist API Client
//!
//! Typed access to the GitHub Gist API: the three remote operations (create,
//! fetch, patch), deterministic retry/backoff, and the error taxonomy every
//! caller branches on.

pub mod client;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{GistClient, DEFAULT_FILENAME};
pub use transport::{
    ApiRequest, ApiResponse, GistTransport, Method, ReqwestTransport, Sleeper, TokioSleeper,
    TransportError,
};
pub use types::{GistError, GistFile, GistResponse, GistResult};
