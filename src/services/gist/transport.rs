//! Gist API Transport
//!
//! The raw HTTP exchange behind the gist client, modeled as a trait so the
//! retry and error-mapping logic can be exercised without a network. The
//! production implementation wraps `reqwest::Client`; tests script responses
//! through the same seam.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP methods used by the Gist API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

/// A single outgoing API request.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Bearer token applied as the `Authorization` header.
    pub token: String,
    /// JSON body, when the operation has one.
    pub body: Option<serde_json::Value>,
}

/// A received HTTP response, whatever its status.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A connection-level failure: no HTTP response was received.
///
/// Distinct from HTTP error responses, which arrive as `ApiResponse` with a
/// non-success status. Only this kind of failure is retried.
#[derive(Debug, Clone, Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

/// The HTTP exchange seam for the gist client.
#[async_trait]
pub trait GistTransport: Send + Sync {
    /// Perform one HTTP exchange. Returns `Ok` whenever a response was
    /// received, regardless of its status.
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// Injectable delay used between retry attempts.
///
/// Tests substitute a recording implementation so the backoff schedule can be
/// asserted without real waiting.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Production sleeper backed by the tokio timer.
#[derive(Debug, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Production transport on `reqwest::Client`.
///
/// Applies the shared request contract: bearer authorization, the GitHub API
/// version accept header, and a JSON content type on every request.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with the default timeout.
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| TransportError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wrap an existing `reqwest::Client`.
    ///
    /// Useful when the caller wants to control the client configuration
    /// (e.g., custom TLS, proxy settings).
    pub fn with_reqwest_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GistTransport for ReqwestTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
            Method::Patch => self.client.patch(&request.url),
        };

        builder = builder
            .bearer_auth(&request.token)
            .header("Accept", "application/vnd.github+json")
            .header("Content-Type", "application/json");

        if let Some(ref body) = request.body {
            builder = builder.body(body.to_string());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}
