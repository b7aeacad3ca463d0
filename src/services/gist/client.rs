//! Gist Client
//!
//! Wraps the three remote operations against the Gist API (create, fetch,
//! patch) and owns the retry/backoff policy and HTTP-status-to-error mapping.
//! Everything above this module sees only `GistError`, never raw transport
//! outcomes.

use std::sync::Arc;
use std::time::Duration;

use super::transport::{
    ApiRequest, ApiResponse, GistTransport, Method, ReqwestTransport, Sleeper, TokioSleeper,
    TransportError,
};
use super::types::{GistError, GistResponse, GistResult};

/// Base endpoint for the gist collection resource.
const GITHUB_GISTS_API: &str = "https://api.github.com/gists";

/// Fixed name of the notes file inside the gist.
pub const DEFAULT_FILENAME: &str = "github-issue-notes.json";

/// Total attempts per logical operation, first try included.
const RETRY_MAX_ATTEMPTS: u32 = 3;

/// Base backoff delay; attempt i (0-indexed) waits `base * 2^i` before the
/// next try.
const RETRY_BASE_DELAY_MS: u64 = 500;

/// Client for the GitHub Gist API.
///
/// Holds no state beyond its collaborators; every call establishes its own
/// view of the remote gist.
#[derive(Clone)]
pub struct GistClient {
    transport: Arc<dyn GistTransport>,
    sleeper: Arc<dyn Sleeper>,
    base_url: String,
}

impl GistClient {
    /// Create a client with the production transport and timer.
    pub fn new() -> Result<Self, TransportError> {
        Ok(Self::with_transport(
            Arc::new(ReqwestTransport::new()?),
            Arc::new(TokioSleeper),
        ))
    }

    /// Create a client with injected collaborators.
    pub fn with_transport(transport: Arc<dyn GistTransport>, sleeper: Arc<dyn Sleeper>) -> Self {
        Self {
            transport,
            sleeper,
            base_url: GITHUB_GISTS_API.to_string(),
        }
    }

    /// Override the API base URL. Intended for tests and GHE-style hosts.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn gist_url(&self, gist_id: &str) -> String {
        format!("{}/{}", self.base_url, gist_id)
    }

    /// Create a new private gist holding a single empty notes file.
    ///
    /// Returns the new gist's identifier. `filename` defaults to
    /// [`DEFAULT_FILENAME`].
    pub async fn create(&self, token: &str, filename: Option<&str>) -> GistResult<String> {
        let filename = filename.unwrap_or(DEFAULT_FILENAME);
        let body = serde_json::json!({
            "public": false,
            "files": {
                filename: { "content": "{}" }
            }
        });

        let response = self
            .execute_with_retry(ApiRequest {
                method: Method::Post,
                url: self.base_url.clone(),
                token: token.to_string(),
                body: Some(body),
            })
            .await?;

        let gist: GistResponse = parse_body(&response)?;
        Ok(gist.id)
    }

    /// Fetch a gist's current state.
    ///
    /// Every file entry in the result has a `content` string; entries whose
    /// content the API omitted come back empty rather than being dropped.
    pub async fn fetch(&self, token: &str, gist_id: &str) -> GistResult<GistResponse> {
        let response = self
            .execute_with_retry(ApiRequest {
                method: Method::Get,
                url: self.gist_url(gist_id),
                token: token.to_string(),
                body: None,
            })
            .await?;

        parse_body(&response)
    }

    /// Replace exactly one file's content, leaving other files untouched.
    pub async fn patch(
        &self,
        token: &str,
        gist_id: &str,
        filename: &str,
        content: &str,
    ) -> GistResult<()> {
        let body = serde_json::json!({
            "files": {
                filename: { "content": content }
            }
        });

        self.execute_with_retry(ApiRequest {
            method: Method::Patch,
            url: self.gist_url(gist_id),
            token: token.to_string(),
            body: Some(body),
        })
        .await?;

        Ok(())
    }

    /// Run one request through the retry loop and map the outcome.
    ///
    /// Only transport-level failures are retried; a received response with a
    /// non-success status is terminal and maps straight to an error kind.
    async fn execute_with_retry(&self, request: ApiRequest) -> GistResult<ApiResponse> {
        tracing::debug!("{:?} {}", request.method, request.url);

        let mut attempt = 0;
        loop {
            match self.transport.execute(&request).await {
                Ok(response) => {
                    if response.is_success() {
                        return Ok(response);
                    }
                    tracing::warn!("{} returned HTTP {}", request.url, response.status);
                    return Err(GistError::from_response(&response));
                }
                Err(err) => {
                    attempt += 1;
                    if attempt >= RETRY_MAX_ATTEMPTS {
                        tracing::warn!(
                            "{} failed after {} attempts: {}",
                            request.url,
                            attempt,
                            err
                        );
                        return Err(GistError::Network);
                    }

                    let delay =
                        Duration::from_millis(RETRY_BASE_DELAY_MS * 2u64.pow(attempt - 1));
                    tracing::debug!("transport failure ({}), retrying in {:?}", err, delay);
                    self.sleeper.sleep(delay).await;
                }
            }
        }
    }
}

/// Parse a success-status response body, mapping malformed bodies to an API
/// error that preserves the status.
fn parse_body<T: serde::de::DeserializeOwned>(response: &ApiResponse) -> GistResult<T> {
    serde_json::from_str(&response.body).map_err(|_| GistError::malformed_body(response.status))
}
