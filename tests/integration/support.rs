//! Shared test doubles built on the crate's public injection seams.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use gist_notes::services::gist::{
    ApiRequest, ApiResponse, GistClient, GistTransport, Sleeper, TransportError,
};
use gist_notes::services::notes::Clock;
use gist_notes::storage::JsonFileCredentialStore;
use gist_notes::AppState;

/// Transport replaying scripted outcomes and recording requests.
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn push_response(&self, status: u16, body: &str) {
        self.script.lock().unwrap().push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn push_failure(&self, message: &str) {
        self.script
            .lock()
            .unwrap()
            .push_back(Err(TransportError(message.to_string())));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GistTransport for ScriptedTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .expect("ScriptedTransport script exhausted")
    }
}

/// Sleeper recording requested delays instead of waiting.
pub struct RecordingSleeper {
    delays: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            delays: Mutex::new(Vec::new()),
        })
    }

    pub fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
    }
}

/// Clock pinned to a fixed instant.
pub struct FixedClock(pub &'static str);

impl Clock for FixedClock {
    fn now_iso8601(&self) -> String {
        self.0.to_string()
    }
}

/// An `AppState` wired to the scripted transport, a recording sleeper, a
/// fixed clock, and a credential file inside `dir`.
pub fn scripted_state(
    transport: &Arc<ScriptedTransport>,
    sleeper: &Arc<RecordingSleeper>,
    dir: &tempfile::TempDir,
) -> AppState {
    let store = JsonFileCredentialStore::new(dir.path().join("credentials.json"));
    let client = GistClient::with_transport(transport.clone(), sleeper.clone());
    AppState::with_clock(
        Arc::new(store),
        client,
        Arc::new(FixedClock("2026-02-04T13:00:00.000Z")),
    )
}
