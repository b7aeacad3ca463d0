//! First-Time Setup Integration Tests
//!
//! Walks the setup path a hosting application follows: create the backing
//! gist with a raw token, save the credential pair, then validate it.

use gist_notes::{create_gist, get_config, save_config, test_connection, SyncConfig};

use super::support::{scripted_state, RecordingSleeper, ScriptedTransport};

#[tokio::test]
async fn test_full_setup_flow() {
    let transport = ScriptedTransport::new();
    let sleeper = RecordingSleeper::new();
    let dir = tempfile::tempdir().unwrap();
    let state = scripted_state(&transport, &sleeper, &dir);

    // No configuration yet.
    let config = get_config(&state).await;
    assert!(config.success);
    assert_eq!(config.data, Some(None));

    // Create the backing gist with the raw token.
    transport.push_response(
        201,
        r#"{"id":"gist-123","files":{"github-issue-notes.json":{"content":"{}"}}}"#,
    );
    let created = create_gist(&state, "token").await;
    assert!(created.success);
    let gist_id = created.data.unwrap();
    assert_eq!(gist_id, "gist-123");

    // Save the pair the UI assembled.
    let saved = save_config(
        &state,
        SyncConfig {
            pat: "token".to_string(),
            gist_id: gist_id.clone(),
        },
    )
    .await;
    assert!(saved.success);

    // Validate the stored credentials against the API.
    transport.push_response(200, r#"{"id":"gist-123","files":{}}"#);
    let checked = test_connection(&state).await;
    assert!(checked.success);
    assert_eq!(checked.data, Some(true));

    // The validation call used the saved credentials.
    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].token, "token");
    assert_eq!(requests[1].url, "https://api.github.com/gists/gist-123");
}

#[tokio::test]
async fn test_connection_before_setup_reports_not_configured() {
    let transport = ScriptedTransport::new();
    let sleeper = RecordingSleeper::new();
    let dir = tempfile::tempdir().unwrap();
    let state = scripted_state(&transport, &sleeper, &dir);

    let response = test_connection(&state).await;

    assert!(!response.success);
    assert!(response.error.unwrap().contains("not configured"));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_create_gist_retries_through_transport_failures() {
    let transport = ScriptedTransport::new();
    let sleeper = RecordingSleeper::new();
    let dir = tempfile::tempdir().unwrap();
    let state = scripted_state(&transport, &sleeper, &dir);

    transport.push_failure("connection reset");
    transport.push_failure("connection reset");
    transport.push_response(201, r#"{"id":"gist-9","files":{}}"#);

    let created = create_gist(&state, "token").await;

    assert!(created.success);
    assert_eq!(transport.requests().len(), 3);
    assert_eq!(
        sleeper.delays(),
        vec![
            std::time::Duration::from_millis(500),
            std::time::Duration::from_millis(1000)
        ]
    );
}

#[tokio::test]
async fn test_create_gist_exhaustion_reports_network_error() {
    let transport = ScriptedTransport::new();
    let sleeper = RecordingSleeper::new();
    let dir = tempfile::tempdir().unwrap();
    let state = scripted_state(&transport, &sleeper, &dir);

    for _ in 0..3 {
        transport.push_failure("dns failure");
    }

    let created = create_gist(&state, "token").await;

    assert!(!created.success);
    assert_eq!(
        created.error.unwrap(),
        "Network error. Please check your connection."
    );
}
