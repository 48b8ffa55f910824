//! Root-state semantics: the list is always the last successful fetch.

use meetgen::backend::BackendClient;
use meetgen::state::AppState;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::{meeting_json, mock_upcoming};

#[tokio::test]
async fn test_refresh_replaces_list_wholesale() {
    let server = MockServer::start().await;
    mock_upcoming(
        &server,
        json!([
            meeting_json("Standup", "2026-08-07T09:00:00+00:00"),
            meeting_json("Retro", "2026-08-07T15:00:00+00:00"),
        ]),
    )
    .await;

    let state = AppState::new(BackendClient::new(server.uri()));
    assert!(state.meetings().await.is_empty());

    state.refresh().await;
    assert_eq!(state.meetings().await.len(), 2);

    // A new answer fully replaces the old list, nothing is merged.
    server.reset().await;
    mock_upcoming(
        &server,
        json!([meeting_json("Planning", "2026-08-08T10:00:00+00:00")]),
    )
    .await;

    state.refresh().await;
    let meetings = state.meetings().await;
    assert_eq!(meetings.len(), 1);
    assert_eq!(meetings[0].title, "Planning");
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_list() {
    let server = MockServer::start().await;
    mock_upcoming(
        &server,
        json!([meeting_json("Standup", "2026-08-07T09:00:00+00:00")]),
    )
    .await;

    let state = AppState::new(BackendClient::new(server.uri()));
    state.refresh().await;
    assert_eq!(state.meetings().await.len(), 1);

    server.reset().await;
    Mock::given(method("GET"))
        .and(path("/api/upcoming"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    state.refresh().await;
    let meetings = state.meetings().await;
    assert_eq!(meetings.len(), 1);
    assert_eq!(meetings[0].title, "Standup");
}

#[tokio::test]
async fn test_refresh_idempotent_for_unchanged_backend() {
    let server = MockServer::start().await;
    mock_upcoming(
        &server,
        json!([
            meeting_json("Standup", "2026-08-07T09:00:00+00:00"),
            meeting_json("Retro", "2026-08-07T15:00:00+00:00"),
        ]),
    )
    .await;

    let state = AppState::new(BackendClient::new(server.uri()));
    state.refresh().await;
    let first = state.meetings().await;
    state.refresh().await;
    let second = state.meetings().await;

    assert_eq!(first, second);
}
