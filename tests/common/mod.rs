//! Shared test infrastructure: a wiremock stand-in for the meeting backend.

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A full Meeting object as the create endpoint returns it.
pub fn meeting_json(title: &str, start: &str) -> Value {
    json!({
        "title": title,
        "start": start,
        "meet_link": "https://meet.google.com/abc-defg-hij",
        "html_link": "https://calendar.google.com/calendar/event?eid=abc123",
    })
}

/// Mount `GET /api/upcoming` answering 200 with the given JSON array.
pub async fn mock_upcoming(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/api/upcoming"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
