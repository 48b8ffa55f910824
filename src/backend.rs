use reqwest::Client;

use crate::errors::AppError;
use crate::models::meeting::{Meeting, MeetingDraft};

/// Client for the meeting backend. All network traffic of the application
/// goes through here.
#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// GET /api/upcoming — the upcoming meetings, in server order.
    pub async fn upcoming(&self) -> Result<Vec<Meeting>, AppError> {
        let response = self
            .http
            .get(format!("{}/api/upcoming", self.base_url))
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// POST /api/create — create a Meet-enabled event from the draft.
    pub async fn create(&self, draft: &MeetingDraft) -> Result<Meeting, AppError> {
        let response = self
            .http
            .post(format!("{}/api/create", self.base_url))
            .json(draft)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Turn a non-success response into `AppError::Backend`, extracting the
    /// `detail` string the backend puts in its JSON error bodies.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AppError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string));
        Err(AppError::Backend { status, detail })
    }
}
