use tokio::sync::RwLock;

use crate::backend::BackendClient;
use crate::models::meeting::Meeting;

/// Shared application state: the backend client and the one list of
/// upcoming meetings, replaced only through [`AppState::refresh`].
pub struct AppState {
    backend: BackendClient,
    meetings: RwLock<Vec<Meeting>>,
}

impl AppState {
    /// Starts with an empty list; `main` performs the initial fetch.
    pub fn new(backend: BackendClient) -> Self {
        Self {
            backend,
            meetings: RwLock::new(Vec::new()),
        }
    }

    pub fn backend(&self) -> &BackendClient {
        &self.backend
    }

    /// Re-fetch the upcoming meetings and replace the stored list wholesale.
    /// A failed fetch is logged and leaves the previous list in place.
    pub async fn refresh(&self) {
        match self.backend.upcoming().await {
            Ok(meetings) => {
                log::info!("Loaded {} upcoming meeting(s)", meetings.len());
                *self.meetings.write().await = meetings;
            }
            Err(e) => log::error!("Failed to load meetings: {e}"),
        }
    }

    /// Snapshot of the current list for rendering.
    pub async fn meetings(&self) -> Vec<Meeting> {
        self.meetings.read().await.clone()
    }
}
