use actix_web::{HttpResponse, ResponseError};
use askama::Template;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// The backend answered with a non-success status. `detail` carries the
    /// message from its JSON error body when one was present.
    Backend {
        status: reqwest::StatusCode,
        detail: Option<String>,
    },
    /// The request never completed (connect, timeout, body read).
    Http(reqwest::Error),
    Template(askama::Error),
}

impl AppError {
    /// The text shown to the user after the `Error: ` prefix: the backend
    /// `detail` when present, else the status line, else the raw transport
    /// error message.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Backend {
                detail: Some(detail),
                ..
            } => detail.clone(),
            AppError::Backend {
                status,
                detail: None,
            } => format!("HTTP {status}"),
            AppError::Http(e) => e.to_string(),
            AppError::Template(e) => e.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Backend {
                status,
                detail: Some(detail),
            } => write!(f, "Backend error ({status}): {detail}"),
            AppError::Backend {
                status,
                detail: None,
            } => write!(f, "Backend error: HTTP {status}"),
            AppError::Http(e) => write!(f, "Request error: {e}"),
            AppError::Template(e) => write!(f, "Template error: {e}"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        log::error!("{self}");
        HttpResponse::InternalServerError().body("Internal Server Error")
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Http(e)
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

/// Render an Askama template into a 200 HTML response.
pub fn render<T: Template>(tmpl: T) -> Result<HttpResponse, AppError> {
    let body = tmpl.render()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}
