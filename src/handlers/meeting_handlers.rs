use actix_web::{HttpResponse, web};

use crate::errors::{AppError, render};
use crate::models::meeting::{MeetingDraft, parse_attendees};
use crate::state::AppState;
use crate::templates_structs::{FormValues, IndexTemplate};

// ---------------------------------------------------------------------------
// Form structs
// ---------------------------------------------------------------------------

/// Raw creation form. Numeric fields are coerced by serde; values of 0 or
/// below pass through to the backend, matching the HTML-minimums-only
/// constraint on the inputs.
#[derive(serde::Deserialize)]
pub struct CreateForm {
    pub title: String,
    pub start_in_minutes: i64,
    pub duration: i64,
    #[serde(default)]
    pub attendees: String,
}

// ---------------------------------------------------------------------------
// GET — form and meeting list
// ---------------------------------------------------------------------------

/// GET / — the creation form with its defaults next to the current list.
pub async fn index(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let tmpl = IndexTemplate {
        meetings: state.meetings().await,
        form: FormValues::default(),
        created: None,
        error: None,
    };
    render(tmpl)
}

// ---------------------------------------------------------------------------
// POST — create a meeting
// ---------------------------------------------------------------------------

/// POST /meetings — submit the creation form to the backend.
///
/// On success the list is refreshed, strictly after the create resolves,
/// and the page re-renders with an inline result panel. On failure the page
/// re-renders with an `Error: ...` banner carrying the backend `detail`
/// when there is one, otherwise the raw transport error. The form keeps the
/// submitted values either way.
pub async fn create(
    state: web::Data<AppState>,
    form: web::Form<CreateForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();

    let draft = MeetingDraft {
        title: form.title.clone(),
        start_in_minutes: form.start_in_minutes,
        duration: form.duration,
        attendees: parse_attendees(&form.attendees),
    };

    let (created, error) = match state.backend().create(&draft).await {
        Ok(meeting) => {
            state.refresh().await;
            (Some(meeting), None)
        }
        Err(e) => {
            log::warn!("Create meeting failed: {e}");
            (None, Some(format!("Error: {}", e.user_message())))
        }
    };

    let tmpl = IndexTemplate {
        meetings: state.meetings().await,
        form: FormValues {
            title: form.title,
            start_in_minutes: form.start_in_minutes,
            duration: form.duration,
            attendees: form.attendees,
        },
        created,
        error,
    };
    render(tmpl)
}

// ---------------------------------------------------------------------------
// POST — manual list refresh
// ---------------------------------------------------------------------------

/// POST /refresh — re-fetch the list, then back to the page.
pub async fn refresh(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    state.refresh().await;
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/"))
        .finish())
}
