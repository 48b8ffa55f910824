// Template context structures for Askama templates.

use askama::Template;

use crate::models::meeting::{
    DEFAULT_DURATION, DEFAULT_START_IN_MINUTES, DEFAULT_TITLE, Meeting,
};

/// Current values of the creation form, echoed back into the inputs so a
/// submission never clears what the user typed.
pub struct FormValues {
    pub title: String,
    pub start_in_minutes: i64,
    pub duration: i64,
    pub attendees: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            start_in_minutes: DEFAULT_START_IN_MINUTES,
            duration: DEFAULT_DURATION,
            attendees: String::new(),
        }
    }
}

/// The single page: creation form card plus the meeting list card.
/// `created` fills the inline result panel after a successful submission,
/// `error` the banner after a failed one; never both.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub meetings: Vec<Meeting>,
    pub form: FormValues,
    pub created: Option<Meeting>,
    pub error: Option<String>,
}
