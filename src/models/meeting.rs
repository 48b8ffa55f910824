use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Form defaults, mirrored by the input attributes in `templates/index.html`.
pub const DEFAULT_TITLE: &str = "Team Sync";
pub const DEFAULT_START_IN_MINUTES: i64 = 5;
pub const DEFAULT_DURATION: i64 = 30;

/// A meeting as returned by the backend. Immutable once received.
///
/// `start` and `html_link` are optional: the list endpoint omits `html_link`
/// entirely, and `start` is absent for all-day events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub title: String,
    #[serde(default)]
    pub start: Option<String>,
    pub meet_link: String,
    #[serde(default)]
    pub html_link: Option<String>,
}

impl Meeting {
    /// Start time rendered for display, local time, minute precision.
    /// Falls back to the raw value when it is not RFC 3339.
    pub fn start_display(&self) -> String {
        match self.start.as_deref() {
            Some(raw) => DateTime::parse_from_rfc3339(raw)
                .map(|dt| {
                    dt.with_timezone(&chrono::Local)
                        .format("%Y-%m-%d %H:%M")
                        .to_string()
                })
                .unwrap_or_else(|_| raw.to_string()),
            None => String::new(),
        }
    }
}

/// User-entered meeting parameters, serialized verbatim into the body of
/// `POST /api/create`.
#[derive(Debug, Clone, Serialize)]
pub struct MeetingDraft {
    pub title: String,
    pub start_in_minutes: i64,
    pub duration: i64,
    pub attendees: Vec<String>,
}

/// Split the raw attendee text on commas, trim whitespace, drop empty
/// entries. Order is preserved; duplicates are kept.
pub fn parse_attendees(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
