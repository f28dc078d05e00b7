//! Suivi model representing a follow-up action attached to a courrier.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A follow-up/instruction action attached to exactly one courrier.
///
/// The back-reference to the parent is a weak navigation link, not an
/// ownership relation; cascade deletion with the parent is a store-side
/// contract and is not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Suivi {
    /// Identifier, absent until the record is persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Id of the owning courrier (navigation only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courrier_id: Option<i64>,

    /// Free-text instruction (required, minimum 5 characters at form level)
    pub instruction: String,

    /// Optional longer description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// ISO date or date-time string
    pub date: String,
}

impl Suivi {
    /// Parse `date` into a sortable timestamp.
    ///
    /// Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS` and plain `YYYY-MM-DD`
    /// (midnight). Returns `None` for malformed input; the timeline sorts
    /// those after every dated entry.
    pub fn parsed_datetime(&self) -> Option<NaiveDateTime> {
        if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(&self.date) {
            return Some(dt.naive_utc());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(&self.date, "%Y-%m-%dT%H:%M:%S") {
            return Some(dt);
        }
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    }
}

/// Request payload for creating or updating a suivi.
///
/// The parent courrier id travels in the URL, not in the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiviCreateRequest {
    pub instruction: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: String,
}
