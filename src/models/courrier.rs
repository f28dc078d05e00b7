//! Courrier model representing a correspondence item (incoming or outgoing mail).

use crate::models::Suivi;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Internal vs. external origin/destination classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourrierType {
    /// Correspondence within the organization
    #[serde(rename = "INTERNE")]
    Interne,

    /// Correspondence with an outside party
    #[serde(rename = "EXTERNE")]
    Externe,
}

impl CourrierType {
    /// Wire value used in API path segments.
    pub fn as_str(self) -> &'static str {
        match self {
            CourrierType::Interne => "INTERNE",
            CourrierType::Externe => "EXTERNE",
        }
    }

    /// Display label. Exhaustive match so a new variant is a compile error
    /// until its label is added.
    pub fn label(self) -> &'static str {
        match self {
            CourrierType::Interne => "Interne",
            CourrierType::Externe => "Externe",
        }
    }
}

/// Direction of correspondence: incoming (arrivé) or outgoing (départ).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nature {
    /// Incoming mail
    #[serde(rename = "ARRIVE")]
    Arrive,

    /// Outgoing mail
    #[serde(rename = "DEPART")]
    Depart,
}

impl Nature {
    /// Wire value used in API path segments.
    pub fn as_str(self) -> &'static str {
        match self {
            Nature::Arrive => "ARRIVE",
            Nature::Depart => "DEPART",
        }
    }

    /// Display label, exhaustively matched.
    pub fn label(self) -> &'static str {
        match self {
            Nature::Arrive => "Arrivé",
            Nature::Depart => "Départ",
        }
    }
}

/// A correspondence item tracked by the office.
///
/// The reference number (`num_courrier`) is unique across the whole set;
/// uniqueness is enforced by the store through a dedicated check query, not
/// locally. `date` crosses the API boundary as an ISO calendar-date string
/// and is treated as opaque until parsed for comparison or sorting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Courrier {
    /// Identifier, absent until the record is persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Unique reference number
    pub num_courrier: String,

    /// Subject text
    pub objet: String,

    /// Internal/external classification
    #[serde(rename = "type")]
    pub type_: Option<CourrierType>,

    /// Incoming/outgoing direction
    pub nature: Option<Nature>,

    /// Sender
    pub expediteur: String,

    /// Recipient
    pub destinataire: String,

    /// ISO calendar date (YYYY-MM-DD, possibly with a time suffix)
    pub date: String,

    /// Reference to the attached document, if one was uploaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_file: Option<String>,

    /// Follow-up actions, ordered by creation
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suivis: Vec<Suivi>,
}

impl Courrier {
    /// Whether at least one follow-up is attached.
    pub fn has_follow_up(&self) -> bool {
        !self.suivis.is_empty()
    }

    /// Parse the calendar-date portion of `date`.
    ///
    /// Accepts both plain `YYYY-MM-DD` and date-time strings by taking the
    /// part before any `T`. Returns `None` for malformed dates; callers
    /// treat those as falling outside every period.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let day = self.date.split('T').next().unwrap_or("");
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }
}

/// Request payload for creating or updating a courrier.
///
/// Mirrors what the remote API accepts: no id, no attachment reference,
/// no suivis (follow-ups have their own endpoints).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourrierCreateRequest {
    pub num_courrier: String,
    pub objet: String,
    #[serde(rename = "type")]
    pub type_: CourrierType,
    pub nature: Nature,
    pub expediteur: String,
    pub destinataire: String,
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Courrier {
        Courrier {
            id: Some(1),
            num_courrier: "CR-2024-001".to_string(),
            objet: "Demande de subvention".to_string(),
            type_: Some(CourrierType::Externe),
            nature: Some(Nature::Arrive),
            expediteur: "Préfecture".to_string(),
            destinataire: "Service comptable".to_string(),
            date: "2024-01-15".to_string(),
            pdf_file: None,
            suivis: Vec::new(),
        }
    }

    #[test]
    fn test_labels_match_wire_values() {
        assert_eq!(CourrierType::Interne.as_str(), "INTERNE");
        assert_eq!(CourrierType::Externe.label(), "Externe");
        assert_eq!(Nature::Arrive.label(), "Arrivé");
        assert_eq!(Nature::Depart.as_str(), "DEPART");
    }

    #[test]
    fn test_serialization_uses_api_field_names() {
        let courrier = sample();
        let json = serde_json::to_string(&courrier).unwrap();
        assert!(json.contains("\"numCourrier\":\"CR-2024-001\""));
        assert!(json.contains("\"type\":\"EXTERNE\""));
        assert!(json.contains("\"nature\":\"ARRIVE\""));
        // Empty suivis and absent pdf_file are omitted
        assert!(!json.contains("suivis"));
        assert!(!json.contains("pdfFile"));
    }

    #[test]
    fn test_deserialization_tolerates_missing_optionals() {
        let json = r#"{
            "numCourrier": "CR-2024-002",
            "objet": "Convocation",
            "type": "INTERNE",
            "nature": "DEPART",
            "expediteur": "Direction",
            "destinataire": "RH",
            "date": "2024-02-01"
        }"#;
        let courrier: Courrier = serde_json::from_str(json).unwrap();
        assert_eq!(courrier.id, None);
        assert!(courrier.suivis.is_empty());
        assert_eq!(courrier.nature, Some(Nature::Depart));
    }

    #[test]
    fn test_parsed_date() {
        let mut courrier = sample();
        assert_eq!(
            courrier.parsed_date(),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );

        courrier.date = "2024-01-15T09:30:00".to_string();
        assert_eq!(
            courrier.parsed_date(),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );

        courrier.date = "not-a-date".to_string();
        assert_eq!(courrier.parsed_date(), None);
    }

    #[test]
    fn test_has_follow_up() {
        let mut courrier = sample();
        assert!(!courrier.has_follow_up());
        courrier.suivis.push(Suivi::default());
        assert!(courrier.has_follow_up());
    }
}
