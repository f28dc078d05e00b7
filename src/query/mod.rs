//! Query/filter engine.
//!
//! Two independent mechanisms, matching how the list view works:
//!
//! 1. [`resolve`] turns a [`FilterSpec`] into the correct remote query, with
//!    a documented single-criterion precedence (first match wins, no AND
//!    combination of criteria).
//! 2. [`quick_filter`] is the list view's local text search: case-insensitive
//!    substring matching over the already-loaded set. It never touches the
//!    remote collaborator.

use crate::error::ApiResult;
use crate::models::{Courrier, CourrierType, Nature, Suivi};
use crate::repositories::{CourrierRepository, SuiviRepository};

/// Narrowing criteria for a courrier search. Ephemeral: built per user
/// interaction, consumed by [`resolve`], discarded.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    pub type_: Option<CourrierType>,
    pub nature: Option<Nature>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub destinataire: Option<String>,
    pub expediteur: Option<String>,
    pub objet: Option<String>,
}

impl FilterSpec {
    /// True when no criterion is set, meaning a full-set retrieval.
    pub fn is_empty(&self) -> bool {
        self.type_.is_none()
            && self.nature.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.destinataire.is_none()
            && self.expediteur.is_none()
            && self.objet.is_none()
    }
}

/// Narrowing criteria for a suivi search.
#[derive(Debug, Clone, Default)]
pub struct SuiviFilterSpec {
    pub courrier_id: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub instruction: Option<String>,
}

/// Select and run the remote query matching the most specific criterion.
///
/// Precedence (first match wins; this is a deliberate simplification, not a
/// general AND of all criteria):
/// 1. start AND end date -> date-range query
/// 2. type -> by-type query
/// 3. nature -> by-nature query
/// 4. destinataire fragment -> by-recipient query
/// 5. expediteur fragment -> by-sender query
/// 6. objet fragment -> by-subject-substring query
/// 7. otherwise -> full set
///
/// Each branch returns the collaborator's result unmodified. Transport
/// failures surface as the normalized error; there is no retry.
pub async fn resolve(
    repo: &dyn CourrierRepository,
    spec: &FilterSpec,
) -> ApiResult<Vec<Courrier>> {
    if let (Some(start), Some(end)) = (&spec.start_date, &spec.end_date) {
        repo.find_between_dates(start, end).await
    } else if let Some(type_) = spec.type_ {
        repo.find_by_type(type_).await
    } else if let Some(nature) = spec.nature {
        repo.find_by_nature(nature).await
    } else if let Some(destinataire) = &spec.destinataire {
        repo.find_by_destinataire(destinataire).await
    } else if let Some(expediteur) = &spec.expediteur {
        repo.find_by_expediteur(expediteur).await
    } else if let Some(objet) = &spec.objet {
        repo.find_by_objet(objet).await
    } else {
        repo.list().await
    }
}

/// Suivi counterpart of [`resolve`], with its own precedence: parent
/// courrier first, then date range, then instruction substring, then all.
pub async fn resolve_suivis(
    repo: &dyn SuiviRepository,
    spec: &SuiviFilterSpec,
) -> ApiResult<Vec<Suivi>> {
    if let Some(courrier_id) = spec.courrier_id {
        repo.find_by_courrier(courrier_id).await
    } else if let (Some(start), Some(end)) = (&spec.start_date, &spec.end_date) {
        repo.find_between_dates(start, end).await
    } else if let Some(instruction) = &spec.instruction {
        repo.find_by_instruction(instruction).await
    } else {
        repo.list().await
    }
}

/// Local quick-search over the currently loaded set.
///
/// Case-insensitive substring match across reference number, subject, sender
/// and recipient simultaneously. An empty or whitespace-only needle is
/// equivalent to no filter.
pub fn quick_filter<'a>(courriers: &'a [Courrier], text: &str) -> Vec<&'a Courrier> {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return courriers.iter().collect();
    }

    courriers
        .iter()
        .filter(|c| {
            c.num_courrier.to_lowercase().contains(&needle)
                || c.objet.to_lowercase().contains(&needle)
                || c.expediteur.to_lowercase().contains(&needle)
                || c.destinataire.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn courrier(num: &str, objet: &str, expediteur: &str, destinataire: &str) -> Courrier {
        Courrier {
            num_courrier: num.to_string(),
            objet: objet.to_string(),
            expediteur: expediteur.to_string(),
            destinataire: destinataire.to_string(),
            date: "2024-01-01".to_string(),
            ..Courrier::default()
        }
    }

    fn sample_set() -> Vec<Courrier> {
        vec![
            courrier("CR-001", "Budget 2024", "Préfecture", "Comptabilité"),
            courrier("CR-002", "Convocation", "Direction", "RH"),
            courrier("CR-003", "Rapport budgetaire", "Mairie", "Direction"),
        ]
    }

    #[test]
    fn test_quick_filter_empty_returns_all() {
        let set = sample_set();
        assert_eq!(quick_filter(&set, "").len(), 3);
        assert_eq!(quick_filter(&set, "   ").len(), 3);
    }

    #[test]
    fn test_quick_filter_is_case_insensitive() {
        let set = sample_set();
        let hits = quick_filter(&set, "BUDGET");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].num_courrier, "CR-001");
    }

    #[test]
    fn test_quick_filter_matches_all_four_columns() {
        let set = sample_set();
        assert_eq!(quick_filter(&set, "cr-002").len(), 1); // reference number
        assert_eq!(quick_filter(&set, "convocation").len(), 1); // subject
        assert_eq!(quick_filter(&set, "mairie").len(), 1); // sender
        assert_eq!(quick_filter(&set, "direction").len(), 2); // sender + recipient
    }

    #[test]
    fn test_quick_filter_no_match() {
        let set = sample_set();
        assert!(quick_filter(&set, "introuvable").is_empty());
    }

    #[test]
    fn test_filter_spec_is_empty() {
        assert!(FilterSpec::default().is_empty());
        let spec = FilterSpec {
            nature: Some(Nature::Arrive),
            ..FilterSpec::default()
        };
        assert!(!spec.is_empty());
    }
}
