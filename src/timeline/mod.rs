//! Timeline ordering for a courrier's follow-ups.
//!
//! Pure, stable ordering for chronological display, plus the positional
//! emphasis marker the timeline view renders (the newest entry is the
//! "current" one, everything below it is "past").

use crate::models::Suivi;

/// Presentation marker for a timeline entry.
///
/// Derived purely from position after ordering (index 0 vs. the rest),
/// never from a date threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelinePosition {
    /// Most recent entry, rendered emphasized
    Current,

    /// Every other entry
    Past,
}

/// Order suivis most-recent-first.
///
/// Stable: entries with identical dates keep their relative input order,
/// and entries with unparseable dates sort after every dated entry.
/// Idempotent by construction.
pub fn order(suivis: &[Suivi]) -> Vec<Suivi> {
    let mut ordered: Vec<Suivi> = suivis.to_vec();
    // None (unparseable) compares smallest, so reverse ordering puts it last
    ordered.sort_by(|a, b| b.parsed_datetime().cmp(&a.parsed_datetime()));
    ordered
}

/// Order suivis and pair each with its presentation marker.
pub fn annotate(suivis: &[Suivi]) -> Vec<(Suivi, TimelinePosition)> {
    order(suivis)
        .into_iter()
        .enumerate()
        .map(|(index, suivi)| {
            let position = if index == 0 {
                TimelinePosition::Current
            } else {
                TimelinePosition::Past
            };
            (suivi, position)
        })
        .collect()
}
