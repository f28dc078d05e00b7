//! Aggregation engine for dashboard statistics.
//!
//! [`summarize`] is a pure function over an already-retrieved record set: it
//! performs no I/O and never mutates its input. Every derived view is
//! recomputed fresh on each trigger.

use crate::models::{Courrier, Nature};
use chrono::{Datelike, NaiveDate};

/// Derived dashboard metrics. Ephemeral: recomputed on every full load.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardStats {
    /// Count of all records
    pub total: usize,

    /// Incoming courriers dated in the reference month
    pub incoming_this_period: usize,

    /// Outgoing courriers dated in the reference month
    pub outgoing_this_period: usize,

    /// Records with at least one follow-up, over the entire set
    pub with_follow_up: usize,

    /// Most recent records by date, descending, stable on ties
    pub recent: Vec<Courrier>,
}

/// Compute dashboard statistics for the given reference date.
///
/// The "current period" is the calendar month and year of `reference`.
/// Whether `reference` comes from local wall-clock or UTC is the caller's
/// decision (see `Config::period_in_utc`); the engine is timezone-agnostic.
/// Records with unparseable dates fall outside every period but still count
/// toward `total` and `with_follow_up`.
pub fn summarize(records: &[Courrier], reference: NaiveDate, recent_count: usize) -> DashboardStats {
    let total = records.len();

    let in_period = |c: &Courrier| {
        c.parsed_date()
            .map(|d| d.month() == reference.month() && d.year() == reference.year())
            .unwrap_or(false)
    };

    let incoming_this_period = records
        .iter()
        .filter(|c| in_period(c) && c.nature == Some(Nature::Arrive))
        .count();
    let outgoing_this_period = records
        .iter()
        .filter(|c| in_period(c) && c.nature == Some(Nature::Depart))
        .count();

    let with_follow_up = records.iter().filter(|c| c.has_follow_up()).count();

    // Stable sort: ties keep original set order
    let mut recent: Vec<Courrier> = records.to_vec();
    recent.sort_by(|a, b| b.parsed_date().cmp(&a.parsed_date()));
    recent.truncate(recent_count);

    DashboardStats {
        total,
        incoming_this_period,
        outgoing_this_period,
        with_follow_up,
        recent,
    }
}
