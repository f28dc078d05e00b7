//! Explicit view state and reload sequencing.
//!
//! The list view's mutable state (loaded set, quick-search text, loading
//! flag) is modeled as an explicit, serializable snapshot passed and
//! returned by each operation, so transitions are deterministic and unit
//! testable. [`LoadSequencer`] guards the last-writer-wins race between
//! concurrent reloads: a completion carrying anything but the newest issued
//! token is discarded instead of overwriting fresher data.

use crate::models::Courrier;
use crate::query;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic request tokens for in-flight loads.
///
/// `begin` issues a new token; `accept` answers whether a completing load
/// with that token is still the newest one. Stale completions must be
/// dropped by the caller.
#[derive(Debug, Default)]
pub struct LoadSequencer {
    newest: AtomicU64,
}

impl LoadSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the token for a load that is about to start.
    pub fn begin(&self) -> u64 {
        self.newest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether a completion carrying `token` may be applied.
    pub fn accept(&self, token: u64) -> bool {
        self.newest.load(Ordering::SeqCst) == token
    }
}

/// Snapshot of what the courrier list view displays.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListState {
    /// The currently loaded set (possibly stale relative to the store)
    pub records: Vec<Courrier>,

    /// Active quick-search text
    pub search_text: String,

    /// Whether a load is in flight
    pub loading: bool,

    /// Token of the last load whose result was applied
    pub last_applied_token: u64,
}

impl ListState {
    /// Mark a load as started. The in-flight token travels with the caller.
    pub fn start_load(mut self) -> Self {
        self.loading = true;
        self
    }

    /// Apply a completed load, unless a newer one has been issued since.
    ///
    /// Returns the unchanged state for stale tokens, so the last *issued*
    /// load wins rather than the last to arrive.
    pub fn apply_load(
        mut self,
        sequencer: &LoadSequencer,
        token: u64,
        records: Vec<Courrier>,
    ) -> Self {
        if !sequencer.accept(token) {
            return self;
        }
        self.records = records;
        self.loading = false;
        self.last_applied_token = token;
        self
    }

    /// Mark a load as failed (the displayed set is kept as-is).
    pub fn fail_load(mut self) -> Self {
        self.loading = false;
        self
    }

    /// Replace the quick-search text.
    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Rows currently visible: the loaded set narrowed by the quick filter.
    pub fn visible(&self) -> Vec<&Courrier> {
        query::quick_filter(&self.records, &self.search_text)
    }
}
