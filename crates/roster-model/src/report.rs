#![deny(unsafe_code)]

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Diagnostics for one reconciliation run.
///
/// Built fresh per run and discarded after being rendered. The unmatched
/// sets are deduplicated and ordered so report output is deterministic
/// regardless of row order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationReport {
    /// Rows that produced an assignment.
    pub matched: usize,
    /// Rows whose mentor name resolved to no candidate.
    pub mentor_not_found: usize,
    /// Rows whose registration id resolved to no mentee.
    pub mentee_not_found: usize,
    /// Rows missing a mentor name or registration id. Counted separately
    /// from match failures.
    pub skipped: usize,
    /// Distinct mentor names that failed to resolve.
    pub unmatched_mentors: BTreeSet<String>,
    /// Distinct registration ids that failed to resolve.
    pub unmatched_mentees: BTreeSet<String>,
}

impl ReconciliationReport {
    /// Sum of all counters.
    ///
    /// A row that fails both mentor and mentee resolution bumps both
    /// not-found counters, so this can exceed the input row count.
    pub fn total_rows(&self) -> usize {
        self.matched + self.mentor_not_found + self.mentee_not_found + self.skipped
    }

    /// Distinct unresolved values across both pools.
    pub fn unmatched_total(&self) -> usize {
        self.unmatched_mentors.len() + self.unmatched_mentees.len()
    }

    /// True when every row produced an assignment.
    pub fn is_clean(&self) -> bool {
        self.mentor_not_found == 0 && self.mentee_not_found == 0 && self.skipped == 0
    }
}
