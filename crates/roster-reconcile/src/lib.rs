#![deny(unsafe_code)]

//! Reconciliation of imported roster rows against canonical mentor and
//! mentee pools.
//!
//! The reconciler is pure in-memory computation: candidate pools are
//! supplied up front, every row is processed exactly once, and the result
//! is an assignment list plus a diagnostic report. Failures to resolve a
//! row are data, not errors; a run never aborts part-way.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use roster_match::{MentorIndex, MentorMatcher};
use roster_model::{Assignment, Mentee, MenteeId, Mentor, ReconciliationReport, RosterRecord};

/// The outcome of one reconciliation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reconciliation {
    pub assignments: Vec<Assignment>,
    pub report: ReconciliationReport,
}

/// How a single row resolved. Outcomes are folded into the final
/// [`Reconciliation`] so per-row processing carries no shared state.
#[derive(Debug, Clone, PartialEq)]
enum RowOutcome {
    Matched(Assignment),
    /// At least one resolution failed; the raw values that failed are
    /// retained for the report. A row can miss on both pools at once.
    Unresolved {
        mentor_name: Option<String>,
        registration_id: Option<String>,
    },
    /// Required field missing; counted apart from match failures.
    Skipped,
}

/// Drives a bulk import run.
pub struct Reconciler {
    matcher: MentorMatcher,
}

impl Reconciler {
    pub fn new() -> Self {
        Self {
            matcher: MentorMatcher::new(),
        }
    }

    pub fn with_matcher(matcher: MentorMatcher) -> Self {
        Self { matcher }
    }

    /// Reconcile roster rows against the candidate pools.
    ///
    /// Empty pools are not an error; every row simply fails to resolve.
    /// The result is deterministic for identical inputs.
    pub fn reconcile(
        &self,
        rows: &[RosterRecord],
        mentors: &[Mentor],
        mentees: &[Mentee],
    ) -> Reconciliation {
        let mentor_index = MentorIndex::build(mentors);
        let mentee_index = build_mentee_index(mentees);
        debug!(
            rows = rows.len(),
            mentor_candidates = mentor_index.len(),
            mentee_candidates = mentee_index.len(),
            "starting reconciliation"
        );

        rows.iter()
            .map(|row| self.resolve_row(row, &mentor_index, &mentee_index))
            .fold(Reconciliation::default(), merge_outcome)
    }

    fn resolve_row(
        &self,
        row: &RosterRecord,
        mentor_index: &MentorIndex,
        mentee_index: &BTreeMap<String, MenteeId>,
    ) -> RowOutcome {
        if !row.is_complete() {
            debug!(
                mentee_name = %row.mentee_name,
                "row missing mentor name or registration id, skipping"
            );
            return RowOutcome::Skipped;
        }

        let mentor = self.matcher.find(&row.mentor_name, mentor_index);
        let registration_key = row.registration_id.trim().to_uppercase();
        let mentee_id = mentee_index.get(&registration_key).copied();

        match (mentor, mentee_id) {
            (Some(mentor), Some(mentee_id)) => RowOutcome::Matched(Assignment {
                mentor_id: mentor.id,
                mentee_id,
            }),
            (mentor, mentee_id) => RowOutcome::Unresolved {
                mentor_name: mentor
                    .is_none()
                    .then(|| row.mentor_name.trim().to_string()),
                registration_id: mentee_id
                    .is_none()
                    .then(|| row.registration_id.trim().to_string()),
            },
        }
    }
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::new()
    }
}

/// Exact lookup table keyed by uppercased, trimmed registration id.
///
/// Registration ids are a reliable natural key, so no fuzzy matching is
/// applied on the mentee side. Duplicate keys keep the first-seen mentee.
fn build_mentee_index(mentees: &[Mentee]) -> BTreeMap<String, MenteeId> {
    let mut index = BTreeMap::new();
    for mentee in mentees {
        let key = mentee.registration_id.as_str().to_string();
        if let Some(kept) = index.get(&key) {
            warn!(
                key = %key,
                kept_id = %kept,
                shadowed_id = %mentee.id,
                "duplicate registration id, keeping first-seen entry"
            );
            continue;
        }
        index.insert(key, mentee.id);
    }
    index
}

fn merge_outcome(mut acc: Reconciliation, outcome: RowOutcome) -> Reconciliation {
    match outcome {
        RowOutcome::Matched(assignment) => {
            acc.assignments.push(assignment);
            acc.report.matched += 1;
        }
        RowOutcome::Unresolved {
            mentor_name,
            registration_id,
        } => {
            if let Some(name) = mentor_name {
                acc.report.mentor_not_found += 1;
                acc.report.unmatched_mentors.insert(name);
            }
            if let Some(id) = registration_id {
                acc.report.mentee_not_found += 1;
                acc.report.unmatched_mentees.insert(id);
            }
        }
        RowOutcome::Skipped => {
            acc.report.skipped += 1;
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use roster_model::{MentorId, RegistrationId};

    use super::*;

    fn mentor(id: i64, name: &str) -> Mentor {
        Mentor {
            id: MentorId::new(id),
            name: name.to_string(),
        }
    }

    fn mentee(id: i64, registration_id: &str) -> Mentee {
        Mentee {
            id: MenteeId::new(id),
            registration_id: RegistrationId::new(registration_id).expect("valid id"),
        }
    }

    fn row(mentor_name: &str, registration_id: &str) -> RosterRecord {
        RosterRecord {
            mentor_name: mentor_name.to_string(),
            registration_id: registration_id.to_string(),
            ..RosterRecord::default()
        }
    }

    #[test]
    fn mixed_rows_split_into_matched_unmatched_and_skipped() {
        let mentors = vec![mentor(1, "Dr. Praveen Kr. Shukla")];
        let mentees = vec![mentee(10, "21BCS001"), mentee(11, "21BCS002")];
        let rows = vec![
            row("Praveen Shukla", "21BCS001"),
            row("Unknown Person Qqzz", "21BCS002"),
            row("Praveen Shukla", ""),
        ];

        let result = Reconciler::new().reconcile(&rows, &mentors, &mentees);

        assert_eq!(result.report.matched, 1);
        assert_eq!(result.report.mentor_not_found, 1);
        assert_eq!(result.report.mentee_not_found, 0);
        assert_eq!(result.report.skipped, 1);
        assert_eq!(result.assignments.len(), 1);
        assert_eq!(result.assignments[0].mentor_id, MentorId::new(1));
        assert_eq!(result.assignments[0].mentee_id, MenteeId::new(10));
    }

    #[test]
    fn registration_id_lookup_is_case_and_whitespace_insensitive() {
        let mentors = vec![mentor(1, "Meera Nair")];
        let mentees = vec![mentee(10, "21BCS042")];
        let rows = vec![row("Meera Nair", "  21bcs042 ")];

        let result = Reconciler::new().reconcile(&rows, &mentors, &mentees);
        assert_eq!(result.report.matched, 1);
    }

    #[test]
    fn row_can_fail_both_resolutions() {
        let rows = vec![row("Unknown Person Qqzz", "99XYZ999")];
        let result = Reconciler::new().reconcile(
            &rows,
            &[mentor(1, "Meera Nair")],
            &[mentee(10, "21BCS001")],
        );

        assert_eq!(result.report.mentor_not_found, 1);
        assert_eq!(result.report.mentee_not_found, 1);
        assert!(result.assignments.is_empty());
        assert!(
            result
                .report
                .unmatched_mentors
                .contains("Unknown Person Qqzz")
        );
        assert!(result.report.unmatched_mentees.contains("99XYZ999"));
    }

    #[test]
    fn unmatched_values_are_deduplicated() {
        let rows = vec![
            row("Unknown Person Qqzz", "21BCS001"),
            row("Unknown Person Qqzz", "21BCS001"),
        ];
        let result = Reconciler::new().reconcile(&rows, &[], &[]);

        assert_eq!(result.report.mentor_not_found, 2);
        assert_eq!(result.report.mentee_not_found, 2);
        assert_eq!(result.report.unmatched_mentors.len(), 1);
        assert_eq!(result.report.unmatched_mentees.len(), 1);
    }

    #[test]
    fn empty_pools_degrade_to_all_unmatched() {
        let rows = vec![row("Meera Nair", "21BCS001"), row("Asha Rao", "21BCS002")];
        let result = Reconciler::new().reconcile(&rows, &[], &[]);

        assert_eq!(result.report.matched, 0);
        assert_eq!(result.report.mentor_not_found, 2);
        assert_eq!(result.report.mentee_not_found, 2);
        assert!(result.assignments.is_empty());
    }

    #[test]
    fn reconcile_is_deterministic() {
        let mentors = vec![
            mentor(1, "Dr. Praveen Kr. Shukla"),
            mentor(2, "Meera Nair"),
            mentor(3, "Prof. Verma"),
        ];
        let mentees = vec![mentee(10, "21BCS001"), mentee(11, "21BCS002")];
        let rows = vec![
            row("Praveen Shukla", "21BCS001"),
            row("M Nair", "21BCS002"),
            row("Nobody Here Zz", "21BCS999"),
        ];

        let reconciler = Reconciler::new();
        let first = reconciler.reconcile(&rows, &mentors, &mentees);
        let second = reconciler.reconcile(&rows, &mentors, &mentees);
        assert_eq!(first, second);
    }
}
