#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

/// One parsed roster row. Transient; exists only for the duration of an
/// import run.
///
/// Fields hold the raw cell values as read from the source file. Empty
/// strings stand in for missing cells so the reconciler can apply its
/// malformed-row policy uniformly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRecord {
    /// Free-text mentor name as written in the roster.
    pub mentor_name: String,
    /// Mentee registration identifier, a near-exact key.
    pub registration_id: String,
    /// Mentee display name. Carried through untouched.
    pub mentee_name: String,
    /// Department label. Carried through untouched.
    pub department: String,
}

impl RosterRecord {
    /// True when the row carries both fields reconciliation requires.
    pub fn is_complete(&self) -> bool {
        !self.mentor_name.trim().is_empty() && !self.registration_id.trim().is_empty()
    }
}
