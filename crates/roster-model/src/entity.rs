#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::ids::{MenteeId, MentorId, RegistrationId};

/// A known mentor with a stable identifier.
///
/// Mentor lookup during reconciliation is by fuzzy name match; the source
/// roster carries no reliable key for mentors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mentor {
    pub id: MentorId,
    pub name: String,
}

/// A known mentee with a stable identifier.
///
/// Mentees are looked up by exact registration id, never fuzzily.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mentee {
    pub id: MenteeId,
    pub registration_id: RegistrationId,
}

/// A resolved mentor-mentee pairing produced by one reconciliation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub mentor_id: MentorId,
    pub mentee_id: MenteeId,
}
