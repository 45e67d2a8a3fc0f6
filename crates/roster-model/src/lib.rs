pub mod entity;
pub mod error;
pub mod ids;
pub mod record;
pub mod report;

pub use entity::{Assignment, Mentee, Mentor};
pub use error::{ModelError, Result};
pub use ids::{MenteeId, MentorId, RegistrationId};
pub use record::RosterRecord;
pub use report::ReconciliationReport;
