use std::collections::BTreeSet;

use roster_model::{
    Assignment, Mentee, MenteeId, Mentor, MentorId, ReconciliationReport, RegistrationId,
    RosterRecord,
};

#[test]
fn mentor_round_trips_through_json() {
    let mentor = Mentor {
        id: MentorId::new(12),
        name: "Praveen Kumar Shukla".to_string(),
    };
    let json = serde_json::to_string(&mentor).expect("serialize mentor");
    let round: Mentor = serde_json::from_str(&json).expect("deserialize mentor");
    assert_eq!(round, mentor);
}

#[test]
fn mentee_registration_id_survives_serialization() {
    let mentee = Mentee {
        id: MenteeId::new(3),
        registration_id: RegistrationId::new("21bcs042").expect("valid id"),
    };
    let json = serde_json::to_string(&mentee).expect("serialize mentee");
    let round: Mentee = serde_json::from_str(&json).expect("deserialize mentee");
    assert_eq!(round.registration_id.as_str(), "21BCS042");
}

#[test]
fn assignment_ids_serialize_as_plain_integers() {
    let assignment = Assignment {
        mentor_id: MentorId::new(5),
        mentee_id: MenteeId::new(9),
    };
    let json = serde_json::to_string(&assignment).expect("serialize assignment");
    assert_eq!(json, r#"{"mentor_id":5,"mentee_id":9}"#);
}

#[test]
fn default_report_is_clean() {
    let report = ReconciliationReport::default();
    assert!(report.is_clean());
    assert_eq!(report.total_rows(), 0);
    assert_eq!(report.unmatched_total(), 0);
}

#[test]
fn report_unmatched_sets_deduplicate() {
    let mut report = ReconciliationReport {
        unmatched_mentors: BTreeSet::new(),
        ..ReconciliationReport::default()
    };
    report.unmatched_mentors.insert("A. Verma".to_string());
    report.unmatched_mentors.insert("A. Verma".to_string());
    assert_eq!(report.unmatched_mentors.len(), 1);
}

#[test]
fn incomplete_record_is_flagged() {
    let record = RosterRecord {
        mentor_name: "Dr. Shukla".to_string(),
        registration_id: String::new(),
        mentee_name: "Asha Rao".to_string(),
        department: "CSE".to_string(),
    };
    assert!(!record.is_complete());
}
