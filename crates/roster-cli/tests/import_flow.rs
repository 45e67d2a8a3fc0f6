//! End-to-end import flow: CSV files in, assignments and report out.

use std::fs;

use tempfile::TempDir;

use roster_ingest::{read_mentees, read_mentors, read_roster};
use roster_model::{MenteeId, MentorId};
use roster_reconcile::Reconciler;

fn write_fixtures(dir: &TempDir) -> (std::path::PathBuf, std::path::PathBuf, std::path::PathBuf) {
    let roster = dir.path().join("roster.csv");
    let mentors = dir.path().join("mentors.csv");
    let mentees = dir.path().join("mentees.csv");
    fs::write(
        &roster,
        "\
mentor_name,registration_id,mentee_name,department
Praveen Shukla,21BCS001,Asha Rao,CSE
Unknown Person Qqzz,21BCS002,Ravi Iyer,ECE
Praveen Shukla,,Sita Devi,CSE
",
    )
    .expect("write roster");
    fs::write(
        &mentors,
        "id,name\n1,Dr. Praveen Kr. Shukla\n2,Meera Nair\n",
    )
    .expect("write mentors");
    fs::write(&mentees, "id,registration_id\n10,21BCS001\n11,21BCS002\n")
        .expect("write mentees");
    (roster, mentors, mentees)
}

#[test]
fn full_import_flow_reconciles_roster() {
    let dir = tempfile::tempdir().expect("temp dir");
    let (roster, mentors, mentees) = write_fixtures(&dir);

    let rows = read_roster(&roster).expect("read roster");
    let mentor_pool = read_mentors(&mentors).expect("read mentors");
    let mentee_pool = read_mentees(&mentees).expect("read mentees");
    let result = Reconciler::new().reconcile(&rows, &mentor_pool, &mentee_pool);

    assert_eq!(result.report.matched, 1);
    assert_eq!(result.report.mentor_not_found, 1);
    assert_eq!(result.report.mentee_not_found, 0);
    assert_eq!(result.report.skipped, 1);
    assert_eq!(
        result.assignments,
        vec![roster_model::Assignment {
            mentor_id: MentorId::new(1),
            mentee_id: MenteeId::new(10),
        }]
    );
    assert!(
        result
            .report
            .unmatched_mentors
            .contains("Unknown Person Qqzz")
    );

    // The assignment list is what the caller persists; it must survive a
    // JSON round trip unchanged.
    let json = serde_json::to_string(&result.assignments).expect("serialize assignments");
    let round: Vec<roster_model::Assignment> =
        serde_json::from_str(&json).expect("deserialize assignments");
    assert_eq!(round, result.assignments);
}
