use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use roster_ingest::{read_mentees, read_mentors, read_roster};
use roster_match::MentorMatcher;
use roster_model::Assignment;
use roster_reconcile::Reconciler;

use crate::cli::ImportArgs;
use crate::types::ImportResult;

pub fn run_import(args: &ImportArgs) -> Result<ImportResult> {
    let import_span = info_span!("import", roster = %args.roster.display());
    let _import_guard = import_span.enter();

    let load_start = Instant::now();
    let rows = read_roster(&args.roster).context("load roster")?;
    let mentors = read_mentors(&args.mentors).context("load mentor pool")?;
    let mentees = read_mentees(&args.mentees).context("load mentee pool")?;
    info!(
        rows = rows.len(),
        mentors = mentors.len(),
        mentees = mentees.len(),
        duration_ms = load_start.elapsed().as_millis(),
        "inputs loaded"
    );

    let reconcile_start = Instant::now();
    let matcher = MentorMatcher::with_threshold(args.threshold);
    let reconciliation = Reconciler::with_matcher(matcher).reconcile(&rows, &mentors, &mentees);
    info!(
        matched = reconciliation.report.matched,
        mentor_not_found = reconciliation.report.mentor_not_found,
        mentee_not_found = reconciliation.report.mentee_not_found,
        skipped = reconciliation.report.skipped,
        duration_ms = reconcile_start.elapsed().as_millis(),
        "reconciliation complete"
    );

    let out_path = if args.dry_run {
        None
    } else {
        let path = args
            .out
            .clone()
            .unwrap_or_else(|| default_out_path(&args.roster));
        write_assignments(&path, &reconciliation.assignments)?;
        info!(
            path = %path.display(),
            assignments = reconciliation.assignments.len(),
            "assignments written"
        );
        Some(path)
    };

    Ok(ImportResult {
        assignments: reconciliation.assignments,
        report: reconciliation.report,
        out_path,
    })
}

fn default_out_path(roster: &Path) -> PathBuf {
    roster.with_file_name("assignments.json")
}

fn write_assignments(path: &Path, assignments: &[Assignment]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("create output: {}", path.display()))?;
    serde_json::to_writer_pretty(file, assignments)
        .with_context(|| format!("write assignments: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn import_args(dir: &TempDir, dry_run: bool) -> ImportArgs {
        let roster = dir.path().join("roster.csv");
        let mentors = dir.path().join("mentors.csv");
        let mentees = dir.path().join("mentees.csv");
        fs::write(
            &roster,
            "mentor_name,registration_id\nPraveen Shukla,21BCS001\n",
        )
        .expect("write roster");
        fs::write(&mentors, "id,name\n1,Dr. Praveen Kr. Shukla\n").expect("write mentors");
        fs::write(&mentees, "id,registration_id\n10,21BCS001\n").expect("write mentees");
        ImportArgs {
            roster,
            mentors,
            mentees,
            out: None,
            threshold: MentorMatcher::DEFAULT_THRESHOLD,
            dry_run,
        }
    }

    #[test]
    fn default_out_path_sits_next_to_roster() {
        let path = default_out_path(Path::new("/data/import/roster.csv"));
        assert_eq!(path, PathBuf::from("/data/import/assignments.json"));
    }

    #[test]
    fn import_writes_assignment_file_next_to_roster() {
        let dir = tempfile::tempdir().expect("temp dir");
        let args = import_args(&dir, false);

        let result = run_import(&args).expect("run import");

        let out_path = result.out_path.expect("out path");
        assert_eq!(out_path, dir.path().join("assignments.json"));
        let written = fs::read_to_string(&out_path).expect("read assignments");
        let round: Vec<Assignment> = serde_json::from_str(&written).expect("parse assignments");
        assert_eq!(round, result.assignments);
        assert_eq!(result.report.matched, 1);
    }

    #[test]
    fn dry_run_writes_nothing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let args = import_args(&dir, true);

        let result = run_import(&args).expect("run import");

        assert!(result.out_path.is_none());
        assert!(!dir.path().join("assignments.json").exists());
        // The reconciliation itself still runs on a dry run.
        assert_eq!(result.report.matched, 1);
        assert_eq!(result.assignments.len(), 1);
    }

    #[test]
    fn explicit_out_path_is_respected() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut args = import_args(&dir, false);
        let out = dir.path().join("pairs.json");
        args.out = Some(out.clone());

        let result = run_import(&args).expect("run import");

        assert_eq!(result.out_path.as_deref(), Some(out.as_path()));
        assert!(out.exists());
        assert!(!dir.path().join("assignments.json").exists());
    }
}
