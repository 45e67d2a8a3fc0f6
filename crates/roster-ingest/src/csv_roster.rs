use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use roster_model::{Mentee, MenteeId, Mentor, MentorId, RegistrationId, RosterRecord};

/// Normalize a header cell: strip BOM and surrounding whitespace, lowercase,
/// and fold separators so `Mentor Name`, `mentor-name`, and `MENTOR_NAME`
/// all resolve to the same column.
fn normalize_header(raw: &str) -> String {
    raw.trim()
        .trim_matches('\u{feff}')
        .to_lowercase()
        .replace(['-', ' '], "_")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Locate a column by any of its accepted header spellings.
fn find_column(headers: &[String], names: &[&str], path: &Path) -> Result<usize> {
    for name in names {
        if let Some(index) = headers.iter().position(|header| header == name) {
            return Ok(index);
        }
    }
    bail!(
        "missing column {:?} in {} (found: {})",
        names[0],
        path.display(),
        headers.join(", ")
    )
}

fn cell(record: &StringRecord, index: usize) -> String {
    record.get(index).map(normalize_cell).unwrap_or_default()
}

fn read_headers(path: &Path) -> Result<(csv::Reader<std::fs::File>, Vec<String>)> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("read header row: {}", path.display()))?
        .iter()
        .map(normalize_header)
        .collect();
    Ok((reader, headers))
}

/// Read roster rows.
///
/// Missing cells become empty strings so the reconciler's malformed-row
/// policy applies uniformly; only the mentor-name and registration-id
/// columns are required to exist. Fully blank rows are dropped here.
pub fn read_roster(path: &Path) -> Result<Vec<RosterRecord>> {
    let (mut reader, headers) = read_headers(path)?;
    let mentor_col = find_column(&headers, &["mentor_name", "mentor"], path)?;
    let registration_col = find_column(
        &headers,
        &["registration_id", "registration_no", "reg_no"],
        path,
    )?;
    let mentee_col = headers
        .iter()
        .position(|header| header == "mentee_name" || header == "mentee");
    let department_col = headers
        .iter()
        .position(|header| header == "department" || header == "dept");

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        rows.push(RosterRecord {
            mentor_name: cell(&record, mentor_col),
            registration_id: cell(&record, registration_col),
            mentee_name: mentee_col.map(|col| cell(&record, col)).unwrap_or_default(),
            department: department_col
                .map(|col| cell(&record, col))
                .unwrap_or_default(),
        });
    }
    debug!(path = %path.display(), rows = rows.len(), "roster loaded");
    Ok(rows)
}

/// Read the mentor candidate pool.
///
/// Unlike roster rows, pool exports come from the persistent store, so a
/// row with an unparsable id is a hard error rather than a skip.
pub fn read_mentors(path: &Path) -> Result<Vec<Mentor>> {
    let (mut reader, headers) = read_headers(path)?;
    let id_col = find_column(&headers, &["id", "mentor_id"], path)?;
    let name_col = find_column(&headers, &["name", "mentor_name"], path)?;

    let mut mentors = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let id: i64 = cell(&record, id_col)
            .parse()
            .with_context(|| format!("parse mentor id at row {}: {}", line + 2, path.display()))?;
        mentors.push(Mentor {
            id: MentorId::new(id),
            name: cell(&record, name_col),
        });
    }
    debug!(path = %path.display(), mentors = mentors.len(), "mentor pool loaded");
    Ok(mentors)
}

/// Read the mentee candidate pool.
pub fn read_mentees(path: &Path) -> Result<Vec<Mentee>> {
    let (mut reader, headers) = read_headers(path)?;
    let id_col = find_column(&headers, &["id", "mentee_id"], path)?;
    let registration_col = find_column(
        &headers,
        &["registration_id", "registration_no", "reg_no"],
        path,
    )?;

    let mut mentees = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let id: i64 = cell(&record, id_col)
            .parse()
            .with_context(|| format!("parse mentee id at row {}: {}", line + 2, path.display()))?;
        let registration_id = RegistrationId::new(cell(&record, registration_col))
            .with_context(|| format!("registration id at row {}: {}", line + 2, path.display()))?;
        mentees.push(Mentee {
            id: MenteeId::new(id),
            registration_id,
        });
    }
    debug!(path = %path.display(), mentees = mentees.len(), "mentee pool loaded");
    Ok(mentees)
}
