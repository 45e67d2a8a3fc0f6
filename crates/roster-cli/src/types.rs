use std::path::PathBuf;

use roster_model::{Assignment, ReconciliationReport};

#[derive(Debug)]
pub struct ImportResult {
    pub assignments: Vec<Assignment>,
    pub report: ReconciliationReport,
    /// Where the assignment list was written; `None` on a dry run.
    pub out_path: Option<PathBuf>,
}
