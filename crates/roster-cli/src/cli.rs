//! CLI argument definitions for the Mentor-Connect import tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use roster_match::MentorMatcher;

#[derive(Parser)]
#[command(
    name = "mentor-connect",
    version,
    about = "Mentor-Connect roster import - reconcile mentorship rosters",
    long_about = "Reconcile an imported mentorship roster against known mentor and\n\
                  mentee records.\n\n\
                  Mentors are resolved by fuzzy name matching, mentees by exact\n\
                  registration id. Unmatched rows are reported, never fatal."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Reconcile a roster file and write the assignment list.
    Import(ImportArgs),
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Roster CSV with mentor names and mentee registration ids.
    #[arg(long = "roster", value_name = "CSV")]
    pub roster: PathBuf,

    /// Mentor pool CSV (id, name).
    #[arg(long = "mentors", value_name = "CSV")]
    pub mentors: PathBuf,

    /// Mentee pool CSV (id, registration id).
    #[arg(long = "mentees", value_name = "CSV")]
    pub mentees: PathBuf,

    /// Output path for the assignment list
    /// (default: assignments.json next to the roster).
    #[arg(long = "out", value_name = "JSON")]
    pub out: Option<PathBuf>,

    /// Similarity a fuzzy candidate must exceed to match (0.0 to 1.0).
    #[arg(
        long = "threshold",
        value_name = "RATIO",
        value_parser = parse_threshold,
        default_value_t = MentorMatcher::DEFAULT_THRESHOLD
    )]
    pub threshold: f64,

    /// Reconcile and report without writing the assignment file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// Parse a similarity threshold, rejecting values outside `[0.0, 1.0]`.
///
/// A negative threshold would make the fuzzy tier accept the first
/// candidate unconditionally, and NaN would disable it entirely.
fn parse_threshold(value: &str) -> Result<f64, String> {
    let threshold: f64 = value
        .parse()
        .map_err(|_| format!("not a number: {value}"))?;
    if (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(format!("must be between 0.0 and 1.0, got {value}"))
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
