//! Command-line argument definitions for the course schedule tool
//!
//! This module defines the complete CLI interface using clap derive API.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::app::services::schedule_grid::TERMS;

/// CLI arguments for the course schedule tool
///
/// Reads a course-registration workbook export and prints the registered
/// courses, renders weekly grids per term, or exports an iCalendar file.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "course-schedule",
    version,
    about = "Turn a course-registration workbook export into a weekly schedule",
    long_about = "Reads the first sheet of a course-registration export (.xlsx), recovers the \
                  registered courses with their weekly meeting times, and either lists them, \
                  renders a weekly grid per term, or writes a recurring-event calendar (.ics)."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    ///
    /// TOML configuration file for layout and calendar settings. If not
    /// specified, looks for ~/.config/course-schedule/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// List the registered courses of an export
    Parse(ParseArgs),
    /// Render weekly grids per term
    Grid(GridArgs),
    /// Write the schedule as an iCalendar file
    Export(ExportArgs),
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// Registration export workbook (.xlsx)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output format for the course list
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the course list"
    )]
    pub format: OutputFormat,
}

/// Arguments for the grid command
#[derive(Debug, Clone, Parser)]
pub struct GridArgs {
    /// Registration export workbook (.xlsx)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Only render one term
    #[arg(
        long = "term",
        value_name = "TERM",
        value_parser = parse_term,
        help = "Only render one term (A, B, C or D)"
    )]
    pub term: Option<char>,
}

/// Arguments for the export command
#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    /// Registration export workbook (.xlsx)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Calendar file to write
    ///
    /// Defaults to the configured output file (schedule.ics).
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Calendar file to write"
    )]
    pub output: Option<PathBuf>,

    /// Time zone of the sheet's meeting times
    #[arg(
        long = "timezone",
        value_name = "TZ",
        help = "IANA time zone of the meeting times (default America/New_York)"
    )]
    pub timezone: Option<String>,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Parse a quarter term letter
fn parse_term(s: &str) -> std::result::Result<char, String> {
    let mut chars = s.trim().chars();
    match (chars.next().map(|c| c.to_ascii_uppercase()), chars.next()) {
        (Some(term), None) if TERMS.contains(&term) => Ok(term),
        _ => Err(format!("'{}' is not a term; expected one of A, B, C, D", s)),
    }
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
