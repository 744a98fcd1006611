//! Error handling for schedule parsing and export operations.
//!
//! Provides one crate-wide error type with context for workbook decoding,
//! row extraction, configuration and calendar export failures.

use std::fmt;
use thiserror::Error;

/// Result type alias for schedule operations
pub type Result<T> = std::result::Result<T, Error>;

/// Extraction step of the row normalizer that rejected a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractionStep {
    /// `<code> - <name>` split of the course listing
    CourseListing,
    /// `<code>-<section> ` lookup in the section column
    Section,
    /// `(Fall|Spring) <term>[ Term]` suffix of the description
    Term,
    /// Start date serial
    StartDate,
    /// End date serial
    EndDate,
    /// `<days> | <start> - <end> | <location>` grammar
    MeetingPattern,
    /// `H:MM AM|PM` clock string
    TimeOfDay,
    /// Meeting block that does not end after it starts
    TimeRange,
}

impl fmt::Display for ExtractionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CourseListing => "course listing",
            Self::Section => "section",
            Self::Term => "term",
            Self::StartDate => "start date",
            Self::EndDate => "end date",
            Self::MeetingPattern => "meeting pattern",
            Self::TimeOfDay => "time of day",
            Self::TimeRange => "time range",
        };
        f.write_str(name)
    }
}

/// A registered row whose required text did not match its expected pattern
#[derive(Error, Debug, Clone, PartialEq)]
#[error("malformed row {row}: {step} could not be extracted from '{value}'")]
pub struct MalformedRowError {
    /// 1-indexed sheet row number
    pub row: u32,

    /// Extraction step that failed
    pub step: ExtractionStep,

    /// Raw text the step was applied to
    pub value: String,
}

impl MalformedRowError {
    pub fn new(row: u32, step: ExtractionStep, value: impl Into<String>) -> Self {
        Self {
            row,
            step,
            value: value.into(),
        }
    }
}

/// Comprehensive error types for schedule processing
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The input is not a readable spreadsheet workbook
    #[error("Workbook error: {message}")]
    Workbook { message: String },

    /// A registered row could not be normalized into a course
    #[error(transparent)]
    MalformedRow(#[from] MalformedRowError),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Calendar export error
    #[error("Calendar export error: {message}")]
    CalendarExport { message: String },

    /// A text pattern failed to compile
    #[error("Pattern error: {message}")]
    Pattern { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a workbook format error
    pub fn workbook(message: impl Into<String>) -> Self {
        Self::Workbook {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a calendar export error
    pub fn calendar_export(message: impl Into<String>) -> Self {
        Self::CalendarExport {
            message: message.into(),
        }
    }

    /// The malformed-row failure, if this error carries one
    pub fn as_malformed_row(&self) -> Option<&MalformedRowError> {
        match self {
            Self::MalformedRow(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(error: zip::result::ZipError) -> Self {
        Self::Workbook {
            message: format!("invalid workbook archive: {}", error),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(error: quick_xml::Error) -> Self {
        Self::Workbook {
            message: format!("malformed workbook XML: {}", error),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: format!("invalid configuration file: {}", error),
        }
    }
}

impl From<regex::Error> for Error {
    fn from(error: regex::Error) -> Self {
        Self::Pattern {
            message: error.to_string(),
        }
    }
}
