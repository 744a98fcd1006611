//! Data models for course schedules
//!
//! This module contains the core data structures recovered from a
//! course-registration export: courses, their weekly meeting times and the
//! spreadsheet calendar dates bounding them.

use crate::error::{ExtractionStep, MalformedRowError};
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Semantic Fields
// =============================================================================

/// Semantic field a spreadsheet column is resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullDesc,
    CourseName,
    Credits,
    GradingBasis,
    Section,
    Format,
    DeliveryMode,
    MeetingPatterns,
    RegistrationStatus,
    Instructor,
    StartDate,
    EndDate,
}

impl Field {
    /// Identifier used in logs and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullDesc => "fullDesc",
            Self::CourseName => "courseName",
            Self::Credits => "credits",
            Self::GradingBasis => "gradingBasis",
            Self::Section => "section",
            Self::Format => "format",
            Self::DeliveryMode => "deliveryMode",
            Self::MeetingPatterns => "meetingPatterns",
            Self::RegistrationStatus => "registrationStatus",
            Self::Instructor => "instructor",
            Self::StartDate => "startDate",
            Self::EndDate => "endDate",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Cells and Raw Rows
// =============================================================================

/// Value of a single worksheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Text form of the cell, numbers rendered without a trailing `.0`
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
            Self::Number(n) => n.to_string(),
            Self::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        }
    }

    /// Numeric form of the cell, parsing text when needed
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
            Self::Bool(_) => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }
}

/// One data row keyed by resolved field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    /// 1-indexed sheet row number
    pub row_number: u32,

    /// Cell values of the resolved columns present in this row
    pub values: HashMap<Field, CellValue>,
}

impl RawRow {
    pub fn new(row_number: u32) -> Self {
        Self {
            row_number,
            values: HashMap::new(),
        }
    }

    pub fn with_value(mut self, field: Field, value: CellValue) -> Self {
        self.values.insert(field, value);
        self
    }

    /// Text of a field, empty when the cell is missing
    pub fn text(&self, field: Field) -> String {
        self.values
            .get(&field)
            .map(CellValue::to_text)
            .unwrap_or_default()
    }

    pub fn get(&self, field: Field) -> Option<&CellValue> {
        self.values.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(CellValue::is_blank)
    }
}

// =============================================================================
// Calendar Dates
// =============================================================================

/// Calendar date decoded from a spreadsheet date serial
///
/// Unlike [`NaiveDate`] this can hold 1900-02-29, the day the 1900 date
/// system counts even though it never existed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SheetDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl SheetDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Convert to a real calendar date (fails for 1900-02-29)
    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for SheetDate {
    fn from(date: NaiveDate) -> Self {
        use chrono::Datelike;
        Self::new(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for SheetDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

// =============================================================================
// Meeting Times
// =============================================================================

/// Teaching day of the week, lettered as in registration exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    M,
    T,
    W,
    R,
    F,
}

impl DayOfWeek {
    /// All teaching days in week order
    pub const ALL: [DayOfWeek; 5] = [Self::M, Self::T, Self::W, Self::R, Self::F];

    pub fn letter(&self) -> char {
        match self {
            Self::M => 'M',
            Self::T => 'T',
            Self::W => 'W',
            Self::R => 'R',
            Self::F => 'F',
        }
    }

    pub fn to_weekday(&self) -> Weekday {
        match self {
            Self::M => Weekday::Mon,
            Self::T => Weekday::Tue,
            Self::W => Weekday::Wed,
            Self::R => Weekday::Thu,
            Self::F => Weekday::Fri,
        }
    }

    /// Two-letter iCalendar BYDAY code
    pub fn ical_code(&self) -> &'static str {
        match self {
            Self::M => "MO",
            Self::T => "TU",
            Self::W => "WE",
            Self::R => "TH",
            Self::F => "FR",
        }
    }

    /// Column position in a Monday-first week
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl FromStr for DayOfWeek {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Self::M),
            "T" => Ok(Self::T),
            "W" => Ok(Self::W),
            "R" => Ok(Self::R),
            "F" => Ok(Self::F),
            other => Err(format!("unknown day letter '{}'", other)),
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One weekly meeting of a course
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingTime {
    pub day_of_week: DayOfWeek,

    /// Hour of day, minutes as the fractional part (13.5 = 1:30 PM)
    pub start_time: f64,

    /// Hour of day, always after `start_time`
    pub end_time: f64,
}

impl MeetingTime {
    /// Create a meeting time, rejecting blocks that do not end after they start
    pub fn new(
        day_of_week: DayOfWeek,
        start_time: f64,
        end_time: f64,
        row: u32,
    ) -> Result<Self, MalformedRowError> {
        if !(start_time < end_time) {
            return Err(MalformedRowError::new(
                row,
                ExtractionStep::TimeRange,
                format!("{} - {}", format_hour(start_time), format_hour(end_time)),
            ));
        }
        Ok(Self {
            day_of_week,
            start_time,
            end_time,
        })
    }
}

/// Split a fractional hour into whole hours and rounded minutes
pub fn hour_minute(hour: f64) -> (u32, u32) {
    let whole = hour.floor();
    let minutes = ((hour - whole) * 60.0).round() as u32;
    if minutes == 60 {
        (whole as u32 + 1, 0)
    } else {
        (whole as u32, minutes)
    }
}

/// Format a fractional hour as a 12-hour clock string
pub fn format_hour(hour: f64) -> String {
    let (h, m) = hour_minute(hour);
    let half = if (12..24).contains(&h) { "PM" } else { "AM" };
    let h12 = match h % 12 {
        0 => 12,
        other => other,
    };
    format!("{}:{:02} {}", h12, m, half)
}

// =============================================================================
// Courses
// =============================================================================

/// A registered course recovered from one export row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Department and number, e.g. "CS 3013"
    pub code: String,

    /// Human title
    pub name: String,

    /// Term letter ("A".."D") or combined semester marker ("F", "S")
    pub term: String,

    pub section: String,

    /// Weekly meetings, empty for courses without a fixed schedule
    pub times: Vec<MeetingTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,

    pub start_date: SheetDate,

    pub end_date: SheetDate,
}

impl Course {
    /// Distinct meeting days in first-seen order
    pub fn meeting_days(&self) -> Vec<DayOfWeek> {
        let mut days = Vec::new();
        for time in &self.times {
            if !days.contains(&time.day_of_week) {
                days.push(time.day_of_week);
            }
        }
        days
    }

    /// `CODE-SECTION` label used by the grid
    pub fn label(&self) -> String {
        format!("{}-{}", self.code, self.section)
    }

    pub fn has_fixed_schedule(&self) -> bool {
        !self.times.is_empty()
    }
}
