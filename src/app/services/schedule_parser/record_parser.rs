//! Course row normalization
//!
//! Turns one resolved row of the registration export into a [`Course`].
//! Rows that are not active registrations are dropped; registered rows whose
//! text does not have the expected shape fail with a [`MalformedRowError`].

use tracing::debug;

use super::date_serial::date_from_serial;
use super::field_parsers::{FieldPatterns, extract_section, location_only, optional_text};
use crate::app::models::{CellValue, Course, Field, MeetingTime, RawRow, SheetDate};
use crate::constants::REGISTERED_STATUS;
use crate::error::{ExtractionStep, MalformedRowError};

/// Decoded meeting-pattern column
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeetingSchedule {
    pub times: Vec<MeetingTime>,
    pub location: Option<String>,
}

/// Normalize a raw row into a course
///
/// Returns `Ok(None)` for rows whose registration status is anything other
/// than exactly "Registered".
pub fn parse_course_record(
    row: &RawRow,
    patterns: &FieldPatterns,
) -> Result<Option<Course>, MalformedRowError> {
    let status = row.text(Field::RegistrationStatus);
    if status != REGISTERED_STATUS {
        debug!("Row {} skipped: status '{}'", row.row_number, status);
        return Ok(None);
    }

    let malformed = |step, value: String| MalformedRowError::new(row.row_number, step, value);

    let listing = row.text(Field::CourseName);
    let (code, name) = patterns
        .split_course_listing(&listing)
        .ok_or_else(|| malformed(ExtractionStep::CourseListing, listing.clone()))?;

    let section_text = row.text(Field::Section);
    let section = extract_section(&code, &section_text)
        .ok_or_else(|| malformed(ExtractionStep::Section, section_text.clone()))?;

    let description = row.text(Field::FullDesc);
    let term = patterns
        .extract_term(&description)
        .ok_or_else(|| malformed(ExtractionStep::Term, description.clone()))?;

    let start_date = parse_date(row, Field::StartDate, ExtractionStep::StartDate)?;
    let end_date = parse_date(row, Field::EndDate, ExtractionStep::EndDate)?;

    let instructor = optional_text(row.text(Field::Instructor));

    let schedule = parse_meeting_patterns(
        &row.text(Field::MeetingPatterns),
        patterns,
        row.row_number,
    )?;

    Ok(Some(Course {
        code,
        name,
        term,
        section,
        times: schedule.times,
        location: schedule.location,
        instructor,
        start_date,
        end_date,
    }))
}

/// Decode a date-serial cell
fn parse_date(
    row: &RawRow,
    field: Field,
    step: ExtractionStep,
) -> Result<SheetDate, MalformedRowError> {
    row.get(field)
        .and_then(CellValue::as_number)
        .and_then(date_from_serial)
        .ok_or_else(|| MalformedRowError::new(row.row_number, step, row.text(field)))
}

/// Decode the meeting-pattern column
///
/// Empty means no meetings and no location. A leading `|` marks a row with a
/// location but no weekly schedule. Otherwise each line holding a
/// `<days> | <start> - <end> | <location>` block adds its meetings and other
/// lines are ignored; at least one line must decode. The location of the
/// first block is kept.
pub fn parse_meeting_patterns(
    text: &str,
    patterns: &FieldPatterns,
    row: u32,
) -> Result<MeetingSchedule, MalformedRowError> {
    if text.trim().is_empty() {
        return Ok(MeetingSchedule::default());
    }

    if text.starts_with('|') {
        return Ok(MeetingSchedule {
            times: Vec::new(),
            location: location_only(text),
        });
    }

    let mut schedule = MeetingSchedule::default();
    let mut decoded = false;

    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        let Some(block) = patterns.parse_meeting_block(line) else {
            debug!("Row {}: ignoring meeting line '{}'", row, line);
            continue;
        };
        decoded = true;

        let start = patterns
            .parse_clock(&block.start)
            .ok_or_else(|| MalformedRowError::new(row, ExtractionStep::TimeOfDay, &block.start))?;
        let end = patterns
            .parse_clock(&block.end)
            .ok_or_else(|| MalformedRowError::new(row, ExtractionStep::TimeOfDay, &block.end))?;

        for day in &block.days {
            schedule.times.push(MeetingTime::new(*day, start, end, row)?);
        }

        if schedule.location.is_none() {
            schedule.location = Some(block.location);
        }
    }

    if !decoded {
        return Err(MalformedRowError::new(
            row,
            ExtractionStep::MeetingPattern,
            text,
        ));
    }

    Ok(schedule)
}
