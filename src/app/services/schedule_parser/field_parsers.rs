//! Text pattern extraction for registration export fields
//!
//! Each extractor returns `None` when its input does not have the expected
//! shape; the record parser turns that into a [`MalformedRowError`] naming the
//! failed step.
//!
//! [`MalformedRowError`]: crate::MalformedRowError

use regex::Regex;

use crate::Result;
use crate::app::models::DayOfWeek;

/// `<code> - <name>`, split at the first separator
const COURSE_LISTING_PATTERN: &str = r"(.*?) - (.*)";

/// `(Fall|Spring) <term>[ Term]` at the end of the description
const TERM_PATTERN: &str = r"(Fall|Spring) (.*?)(?: Term)?$";

/// `<days> | <start> - <end> | <location>`
const MEETING_PATTERN: &str = r"((?:[MTWRF]-)*[MTWRF]) \| (.+?) - (.+?) \| (.+)";

/// `H:MM AM|PM`
const CLOCK_PATTERN: &str = r"([0-9]{1,2}):([0-9]{2}) (AM|PM)";

/// One decoded `<days> | <start> - <end> | <location>` block, times still raw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingBlock {
    pub days: Vec<DayOfWeek>,
    pub start: String,
    pub end: String,
    pub location: String,
}

/// Compiled patterns shared by every row of a parse
#[derive(Debug, Clone)]
pub struct FieldPatterns {
    course_listing: Regex,
    term: Regex,
    meeting: Regex,
    clock: Regex,
}

impl FieldPatterns {
    pub fn new() -> Result<Self> {
        Ok(Self {
            course_listing: Regex::new(COURSE_LISTING_PATTERN)?,
            term: Regex::new(TERM_PATTERN)?,
            meeting: Regex::new(MEETING_PATTERN)?,
            clock: Regex::new(CLOCK_PATTERN)?,
        })
    }

    /// Split a course listing into (code, name)
    pub fn split_course_listing(&self, listing: &str) -> Option<(String, String)> {
        let caps = self.course_listing.captures(listing)?;
        Some((caps[1].to_string(), caps[2].to_string()))
    }

    /// Resolve the term from a full row description
    ///
    /// "Fall Semester" and "Spring Semester" collapse to "F" and "S"; any other
    /// term name ("A Term" -> "A") is kept verbatim.
    pub fn extract_term(&self, description: &str) -> Option<String> {
        let caps = self.term.captures(description)?;
        let semester = &caps[1];
        let term_name = &caps[2];

        if term_name == "Semester" {
            semester.chars().next().map(|c| c.to_string())
        } else {
            Some(term_name.to_string())
        }
    }

    /// Decode one meeting block
    pub fn parse_meeting_block(&self, pattern: &str) -> Option<MeetingBlock> {
        let caps = self.meeting.captures(pattern)?;

        let days = caps[1]
            .split('-')
            .map(str::parse::<DayOfWeek>)
            .collect::<std::result::Result<Vec<_>, _>>()
            .ok()?;

        Some(MeetingBlock {
            days,
            start: caps[2].to_string(),
            end: caps[3].to_string(),
            location: caps[4].to_string(),
        })
    }

    /// Parse a 12-hour clock string into a fractional hour of day
    ///
    /// "12" counts as hour 0 before the PM offset, so 12:30 AM is 0.5 and
    /// 12:00 PM is 12.0.
    pub fn parse_clock(&self, text: &str) -> Option<f64> {
        let caps = self.clock.captures(text)?;
        let hour: u32 = caps[1].parse().ok()?;
        let minutes: u32 = caps[2].parse().ok()?;

        let hour_offset = if &caps[3] == "PM" { 12 } else { 0 };
        let hour24 = if &caps[1] == "12" { 0 } else { hour };

        Some((hour24 + hour_offset) as f64 + minutes as f64 / 60.0)
    }
}

/// Extract the section id following `<code>-` and ending at the next space
pub fn extract_section(code: &str, section: &str) -> Option<String> {
    let prefix = format!("{}-", code);
    let start = section.find(&prefix)? + prefix.len();
    let rest = &section[start..];
    let end = rest.find(' ')?;
    Some(rest[..end].to_string())
}

/// Location of a row that has a room but no weekly schedule (`"| Online"`)
pub fn location_only(pattern: &str) -> Option<String> {
    let location: String = pattern.chars().skip(2).collect();
    if location.is_empty() {
        None
    } else {
        Some(location)
    }
}

/// Normalize an optional free-text field: empty means absent
pub fn optional_text(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
