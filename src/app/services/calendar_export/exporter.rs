//! iCalendar serialization of parsed courses

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use icalendar::{Calendar, Component, EventLike};
use std::path::Path;
use tracing::{debug, info};

use super::recurrence::{EventWindow, UTC_FORMAT, weekly_rule};
use crate::app::models::Course;
use crate::config::CalendarConfig;
use crate::constants::UID_DOMAIN;
use crate::{Error, Result};

/// Builds one weekly recurring VEVENT per scheduled course
#[derive(Debug, Clone)]
pub struct CalendarExporter {
    timezone: Tz,
    product_id: String,
    timestamp: DateTime<Utc>,
}

impl CalendarExporter {
    pub fn new(timezone: Tz, product_id: impl Into<String>) -> Self {
        Self {
            timezone,
            product_id: product_id.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn from_config(config: &CalendarConfig) -> Result<Self> {
        Ok(Self::new(config.tz()?, config.product_id.clone()))
    }

    /// Fix the DTSTAMP written into every event
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Build the event of one course, `None` for courses without meetings
    pub fn event_for(&self, course: &Course) -> Result<Option<icalendar::Event>> {
        if !course.has_fixed_schedule() {
            debug!("{} has no weekly meetings, not exported", course.label());
            return Ok(None);
        }

        let window = EventWindow::for_course(course, &self.timezone)?;

        let mut event = icalendar::Event::new();
        event.uid(&event_uid(course));
        event.add_property("DTSTAMP", self.timestamp.format(UTC_FORMAT).to_string());
        event.summary(&format!("{} - {}", course.code, course.name));
        event.description(&event_description(course));
        if let Some(location) = &course.location {
            event.location(location);
        }
        event.add_property("DTSTART", window.start.format(UTC_FORMAT).to_string());
        event.add_property("DTEND", window.end.format(UTC_FORMAT).to_string());
        event.add_property("RRULE", weekly_rule(&course.meeting_days(), window.until));
        event.add_property("X-MICROSOFT-CDO-BUSYSTATUS", "BUSY");

        Ok(Some(event.done()))
    }

    /// Build the calendar and the number of events it holds
    pub fn build_calendar(&self, courses: &[Course]) -> Result<(Calendar, usize)> {
        let mut calendar = Calendar::new();
        let mut count = 0;

        for course in courses {
            if let Some(event) = self.event_for(course)? {
                calendar.push(event);
                count += 1;
            }
        }

        Ok((calendar.done(), count))
    }

    /// Serialize the scheduled courses as an iCalendar document
    pub fn to_ics(&self, courses: &[Course]) -> Result<String> {
        let (calendar, _) = self.build_calendar(courses)?;
        Ok(self.finish(&calendar.to_string()))
    }

    /// Write the calendar to `path`, returning the number of events
    pub fn write_file(&self, courses: &[Course], path: &Path) -> Result<usize> {
        let (calendar, count) = self.build_calendar(courses)?;
        let content = self.finish(&calendar.to_string());

        std::fs::write(path, content).map_err(|e| {
            Error::io(format!("Failed to write calendar {}", path.display()), e)
        })?;

        info!("Wrote {} events to {}", count, path.display());
        Ok(count)
    }

    /// Replace the library PRODID with ours
    fn finish(&self, ics: &str) -> String {
        let mut result = String::with_capacity(ics.len());
        for line in ics.lines() {
            if line.starts_with("PRODID:") {
                result.push_str("PRODID:");
                result.push_str(&self.product_id);
            } else {
                result.push_str(line);
            }
            result.push_str("\r\n");
        }
        result
    }
}

/// Stable UID derived from the course identity and start date
pub fn event_uid(course: &Course) -> String {
    let slug: String = format!("{}-{}-{}", course.code, course.section, course.term)
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    format!(
        "{}-{}{:02}{:02}@{}",
        slug, course.start_date.year, course.start_date.month, course.start_date.day, UID_DOMAIN
    )
}

/// `Section: ..` plus the instructor line when known
pub fn event_description(course: &Course) -> String {
    match &course.instructor {
        Some(instructor) => format!("Section: {}\nInstructor: {}", course.section, instructor),
        None => format!("Section: {}", course.section),
    }
}
