//! Calendar export for parsed schedules
//!
//! Each course with weekly meetings becomes one recurring event. Sheet times
//! are wall-clock times in the configured zone and are written in UTC.
//!
//! ## Architecture
//!
//! - [`exporter`] - VEVENT/VCALENDAR assembly with the `icalendar` crate
//! - [`recurrence`] - first meeting date, UTC conversion and RRULE text

pub mod exporter;
pub mod recurrence;

#[cfg(test)]
pub mod tests;

pub use exporter::{CalendarExporter, event_description, event_uid};
pub use recurrence::{EventWindow, first_meeting_date, weekly_rule};
