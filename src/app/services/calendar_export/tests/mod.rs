//! Test utilities for calendar export

use chrono::{DateTime, TimeZone, Utc};

use crate::app::models::{Course, DayOfWeek, MeetingTime, SheetDate};


/// Fixed DTSTAMP so generated calendars are comparable
pub fn stamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 8, 1, 12, 0, 0).unwrap()
}

/// An A-term course (2023-08-23 to 2023-10-13) meeting on `days`
pub fn a_term_course(days: &[DayOfWeek], start: f64, end: f64) -> Course {
    Course {
        code: "CS 3013".to_string(),
        name: "Operating Systems".to_string(),
        term: "A".to_string(),
        section: "A01".to_string(),
        times: days
            .iter()
            .map(|day| MeetingTime::new(*day, start, end, 4).unwrap())
            .collect(),
        location: Some("Fuller Labs 320".to_string()),
        instructor: Some("Craig Shue".to_string()),
        start_date: SheetDate::new(2023, 8, 23),
        end_date: SheetDate::new(2023, 10, 13),
    }
}
