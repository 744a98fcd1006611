//! Test utilities for schedule grids

use crate::app::models::{Course, DayOfWeek, MeetingTime, SheetDate};


/// A course meeting on `days` from `start` to `end` (fractional hours)
pub fn course(code: &str, section: &str, term: &str, days: &[DayOfWeek], start: f64, end: f64) -> Course {
    Course {
        code: code.to_string(),
        name: format!("{} lecture", code),
        term: term.to_string(),
        section: section.to_string(),
        times: days
            .iter()
            .map(|day| MeetingTime::new(*day, start, end, 4).unwrap())
            .collect(),
        location: Some("Fuller Labs 320".to_string()),
        instructor: None,
        start_date: SheetDate::new(2023, 8, 23),
        end_date: SheetDate::new(2023, 10, 13),
    }
}

/// A course with no weekly meetings
pub fn unscheduled(code: &str, term: &str) -> Course {
    Course {
        times: Vec::new(),
        location: Some("Online".to_string()),
        ..course(code, "X01", term, &[], 9.0, 10.0)
    }
}
