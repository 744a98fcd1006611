//! Date arithmetic for weekly recurring course events

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::app::models::{Course, DayOfWeek, hour_minute};
use crate::{Error, Result};

/// iCalendar UTC date-time format
pub const UTC_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// First date on or after `start` falling on one of `days`
pub fn first_meeting_date(start: NaiveDate, days: &[DayOfWeek]) -> Option<NaiveDate> {
    (0..7)
        .filter_map(|offset| start.checked_add_signed(Duration::days(offset)))
        .find(|date| days.iter().any(|day| day.to_weekday() == date.weekday()))
}

/// Wall-clock time of a fractional hour of day
pub fn clock_time(hour: f64) -> Option<NaiveTime> {
    let (h, m) = hour_minute(hour);
    NaiveTime::from_hms_opt(h, m, 0)
}

/// Interpret a local wall-clock date-time in `tz` and convert it to UTC
///
/// Ambiguous times (DST fall-back) resolve to the earlier instant; times
/// skipped by a DST jump have no instant and fail.
pub fn local_to_utc(tz: &Tz, local: NaiveDateTime) -> Result<DateTime<Utc>> {
    tz.from_local_datetime(&local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| {
            Error::calendar_export(format!("{} does not exist in {}", local, tz.name()))
        })
}

/// `FREQ=WEEKLY;BYDAY=..;INTERVAL=1;UNTIL=..` for the given meeting days
pub fn weekly_rule(days: &[DayOfWeek], until: DateTime<Utc>) -> String {
    let by_day: Vec<&str> = days.iter().map(DayOfWeek::ical_code).collect();
    format!(
        "FREQ=WEEKLY;BYDAY={};INTERVAL=1;UNTIL={}",
        by_day.join(","),
        until.format(UTC_FORMAT)
    )
}

/// UTC bounds of a course's first meeting and the end of its last day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub until: DateTime<Utc>,
}

impl EventWindow {
    /// Compute the window of a course with at least one meeting time
    ///
    /// The first meeting's wall-clock times are taken from `times[0]` and
    /// placed on the first meeting day on or after the start date.
    pub fn for_course(course: &Course, tz: &Tz) -> Result<Self> {
        let first_time = course.times.first().ok_or_else(|| {
            Error::calendar_export(format!("{} has no meeting times", course.label()))
        })?;

        let start_date = course.start_date.to_naive().ok_or_else(|| {
            Error::calendar_export(format!(
                "{} has no real start date ({})",
                course.label(),
                course.start_date
            ))
        })?;
        let end_date = course.end_date.to_naive().ok_or_else(|| {
            Error::calendar_export(format!(
                "{} has no real end date ({})",
                course.label(),
                course.end_date
            ))
        })?;

        let first_date = first_meeting_date(start_date, &course.meeting_days())
            .ok_or_else(|| {
                Error::calendar_export(format!("{} has no meeting day", course.label()))
            })?;

        let start_time = clock_time(first_time.start_time);
        let end_time = clock_time(first_time.end_time);
        let (Some(start_time), Some(end_time)) = (start_time, end_time) else {
            return Err(Error::calendar_export(format!(
                "{} has a meeting time outside the day",
                course.label()
            )));
        };

        let last_moment = end_date.and_hms_opt(23, 59, 59).ok_or_else(|| {
            Error::calendar_export(format!("{} has no end of day", course.label()))
        })?;

        Ok(Self {
            start: local_to_utc(tz, first_date.and_time(start_time))?,
            end: local_to_utc(tz, first_date.and_time(end_time))?,
            until: local_to_utc(tz, last_moment)?,
        })
    }
}
