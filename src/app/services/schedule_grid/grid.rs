//! Hour-by-day grid of one term's weekly meetings

use std::fmt::Write;
use std::ops::Range;
use tracing::warn;

use crate::app::models::{Course, DayOfWeek};

/// Narrowest rendered course column
const MIN_COLUMN_WIDTH: usize = 8;

/// Width of the hour label column ("12:00 PM")
const HOUR_COLUMN_WIDTH: usize = 8;

/// Content of one (day, hour) slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// First hour of a meeting
    Start {
        label: String,
        name: String,
        location: Option<String>,
    },
    /// Later hour of the meeting labelled in an earlier slot
    Continued { label: String },
}

impl Slot {
    pub fn label(&self) -> &str {
        match self {
            Self::Start { label, .. } | Self::Continued { label } => label,
        }
    }
}

/// Weekly grid of a single term
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyGrid {
    pub term: char,
    start_hour: u32,
    end_hour: u32,
    /// Slots per day (Monday first), one per hour of the range
    days: [Vec<Option<Slot>>; 5],
}

impl WeeklyGrid {
    /// Lay out the meetings of a term's courses
    ///
    /// The hour range runs from the earliest start (rounded down) to the
    /// latest end (rounded up). A meeting occupies the slots `floor(start)+k`
    /// for every `k` with `start + k < end`; a later course overwrites an
    /// earlier one in a shared slot.
    pub fn build(term: char, courses: &[Course]) -> Self {
        let times = || courses.iter().flat_map(|c| c.times.iter());

        let (start_hour, end_hour) = match (
            times().map(|t| t.start_time).reduce(f64::min),
            times().map(|t| t.end_time).reduce(f64::max),
        ) {
            (Some(min), Some(max)) => (min.floor() as u32, max.ceil() as u32),
            _ => (0, 0),
        };

        let hours = end_hour.saturating_sub(start_hour) as usize;
        let mut days: [Vec<Option<Slot>>; 5] = Default::default();
        for day in days.iter_mut() {
            day.resize(hours, None);
        }

        for course in courses {
            let label = course.label();
            for time in &course.times {
                let first = time.start_time.floor() as u32;
                let column = &mut days[time.day_of_week.index()];

                let mut k = 0u32;
                while time.start_time + (k as f64) < time.end_time {
                    let index = (first + k - start_hour) as usize;
                    let slot = if k == 0 {
                        Slot::Start {
                            label: label.clone(),
                            name: course.name.clone(),
                            location: course.location.clone(),
                        }
                    } else {
                        Slot::Continued {
                            label: label.clone(),
                        }
                    };

                    if let Some(cell) = column.get_mut(index) {
                        if let Some(previous) = cell.as_ref() {
                            if previous.label() != label {
                                warn!(
                                    "{} overlaps {} on {} at {}:00",
                                    label,
                                    previous.label(),
                                    time.day_of_week,
                                    first + k
                                );
                            }
                        }
                        *cell = Some(slot);
                    }
                    k += 1;
                }
            }
        }

        Self {
            term,
            start_hour,
            end_hour,
            days,
        }
    }

    /// Whole hours covered by the grid
    pub fn hours(&self) -> Range<u32> {
        self.start_hour..self.end_hour
    }

    pub fn is_empty(&self) -> bool {
        self.start_hour == self.end_hour
    }

    pub fn slot(&self, day: DayOfWeek, hour: u32) -> Option<&Slot> {
        if !self.hours().contains(&hour) {
            return None;
        }
        self.days[day.index()]
            .get((hour - self.start_hour) as usize)
            .and_then(Option::as_ref)
    }

    /// Render as a plain-text table
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} Term", self.term);

        if self.is_empty() {
            out.push_str("(no scheduled meetings)\n");
            return out;
        }

        let width = self
            .days
            .iter()
            .flatten()
            .flatten()
            .map(|slot| slot.label().len())
            .max()
            .unwrap_or(0)
            .max(MIN_COLUMN_WIDTH);

        let mut header = format!("{:<w$}", "Time", w = HOUR_COLUMN_WIDTH);
        for day in DayOfWeek::ALL {
            let _ = write!(header, "  {:<w$}", day.letter(), w = width);
        }
        out.push_str(header.trim_end());
        out.push('\n');

        for hour in self.hours() {
            let mut line = format!("{:>w$}", hour_label(hour), w = HOUR_COLUMN_WIDTH);
            for day in DayOfWeek::ALL {
                let text = match self.slot(day, hour) {
                    Some(Slot::Start { label, .. }) => label.as_str(),
                    Some(Slot::Continued { .. }) => "|",
                    None => "",
                };
                let _ = write!(line, "  {:<w$}", text, w = width);
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }

        let _ = writeln!(out, "{:>w$}", hour_label(self.end_hour), w = HOUR_COLUMN_WIDTH);
        out
    }
}

/// `h:00 AM|PM` label of a whole hour, 12 for noon and midnight
pub fn hour_label(hour: u32) -> String {
    let half = if (12..24).contains(&hour) { "PM" } else { "AM" };
    let h12 = match hour % 12 {
        0 => 12,
        other => other,
    };
    format!("{}:00 {}", h12, half)
}
