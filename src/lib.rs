//! Course Schedule Library
//!
//! A Rust library for turning course-registration spreadsheet exports into a
//! typed weekly schedule.
//!
//! This library provides tools for:
//! - Reading the first sheet of an Office Open XML workbook
//! - Resolving export columns from their header labels
//! - Normalizing registered rows into courses with weekly meeting times
//! - Grouping courses per term and rendering weekly grids
//! - Exporting recurring calendar events in iCalendar format

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod calendar_export;
        pub mod schedule_grid;
        pub mod schedule_parser;
        pub mod workbook_reader;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Course, DayOfWeek, MeetingTime, SheetDate};
pub use app::services::schedule_parser::{ParseResult, ParseStats, ScheduleParser};
pub use config::Config;
pub use error::{Error, ExtractionStep, MalformedRowError, Result};
