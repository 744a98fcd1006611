//! Parser for course-registration workbook exports
//!
//! This module recovers typed [`Course`](crate::Course) records from the first
//! sheet of a registration export. Column positions are not trusted: the
//! header row decides which column holds which field, and every free-text
//! field is decoded by an explicit pattern that fails with a named step.
//!
//! ## Architecture
//!
//! - [`parser`] - Parse orchestration over the sheet's data rows
//! - [`column_mapping`] - Header-driven column resolution
//! - [`record_parser`] - Row normalization into courses
//! - [`field_parsers`] - Text patterns for listings, terms and meeting times
//! - [`date_serial`] - 1900 date-system serial decoding
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use course_schedule::app::services::schedule_parser::ScheduleParser;
//!
//! # fn example() -> course_schedule::Result<()> {
//! let parser = ScheduleParser::with_default_layout()?;
//! let result = parser.parse_file(std::path::Path::new("View_My_Courses.xlsx"))?;
//!
//! println!("Parsed {} courses from {} rows",
//!          result.stats.courses_parsed,
//!          result.stats.total_rows);
//! # Ok(())
//! # }
//! ```

pub mod column_mapping;
pub mod date_serial;
pub mod field_parsers;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use column_mapping::ColumnMapping;
pub use date_serial::date_from_serial;
pub use parser::ScheduleParser;
pub use stats::{ParseResult, ParseStats};
