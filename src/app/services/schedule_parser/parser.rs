//! Core registration export parser
//!
//! This module provides the parser orchestration: reading the first sheet of
//! the workbook, resolving the header row and normalizing every data row in
//! sheet order.

use std::path::Path;
use tracing::{debug, info, warn};

use super::column_mapping::ColumnMapping;
use super::field_parsers::FieldPatterns;
use super::record_parser::parse_course_record;
use super::stats::{ParseResult, ParseStats};
use crate::app::services::workbook_reader::{WorkbookReader, Worksheet};
use crate::config::LayoutConfig;
use crate::{Error, Result};

/// Parser for course-registration workbooks
///
/// A parse is a pure function of the workbook bytes and the layout: the
/// first registered row that cannot be normalized aborts the whole parse with
/// a [`MalformedRowError`](crate::MalformedRowError).
#[derive(Debug, Clone)]
pub struct ScheduleParser {
    layout: LayoutConfig,
    patterns: FieldPatterns,
}

impl ScheduleParser {
    /// Create a parser for the given sheet layout
    pub fn new(layout: LayoutConfig) -> Result<Self> {
        layout.validate()?;
        Ok(Self {
            layout,
            patterns: FieldPatterns::new()?,
        })
    }

    /// Create a parser for the standard export layout
    pub fn with_default_layout() -> Result<Self> {
        Self::new(LayoutConfig::default())
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Parse a workbook file and return courses with statistics
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing registration workbook: {}", file_path.display());

        let bytes = std::fs::read(file_path).map_err(|e| {
            Error::io(format!("Failed to read file {}", file_path.display()), e)
        })?;

        self.parse_bytes(&bytes)
    }

    /// Parse workbook bytes and return courses with statistics
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<ParseResult> {
        let sheet = WorkbookReader::first_sheet(bytes)?;
        self.parse_sheet(&sheet)
    }

    /// Parse an already decoded worksheet
    pub fn parse_sheet(&self, sheet: &Worksheet) -> Result<ParseResult> {
        let mut stats = ParseStats::new();
        let mut courses = Vec::new();

        let mapping = ColumnMapping::resolve(sheet, self.layout.header_row);
        let (resolved, skipped) = mapping.stats();
        debug!(
            "Column mapping: {} resolved, {} skipped",
            resolved, skipped
        );
        stats.skipped_columns = mapping.skipped.clone();

        if mapping.is_degenerate() {
            warn!(
                "Header row {} of sheet '{}' names no known columns",
                self.layout.header_row, sheet.name
            );
            return Ok(ParseResult { courses, stats });
        }

        let last_row = sheet.last_row().min(self.layout.last_data_row);
        for row_number in self.layout.first_data_row..=last_row {
            stats.total_rows += 1;

            let row = mapping.extract_row(sheet, row_number);
            if row.is_empty() {
                stats.blank_rows += 1;
                continue;
            }

            match parse_course_record(&row, &self.patterns)? {
                Some(course) => {
                    debug!("Row {}: {} ({})", row_number, course.label(), course.term);
                    courses.push(course);
                    stats.courses_parsed += 1;
                }
                None => stats.rows_filtered += 1,
            }
        }

        info!(
            "Parsed {} courses from {} rows ({} filtered, {} blank)",
            stats.courses_parsed, stats.total_rows, stats.rows_filtered, stats.blank_rows
        );

        Ok(ParseResult { courses, stats })
    }
}
