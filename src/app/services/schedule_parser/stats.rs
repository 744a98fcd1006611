//! Parsing statistics and result structures for registration exports
//!
//! This module provides types for tracking how many sheet rows were read,
//! filtered and turned into courses.

use serde::{Deserialize, Serialize};

use crate::app::models::Course;

/// Parsing result with courses and basic statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResult {
    /// Registered courses in sheet row order
    pub courses: Vec<Course>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Data rows scanned in the configured range
    pub total_rows: usize,

    /// Rows with no content in any resolved column
    pub blank_rows: usize,

    /// Rows dropped because their status was not "Registered"
    pub rows_filtered: usize,

    /// Courses successfully parsed
    pub courses_parsed: usize,

    /// Header labels that matched no known field
    pub skipped_columns: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_rows: 0,
            blank_rows: 0,
            rows_filtered: 0,
            courses_parsed: 0,
            skipped_columns: Vec::new(),
        }
    }

    /// Rows that carried any content
    pub fn content_rows(&self) -> usize {
        self.total_rows - self.blank_rows
    }

    /// Share of content rows that were registered courses, as a percentage
    pub fn registration_rate(&self) -> f64 {
        let content = self.content_rows();
        if content == 0 {
            0.0
        } else {
            (self.courses_parsed as f64 / content as f64) * 100.0
        }
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
