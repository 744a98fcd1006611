//! Test utilities for registration export parsing
//!
//! This module provides a row builder mirroring the columns of a real
//! registration export and helpers that turn rows into workbooks or raw rows.

use crate::app::models::{CellValue, Field, RawRow};
use crate::app::services::workbook_reader::tests::{Cell, build_workbook};


/// Header labels of a standard export, column A onwards
pub const STANDARD_HEADERS: [&str; 12] = [
    "My Enrolled Courses",
    "Course Listing",
    "Credits",
    "Grading Basis",
    "Section",
    "Instructional Format",
    "Delivery Mode",
    "Meeting Patterns",
    "Registration Status",
    "Instructor",
    "Start Date",
    "End Date",
];

/// 2023-08-23
pub const A_TERM_START: f64 = 45161.0;

/// 2023-10-13
pub const A_TERM_END: f64 = 45212.0;

/// One data row of a standard export
#[derive(Debug, Clone)]
pub struct CourseRow {
    pub full_desc: String,
    pub listing: String,
    pub section: String,
    pub meeting: String,
    pub status: String,
    pub instructor: String,
    pub start_serial: Option<f64>,
    pub end_serial: Option<f64>,
}

impl Default for CourseRow {
    fn default() -> Self {
        Self {
            full_desc: "CS 3013 - Operating Systems - Fall A Term".to_string(),
            listing: "CS 3013 - Operating Systems".to_string(),
            section: "CS 3013-A01 - Operating Systems".to_string(),
            meeting: "M-T-R-F | 10:00 AM - 10:50 AM | Fuller Labs 320".to_string(),
            status: "Registered".to_string(),
            instructor: "Craig Shue".to_string(),
            start_serial: Some(A_TERM_START),
            end_serial: Some(A_TERM_END),
        }
    }
}

impl CourseRow {
    /// A registered row for `code - name` in section `section_id`
    pub fn course(code: &str, name: &str, section_id: &str, term_desc: &str) -> Self {
        Self {
            full_desc: format!("{} - {} - {}", code, name, term_desc),
            listing: format!("{} - {}", code, name),
            section: format!("{}-{} - {}", code, section_id, name),
            ..Self::default()
        }
    }

    pub fn meeting(mut self, meeting: &str) -> Self {
        self.meeting = meeting.to_string();
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    /// Text cells in standard column order
    fn text_cells(&self) -> [(Field, &str); 7] {
        [
            (Field::FullDesc, self.full_desc.as_str()),
            (Field::CourseName, self.listing.as_str()),
            (Field::Section, self.section.as_str()),
            (Field::MeetingPatterns, self.meeting.as_str()),
            (Field::RegistrationStatus, self.status.as_str()),
            (Field::Instructor, self.instructor.as_str()),
            (Field::DeliveryMode, "In-Person"),
        ]
    }

    /// Cells of this row laid out under [`STANDARD_HEADERS`]
    pub fn cells(&self) -> Vec<Option<Cell<'_>>> {
        vec![
            text_cell(&self.full_desc),
            text_cell(&self.listing),
            Some(Cell::Num(3.0)),
            text_cell("Letter"),
            text_cell(&self.section),
            text_cell("Lecture"),
            text_cell("In-Person"),
            text_cell(&self.meeting),
            text_cell(&self.status),
            text_cell(&self.instructor),
            self.start_serial.map(Cell::Num),
            self.end_serial.map(Cell::Num),
        ]
    }

    /// Bind this row's values to fields directly, bypassing the workbook
    pub fn raw_row(&self, row_number: u32) -> RawRow {
        let mut row = RawRow::new(row_number);
        for (field, value) in self.text_cells() {
            if !value.is_empty() {
                row = row.with_value(field, CellValue::Text(value.to_string()));
            }
        }
        if let Some(serial) = self.start_serial {
            row = row.with_value(Field::StartDate, CellValue::Number(serial));
        }
        if let Some(serial) = self.end_serial {
            row = row.with_value(Field::EndDate, CellValue::Number(serial));
        }
        row
    }
}

fn text_cell(value: &str) -> Option<Cell<'_>> {
    if value.is_empty() { None } else { Some(Cell::Shared(value)) }
}

/// Header row cells for the given labels
pub fn header_cells<'a>(labels: &[&'a str]) -> Vec<Option<Cell<'a>>> {
    labels.iter().map(|label| text_cell(*label)).collect()
}

/// Build a standard export: title in row 1, headers in row 3, data from row 4
pub fn export_workbook(rows: &[CourseRow]) -> Vec<u8> {
    let mut sheet_rows = vec![
        (1, vec![Some(Cell::Shared("My Enrolled Courses"))]),
        (3, header_cells(&STANDARD_HEADERS)),
    ];
    for (i, row) in rows.iter().enumerate() {
        sheet_rows.push((4 + i as u32, row.cells()));
    }
    build_workbook(sheet_rows)
}
