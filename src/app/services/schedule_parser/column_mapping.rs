//! Column resolution for registration exports
//!
//! This module reads the header row and binds spreadsheet columns to the
//! semantic fields of a course row. Columns may be reordered or interleaved
//! with unknown ones; only the header text decides what a column holds.

use tracing::debug;

use crate::app::models::{Field, RawRow};
use crate::app::services::workbook_reader::{Worksheet, column_letters};
use crate::constants::HEADER_FIELDS;

/// A spreadsheet column bound to a semantic field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    /// 0-based column index
    pub index: u32,

    /// Spreadsheet column label (A, B, .., AA)
    pub letter: String,

    pub field: Field,
}

/// Column to field binding shared by every data row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMapping {
    /// Resolved columns in left-to-right order, `fullDesc` first
    pub columns: Vec<ResolvedColumn>,

    /// Labels of header cells that matched no known field
    pub skipped: Vec<String>,
}

/// Look up the field a header label names
pub fn field_for_header(label: &str) -> Option<Field> {
    HEADER_FIELDS
        .iter()
        .find(|(header, _)| *header == label)
        .map(|(_, field)| *field)
}

impl ColumnMapping {
    /// Resolve columns from the header row of a worksheet
    ///
    /// Column A is always the full description. Scanning stops at the first
    /// blank header after it, or at the sheet's last column.
    pub fn resolve(sheet: &Worksheet, header_row: u32) -> Self {
        let column_count = sheet.column_count();
        let headers = (0..column_count).map(|col| sheet.text(header_row, col));
        Self::from_headers(headers)
    }

    /// Resolve columns from header labels given in column order
    pub fn from_headers<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut columns = Vec::new();
        let mut skipped = Vec::new();

        for (index, header) in headers.into_iter().enumerate() {
            let index = index as u32;
            let letter = column_letters(index);

            if index == 0 {
                columns.push(ResolvedColumn {
                    index,
                    letter,
                    field: Field::FullDesc,
                });
                continue;
            }

            let header = header.as_ref();
            if header.is_empty() {
                debug!("Header scan stopped at blank column {}", letter);
                break;
            }

            match field_for_header(header) {
                Some(field) => {
                    debug!("Column {} '{}' -> {}", letter, header, field);
                    columns.push(ResolvedColumn {
                        index,
                        letter,
                        field,
                    });
                }
                None => {
                    debug!("Column {} '{}' is not a known field, skipping", letter, header);
                    skipped.push(header.to_string());
                }
            }
        }

        // An empty sheet still has column A
        if columns.is_empty() {
            columns.push(ResolvedColumn {
                index: 0,
                letter: column_letters(0),
                field: Field::FullDesc,
            });
        }

        ColumnMapping { columns, skipped }
    }

    /// Resolved fields in column order
    pub fn fields(&self) -> Vec<Field> {
        self.columns.iter().map(|c| c.field).collect()
    }

    /// Get the column index bound to a field
    pub fn get_index(&self, field: Field) -> Option<u32> {
        self.columns
            .iter()
            .find(|c| c.field == field)
            .map(|c| c.index)
    }

    /// Check if a field was found in the header
    pub fn has_field(&self, field: Field) -> bool {
        self.get_index(field).is_some()
    }

    /// True when nothing beyond column A was resolved
    pub fn is_degenerate(&self) -> bool {
        self.columns.len() <= 1
    }

    /// Bind the cells of one sheet row to their fields
    pub fn extract_row(&self, sheet: &Worksheet, row_number: u32) -> RawRow {
        let mut row = RawRow::new(row_number);
        for column in &self.columns {
            if let Some(value) = sheet.get(row_number, column.index) {
                row.values.insert(column.field, value.clone());
            }
        }
        row
    }

    /// Get statistics about the mapping: (resolved, skipped)
    pub fn stats(&self) -> (usize, usize) {
        (self.columns.len(), self.skipped.len())
    }
}
