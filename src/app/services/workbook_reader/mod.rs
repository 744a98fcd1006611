//! Spreadsheet workbook reader for registration exports
//!
//! Registration exports arrive as Office Open XML workbooks. This module opens
//! the archive, resolves the first sheet through the workbook relationships and
//! returns its cell values as a sparse grid.
//!
//! ## Architecture
//!
//! - [`reader`] - archive walking and XML decoding
//! - [`worksheet`] - the decoded cell grid
//! - [`cell_ref`] - A1-style column letters and cell references

pub mod cell_ref;
pub mod reader;
pub mod worksheet;

#[cfg(test)]
pub mod tests;

pub use cell_ref::{column_index, column_letters, parse_cell_ref};
pub use reader::WorkbookReader;
pub use worksheet::Worksheet;
