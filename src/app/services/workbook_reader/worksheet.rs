//! In-memory cell grid of a single worksheet

use std::collections::BTreeMap;

use crate::app::models::CellValue;

/// Sparse cell grid keyed by 1-indexed row and 0-based column
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Worksheet {
    /// Sheet name as listed in the workbook
    pub name: String,

    rows: BTreeMap<u32, BTreeMap<u32, CellValue>>,
}

impl Worksheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: BTreeMap::new(),
        }
    }

    /// Store a cell value, replacing any earlier value at the same address
    pub fn set(&mut self, row: u32, col: u32, value: CellValue) {
        self.rows.entry(row).or_default().insert(col, value);
    }

    pub fn get(&self, row: u32, col: u32) -> Option<&CellValue> {
        self.rows.get(&row).and_then(|cells| cells.get(&col))
    }

    /// Text of a cell, empty when the cell is missing
    pub fn text(&self, row: u32, col: u32) -> String {
        self.get(row, col).map(CellValue::to_text).unwrap_or_default()
    }

    /// Cells of one row in column order
    pub fn row(&self, row: u32) -> impl Iterator<Item = (u32, &CellValue)> {
        self.rows
            .get(&row)
            .into_iter()
            .flat_map(|cells| cells.iter().map(|(col, value)| (*col, value)))
    }

    /// Highest row number holding a cell (0 for an empty sheet)
    pub fn last_row(&self) -> u32 {
        self.rows.keys().next_back().copied().unwrap_or(0)
    }

    /// Number of columns spanned by the widest row
    pub fn column_count(&self) -> u32 {
        self.rows
            .values()
            .filter_map(|cells| cells.keys().next_back())
            .map(|col| col + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.values().all(|cells| cells.is_empty())
    }
}
