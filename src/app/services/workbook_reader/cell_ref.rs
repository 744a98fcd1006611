//! Spreadsheet-style cell addressing
//!
//! Columns are labelled in bijective base 26 (A..Z, AA..ZZ, AAA..) and rows are
//! 1-indexed, so `B3` is column index 1 of row 3.

use crate::{Error, Result};

/// Convert a 0-based column index to letters (0 = A, 25 = Z, 26 = AA)
pub fn column_letters(index: u32) -> String {
    let mut result = Vec::new();
    let mut n = index as u64 + 1;

    while n > 0 {
        n -= 1;
        result.push((n % 26) as u8 + b'A');
        n /= 26;
    }

    result.reverse();
    String::from_utf8(result).unwrap_or_default()
}

/// Convert column letters to a 0-based index (A = 0, Z = 25, AA = 26)
pub fn column_index(letters: &str) -> Result<u32> {
    if letters.is_empty() {
        return Err(Error::workbook("empty column letters"));
    }

    let mut col: u64 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::workbook(format!("invalid column letter '{}'", c)));
        }
        col = col * 26 + (c.to_ascii_uppercase() as u64 - 'A' as u64 + 1);
        if col > u32::MAX as u64 {
            return Err(Error::workbook(format!("column '{}' out of range", letters)));
        }
    }

    Ok((col - 1) as u32)
}

/// Parse an A1-style reference into (1-indexed row, 0-based column)
pub fn parse_cell_ref(cell_ref: &str) -> Result<(u32, u32)> {
    let s = cell_ref.replace('$', "");
    let split = s
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| Error::workbook(format!("no row number in '{}'", cell_ref)))?;

    let (letters, digits) = s.split_at(split);
    let col = column_index(letters)?;
    let row: u32 = digits
        .parse()
        .map_err(|_| Error::workbook(format!("invalid row number in '{}'", cell_ref)))?;

    if row == 0 {
        return Err(Error::workbook(format!(
            "row number must be >= 1 in '{}'",
            cell_ref
        )));
    }

    Ok((row, col))
}
