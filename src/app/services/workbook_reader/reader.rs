//! Office Open XML workbook reader
//!
//! Decodes the first worksheet of an `.xlsx` archive into a [`Worksheet`].
//! Only cell values are read; styles, formulas and comments are ignored.

use std::collections::HashMap;
use std::io::{BufReader, Cursor, Read, Seek};

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use tracing::{debug, warn};

use super::cell_ref::parse_cell_ref;
use super::worksheet::Worksheet;
use crate::app::models::CellValue;
use crate::{Error, Result};

/// Decode Excel's `_xHHHH_` escape sequences in strings.
///
/// - `_x000d_` = CR
/// - `_x000a_` = LF
/// - `_x0009_` = Tab
/// - `_x005f_` = Underscore
pub fn decode_excel_escapes(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(pos) = rest.find("_x") {
        result.push_str(&rest[..pos]);
        let candidate = &rest[pos..];

        let decoded = candidate
            .get(2..6)
            .filter(|hex| hex.chars().all(|c| c.is_ascii_hexdigit()))
            .filter(|_| candidate.get(6..7) == Some("_"))
            .and_then(|hex| u32::from_str_radix(hex, 16).ok())
            .and_then(char::from_u32);

        match decoded {
            Some(c) => {
                result.push(c);
                rest = &candidate[7..];
            }
            None => {
                result.push_str("_x");
                rest = &candidate[2..];
            }
        }
    }

    result.push_str(rest);
    result
}

/// XLSX workbook reader
pub struct WorkbookReader;

impl WorkbookReader {
    /// Read the first worksheet from an in-memory workbook
    pub fn first_sheet(bytes: &[u8]) -> Result<Worksheet> {
        Self::read_first_sheet(Cursor::new(bytes))
    }

    /// Read the first worksheet from any seekable reader
    pub fn read_first_sheet<R: Read + Seek>(reader: R) -> Result<Worksheet> {
        let mut archive = zip::ZipArchive::new(reader)?;

        if archive.by_name("[Content_Types].xml").is_err() {
            return Err(Error::workbook("missing [Content_Types].xml"));
        }

        let shared_strings = Self::read_shared_strings(&mut archive)?;
        let sheets = Self::read_workbook_xml(&mut archive)?;
        let sheet_paths = Self::read_workbook_rels(&mut archive)?;

        let (name, r_id) = sheets
            .into_iter()
            .next()
            .ok_or_else(|| Error::workbook("workbook contains no sheets"))?;

        let path = sheet_paths.get(&r_id).ok_or_else(|| {
            Error::workbook(format!("no worksheet part for sheet '{}' ({})", name, r_id))
        })?;

        debug!("Reading first sheet '{}' from {}", name, path);
        let mut worksheet = Worksheet::new(name);
        Self::read_worksheet(&mut archive, path, &mut worksheet, &shared_strings)?;

        Ok(worksheet)
    }

    /// Read the shared strings table
    fn read_shared_strings<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> Result<Vec<String>> {
        let mut strings = Vec::new();

        let file = match archive.by_name("xl/sharedStrings.xml") {
            Ok(f) => f,
            Err(_) => return Ok(strings),
        };

        let mut xml_reader = Reader::from_reader(BufReader::new(file));

        let mut buf = Vec::new();
        let mut current = String::new();
        let mut in_si = false;
        let mut in_t = false;
        // Phonetic runs repeat the text in another script
        let mut in_phonetic = false;

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => match e.local_name().as_ref() {
                    b"si" => {
                        in_si = true;
                        current.clear();
                    }
                    b"rPh" => in_phonetic = true,
                    b"t" if in_si && !in_phonetic => in_t = true,
                    _ => {}
                },
                Ok(Event::Empty(e)) if e.local_name().as_ref() == b"si" => {
                    strings.push(String::new());
                }
                Ok(Event::End(e)) => match e.local_name().as_ref() {
                    b"si" => {
                        strings.push(decode_excel_escapes(&current));
                        current.clear();
                        in_si = false;
                    }
                    b"rPh" => in_phonetic = false,
                    b"t" => in_t = false,
                    _ => {}
                },
                Ok(Event::Text(e)) if in_t => {
                    current.push_str(&e.unescape()?);
                }
                Ok(Event::CData(e)) if in_t => {
                    current.push_str(&String::from_utf8_lossy(&e));
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(e.into()),
                _ => {}
            }
            buf.clear();
        }

        debug!("Loaded {} shared strings", strings.len());
        Ok(strings)
    }

    /// Read workbook.xml to get sheet names and relationship ids in order
    fn read_workbook_xml<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> Result<Vec<(String, String)>> {
        let file = archive
            .by_name("xl/workbook.xml")
            .map_err(|_| Error::workbook("missing part xl/workbook.xml"))?;

        let mut xml_reader = Reader::from_reader(BufReader::new(file));
        let mut buf = Vec::new();
        let mut sheets = Vec::new();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Empty(e)) | Ok(Event::Start(e)) if e.local_name().as_ref() == b"sheet" => {
                    let name = attribute(&e, b"name");
                    let r_id = attribute(&e, b"id");
                    if let (Some(name), Some(r_id)) = (name, r_id) {
                        sheets.push((name, r_id));
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(e.into()),
                _ => {}
            }
            buf.clear();
        }

        Ok(sheets)
    }

    /// Read workbook.xml.rels to get worksheet part paths by relationship id
    fn read_workbook_rels<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> Result<HashMap<String, String>> {
        let file = archive
            .by_name("xl/_rels/workbook.xml.rels")
            .map_err(|_| Error::workbook("missing part xl/_rels/workbook.xml.rels"))?;

        let mut xml_reader = Reader::from_reader(BufReader::new(file));
        let mut buf = Vec::new();
        let mut rels = HashMap::new();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Empty(e)) | Ok(Event::Start(e))
                    if e.local_name().as_ref() == b"Relationship" =>
                {
                    let id = attribute(&e, b"Id");
                    let target = attribute(&e, b"Target");
                    let rel_type = attribute(&e, b"Type");

                    if let (Some(id), Some(target), Some(rel_type)) = (id, target, rel_type) {
                        if rel_type.ends_with("/worksheet") {
                            // Target is relative to the xl/ folder unless absolute
                            let full_path = match target.strip_prefix('/') {
                                Some(absolute) => absolute.to_string(),
                                None => format!("xl/{}", target),
                            };
                            rels.insert(id, full_path);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(e.into()),
                _ => {}
            }
            buf.clear();
        }

        Ok(rels)
    }

    /// Read the cell values of a worksheet part
    fn read_worksheet<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
        path: &str,
        worksheet: &mut Worksheet,
        shared_strings: &[String],
    ) -> Result<()> {
        let file = archive
            .by_name(path)
            .map_err(|_| Error::workbook(format!("missing part {}", path)))?;

        let mut xml_reader = Reader::from_reader(BufReader::new(file));
        let mut buf = Vec::new();

        let mut row_num: u32 = 0;
        let mut next_col: u32 = 0;

        let mut cell: Option<PendingCell> = None;
        let mut in_value = false;
        let mut in_inline_text = false;

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => match e.local_name().as_ref() {
                    b"row" => {
                        row_num = row_number(&e, row_num)?;
                        next_col = 0;
                    }
                    b"c" => {
                        let pending = PendingCell::start(&e, row_num, next_col)?;
                        next_col = pending.col + 1;
                        cell = Some(pending);
                    }
                    b"v" => in_value = true,
                    b"t" if cell.is_some() => in_inline_text = true,
                    _ => {}
                },
                Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                    b"row" => {
                        row_num = row_number(&e, row_num)?;
                        next_col = 0;
                    }
                    b"c" => {
                        // Self-closing cells carry only a style
                        let pending = PendingCell::start(&e, row_num, next_col)?;
                        next_col = pending.col + 1;
                    }
                    _ => {}
                },
                Ok(Event::End(e)) => match e.local_name().as_ref() {
                    b"c" => {
                        if let Some(pending) = cell.take() {
                            let (row, col) = (pending.row, pending.col);
                            if let Some(value) = pending.finish(shared_strings)? {
                                worksheet.set(row, col, value);
                            }
                        }
                    }
                    b"v" => in_value = false,
                    b"t" => in_inline_text = false,
                    _ => {}
                },
                Ok(Event::Text(e)) if in_value || in_inline_text => {
                    if let Some(pending) = cell.as_mut() {
                        pending.text.push_str(&e.unescape()?);
                    }
                }
                Ok(Event::CData(e)) if in_value || in_inline_text => {
                    if let Some(pending) = cell.as_mut() {
                        pending.text.push_str(&String::from_utf8_lossy(&e));
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(e.into()),
                _ => {}
            }
            buf.clear();
        }

        debug!(
            "Worksheet '{}': {} rows, {} columns",
            worksheet.name,
            worksheet.last_row(),
            worksheet.column_count()
        );
        Ok(())
    }
}

/// Cell whose `<v>`/`<is>` content is still being read
struct PendingCell {
    row: u32,
    col: u32,
    cell_type: Option<String>,
    text: String,
}

impl PendingCell {
    fn start(e: &BytesStart, row_num: u32, next_col: u32) -> Result<Self> {
        let (row, col) = match attribute(e, b"r") {
            Some(cell_ref) => parse_cell_ref(&cell_ref)?,
            None => (row_num.max(1), next_col),
        };

        Ok(Self {
            row,
            col,
            cell_type: attribute(e, b"t"),
            text: String::new(),
        })
    }

    fn finish(self, shared_strings: &[String]) -> Result<Option<CellValue>> {
        if self.text.is_empty() && self.cell_type.as_deref() != Some("inlineStr") {
            return Ok(None);
        }

        let value = match self.cell_type.as_deref() {
            Some("s") => {
                let idx: usize = self.text.trim().parse().map_err(|_| {
                    Error::workbook(format!("invalid shared string index: {}", self.text))
                })?;
                let s = shared_strings.get(idx).ok_or_else(|| {
                    Error::workbook(format!("shared string index {} out of bounds", idx))
                })?;
                CellValue::Text(s.clone())
            }
            Some("b") => CellValue::Bool(self.text == "1" || self.text.eq_ignore_ascii_case("true")),
            Some("inlineStr") | Some("str") => CellValue::Text(decode_excel_escapes(&self.text)),
            Some("e") => {
                warn!("Cell at row {} holds error value {}", self.row, self.text);
                CellValue::Text(self.text)
            }
            None | Some("n") => match self.text.trim().parse::<f64>() {
                Ok(n) => CellValue::Number(n),
                Err(_) => CellValue::Text(self.text),
            },
            Some(_) => CellValue::Text(self.text),
        };

        Ok(Some(value))
    }
}

/// Row number from a `<row r="..">` element, or the next one when absent
fn row_number(e: &BytesStart, previous: u32) -> Result<u32> {
    match attribute(e, b"r") {
        Some(r) => r
            .parse::<u32>()
            .map_err(|_| Error::workbook(format!("invalid row number '{}'", r))),
        None => Ok(previous + 1),
    }
}

/// Attribute value by local name, whatever namespace prefix it carries
fn attribute(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == key)
        .and_then(|attr| attr.unescape_value().ok().map(|s| s.to_string()))
}
