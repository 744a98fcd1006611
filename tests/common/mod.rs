//! Shared helpers for integration tests: in-memory registration exports

#![allow(dead_code)]

use std::io::{Cursor, Write};

/// A cell of a generated export
pub enum Cell {
    Text(String),
    Num(f64),
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Num(n)
    }
}

pub const HEADERS: [&str; 12] = [
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

/// Cells of one standard export row
#[allow(clippy::too_many_arguments)]
pub fn course_row(
    code: &str,
    name: &str,
    section: &str,
    term_desc: &str,
    meeting: &str,
    status: &str,
    instructor: &str,
    start: f64,
    end: f64,
) -> Vec<Option<Cell>> {
    let text = |s: &str| if s.is_empty() { None } else { Some(Cell::from(s)) };
    vec![
        text(&format!("{} - {} - {}", code, name, term_desc)),
        text(&format!("{} - {}", code, name)),
        Some(Cell::Num(3.0)),
        text("Letter"),
        text(&format!("{}-{} - {}", code, section, name)),
        text("Lecture"),
        text("In-Person"),
        text(meeting),
        text(status),
        text(instructor),
        Some(Cell::Num(start)),
        Some(Cell::Num(end)),
    ]
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn column_name(mut index: usize) -> String {
    let mut name = String::new();
    loop {
        name.insert(0, (b'A' + (index % 26) as u8) as char);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    name
}

/// Build a standard export workbook: title row 1, headers row 3, data from row 4
pub fn export_workbook(rows: Vec<Vec<Option<Cell>>>) -> Vec<u8> {
    let mut sheet_rows: Vec<(u32, Vec<Option<Cell>>)> = vec![
        (1, vec![Some(Cell::from("My Enrolled Courses"))]),
        (3, HEADERS.iter().map(|h| Some(Cell::from(*h))).collect()),
    ];
    for (i, row) in rows.into_iter().enumerate() {
        sheet_rows.push((4 + i as u32, row));
    }
    build_workbook(sheet_rows)
}

/// Build a single-sheet workbook with inline strings
pub fn build_workbook(rows: Vec<(u32, Vec<Option<Cell>>)>) -> Vec<u8> {
    let mut sheet = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?><worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );
    for (row, cells) in &rows {
        sheet.push_str(&format!(r#"<row r="{}">"#, row));
        for (col, cell) in cells.iter().enumerate() {
            let reference = format!("{}{}", column_name(col), row);
            match cell {
                None => {}
                Some(Cell::Text(text)) => sheet.push_str(&format!(
                    r#"<c r="{}" t="inlineStr"><is><t>{}</t></is></c>"#,
                    reference,
                    escape(text)
                )),
                Some(Cell::Num(n)) => {
                    sheet.push_str(&format!(r#"<c r="{}"><v>{}</v></c>"#, reference, n))
                }
            }
        }
        sheet.push_str("</row>");
    }
    sheet.push_str("</sheetData></worksheet>");

    let mut buf = Vec::new();
    {
        let mut zip = zip::ZipWriter::new(Cursor::new(&mut buf));
        let options = zip::write::SimpleFileOptions::default();

        let files: [(&str, String); 4] = [
            (
                "[Content_Types].xml",
                r#"<?xml version="1.0"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/></Types>"#.to_string(),
            ),
            (
                "xl/workbook.xml",
                r#"<?xml version="1.0"?><workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="View My Courses" sheetId="1" r:id="rId1"/></sheets></workbook>"#.to_string(),
            ),
            (
                "xl/_rels/workbook.xml.rels",
                r#"<?xml version="1.0"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#.to_string(),
            ),
            ("xl/worksheets/sheet1.xml", sheet),
        ];

        for (name, content) in files {
            zip.start_file(name, options).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
    }
    buf
}
