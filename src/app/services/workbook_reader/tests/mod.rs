//! Test utilities for building workbooks in memory
//!
//! Workbooks are assembled with `zip::ZipWriter` so tests never depend on
//! fixture files on disk.

use std::io::{Cursor, Write};


/// Cell written into a generated worksheet
#[derive(Debug, Clone, Copy)]
pub enum Cell<'a> {
    /// Text stored in the shared strings table
    Shared(&'a str),
    /// Text stored inline in the cell
    Inline(&'a str),
    /// Numeric cell
    Num(f64),
}

/// One generated worksheet: name plus `(row number, cells from column A)`
pub struct SheetSpec<'a> {
    pub name: &'a str,
    pub rows: Vec<(u32, Vec<Option<Cell<'a>>>)>,
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn column_name(index: usize) -> String {
    crate::app::services::workbook_reader::column_letters(index as u32)
}

/// Build a workbook with a single sheet named `Sheet1`
pub fn build_workbook(rows: Vec<(u32, Vec<Option<Cell<'_>>>)>) -> Vec<u8> {
    build_workbook_with_sheets(vec![SheetSpec {
        name: "Sheet1",
        rows,
    }])
}

/// Build a workbook with several sheets, in the given order
pub fn build_workbook_with_sheets(sheets: Vec<SheetSpec<'_>>) -> Vec<u8> {
    let mut shared: Vec<String> = Vec::new();
    let mut sheet_xml = Vec::new();

    for sheet in &sheets {
        let mut xml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
        );
        for (row, cells) in &sheet.rows {
            xml.push_str(&format!(r#"<row r="{}">"#, row));
            for (col, cell) in cells.iter().enumerate() {
                let reference = format!("{}{}", column_name(col), row);
                match cell {
                    None => {}
                    Some(Cell::Shared(text)) => {
                        let idx = match shared.iter().position(|s| s == text) {
                            Some(idx) => idx,
                            None => {
                                shared.push(text.to_string());
                                shared.len() - 1
                            }
                        };
                        xml.push_str(&format!(r#"<c r="{}" t="s"><v>{}</v></c>"#, reference, idx));
                    }
                    Some(Cell::Inline(text)) => {
                        xml.push_str(&format!(
                            r#"<c r="{}" t="inlineStr"><is><t xml:space="preserve">{}</t></is></c>"#,
                            reference,
                            escape(text)
                        ));
                    }
                    Some(Cell::Num(n)) => {
                        xml.push_str(&format!(r#"<c r="{}"><v>{}</v></c>"#, reference, n));
                    }
                }
            }
            xml.push_str("</row>");
        }
        xml.push_str("</sheetData></worksheet>");
        sheet_xml.push(xml);
    }

    let mut buf = Vec::new();
    {
        let mut zip = zip::ZipWriter::new(Cursor::new(&mut buf));
        let options = zip::write::SimpleFileOptions::default();

        zip.start_file("[Content_Types].xml", options).unwrap();
        zip.write_all(br#"<?xml version="1.0"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/></Types>"#).unwrap();

        zip.start_file("_rels/.rels", options).unwrap();
        zip.write_all(br#"<?xml version="1.0"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#).unwrap();

        let mut workbook = String::from(
            r#"<?xml version="1.0"?><workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets>"#,
        );
        let mut rels = String::from(
            r#"<?xml version="1.0"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );
        for (i, sheet) in sheets.iter().enumerate() {
            workbook.push_str(&format!(
                r#"<sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
                escape(sheet.name),
                i + 1,
                i + 1
            ));
            rels.push_str(&format!(
                r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{}.xml"/>"#,
                i + 1,
                i + 1
            ));
        }
        workbook.push_str("</sheets></workbook>");
        rels.push_str("</Relationships>");

        zip.start_file("xl/workbook.xml", options).unwrap();
        zip.write_all(workbook.as_bytes()).unwrap();

        zip.start_file("xl/_rels/workbook.xml.rels", options).unwrap();
        zip.write_all(rels.as_bytes()).unwrap();

        if !shared.is_empty() {
            let mut sst = format!(
                r#"<?xml version="1.0"?><sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="{}" uniqueCount="{}">"#,
                shared.len(),
                shared.len()
            );
            for s in &shared {
                sst.push_str(&format!(r#"<si><t xml:space="preserve">{}</t></si>"#, escape(s)));
            }
            sst.push_str("</sst>");
            zip.start_file("xl/sharedStrings.xml", options).unwrap();
            zip.write_all(sst.as_bytes()).unwrap();
        }

        for (i, xml) in sheet_xml.iter().enumerate() {
            zip.start_file(format!("xl/worksheets/sheet{}.xml", i + 1), options)
                .unwrap();
            zip.write_all(xml.as_bytes()).unwrap();
        }

        zip.finish().unwrap();
    }

    buf
}
