//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi.
//! The Zi project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Tabular-Spreadsheet Encoder
//!
//! Writes a single-sheet XLSX workbook. Row 1 is a bold header row; data
//! starts on row 2.
//!
//! | Shape               | Columns                                   | Rows            |
//! |---------------------|-------------------------------------------|-----------------|
//! | `SequenceOfMapping` | union of record keys, first-seen order    | one per record  |
//! | `Mapping`           | the mapping's keys                        | one             |
//! | `Sequence`          | `Value`                                   | one per element |
//! | `Scalar`            | `Data`                                    | one             |
//!
//! Numbers become numeric cells, booleans boolean cells, null an absent cell
//! and everything else an inline string (containers as compact JSON).

use serde_json::{Map, Value};

use crate::config::ZiExportConfig;
use crate::errors::{Result, ZiError};
use crate::format::ZiExportFormat;
use crate::shape::{scalar_text, ZiPayload};

use super::ooxml::{xml_escape, ZiOoxmlPackage, RELATIONSHIP_OFFICE_DOCUMENT, XML_DECLARATION};
use super::ZiEncoder;

const SPREADSHEET_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const MAX_ROWS: usize = 1_048_576;
const MAX_COLUMNS: usize = 16_384;
const HEADER_STYLE: u32 = 1;

/// Encoder for `.xlsx` artifacts.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZiSpreadsheetEncoder;

impl ZiEncoder for ZiSpreadsheetEncoder {
    fn format(&self) -> ZiExportFormat {
        ZiExportFormat::Xlsx
    }

    fn encode(&self, payload: &ZiPayload<'_>, _config: &ZiExportConfig) -> Result<Vec<u8>> {
        let (headers, rows) = tabulate(payload);

        if headers.is_empty() {
            return Err(ZiError::encoding(
                "xlsx",
                "mapping without keys has no columns to encode",
            ));
        }
        if headers.len() > MAX_COLUMNS {
            return Err(ZiError::encoding(
                "xlsx",
                format!("{} columns exceed the sheet limit of {}", headers.len(), MAX_COLUMNS),
            ));
        }
        if rows.len() + 1 > MAX_ROWS {
            return Err(ZiError::encoding(
                "xlsx",
                format!("{} rows exceed the sheet limit of {}", rows.len(), MAX_ROWS),
            ));
        }

        let mut package = ZiOoxmlPackage::new();
        package.add_relationships(
            "_rels/.rels",
            &[("rId1", RELATIONSHIP_OFFICE_DOCUMENT, "xl/workbook.xml")],
        );
        package.add_part(
            "xl/workbook.xml",
            Some("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"),
            workbook_xml(),
        );
        package.add_relationships(
            "xl/_rels/workbook.xml.rels",
            &[
                (
                    "rId1",
                    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet",
                    "worksheets/sheet1.xml",
                ),
                (
                    "rId2",
                    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles",
                    "styles.xml",
                ),
            ],
        );
        package.add_part(
            "xl/worksheets/sheet1.xml",
            Some("application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"),
            sheet_xml(&headers, &rows),
        );
        package.add_part(
            "xl/styles.xml",
            Some("application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"),
            styles_xml(),
        );
        package.finish()
    }
}

/// Header labels plus data rows of borrowed cells (`None` is an empty cell).
type ZiTable<'a> = (Vec<String>, Vec<Vec<Option<&'a Value>>>);

fn tabulate<'a>(payload: &ZiPayload<'a>) -> ZiTable<'a> {
    match *payload {
        ZiPayload::SequenceOfMapping(items) => {
            let headers = payload.union_keys();
            let rows = items
                .iter()
                .map(|item| match item.as_object() {
                    Some(map) => record_cells(map, &headers),
                    None => vec![None; headers.len()],
                })
                .collect();
            (headers, rows)
        }
        ZiPayload::Mapping(map) => {
            let headers = payload.first_record_keys();
            let row = record_cells(map, &headers);
            (headers, vec![row])
        }
        ZiPayload::Sequence(items) => {
            let rows = items.iter().map(|item| vec![Some(item)]).collect();
            (vec!["Value".to_string()], rows)
        }
        ZiPayload::Scalar(value) => (vec!["Data".to_string()], vec![vec![Some(value)]]),
    }
}

fn record_cells<'a>(map: &'a Map<String, Value>, headers: &[String]) -> Vec<Option<&'a Value>> {
    headers.iter().map(|key| map.get(key)).collect()
}

/// Converts a zero-based column index into its letter reference (0 -> A).
pub fn column_name(mut index: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters.reverse();
    String::from_utf8_lossy(&letters).into_owned()
}

fn sheet_xml(headers: &[String], rows: &[Vec<Option<&Value>>]) -> String {
    let mut xml = String::from(XML_DECLARATION);
    xml.push_str(&format!(r#"<worksheet xmlns="{}"><sheetData>"#, SPREADSHEET_NS));

    xml.push_str(r#"<row r="1">"#);
    for (col, header) in headers.iter().enumerate() {
        xml.push_str(&string_cell(&cell_ref(col, 1), header, Some(HEADER_STYLE)));
    }
    xml.push_str("</row>");

    for (idx, row) in rows.iter().enumerate() {
        let row_number = idx + 2;
        xml.push_str(&format!(r#"<row r="{}">"#, row_number));
        for (col, cell) in row.iter().enumerate() {
            if let Some(value) = cell {
                xml.push_str(&value_cell(&cell_ref(col, row_number), value));
            }
        }
        xml.push_str("</row>");
    }

    xml.push_str("</sheetData></worksheet>");
    xml
}

fn cell_ref(col: usize, row: usize) -> String {
    format!("{}{}", column_name(col), row)
}

fn value_cell(reference: &str, value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => format!(r#"<c r="{}" t="b"><v>{}</v></c>"#, reference, u8::from(*b)),
        Value::Number(n) => format!(r#"<c r="{}"><v>{}</v></c>"#, reference, n),
        other => string_cell(reference, &scalar_text(other), None),
    }
}

fn string_cell(reference: &str, text: &str, style: Option<u32>) -> String {
    let style_attr = style.map(|s| format!(r#" s="{}""#, s)).unwrap_or_default();
    format!(
        r#"<c r="{}" t="inlineStr"{}><is><t xml:space="preserve">{}</t></is></c>"#,
        reference,
        style_attr,
        xml_escape(text)
    )
}

fn workbook_xml() -> String {
    format!(
        concat!(
            "{}",
            r#"<workbook xmlns="{}" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
            r#"<sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets>"#,
            "</workbook>"
        ),
        XML_DECLARATION, SPREADSHEET_NS
    )
}

fn styles_xml() -> String {
    format!(
        concat!(
            "{}",
            r#"<styleSheet xmlns="{}">"#,
            r#"<fonts count="2">"#,
            r#"<font><sz val="11"/><name val="Calibri"/></font>"#,
            r#"<font><b/><sz val="11"/><name val="Calibri"/></font>"#,
            "</fonts>",
            r#"<fills count="2"><fill><patternFill patternType="none"/></fill><fill><patternFill patternType="gray125"/></fill></fills>"#,
            r#"<borders count="1"><border><left/><right/><top/><bottom/><diagonal/></border></borders>"#,
            r#"<cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs>"#,
            r#"<cellXfs count="2">"#,
            r#"<xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/>"#,
            r#"<xf numFmtId="0" fontId="1" fillId="0" borderId="0" xfId="0" applyFont="1"/>"#,
            "</cellXfs>",
            r#"<cellStyles count="1"><cellStyle name="Normal" xfId="0" builtinId="0"/></cellStyles>"#,
            "</styleSheet>"
        ),
        XML_DECLARATION, SPREADSHEET_NS
    )
}
