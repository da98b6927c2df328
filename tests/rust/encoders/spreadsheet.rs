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

//! # Zi Export Tests - Tabular Spreadsheet
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test spreadsheet
//! ```

use std::io::{Cursor, Read};

use serde_json::{json, Value};
use zi_export::{encode_value, ZiErrorKind, ZiExportConfig, ZiExportFormat};

fn sheet_xml(value: &Value) -> String {
    let bytes = encode_value(value, ZiExportFormat::Xlsx, &ZiExportConfig::default())
        .expect("encode xlsx");
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("open xlsx");
    let mut xml = String::new();
    archive
        .by_name("xl/worksheets/sheet1.xml")
        .expect("sheet part")
        .read_to_string(&mut xml)
        .expect("read sheet");
    xml
}

fn header_cell(reference: &str, text: &str) -> String {
    format!(
        r#"<c r="{}" t="inlineStr" s="1"><is><t xml:space="preserve">{}</t></is></c>"#,
        reference, text
    )
}

/// One header row plus one row per record.
#[test]
fn test_xlsx_row_per_record() {
    let xml = sheet_xml(&json!([{"x": 1}, {"x": 2}, {"x": 3}]));
    assert_eq!(xml.matches("<row ").count(), 4);
    assert!(xml.contains(&header_cell("A1", "x")));
    assert!(xml.contains(r#"<c r="A4"><v>3</v></c>"#));
}

/// Columns are the union of keys in first-seen order.
#[test]
fn test_xlsx_columns_are_key_union() {
    let xml = sheet_xml(&json!([{"a": 1}, {"b": true, "a": 2}]));
    assert!(xml.contains(&header_cell("A1", "a")));
    assert!(xml.contains(&header_cell("B1", "b")));
    assert!(xml.contains(r#"<c r="B3" t="b"><v>1</v></c>"#));
    assert!(!xml.contains(r#"r="B2""#));
}

#[test]
fn test_xlsx_mapping_single_row() {
    let xml = sheet_xml(&json!({"name": "Ada", "age": 36}));
    assert_eq!(xml.matches("<row ").count(), 2);
    assert!(xml.contains(&header_cell("B1", "age")));
    assert!(xml.contains(r#"<c r="A2" t="inlineStr"><is><t xml:space="preserve">Ada</t></is></c>"#));
}

#[test]
fn test_xlsx_sequence_value_column() {
    let xml = sheet_xml(&json!(["a", "b", [1, 2]]));
    assert!(xml.contains(&header_cell("A1", "Value")));
    assert_eq!(xml.matches("<row ").count(), 4);
    assert!(xml.contains("[1,2]"));
}

#[test]
fn test_xlsx_scalar_data_column() {
    let xml = sheet_xml(&json!("hello"));
    assert!(xml.contains(&header_cell("A1", "Data")));
    assert!(xml.contains(">hello</t>"));
}

#[test]
fn test_xlsx_package_has_workbook_parts() {
    let bytes = encode_value(&json!([1]), ZiExportFormat::Xlsx, &ZiExportConfig::default()).unwrap();
    let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let names: Vec<&str> = archive.file_names().collect();
    for part in [
        "[Content_Types].xml",
        "_rels/.rels",
        "xl/workbook.xml",
        "xl/_rels/workbook.xml.rels",
        "xl/styles.xml",
    ] {
        assert!(names.contains(&part), "missing {}", part);
    }
}

#[test]
fn test_xlsx_empty_inputs_fail() {
    let config = ZiExportConfig::default();
    for value in [json!([]), json!({})] {
        let err = encode_value(&value, ZiExportFormat::Xlsx, &config).unwrap_err();
        assert_eq!(err.kind(), ZiErrorKind::EncodingFailure);
    }
}
