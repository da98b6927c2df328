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

//! # Zi Export Tests - Delimited Text
//!
//! Reads CSV output back with the `csv` crate and checks header derivation
//! and row mapping for every shape.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test delimited
//! ```

use serde_json::{json, Value};
use zi_export::{encode_value, ZiErrorKind, ZiExportConfig, ZiExportFormat};

fn encode_csv(value: &Value) -> String {
    let bytes = encode_value(value, ZiExportFormat::Csv, &ZiExportConfig::default())
        .expect("encode csv");
    String::from_utf8(bytes).expect("utf-8 csv")
}

fn read_rows(text: &str) -> Vec<Vec<String>> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes())
        .records()
        .map(|r| r.expect("csv record").iter().map(str::to_string).collect())
        .collect()
}

/// Header is `x` and rows are `1`, `2` in input order.
#[test]
fn test_delimited_records_header_and_rows() {
    let out = encode_csv(&json!([{"x": 1}, {"x": 2}]));
    assert_eq!(read_rows(&out), vec![vec!["x"], vec!["1"], vec!["2"]]);
}

/// The header follows the first record's key order, not alphabetical order.
#[test]
fn test_delimited_header_keeps_first_seen_order() {
    let value = json!([
        {"zeta": 1, "alpha": 2, "mid": 3},
        {"alpha": 5, "zeta": 4, "mid": 6}
    ]);
    let rows = read_rows(&encode_csv(&value));
    assert_eq!(rows[0], vec!["zeta", "alpha", "mid"]);
    assert_eq!(rows[2], vec!["4", "5", "6"]);
    assert_eq!(rows.len(), 3);
}

#[test]
fn test_delimited_missing_keys_render_empty() {
    let rows = read_rows(&encode_csv(&json!([{"a": 1, "b": 2}, {"a": 3}])));
    assert_eq!(rows[2], vec!["3", ""]);
}

#[test]
fn test_delimited_mapping_single_row() {
    let rows = read_rows(&encode_csv(&json!({"name": "Ada", "age": 36})));
    assert_eq!(rows, vec![vec!["name", "age"], vec!["Ada", "36"]]);
}

#[test]
fn test_delimited_scalar_single_cell() {
    assert_eq!(read_rows(&encode_csv(&json!("hello, world"))), vec![vec!["hello, world"]]);
}

#[test]
fn test_delimited_nested_values_are_stringified() {
    let rows = read_rows(&encode_csv(&json!([{"tags": ["a", "b"], "meta": {"k": null}}])));
    assert_eq!(rows[1], vec![r#"["a","b"]"#, r#"{"k":null}"#]);
}

#[test]
fn test_delimited_empty_inputs_fail() {
    let config = ZiExportConfig::default();
    let err = encode_value(&json!([]), ZiExportFormat::Csv, &config).unwrap_err();
    assert_eq!(err.kind(), ZiErrorKind::EncodingFailure);

    let err = encode_value(&json!({}), ZiExportFormat::Csv, &config).unwrap_err();
    assert_eq!(err.kind(), ZiErrorKind::EncodingFailure);
}

/// A keyless first record leaves no columns, even when later records have keys.
#[test]
fn test_delimited_keyless_first_record_fails() {
    let config = ZiExportConfig::default();
    for value in [json!([{}]), json!([{}, {"a": 1}])] {
        let err = encode_value(&value, ZiExportFormat::Csv, &config).unwrap_err();
        assert_eq!(err.kind(), ZiErrorKind::EncodingFailure, "{}", value);
    }
}
