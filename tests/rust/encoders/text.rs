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

//! # Zi Export Tests - Plain and Structured Text
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test text
//! ```

use proptest::prelude::*;
use serde_json::{json, Map, Value};
use zi_export::{encode_value, ZiErrorKind, ZiExportConfig, ZiExportFormat};

fn encode(value: &Value, format: ZiExportFormat, config: &ZiExportConfig) -> String {
    String::from_utf8(encode_value(value, format, config).expect("encode")).expect("utf-8")
}

/// A scalar string is written verbatim: no quotes, no newline.
#[test]
fn test_plain_text_scalar_verbatim() {
    let out = encode(&json!("hello"), ZiExportFormat::Txt, &ZiExportConfig::default());
    assert_eq!(out, "hello");

    let out = encode(&json!(3.5), ZiExportFormat::Txt, &ZiExportConfig::default());
    assert_eq!(out, "3.5");
}

#[test]
fn test_plain_text_containers_are_pretty_printed() {
    let out = encode(&json!({"a": 1, "b": [true]}), ZiExportFormat::Txt, &ZiExportConfig::default());
    assert_eq!(out, "{\n  \"a\": 1,\n  \"b\": [\n    true\n  ]\n}");
}

/// `{"a":1,"b":2}` deserializes back to the same mapping.
#[test]
fn test_structured_text_mapping_roundtrip() {
    let value = json!({"a": 1, "b": 2});
    let out = encode(&value, ZiExportFormat::Json, &ZiExportConfig::default());
    let decoded: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn test_structured_text_scalar_is_valid_json() {
    let out = encode(&json!("hello"), ZiExportFormat::Json, &ZiExportConfig::default());
    assert_eq!(out, "\"hello\"");
    assert_eq!(serde_json::from_str::<Value>(&out).unwrap(), json!("hello"));
}

#[test]
fn test_structured_text_compact_mode() {
    let config = ZiExportConfig::default().pretty_json(false);
    let out = encode(&json!([{"x": 1}]), ZiExportFormat::Json, &config);
    assert_eq!(out, r#"[{"x":1}]"#);
}

#[test]
fn test_text_formats_reject_empty_sequence() {
    let config = ZiExportConfig::default();
    for format in [ZiExportFormat::Txt, ZiExportFormat::Json] {
        let err = encode_value(&json!([]), format, &config).unwrap_err();
        assert_eq!(err.kind(), ZiErrorKind::EncodingFailure);
    }
}

/// Floats decode to the exact value that was written.
#[test]
fn test_structured_text_float_precision() {
    let config = ZiExportConfig::default();
    for f in [1.0715660391465826e-75, 0.1 + 0.2, f64::MAX, f64::MIN_POSITIVE, 5e-324] {
        let bytes = encode_value(&json!([f]), ZiExportFormat::Json, &config).unwrap();
        let decoded: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded[0].as_f64(), Some(f));
    }
}

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_map(|f| json!(f)),
        "[a-zA-Z0-9 _\\-\u{e9}\u{4e2d}\"\\\\]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..6).prop_map(|pairs| {
                Value::Object(pairs.into_iter().collect::<Map<String, Value>>())
            }),
        ]
    })
}

proptest! {
    /// Decoding the structured-text artifact yields the original value.
    #[test]
    fn test_structured_text_roundtrip_property(value in arb_json()) {
        prop_assume!(value != json!([]));
        let config = ZiExportConfig::default();
        let bytes = encode_value(&value, ZiExportFormat::Json, &config).unwrap();
        let decoded: Value = serde_json::from_slice(&bytes).unwrap();
        prop_assert_eq!(decoded, value);
    }
}
