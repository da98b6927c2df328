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

//! # Zi Export Tests - Shape Classifier
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test shape
//! ```

use serde_json::json;
use zi_export::{ZiErrorKind, ZiPayload, ZiShape};

/// A sequence whose first element is a mapping is a sequence of mappings.
#[test]
fn test_shape_sequence_of_mapping() {
    let value = json!([{"x": 1}, {"x": 2}]);
    assert_eq!(ZiPayload::classify(&value).shape(), ZiShape::SequenceOfMapping);
}

/// Only the first element decides between the two sequence shapes.
#[test]
fn test_shape_first_element_decides() {
    let mixed = json!([{"x": 1}, 2, "three"]);
    assert_eq!(ZiPayload::classify(&mixed).shape(), ZiShape::SequenceOfMapping);

    let scalars_first = json!([1, {"x": 2}]);
    assert_eq!(ZiPayload::classify(&scalars_first).shape(), ZiShape::Sequence);
}

#[test]
fn test_shape_mapping_and_scalars() {
    assert_eq!(ZiPayload::classify(&json!({"a": 1})).shape(), ZiShape::Mapping);
    assert_eq!(ZiPayload::classify(&json!({})).shape(), ZiShape::Mapping);
    assert_eq!(ZiPayload::classify(&json!("hello")).shape(), ZiShape::Scalar);
    assert_eq!(ZiPayload::classify(&json!(42)).shape(), ZiShape::Scalar);
    assert_eq!(ZiPayload::classify(&json!(true)).shape(), ZiShape::Scalar);
    assert_eq!(ZiPayload::classify(&json!(null)).shape(), ZiShape::Scalar);
}

/// An empty sequence classifies as `Sequence` and is rejected for encoding.
#[test]
fn test_shape_empty_sequence_is_not_encodable() {
    let value = json!([]);
    let payload = ZiPayload::classify(&value);
    assert_eq!(payload.shape(), ZiShape::Sequence);
    assert!(payload.is_empty());

    let err = payload.ensure_encodable("csv").unwrap_err();
    assert_eq!(err.kind(), ZiErrorKind::EncodingFailure);
    assert!(err.to_string().contains("empty sequence"));
}

/// Classification is stable across calls and leaves the value untouched.
#[test]
fn test_shape_classification_is_pure() {
    let value = json!([{"b": 1, "a": 2}, {"c": 3}]);
    let snapshot = value.clone();

    let first = ZiPayload::classify(&value).shape();
    let second = ZiPayload::classify(&value).shape();
    assert_eq!(first, second);
    assert_eq!(value, snapshot);
}

#[test]
fn test_shape_record_counts() {
    assert_eq!(ZiPayload::classify(&json!([{"a": 1}, {"a": 2}, {"a": 3}])).len(), 3);
    assert_eq!(ZiPayload::classify(&json!({"a": 1, "b": 2})).len(), 2);
    assert_eq!(ZiPayload::classify(&json!("x")).len(), 1);
}
