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

//! # Shape Classifier
//!
//! Every export payload is classified once into one of four canonical shapes
//! before it reaches an encoder:
//!
//! | Payload                                   | Shape               |
//! |-------------------------------------------|---------------------|
//! | array whose first element is an object    | `SequenceOfMapping` |
//! | any other array (including empty)         | `Sequence`          |
//! | object                                    | `Mapping`           |
//! | anything else                             | `Scalar`            |
//!
//! [`ZiPayload`] is a borrowed view carrying the shape together with the
//! matching slice or map, so encoders pattern-match on it instead of
//! re-inspecting the raw `serde_json::Value`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{Result, ZiError};

/// Canonical payload shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZiShape {
    Scalar,
    Sequence,
    Mapping,
    SequenceOfMapping,
}

/// Classified, borrowed view of an export payload.
#[derive(Clone, Copy, Debug)]
pub enum ZiPayload<'a> {
    Scalar(&'a Value),
    Sequence(&'a [Value]),
    Mapping(&'a Map<String, Value>),
    /// Records; only the first element is guaranteed to be an object.
    SequenceOfMapping(&'a [Value]),
}

impl<'a> ZiPayload<'a> {
    /// Classifies `value` without copying or mutating it.
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::Array(items) => match items.first() {
                Some(Value::Object(_)) => ZiPayload::SequenceOfMapping(items),
                _ => ZiPayload::Sequence(items),
            },
            Value::Object(map) => ZiPayload::Mapping(map),
            other => ZiPayload::Scalar(other),
        }
    }

    pub fn shape(&self) -> ZiShape {
        match self {
            ZiPayload::Scalar(_) => ZiShape::Scalar,
            ZiPayload::Sequence(_) => ZiShape::Sequence,
            ZiPayload::Mapping(_) => ZiShape::Mapping,
            ZiPayload::SequenceOfMapping(_) => ZiShape::SequenceOfMapping,
        }
    }

    /// Number of logical records: elements for sequences, keys for a
    /// mapping, one for a scalar.
    pub fn len(&self) -> usize {
        match self {
            ZiPayload::Scalar(_) => 1,
            ZiPayload::Sequence(items) | ZiPayload::SequenceOfMapping(items) => items.len(),
            ZiPayload::Mapping(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Applies the empty-sequence policy shared by all encoders.
    pub fn ensure_encodable(&self, format: &str) -> Result<()> {
        match self {
            ZiPayload::Sequence(items) | ZiPayload::SequenceOfMapping(items)
                if items.is_empty() =>
            {
                Err(ZiError::encoding(format, "empty sequence cannot be encoded"))
            }
            _ => Ok(()),
        }
    }

    /// Keys of the first record in first-seen order.
    pub fn first_record_keys(&self) -> Vec<String> {
        match self {
            ZiPayload::SequenceOfMapping(items) => match items.first() {
                Some(Value::Object(map)) => map.keys().cloned().collect(),
                _ => Vec::new(),
            },
            ZiPayload::Mapping(map) => map.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }

    /// Union of keys across all records, first-seen order.
    pub fn union_keys(&self) -> Vec<String> {
        match self {
            ZiPayload::SequenceOfMapping(items) => {
                let mut keys: Vec<String> = Vec::new();
                for map in items.iter().filter_map(Value::as_object) {
                    for key in map.keys() {
                        if !keys.iter().any(|k| k == key) {
                            keys.push(key.clone());
                        }
                    }
                }
                keys
            }
            _ => self.first_record_keys(),
        }
    }
}

/// String form of a value: strings verbatim, null empty, numbers and
/// booleans via display, containers as compact JSON.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
