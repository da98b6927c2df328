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

//! # Delimited-Text Encoder
//!
//! CSV output. Records use the keys of the first record as the header; later
//! records contribute values for those columns only.

use serde_json::{Map, Value};

use crate::config::ZiExportConfig;
use crate::errors::{Result, ZiError};
use crate::format::ZiExportFormat;
use crate::shape::{scalar_text, ZiPayload};

use super::ZiEncoder;

/// Encoder for `.csv` artifacts.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZiDelimitedEncoder;

impl ZiEncoder for ZiDelimitedEncoder {
    fn format(&self) -> ZiExportFormat {
        ZiExportFormat::Csv
    }

    fn encode(&self, payload: &ZiPayload<'_>, _config: &ZiExportConfig) -> Result<Vec<u8>> {
        let mut csv_writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(Vec::new());

        match payload {
            ZiPayload::SequenceOfMapping(items) => {
                let headers = payload.first_record_keys();
                if headers.is_empty() {
                    return Err(ZiError::encoding(
                        "csv",
                        "first record has no keys to derive columns from",
                    ));
                }
                csv_writer.write_record(&headers)?;
                for item in items.iter() {
                    let row = match item.as_object() {
                        Some(map) => record_to_row(map, &headers),
                        None => vec![String::new(); headers.len()],
                    };
                    csv_writer.write_record(&row)?;
                }
            }
            ZiPayload::Mapping(map) => {
                if map.is_empty() {
                    return Err(ZiError::encoding(
                        "csv",
                        "mapping without keys has no columns to encode",
                    ));
                }
                let headers = payload.first_record_keys();
                csv_writer.write_record(&headers)?;
                csv_writer.write_record(record_to_row(map, &headers))?;
            }
            ZiPayload::Sequence(items) => {
                if items.first().map_or(false, Value::is_array) {
                    for item in items.iter() {
                        match item {
                            Value::Array(cells) => {
                                csv_writer.write_record(cells.iter().map(scalar_text))?
                            }
                            other => csv_writer.write_record([scalar_text(other)])?,
                        }
                    }
                } else {
                    csv_writer.write_record(items.iter().map(scalar_text))?;
                }
            }
            ZiPayload::Scalar(value) => {
                csv_writer.write_record([scalar_text(value)])?;
            }
        }

        csv_writer
            .into_inner()
            .map_err(|e| ZiError::encoding("csv", format!("CSV flush error: {}", e)))
    }
}

/// Converts a record into a row ordered by `headers`; missing keys are empty.
fn record_to_row(map: &Map<String, Value>, headers: &[String]) -> Vec<String> {
    headers
        .iter()
        .map(|key| map.get(key).map(scalar_text).unwrap_or_default())
        .collect()
}
