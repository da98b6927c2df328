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

//! # Structured-Text Encoder
//!
//! Lossless JSON re-encoding of the payload. Every `serde_json::Value`,
//! scalars included, is already a valid JSON document, so no wrapping is
//! applied; decoding the artifact yields the original value.

use serde_json::Value;

use crate::config::ZiExportConfig;
use crate::errors::Result;
use crate::format::ZiExportFormat;
use crate::shape::ZiPayload;

use super::ZiEncoder;

/// Encoder for `.json` artifacts.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZiStructuredEncoder;

impl ZiEncoder for ZiStructuredEncoder {
    fn format(&self) -> ZiExportFormat {
        ZiExportFormat::Json
    }

    fn encode(&self, payload: &ZiPayload<'_>, config: &ZiExportConfig) -> Result<Vec<u8>> {
        let bytes = match payload {
            ZiPayload::Scalar(value) => write_json(*value, config.pretty_json)?,
            ZiPayload::Mapping(map) => write_json(*map, config.pretty_json)?,
            ZiPayload::Sequence(items) | ZiPayload::SequenceOfMapping(items) => {
                write_json::<[Value]>(items, config.pretty_json)?
            }
        };
        Ok(bytes)
    }
}

fn write_json<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> Result<Vec<u8>> {
    let bytes = if pretty {
        serde_json::to_vec_pretty(value)?
    } else {
        serde_json::to_vec(value)?
    };
    Ok(bytes)
}
