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

//! # Plain-Text Encoder

use serde_json::Value;

use crate::config::ZiExportConfig;
use crate::errors::Result;
use crate::format::ZiExportFormat;
use crate::shape::{scalar_text, ZiPayload};

use super::ZiEncoder;

/// Encoder for `.txt` artifacts: containers are dumped as indented JSON,
/// scalars are written verbatim with no trailing newline.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZiPlainTextEncoder;

impl ZiEncoder for ZiPlainTextEncoder {
    fn format(&self) -> ZiExportFormat {
        ZiExportFormat::Txt
    }

    fn encode(&self, payload: &ZiPayload<'_>, _config: &ZiExportConfig) -> Result<Vec<u8>> {
        let text = match payload {
            ZiPayload::Scalar(value) => scalar_text(value),
            ZiPayload::Mapping(map) => serde_json::to_string_pretty(map)?,
            ZiPayload::Sequence(items) | ZiPayload::SequenceOfMapping(items) => {
                serde_json::to_string_pretty::<[Value]>(items)?
            }
        };
        Ok(text.into_bytes())
    }
}
