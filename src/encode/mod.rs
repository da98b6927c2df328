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

//! # Format Encoders
//!
//! One encoder per output format. Each encoder turns a classified payload
//! ([`ZiPayload`]) into the complete bytes of the target file; writing those
//! bytes to storage is the job of [`crate::storage`], which keeps the
//! temp-then-rename discipline in one place.
//!
//! ## Module Components
//!
//! - **delimited**: CSV via the `csv` crate
//! - **plain**: pretty-printed text dump
//! - **structured**: lossless JSON
//! - **paginated**: PDF via `lopdf`
//! - **spreadsheet**: XLSX (SpreadsheetML in a ZIP container)
//! - **document**: DOCX (WordprocessingML in a ZIP container)
//! - **ooxml**: shared ZIP/XML helpers for the two Office formats
//!
//! ## Implementing an Encoder
//!
//! ```rust
//! use zi_export::encode::ZiEncoder;
//! use zi_export::{Result, ZiExportConfig, ZiExportFormat, ZiPayload};
//!
//! struct Upper;
//!
//! impl ZiEncoder for Upper {
//!     fn format(&self) -> ZiExportFormat {
//!         ZiExportFormat::Txt
//!     }
//!
//!     fn encode(&self, payload: &ZiPayload<'_>, _config: &ZiExportConfig) -> Result<Vec<u8>> {
//!         Ok(format!("{:?}", payload.shape()).to_uppercase().into_bytes())
//!     }
//! }
//! ```

pub mod delimited;
pub mod document;
pub mod ooxml;
pub mod paginated;
pub mod plain;
pub mod spreadsheet;
pub mod structured;

use serde_json::Value;

use crate::config::ZiExportConfig;
use crate::errors::{Result, ZiError};
use crate::format::ZiExportFormat;
use crate::shape::ZiPayload;

pub use delimited::ZiDelimitedEncoder;
pub use document::ZiDocumentEncoder;
pub use paginated::ZiPaginatedEncoder;
pub use plain::ZiPlainTextEncoder;
pub use spreadsheet::ZiSpreadsheetEncoder;
pub use structured::ZiStructuredEncoder;

/// Contract every format encoder fulfills.
///
/// Encoders are stateless: the same payload and configuration always produce
/// the same bytes (the PDF and OOXML encoders embed no timestamps). They must
/// map all four shapes and report degenerate inputs as
/// [`ZiError::Encoding`] rather than emitting an unusable file.
pub trait ZiEncoder: Send + Sync {
    /// Format produced by this encoder.
    fn format(&self) -> ZiExportFormat;

    /// Encodes the payload into the full file contents.
    ///
    /// The caller has already applied [`ZiPayload::ensure_encodable`].
    fn encode(&self, payload: &ZiPayload<'_>, config: &ZiExportConfig) -> Result<Vec<u8>>;
}

/// Returns the encoder for a format.
pub fn encoder_for(format: ZiExportFormat) -> Box<dyn ZiEncoder> {
    match format {
        ZiExportFormat::Csv => Box::new(ZiDelimitedEncoder),
        ZiExportFormat::Txt => Box::new(ZiPlainTextEncoder),
        ZiExportFormat::Json => Box::new(ZiStructuredEncoder),
        ZiExportFormat::Pdf => Box::new(ZiPaginatedEncoder),
        ZiExportFormat::Xlsx => Box::new(ZiSpreadsheetEncoder),
        ZiExportFormat::Docx => Box::new(ZiDocumentEncoder),
    }
}

/// Classifies `value` and encodes it with the matching encoder.
///
/// Library faults raised by the format crates are normalized into
/// [`ZiError::Encoding`] carrying the format extension; IO faults keep their
/// kind.
pub fn encode_value(
    value: &Value,
    format: ZiExportFormat,
    config: &ZiExportConfig,
) -> Result<Vec<u8>> {
    let payload = ZiPayload::classify(value);
    let encoder = encoder_for(format);
    log::debug!(
        "export.encode.classify: payload classified - format={}, shape={:?}, records={}",
        encoder.format(),
        payload.shape(),
        payload.len()
    );
    payload.ensure_encodable(encoder.format().extension())?;

    encoder
        .encode(&payload, config)
        .map_err(|err| match err {
            ZiError::Zip(message) | ZiError::Pdf(message) | ZiError::Serde(message) => {
                ZiError::encoding(encoder.format().extension(), message)
            }
            other => other,
        })
}
