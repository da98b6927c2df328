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

//! # Export Format Identifiers
//!
//! The six supported output formats, their canonical identifiers and file
//! extensions. Both the long identifiers (`delimited-text`) and the extension
//! short forms (`csv`) are accepted when parsing.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZiError};

/// Supported export formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZiExportFormat {
    /// Delimited text (`.csv`).
    Csv,
    /// Plain text (`.txt`).
    Txt,
    /// Structured text (`.json`).
    Json,
    /// Paginated document (`.pdf`).
    Pdf,
    /// Tabular spreadsheet (`.xlsx`).
    Xlsx,
    /// Word-processor document (`.docx`).
    Docx,
}

impl ZiExportFormat {
    /// All formats in declaration order.
    pub fn all() -> [ZiExportFormat; 6] {
        [
            ZiExportFormat::Csv,
            ZiExportFormat::Txt,
            ZiExportFormat::Json,
            ZiExportFormat::Pdf,
            ZiExportFormat::Xlsx,
            ZiExportFormat::Docx,
        ]
    }

    /// Parses a format identifier or extension short form.
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = raw.trim().trim_start_matches('.').to_ascii_lowercase();
        let format = match normalized.as_str() {
            "delimited-text" | "csv" => ZiExportFormat::Csv,
            "plain-text" | "txt" => ZiExportFormat::Txt,
            "structured-text" | "json" => ZiExportFormat::Json,
            "paginated-document" | "pdf" => ZiExportFormat::Pdf,
            "tabular-spreadsheet" | "xlsx" => ZiExportFormat::Xlsx,
            "word-processor-document" | "docx" => ZiExportFormat::Docx,
            _ => return Err(ZiError::unsupported(raw)),
        };
        Ok(format)
    }

    /// Detects the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension().and_then(|e| e.to_str())?;
        Self::parse(extension).ok()
    }

    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ZiExportFormat::Csv => "csv",
            ZiExportFormat::Txt => "txt",
            ZiExportFormat::Json => "json",
            ZiExportFormat::Pdf => "pdf",
            ZiExportFormat::Xlsx => "xlsx",
            ZiExportFormat::Docx => "docx",
        }
    }

    /// Canonical long identifier.
    pub fn identifier(&self) -> &'static str {
        match self {
            ZiExportFormat::Csv => "delimited-text",
            ZiExportFormat::Txt => "plain-text",
            ZiExportFormat::Json => "structured-text",
            ZiExportFormat::Pdf => "paginated-document",
            ZiExportFormat::Xlsx => "tabular-spreadsheet",
            ZiExportFormat::Docx => "word-processor-document",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ZiExportFormat::Csv => "text/csv",
            ZiExportFormat::Txt => "text/plain",
            ZiExportFormat::Json => "application/json",
            ZiExportFormat::Pdf => "application/pdf",
            ZiExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ZiExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    /// Appends the extension unless `base` already ends with it.
    pub fn file_name(&self, base: &str) -> String {
        let suffix = format!(".{}", self.extension());
        if base.to_ascii_lowercase().ends_with(&suffix) && base.len() > suffix.len() {
            base.to_string()
        } else {
            format!("{}{}", base, suffix)
        }
    }
}

impl fmt::Display for ZiExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ZiExportFormat {
    type Err = ZiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
