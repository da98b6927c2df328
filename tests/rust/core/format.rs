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

//! # Zi Export Tests - Format Identifiers
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test format
//! ```

use std::path::Path;

use zi_export::{ZiErrorKind, ZiExportFormat};

/// Long identifiers and extension short forms resolve to the same format.
#[test]
fn test_format_parse_identifiers_and_extensions() {
    let cases = [
        ("delimited-text", "csv", ZiExportFormat::Csv),
        ("plain-text", "txt", ZiExportFormat::Txt),
        ("structured-text", "json", ZiExportFormat::Json),
        ("paginated-document", "pdf", ZiExportFormat::Pdf),
        ("tabular-spreadsheet", "xlsx", ZiExportFormat::Xlsx),
        ("word-processor-document", "docx", ZiExportFormat::Docx),
    ];
    for (identifier, extension, expected) in cases {
        assert_eq!(ZiExportFormat::parse(identifier).unwrap(), expected);
        assert_eq!(ZiExportFormat::parse(extension).unwrap(), expected);
        assert_eq!(expected.identifier(), identifier);
        assert_eq!(expected.extension(), extension);
    }
}

#[test]
fn test_format_parse_is_case_insensitive() {
    assert_eq!(ZiExportFormat::parse(" CSV ").unwrap(), ZiExportFormat::Csv);
    assert_eq!(ZiExportFormat::parse(".Docx").unwrap(), ZiExportFormat::Docx);
    assert_eq!("Structured-Text".parse::<ZiExportFormat>().unwrap(), ZiExportFormat::Json);
}

#[test]
fn test_format_unknown_is_unsupported() {
    for raw in ["xml", "", "pdf2", "spreadsheet"] {
        let err = ZiExportFormat::parse(raw).unwrap_err();
        assert_eq!(err.kind(), ZiErrorKind::UnsupportedFormat);
    }
}

/// The extension is appended exactly once.
#[test]
fn test_format_file_name_does_not_double_extension() {
    assert_eq!(ZiExportFormat::Csv.file_name("report"), "report.csv");
    assert_eq!(ZiExportFormat::Csv.file_name("report.csv"), "report.csv");
    assert_eq!(ZiExportFormat::Csv.file_name("report.CSV"), "report.CSV");
    assert_eq!(ZiExportFormat::Json.file_name("report.csv"), "report.csv.json");
}

#[test]
fn test_format_detect_from_path() {
    assert_eq!(ZiExportFormat::from_path(Path::new("a.xlsx")), Some(ZiExportFormat::Xlsx));
    assert_eq!(ZiExportFormat::from_path(Path::new("notes.md")), None);
    assert_eq!(ZiExportFormat::from_path(Path::new("noext")), None);
}

#[test]
fn test_format_all_lists_six_formats() {
    let all = ZiExportFormat::all();
    assert_eq!(all.len(), 6);
    assert!(all.iter().all(|f| !f.mime_type().is_empty()));
}
