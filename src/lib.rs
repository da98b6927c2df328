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

//! # Zi Export Library
//!
//! Serializes an in-memory JSON value of bounded shape into one of six file
//! formats and keeps a filesystem-backed catalog of the results.
//!
//! ## Module Overview
//!
//! - **errors**: `ZiError` and the closed `ZiErrorKind` taxonomy
//! - **config**: `ZiExportConfig`, the storage root and presentation knobs
//! - **format**: `ZiExportFormat` identifiers and extensions
//! - **shape**: the shape classifier (`ZiShape`, `ZiPayload`)
//! - **encode**: one encoder per output format
//! - **storage**: atomic temp-then-rename writes
//! - **export**: the export manager, catalog and manifest
//!
//! ## Supported Formats
//!
//! | Identifier                | Extension |
//! |---------------------------|-----------|
//! | `delimited-text`          | `.csv`    |
//! | `plain-text`              | `.txt`    |
//! | `structured-text`         | `.json`   |
//! | `paginated-document`      | `.pdf`    |
//! | `tabular-spreadsheet`     | `.xlsx`   |
//! | `word-processor-document` | `.docx`   |
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use zi_export::{ZiExportCatalog, ZiExportConfig, ZiExportManager};
//!
//! let config = ZiExportConfig::new("storage/exports");
//! let manager = ZiExportManager::new(&config);
//!
//! let result = manager.export(&json!({"a": 1, "b": 2}), "structured-text", None);
//! assert!(result.success);
//!
//! let catalog = ZiExportCatalog::new(&config);
//! assert!(!catalog.list().unwrap().is_empty());
//! ```
//!
//! ## Error Handling
//!
//! Typed operations return `Result<T, ZiError>`; [`ZiExportManager::export`]
//! folds every outcome into a [`ZiExportResult`]. Callers branch on
//! [`ZiErrorKind`], never on message text.
//!
//! ## Logging
//!
//! The crate logs through the `log` facade and never installs a logger.

#![allow(non_snake_case)]

pub mod config;
pub mod encode;
pub mod errors;
pub mod export;
pub mod format;
pub mod shape;
pub mod storage;

pub use config::ZiExportConfig;
pub use encode::{encode_value, encoder_for, ZiEncoder};
pub use errors::{Result, ZiError, ZiErrorKind};
pub use export::{
    ZiArtifact, ZiCatalogEntry, ZiCatalogManifest, ZiExportCatalog, ZiExportFailure,
    ZiExportManager, ZiExportResult,
};
pub use format::ZiExportFormat;
pub use shape::{scalar_text, ZiPayload, ZiShape};
