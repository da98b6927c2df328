//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi.
//! The Zi project belongs to the Dunimd project team.
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

//! # Data Export Module
//!
//! This module exposes the export write path and the artifact catalog.
//!
//! ## Module Components
//!
//! - **Manager** ([manager.rs](manager/index.html)): validates, names, encodes and stores exports
//! - **Catalog** ([catalog.rs](catalog/index.html)): lists, reads and deletes stored artifacts
//! - **Manifest** ([manifest.rs](manifest/index.html)): checksummed summary of the catalog
//! - **Artifact** ([artifact.rs](artifact/index.html)): artifact descriptors and export results
//!
//! ## Usage Patterns
//!
//! ### Exporting
//!
//! ```rust
//! use zi_export::{ZiExportConfig, ZiExportManager};
//! use serde_json::json;
//!
//! let config = ZiExportConfig::new("storage/exports");
//! let manager = ZiExportManager::new(&config);
//! let result = manager.export(&json!([{"x": 1}, {"x": 2}]), "csv", Some("report"));
//! assert!(result.success);
//! ```
//!
//! ### Browsing the Catalog
//!
//! ```rust
//! use zi_export::{ZiExportCatalog, ZiExportConfig};
//!
//! let config = ZiExportConfig::new("storage/exports");
//! let catalog = ZiExportCatalog::new(&config);
//! for entry in catalog.list()? {
//!     println!("{} ({} bytes)", entry.name, entry.size_bytes);
//! }
//! let removed = catalog.delete("report.csv")?;
//! ```

pub mod artifact;
pub mod catalog;
pub mod manager;
pub mod manifest;

pub use artifact::{ZiArtifact, ZiExportFailure, ZiExportResult};
pub use catalog::{ZiCatalogEntry, ZiExportCatalog};
pub use manager::ZiExportManager;
pub use manifest::{ZiCatalogManifest, ZiCatalogManifestBuilder, ZiManifestFile};
