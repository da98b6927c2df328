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

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::ZiCatalogEntry;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiManifestFile {
    #[serde(flatten)]
    pub entry: ZiCatalogEntry,
    pub checksum: String,
}

/// Point-in-time summary of the storage root.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ZiCatalogManifest {
    pub version: String,
    pub storage_root: PathBuf,
    pub generated_at: DateTime<Utc>,
    pub total_files: usize,
    pub total_size: u64,
    /// Artifact counts keyed by extension; foreign files count as `other`.
    pub format_counts: BTreeMap<String, usize>,
    pub files: Vec<ZiManifestFile>,
}

#[derive(Debug)]
pub struct ZiCatalogManifestBuilder {
    manifest: ZiCatalogManifest,
}

impl ZiCatalogManifestBuilder {
    pub fn new(storage_root: &Path) -> Self {
        Self {
            manifest: ZiCatalogManifest {
                version: "1.0.0".to_string(),
                storage_root: storage_root.to_path_buf(),
                generated_at: Utc::now(),
                total_files: 0,
                total_size: 0,
                format_counts: BTreeMap::new(),
                files: Vec::new(),
            },
        }
    }

    pub fn add_entry(mut self, entry: ZiCatalogEntry, contents: &[u8]) -> Self {
        let key = entry
            .format
            .map(|f| f.extension().to_string())
            .unwrap_or_else(|| "other".to_string());
        *self.manifest.format_counts.entry(key).or_insert(0) += 1;
        self.manifest.total_files += 1;
        self.manifest.total_size += entry.size_bytes;
        self.manifest.files.push(ZiManifestFile {
            entry,
            checksum: blake3::hash(contents).to_hex().to_string(),
        });
        self
    }

    pub fn build(self) -> ZiCatalogManifest {
        self.manifest
    }
}

impl ZiCatalogManifest {
    pub fn to_json(&self) -> crate::errors::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| crate::errors::ZiError::Serde(format!("Failed to serialize manifest: {}", e)))
    }

    pub fn from_json(json: &str) -> crate::errors::Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| crate::errors::ZiError::Serde(format!("Invalid manifest JSON: {}", e)))
    }
}
