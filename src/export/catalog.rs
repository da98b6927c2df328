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

//! # Export Catalog
//!
//! Lists, reads and deletes artifacts by inspecting the storage root at call
//! time. There is no index: the directory listing is the catalog, so results
//! always reflect the filesystem as it is when the call runs. Entries come
//! back in directory-listing order.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ZiExportConfig;
use crate::errors::{Result, ZiError};
use crate::format::ZiExportFormat;
use crate::storage;

use super::artifact::file_times;
use super::manifest::{ZiCatalogManifest, ZiCatalogManifestBuilder};

/// Derived view of one artifact on disk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiCatalogEntry {
    pub name: String,
    pub size_bytes: u64,
    /// Format detected from the extension; `None` for foreign files.
    pub format: Option<ZiExportFormat>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

/// Read-side view of the storage root.
#[derive(Clone, Copy, Debug)]
pub struct ZiExportCatalog<'a> {
    config: &'a ZiExportConfig,
}

impl<'a> ZiExportCatalog<'a> {
    pub fn new(config: &'a ZiExportConfig) -> Self {
        Self { config }
    }

    fn root(&self) -> &Path {
        self.config.storage_root.as_path()
    }

    /// Lists every artifact currently in storage.
    ///
    /// A missing storage root lists as empty. Files that disappear between
    /// the directory read and their metadata lookup are skipped.
    pub fn list(&self) -> Result<Vec<ZiCatalogEntry>> {
        let read_dir = match fs::read_dir(self.root()) {
            Ok(read_dir) => read_dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(ZiError::io(format!(
                    "failed to list {}: {}",
                    self.root().display(),
                    e
                )))
            }
        };

        let mut entries = Vec::new();
        for dir_entry in read_dir {
            let dir_entry = dir_entry?;
            let name = match dir_entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    log::debug!("export.catalog.skip: non UTF-8 file name - name={:?}", raw);
                    continue;
                }
            };
            if storage::is_hidden(&name) {
                continue;
            }
            let metadata = match dir_entry.metadata() {
                Ok(metadata) => metadata,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(e.into()),
            };
            if !metadata.is_file() {
                continue;
            }
            entries.push(entry_from(name, &metadata));
        }

        log::debug!(
            "export.catalog.list: storage listed - root={}, entries={}",
            self.root().display(),
            entries.len()
        );
        Ok(entries)
    }

    /// Looks up a single artifact by file name.
    pub fn get(&self, name: &str) -> Result<Option<ZiCatalogEntry>> {
        storage::validate_name(name)?;
        match fs::metadata(self.root().join(name)) {
            Ok(metadata) if metadata.is_file() => Ok(Some(entry_from(name.to_string(), &metadata))),
            Ok(_) => Ok(None),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Reads an artifact's bytes; `NotFound` when it does not exist.
    pub fn read(&self, name: &str) -> Result<Vec<u8>> {
        storage::validate_name(name)?;
        let path = self.root().join(name);
        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(ZiError::not_found(name)),
            Err(e) => Err(ZiError::io(format!(
                "failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    /// Deletes an artifact. `Ok(false)` when nothing by that name exists.
    pub fn delete(&self, name: &str) -> Result<bool> {
        storage::validate_name(name)?;
        let path = self.root().join(name);
        if path.is_dir() {
            return Ok(false);
        }
        match fs::remove_file(&path) {
            Ok(()) => {
                log::info!("export.catalog.delete: artifact deleted - name={}", name);
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("export.catalog.delete: artifact absent - name={}", name);
                Ok(false)
            }
            Err(e) => {
                log::error!(
                    "export.catalog.delete_failed: artifact not removed - name={}, error={}",
                    name,
                    e
                );
                Err(ZiError::io(format!(
                    "failed to delete {}: {}",
                    path.display(),
                    e
                )))
            }
        }
    }

    /// Summarizes the current catalog, hashing every artifact.
    pub fn manifest(&self) -> Result<ZiCatalogManifest> {
        let mut builder = ZiCatalogManifestBuilder::new(self.root());
        for entry in self.list()? {
            let bytes = match fs::read(self.root().join(&entry.name)) {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(e.into()),
            };
            builder = builder.add_entry(entry, &bytes);
        }
        Ok(builder.build())
    }
}

fn entry_from(name: String, metadata: &fs::Metadata) -> ZiCatalogEntry {
    let (created_at, modified_at) = file_times(metadata);
    let format = ZiExportFormat::from_path(Path::new(&name));
    ZiCatalogEntry {
        name,
        size_bytes: metadata.len(),
        format,
        created_at,
        modified_at,
    }
}
