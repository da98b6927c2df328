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

//! # Export Manager
//!
//! Entry point of the write path:
//!
//! 1. validate the format identifier (no IO on failure)
//! 2. resolve the artifact name, generating `<prefix>_<timestamp>` if absent
//! 3. classify the payload and run the matching encoder
//! 4. write the bytes atomically and describe the resulting file
//!
//! The manager holds nothing but a borrowed configuration, so any number of
//! exports may run concurrently from different threads.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde_json::Value;

use crate::config::ZiExportConfig;
use crate::encode::encode_value;
use crate::errors::{Result, ZiError, ZiErrorKind};
use crate::format::ZiExportFormat;
use crate::storage;

use super::artifact::{file_times, ZiArtifact, ZiExportResult};

/// Validates, names, encodes and stores export payloads.
#[derive(Clone, Copy, Debug)]
pub struct ZiExportManager<'a> {
    config: &'a ZiExportConfig,
}

impl<'a> ZiExportManager<'a> {
    pub fn new(config: &'a ZiExportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ZiExportConfig {
        self.config
    }

    /// Exports `payload` in the format named by `format`.
    ///
    /// Never returns an error value directly: every outcome, including an
    /// unknown format, is folded into the returned [`ZiExportResult`].
    pub fn export(&self, payload: &Value, format: &str, name: Option<&str>) -> ZiExportResult {
        let result = ZiExportFormat::parse(format)
            .and_then(|format| self.export_with(payload, format, name));

        if let Err(err) = &result {
            match err.kind() {
                ZiErrorKind::IoFailure => log::error!(
                    "export.write.failed: storage fault - format={}, name={:?}, error={}",
                    format,
                    name,
                    err
                ),
                _ => log::warn!(
                    "export.write.rejected: export not produced - format={}, name={:?}, kind={}, error={}",
                    format,
                    name,
                    err.kind(),
                    err
                ),
            }
        }

        ZiExportResult::from(result)
    }

    /// Typed variant of [`export`](Self::export).
    pub fn export_with(
        &self,
        payload: &Value,
        format: ZiExportFormat,
        name: Option<&str>,
    ) -> Result<ZiArtifact> {
        let file_name = self.resolve_name(name, format)?;
        let bytes = encode_value(payload, format, self.config)?;

        let root = self.config.storage_root.as_path();
        let created = self.prepare_root()?;
        let path = match storage::write_atomic(root, &file_name, &bytes) {
            Ok(path) => path,
            Err(err) => {
                if let Some(topmost) = created {
                    self.remove_created_dirs(&topmost);
                }
                return Err(err);
            }
        };
        // A concurrent delete may already have removed the file.
        let (created_at, modified_at) = fs::metadata(&path)
            .map(|metadata| file_times(&metadata))
            .unwrap_or_else(|_| {
                let now = Utc::now();
                (now, now)
            });

        let artifact = ZiArtifact {
            name: file_name,
            path,
            format,
            size_bytes: bytes.len() as u64,
            checksum: blake3::hash(&bytes).to_hex().to_string(),
            created_at,
            modified_at,
        };

        log::info!(
            "export.write.complete: artifact written - name={}, format={}, bytes={}, checksum={}",
            artifact.name,
            artifact.format,
            artifact.size_bytes,
            artifact.checksum
        );
        Ok(artifact)
    }

    /// File name for an export: the caller's name or a generated one, with
    /// the format extension appended once.
    pub fn resolve_name(&self, name: Option<&str>, format: ZiExportFormat) -> Result<String> {
        let base = match name.map(str::trim) {
            Some(explicit) if !explicit.is_empty() => explicit.to_string(),
            _ => self.config.generated_name()?,
        };
        let file_name = format.file_name(&base);
        storage::validate_name(&file_name)?;
        Ok(file_name)
    }

    /// Ensures the storage root exists. Returns the topmost directory this
    /// call created, if any.
    fn prepare_root(&self) -> Result<Option<PathBuf>> {
        let root = self.config.storage_root.as_path();
        if root.is_dir() {
            return Ok(None);
        }
        if !self.config.create_dirs {
            return Err(ZiError::io(format!(
                "storage root does not exist: {}",
                root.display()
            )));
        }

        let topmost = root
            .ancestors()
            .take_while(|dir| !dir.as_os_str().is_empty() && !dir.exists())
            .last()
            .map(Path::to_path_buf);
        fs::create_dir_all(root).map_err(|e| {
            ZiError::io(format!(
                "failed to create storage root {}: {}",
                root.display(),
                e
            ))
        })?;
        log::debug!(
            "export.storage.init: storage root created - root={}",
            root.display()
        );
        Ok(topmost)
    }

    /// Removes the directories `prepare_root` created, leaf first. Stops at
    /// the first directory that is not empty.
    fn remove_created_dirs(&self, topmost: &Path) {
        for dir in self.config.storage_root.ancestors() {
            if let Err(e) = fs::remove_dir(dir) {
                log::debug!(
                    "export.storage.rollback: directory kept - dir={}, error={}",
                    dir.display(),
                    e
                );
                break;
            }
            if dir == topmost {
                break;
            }
        }
    }
}
