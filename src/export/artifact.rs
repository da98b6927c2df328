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

//! # Export Artifacts and Results
//!
//! [`ZiArtifact`] describes a file produced by one successful export call.
//! [`ZiExportResult`] is the terminal outcome handed back to the request
//! layer: exactly one of `artifact` / `error` is populated.

use std::fs::Metadata;
use std::path::PathBuf;
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{ZiError, ZiErrorKind};
use crate::format::ZiExportFormat;

/// Durable file produced by a successful export.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiArtifact {
    /// File name inside the storage root, extension included.
    pub name: String,
    /// Full path of the artifact.
    pub path: PathBuf,
    pub format: ZiExportFormat,
    pub size_bytes: u64,
    /// Blake3 hex digest of the file contents.
    pub checksum: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

/// Failure half of [`ZiExportResult`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiExportFailure {
    pub kind: ZiErrorKind,
    /// Diagnostic text; callers branch on `kind`.
    pub message: String,
}

impl From<&ZiError> for ZiExportFailure {
    fn from(err: &ZiError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Terminal outcome of an export call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiExportResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact: Option<ZiArtifact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ZiExportFailure>,
}

impl ZiExportResult {
    pub fn succeeded(artifact: ZiArtifact) -> Self {
        Self {
            success: true,
            artifact: Some(artifact),
            error: None,
        }
    }

    pub fn failed(err: &ZiError) -> Self {
        Self {
            success: false,
            artifact: None,
            error: Some(ZiExportFailure::from(err)),
        }
    }

    /// Kind of the failure, if any.
    pub fn error_kind(&self) -> Option<ZiErrorKind> {
        self.error.as_ref().map(|e| e.kind)
    }
}

impl From<crate::errors::Result<ZiArtifact>> for ZiExportResult {
    fn from(result: crate::errors::Result<ZiArtifact>) -> Self {
        match result {
            Ok(artifact) => ZiExportResult::succeeded(artifact),
            Err(err) => ZiExportResult::failed(&err),
        }
    }
}

/// Creation and modification timestamps from file metadata.
///
/// Filesystems without birth time report the modification time for both.
pub(crate) fn file_times(metadata: &Metadata) -> (DateTime<Utc>, DateTime<Utc>) {
    let modified = metadata.modified().unwrap_or_else(|_| SystemTime::now());
    let created = metadata.created().unwrap_or(modified);
    (DateTime::<Utc>::from(created), DateTime::<Utc>::from(modified))
}
