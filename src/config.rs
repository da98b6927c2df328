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

//! # Export Configuration
//!
//! A single [`ZiExportConfig`] is built once by the host application and
//! borrowed by the manager and the catalog. It carries the storage root and
//! the few presentation knobs the encoders consult.

use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZiError};

/// Configuration shared by every export, list and delete call.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ZiExportConfig {
    /// Flat directory holding one file per artifact.
    pub storage_root: PathBuf,
    /// Create the storage root on first write when it is missing.
    pub create_dirs: bool,
    /// Heading used by the paginated and word-processor documents.
    pub document_title: String,
    /// Indent structured-text output.
    pub pretty_json: bool,
    /// Prefix of generated artifact names.
    pub name_prefix: String,
    /// chrono format string appended to generated names.
    pub timestamp_format: String,
}

impl Default for ZiExportConfig {
    fn default() -> Self {
        Self {
            storage_root: PathBuf::from("storage/exports"),
            create_dirs: true,
            document_title: "Export Report".to_string(),
            pretty_json: true,
            name_prefix: "export".to_string(),
            timestamp_format: "%Y%m%d_%H%M%S".to_string(),
        }
    }
}

impl ZiExportConfig {
    pub fn new(storage_root: impl AsRef<Path>) -> Self {
        Self {
            storage_root: storage_root.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn create_dirs(mut self, enabled: bool) -> Self {
        self.create_dirs = enabled;
        self
    }

    pub fn document_title(mut self, title: &str) -> Self {
        self.document_title = title.to_string();
        self
    }

    pub fn pretty_json(mut self, enabled: bool) -> Self {
        self.pretty_json = enabled;
        self
    }

    pub fn name_prefix(mut self, prefix: &str) -> Self {
        self.name_prefix = prefix.to_string();
        self
    }

    pub fn timestamp_format(mut self, format: &str) -> Self {
        self.timestamp_format = format.to_string();
        self
    }

    /// Loads a configuration from JSON; absent fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ZiError::Serde(format!("Invalid export config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the settings that would otherwise only fail mid-export.
    pub fn validate(&self) -> Result<()> {
        if self.storage_root.as_os_str().is_empty() {
            return Err(ZiError::io("storage root must not be empty"));
        }
        if self.name_prefix.trim().is_empty() {
            return Err(ZiError::io("name prefix must not be empty"));
        }
        if self.name_prefix.contains(['/', '\\']) {
            return Err(ZiError::io(format!(
                "name prefix must not contain path separators: {}",
                self.name_prefix
            )));
        }
        if self.document_title.trim().is_empty() {
            return Err(ZiError::encoding("config", "document title must not be empty"));
        }
        if self.render_timestamp().trim().is_empty() {
            return Err(ZiError::encoding("config", "timestamp format renders empty"));
        }
        Ok(())
    }

    /// Base name used when the caller does not supply one.
    ///
    /// Fails when the timestamp format renders nothing, which would otherwise
    /// give every generated artifact the same name.
    pub fn generated_name(&self) -> Result<String> {
        let timestamp = self.render_timestamp();
        if timestamp.trim().is_empty() {
            return Err(ZiError::encoding(
                "config",
                format!("timestamp format renders empty: {}", self.timestamp_format),
            ));
        }
        Ok(format!("{}_{}", self.name_prefix, timestamp))
    }

    fn render_timestamp(&self) -> String {
        use std::fmt::Write;

        // Unknown specifiers surface as fmt::Error here; `to_string` would panic.
        let mut out = String::new();
        if write!(out, "{}", Local::now().format(&self.timestamp_format)).is_err() {
            return String::new();
        }
        out
    }
}
