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

//! # Zi Export Tests - Configuration
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test config
//! ```

use std::path::PathBuf;

use zi_export::ZiExportConfig;

#[test]
fn test_config_defaults() {
    let config = ZiExportConfig::default();
    assert_eq!(config.storage_root, PathBuf::from("storage/exports"));
    assert_eq!(config.document_title, "Export Report");
    assert_eq!(config.name_prefix, "export");
    assert!(config.create_dirs);
    assert!(config.pretty_json);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_builder_overrides() {
    let config = ZiExportConfig::new("/tmp/exports")
        .document_title("Quarterly")
        .name_prefix("dump")
        .pretty_json(false)
        .create_dirs(false)
        .timestamp_format("%Y");

    assert_eq!(config.storage_root, PathBuf::from("/tmp/exports"));
    assert_eq!(config.document_title, "Quarterly");
    assert!(!config.pretty_json);
    assert!(!config.create_dirs);
    let name = config.generated_name().unwrap();
    assert!(name.starts_with("dump_"));
    assert_eq!(name.len(), "dump_".len() + 4);
}

/// Missing JSON fields fall back to their defaults.
#[test]
fn test_config_from_partial_json() {
    let config = ZiExportConfig::from_json_str(r#"{"storage_root": "out", "pretty_json": false}"#)
        .expect("parse config");
    assert_eq!(config.storage_root, PathBuf::from("out"));
    assert!(!config.pretty_json);
    assert_eq!(config.document_title, "Export Report");

    let reparsed = ZiExportConfig::from_json_str(&config.to_json().unwrap()).unwrap();
    assert_eq!(reparsed.storage_root, config.storage_root);
}

#[test]
fn test_config_rejects_invalid_settings() {
    assert!(ZiExportConfig::default().name_prefix("").validate().is_err());
    assert!(ZiExportConfig::default().name_prefix("a/b").validate().is_err());
    assert!(ZiExportConfig::default().document_title("  ").validate().is_err());
    assert!(ZiExportConfig::from_json_str(r#"{"name_prefix": ""}"#).is_err());
    assert!(ZiExportConfig::from_json_str("not json").is_err());
}
