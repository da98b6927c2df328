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

//! # Zi Export Error Module
//!
//! This module defines the error types used throughout the export subsystem.
//!
//! ## Error Categories
//!
//! Every error maps onto one of four kinds ([`ZiErrorKind`]), which is what
//! callers are expected to branch on:
//!
//! - **UnsupportedFormat**: unknown format identifier, rejected before any IO
//! - **EncodingFailure**: the payload cannot be mapped onto the target format
//!   (empty sequence, zero columns) or the format library failed
//! - **IoFailure**: storage faults such as permissions, disk space or an
//!   invalid artifact name
//! - **NotFound**: the named artifact does not exist
//!
//! The message carried by each variant is for diagnostics only.
//!
//! ## Usage
//!
//! ```rust
//! use zi_export::errors::{Result, ZiError, ZiErrorKind};
//!
//! fn check(rows: usize) -> Result<()> {
//!     if rows == 0 {
//!         return Err(ZiError::encoding("csv", "empty sequence cannot be encoded"));
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(check(0).unwrap_err().kind(), ZiErrorKind::EncodingFailure);
//! ```

use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use zip::result::ZipError;

/// Convenience result type used throughout the export subsystem.
pub type Result<T> = std::result::Result<T, ZiError>;

/// Closed error taxonomy exposed to callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZiErrorKind {
    /// Unknown format identifier.
    UnsupportedFormat,
    /// Payload shape or content cannot be mapped to the target format.
    EncodingFailure,
    /// Storage-layer fault.
    IoFailure,
    /// The requested artifact does not exist.
    NotFound,
}

impl fmt::Display for ZiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ZiErrorKind::UnsupportedFormat => "unsupported_format",
            ZiErrorKind::EncodingFailure => "encoding_failure",
            ZiErrorKind::IoFailure => "io_failure",
            ZiErrorKind::NotFound => "not_found",
        };
        f.write_str(label)
    }
}

/// Canonical error enumeration for Zi Export.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum ZiError {
    /// The requested format identifier is not one of the supported formats.
    #[error("unsupported format: {format}")]
    UnsupportedFormat { format: String },

    /// The payload could not be mapped onto the target format.
    #[error("encoding error ({format}): {message}")]
    Encoding { format: String, message: String },

    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// The named artifact does not exist in storage.
    #[error("artifact not found: {name}")]
    NotFound { name: String },

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors originating from ZIP container operations.
    #[error("zip error: {0}")]
    Zip(String),

    /// Errors originating from the PDF object model.
    #[error("pdf error: {0}")]
    Pdf(String),
}

impl From<io::Error> for ZiError {
    fn from(err: io::Error) -> Self {
        ZiError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ZiError {
    fn from(err: serde_json::Error) -> Self {
        ZiError::Serde(err.to_string())
    }
}

impl From<ZipError> for ZiError {
    fn from(err: ZipError) -> Self {
        ZiError::Zip(err.to_string())
    }
}

impl From<lopdf::Error> for ZiError {
    fn from(err: lopdf::Error) -> Self {
        ZiError::Pdf(err.to_string())
    }
}

impl From<csv::Error> for ZiError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            return ZiError::Io(err.to_string());
        }
        ZiError::Encoding {
            format: "csv".to_string(),
            message: err.to_string(),
        }
    }
}

impl ZiError {
    /// Helper to construct encoding errors for a format.
    pub fn encoding(format: impl Into<String>, message: impl Into<String>) -> Self {
        ZiError::Encoding {
            format: format.into(),
            message: message.into(),
        }
    }

    /// Helper to construct unsupported format errors.
    pub fn unsupported<T: Into<String>>(format: T) -> Self {
        ZiError::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// Helper to construct not-found errors.
    pub fn not_found<T: Into<String>>(name: T) -> Self {
        ZiError::NotFound { name: name.into() }
    }

    /// Helper to construct IO errors from a message.
    pub fn io<T: Into<String>>(message: T) -> Self {
        ZiError::Io(message.into())
    }

    /// Returns the taxonomy kind callers should branch on.
    pub fn kind(&self) -> ZiErrorKind {
        match self {
            ZiError::UnsupportedFormat { .. } => ZiErrorKind::UnsupportedFormat,
            ZiError::Encoding { .. } | ZiError::Serde(_) | ZiError::Zip(_) | ZiError::Pdf(_) => {
                ZiErrorKind::EncodingFailure
            }
            ZiError::Io(_) => ZiErrorKind::IoFailure,
            ZiError::NotFound { .. } => ZiErrorKind::NotFound,
        }
    }
}
