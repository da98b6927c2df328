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

//! # Artifact Storage
//!
//! Atomic writes into the flat storage directory. Bytes are written to a
//! hidden temporary file next to the destination, synced, then renamed onto
//! the final name, so a reader never observes a partial artifact. Two writers
//! racing on the same name each use their own temporary file; whichever
//! rename lands last wins.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::errors::{Result, ZiError};

/// Suffix shared by all in-flight temporary files.
pub const TEMP_SUFFIX: &str = ".tmp";

/// Bytes of the artifact name kept in a temporary file name.
const TEMP_STEM_MAX: usize = 64;

/// Rejects names that would escape or hide inside the storage directory.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ZiError::io("artifact name must not be empty"));
    }
    if name.starts_with('.') {
        return Err(ZiError::io(format!(
            "artifact name must not start with '.': {}",
            name
        )));
    }
    if name.contains(['/', '\\', '\0']) {
        return Err(ZiError::io(format!("invalid artifact name: {}", name)));
    }
    Ok(())
}

/// Hidden files are temporaries or foreign bookkeeping, never artifacts.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Writes `bytes` to `dir/file_name` through a temporary file and rename.
///
/// The temporary file is removed on every failure path.
pub fn write_atomic(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    validate_name(file_name)?;
    let final_path = dir.join(file_name);
    let temp_path = temp_path(dir, file_name);

    log::debug!(
        "export.storage.temp: writing temporary file - temp={}, target={}",
        temp_path.display(),
        final_path.display()
    );

    let outcome = write_file(&temp_path, bytes).and_then(|_| {
        fs::rename(&temp_path, &final_path).map_err(|e| {
            ZiError::io(format!(
                "failed to move artifact into place at {}: {}",
                final_path.display(),
                e
            ))
        })
    });

    if let Err(err) = outcome {
        if let Err(cleanup) = fs::remove_file(&temp_path) {
            if cleanup.kind() != std::io::ErrorKind::NotFound {
                log::warn!(
                    "export.storage.cleanup_failed: temporary file left behind - temp={}, error={}",
                    temp_path.display(),
                    cleanup
                );
            }
        }
        return Err(err);
    }

    Ok(final_path)
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| ZiError::io(format!("failed to create {}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(bytes)?;
    let file = writer
        .into_inner()
        .map_err(|e| ZiError::io(format!("failed to flush {}: {}", path.display(), e)))?;
    file.sync_all()?;
    Ok(())
}

/// Generates a unique hidden temporary path for atomic writes.
///
/// Only a bounded prefix of `file_name` is kept, so any name that is legal
/// as a final artifact also yields a legal temporary name.
fn temp_path(dir: &Path, file_name: &str) -> PathBuf {
    let mut end = file_name.len().min(TEMP_STEM_MAX);
    while !file_name.is_char_boundary(end) {
        end -= 1;
    }
    let suffix: u64 = rand::random();
    dir.join(format!(".{}.{:016x}{}", &file_name[..end], suffix, TEMP_SUFFIX))
}
