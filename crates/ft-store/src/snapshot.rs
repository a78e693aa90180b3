//! Durable snapshot codec for the record store.
//!
//! The whole store is one JSON document, rewritten in full on every
//! successful update. Writes go to a temp file, fsync, then rename, so a
//! crash mid-write never leaves a torn snapshot at the final path.

use crate::{Result, StoreError};

use ft_core::UserRecord;

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// On-disk layout: a single object keyed by user identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub users: HashMap<String, UserRecord>,
}

/// Read and decode the snapshot at `path`.
pub fn read(path: &Path) -> Result<Snapshot> {
    let contents = fs::read_to_string(path).map_err(|e| StoreError::Read {
        path: path.to_path_buf(),
        source: e,
        location: ErrorLocation::from(Location::caller()),
    })?;

    serde_json::from_str(&contents).map_err(|e| StoreError::Decode {
        path: path.to_path_buf(),
        source: e,
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Write `snapshot` to `path` atomically.
///
/// 1. Serialize (pretty, for operator debuggability)
/// 2. Write to a temp file next to the target and fsync
/// 3. Rename over the target
pub fn write(path: &Path, snapshot: &Snapshot) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot).map_err(|e| StoreError::Encode {
        source: e,
        location: ErrorLocation::from(Location::caller()),
    })?;

    let temp_path = temp_path_for(path);
    {
        let mut file = fs::File::create(&temp_path).map_err(|e| StoreError::Write {
            path: temp_path.clone(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        file.write_all(json.as_bytes())
            .map_err(|e| StoreError::Write {
                path: temp_path.clone(),
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        file.sync_all().map_err(|e| StoreError::Write {
            path: temp_path.clone(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;
    }

    fs::rename(&temp_path, path).map_err(|e| {
        // Clean up the temp file on failure
        let _ = fs::remove_file(&temp_path);
        StoreError::Replace {
            path: path.to_path_buf(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        }
    })
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "snapshot".into());
    name.push(format!(".tmp.{}", std::process::id()));
    path.with_file_name(name)
}
