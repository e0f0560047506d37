//! Sidecar manifest: schema version and the persisted sequence counter.
//!
//! The records file stays a bare JSON array. The manifest next to it records
//! which schema wrote the array and the highest sequence ordinal ever handed
//! out, so codes freed by deletes are not reissued.

use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Schema version written by this build
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreManifest {
    pub schema_version: u32,
    #[serde(default)]
    pub last_sequence: u64,
}

impl Default for StoreManifest {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            last_sequence: 0,
        }
    }
}

impl StoreManifest {
    /// Decode manifest bytes; empty input means no manifest yet.
    pub fn decode(path: &Path, bytes: &[u8]) -> Result<Self, StoreError> {
        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(Self::default());
        }
        let manifest: StoreManifest =
            serde_json::from_slice(bytes).map_err(|source| StoreError::Corrupt {
                path: path.to_path_buf(),
                source,
            })?;
        if manifest.schema_version > SCHEMA_VERSION {
            return Err(StoreError::UnsupportedSchema {
                found: manifest.schema_version,
                supported: SCHEMA_VERSION,
            });
        }
        Ok(manifest)
    }

    pub fn encode(&self) -> Result<Vec<u8>, StoreError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}

/// `bookings.json` -> `bookings.json.manifest.json`
pub fn manifest_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("store"));
    name.push(".manifest.json");
    path.with_file_name(name)
}
