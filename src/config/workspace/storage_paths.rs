//! StorageConfig and path resolution for store files.

use crate::config::xdg;
use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_bookings_file() -> PathBuf {
    PathBuf::from("bookings.json")
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding store files; relative paths resolve against the
    /// workspace root. Unset means the XDG data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Booking list file, relative to `data_dir` unless absolute
    #[serde(default = "default_bookings_file")]
    pub bookings_file: PathBuf,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.bookings_file.as_os_str().is_empty() {
            return Err("storage.bookings_file cannot be empty".to_string());
        }
        Ok(())
    }

    /// Resolve the data directory to an actual filesystem location.
    pub fn resolve_data_dir(&self, workspace_root: &Path) -> Result<PathBuf, ApiError> {
        match &self.data_dir {
            Some(dir) if dir.is_absolute() => Ok(dir.clone()),
            Some(dir) => Ok(workspace_root.join(dir)),
            None => xdg::data_dir(),
        }
    }

    /// Resolve the booking list file path.
    pub fn resolve_bookings_path(&self, workspace_root: &Path) -> Result<PathBuf, ApiError> {
        if self.bookings_file.is_absolute() {
            return Ok(self.bookings_file.clone());
        }
        Ok(self
            .resolve_data_dir(workspace_root)?
            .join(&self.bookings_file))
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            bookings_file: default_bookings_file(),
        }
    }
}
