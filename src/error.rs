//! Error types
//!
//! `StoreError` covers everything the list store can fail with. `ApiError` is the
//! application-level error used by configuration, logging and the CLI.

use std::path::PathBuf;

/// Errors returned by a list store.
///
/// A record that does not exist is not an error: lookups return `None` and
/// deletes return `false`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("I/O failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but is not a JSON array of records.
    #[error("corrupt store file {}: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The manifest was written by a newer schema than this build understands.
    #[error("unsupported store schema version {found} (supported up to {supported})")]
    UnsupportedSchema { found: u32, supported: u32 },

    /// Records could not be serialized for writing.
    #[error("failed to serialize store contents: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Domain validation rejected the supplied fields.
    #[error("invalid record: {0}")]
    Invalid(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Application-level errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("record not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
