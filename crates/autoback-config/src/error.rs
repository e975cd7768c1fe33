//! Error types for config reading, parsing, and validation.

use crate::storage::StorageType;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned while loading or validating backup/restore config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file does not exist.
    #[error("config file not found: {}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading the config file failed for a reason other than absence.
    #[error("failed to read config {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The config contents are not valid UTF-8.
    #[error("config {origin} is not valid UTF-8: {source}")]
    NotUtf8 {
        origin: String,
        #[source]
        source: std::str::Utf8Error,
    },
    /// The envelope could not be parsed.
    #[error("failed to parse config {origin}: {source}")]
    ParseFailed {
        origin: String,
        #[source]
        source: json5::Error,
    },
    /// The envelope declares a schema version this build does not understand.
    #[error("invalid config version: {}", display_version(.found))]
    InvalidVersion { found: Option<i64> },
    /// The envelope names a storage backend that is not supported.
    #[error("unsupported storage type: {found:?}")]
    UnsupportedStorageType { found: String },
    /// The backend-specific `sub` payload failed to decode.
    #[error("failed to decode {storage_type} config in {origin}: {source}")]
    DecodeFailed {
        origin: String,
        storage_type: StorageType,
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    /// Classify an IO failure for `path`, separating missing files from other errors.
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path, source }
        } else {
            Self::ReadFailed { path, source }
        }
    }

    /// True when the config file was missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True for structural errors: bad encoding, malformed input, or a bad header field.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::NotUtf8 { .. } | Self::ParseFailed { .. })
    }
}

fn display_version(found: &Option<i64>) -> String {
    match found {
        Some(version) => version.to_string(),
        None => "missing".to_string(),
    }
}
