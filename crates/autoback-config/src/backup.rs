//! Configuration for periodic automatic backups to a storage backend.

use crate::envelope::{self, BYTES_ORIGIN, SUPPORTED_VERSION};
use crate::storage::{StorageConfig, StorageType};
use crate::ConfigError;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use std::time::Duration;

/// Validated backup envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackupConfig {
    version: u32,
    #[serde(rename = "type")]
    storage_type: StorageType,
    #[serde(serialize_with = "crate::duration::serialize")]
    interval: Duration,
    no_compress: bool,
    timestamp: bool,
    vacuum: bool,
}

#[derive(Debug, Deserialize)]
struct RawBackupConfig {
    version: Option<i64>,
    #[serde(rename = "type")]
    storage_type: Option<String>,
    #[serde(deserialize_with = "crate::duration::deserialize")]
    interval: Duration,
    no_compress: Option<bool>,
    timestamp: Option<bool>,
    vacuum: Option<bool>,
    #[serde(default)]
    sub: Value,
}

impl BackupConfig {
    /// Read a backup config file, expand env references, and decode it.
    pub fn load_from_path(
        path: impl AsRef<Path>,
    ) -> Result<(Self, StorageConfig), ConfigError> {
        envelope::load_from_path(path.as_ref(), "backup", Self::decode)
    }

    /// Decode a backup config from already-substituted bytes.
    pub fn unmarshal(data: &[u8]) -> Result<(Self, StorageConfig), ConfigError> {
        debug!("unmarshaling backup config from raw contents (len={})", data.len());
        Self::decode(data, BYTES_ORIGIN)
    }

    fn decode(data: &[u8], origin: &str) -> Result<(Self, StorageConfig), ConfigError> {
        let raw: RawBackupConfig = envelope::parse(data, origin)?;
        let storage_type = envelope::validate_header(raw.version, raw.storage_type.as_deref())?;
        let storage = envelope::decode_sub(storage_type, raw.sub, origin)?;
        let config = Self {
            version: SUPPORTED_VERSION,
            storage_type,
            interval: raw.interval,
            no_compress: raw.no_compress.unwrap_or(false),
            timestamp: raw.timestamp.unwrap_or(false),
            vacuum: raw.vacuum.unwrap_or(false),
        };
        Ok((config, storage))
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn storage_type(&self) -> StorageType {
        self.storage_type
    }

    /// Time between automatic backups.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Upload the database uncompressed.
    pub fn no_compress(&self) -> bool {
        self.no_compress
    }

    /// Append a timestamp to each uploaded object's name.
    pub fn timestamp(&self) -> bool {
        self.timestamp
    }

    /// Vacuum the database before each upload.
    pub fn vacuum(&self) -> bool {
        self.vacuum
    }
}
