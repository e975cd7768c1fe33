//! Configuration for restoring from a storage backend at startup.

use crate::envelope::{self, BYTES_ORIGIN, SUPPORTED_VERSION};
use crate::storage::{StorageConfig, StorageType};
use crate::ConfigError;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use std::time::Duration;

/// Timeout applied when a restore config does not set one.
pub const DEFAULT_RESTORE_TIMEOUT: Duration = Duration::from_secs(30);

/// Validated restore envelope.
///
/// Decoded together with the backend's `StorageConfig`; see
/// [`RestoreConfig::unmarshal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestoreConfig {
    version: u32,
    #[serde(rename = "type")]
    storage_type: StorageType,
    #[serde(serialize_with = "crate::duration::serialize")]
    timeout: Duration,
    continue_on_failure: bool,
}

/// On-disk restore envelope before validation and defaults.
#[derive(Debug, Deserialize)]
struct RawRestoreConfig {
    version: Option<i64>,
    #[serde(rename = "type")]
    storage_type: Option<String>,
    #[serde(default, deserialize_with = "crate::duration::option::deserialize")]
    timeout: Option<Duration>,
    continue_on_failure: Option<bool>,
    #[serde(default)]
    sub: Value,
}

impl RestoreConfig {
    /// Read a restore config file, expand env references, and decode it.
    pub fn load_from_path(
        path: impl AsRef<Path>,
    ) -> Result<(Self, StorageConfig), ConfigError> {
        envelope::load_from_path(path.as_ref(), "restore", Self::decode)
    }

    /// Decode a restore config from already-substituted bytes.
    pub fn unmarshal(data: &[u8]) -> Result<(Self, StorageConfig), ConfigError> {
        debug!("unmarshaling restore config from raw contents (len={})", data.len());
        Self::decode(data, BYTES_ORIGIN)
    }

    fn decode(data: &[u8], origin: &str) -> Result<(Self, StorageConfig), ConfigError> {
        let raw: RawRestoreConfig = envelope::parse(data, origin)?;
        let storage_type = envelope::validate_header(raw.version, raw.storage_type.as_deref())?;
        let storage = envelope::decode_sub(storage_type, raw.sub, origin)?;
        let config = Self {
            version: SUPPORTED_VERSION,
            storage_type,
            timeout: raw.timeout.unwrap_or(DEFAULT_RESTORE_TIMEOUT),
            continue_on_failure: raw.continue_on_failure.unwrap_or(false),
        };
        Ok((config, storage))
    }

    /// Schema version of the envelope.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Backend the `sub` payload was decoded for.
    pub fn storage_type(&self) -> StorageType {
        self.storage_type
    }

    /// Upper bound on how long the restore may take.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether startup should proceed when the restore fails.
    pub fn continue_on_failure(&self) -> bool {
        self.continue_on_failure
    }
}
