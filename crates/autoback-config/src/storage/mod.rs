//! Storage backends selectable by an envelope's `type` field.
//!
//! The set of backends is closed: each `StorageType` maps to exactly one
//! decoder that turns the envelope's `sub` payload into a `StorageConfig`.

mod s3;

use crate::ConfigError;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

pub use s3::S3Config;

/// Decodes a raw `sub` payload for one backend.
type SubDecoder = fn(Value) -> Result<StorageConfig, serde_json::Error>;

/// Storage backend discriminator carried in the envelope's `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageType {
    /// S3-compatible object store.
    S3,
}

impl StorageType {
    /// Every supported backend.
    pub const ALL: &'static [StorageType] = &[StorageType::S3];

    /// Identifier used for this backend in config files.
    pub const fn as_str(self) -> &'static str {
        match self {
            StorageType::S3 => "s3",
        }
    }

    fn decoder(self) -> SubDecoder {
        match self {
            StorageType::S3 => s3::decode,
        }
    }

    /// Decode a `sub` payload into the config shape for this backend.
    pub(crate) fn decode(self, sub: Value) -> Result<StorageConfig, serde_json::Error> {
        (self.decoder())(sub)
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageType {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|storage_type| storage_type.as_str() == value)
            .ok_or_else(|| ConfigError::UnsupportedStorageType {
                found: value.to_string(),
            })
    }
}

/// Decoded backend-specific configuration, one variant per `StorageType`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StorageConfig {
    S3(S3Config),
}

impl StorageConfig {
    /// Backend this config belongs to.
    pub fn storage_type(&self) -> StorageType {
        match self {
            StorageConfig::S3(_) => StorageType::S3,
        }
    }

    /// The S3 config, if this is an S3 backend.
    pub fn as_s3(&self) -> Option<&S3Config> {
        match self {
            StorageConfig::S3(config) => Some(config),
        }
    }
}
