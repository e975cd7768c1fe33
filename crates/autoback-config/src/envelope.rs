//! Versioned envelope handling shared by every config kind.
//!
//! Each envelope is parsed into a raw form with optional header fields, then
//! validated in a fixed order: version, storage type, and only then the
//! backend-specific `sub` payload.

use crate::reader::read_config_file;
use crate::storage::{StorageConfig, StorageType};
use crate::ConfigError;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;

/// The only envelope schema version this crate understands.
pub const SUPPORTED_VERSION: u32 = 1;

/// Error origin used when decoding bytes that did not come from a file.
pub(crate) const BYTES_ORIGIN: &str = "<bytes>";

/// Decodes substituted bytes into an envelope and its storage config.
pub(crate) type EnvelopeDecoder<T> = fn(&[u8], &str) -> Result<(T, StorageConfig), ConfigError>;

/// Read, substitute, and decode a config file of the given kind.
pub(crate) fn load_from_path<T>(
    path: &Path,
    kind: &str,
    decode: EnvelopeDecoder<T>,
) -> Result<(T, StorageConfig), ConfigError> {
    info!("loading {kind} config from path: {}", path.display());
    let data = read_config_file(path)?;
    let (config, storage) = decode(&data, &path.display().to_string())?;
    info!(
        "{kind} config loaded (path={}, type={})",
        path.display(),
        storage.storage_type()
    );
    Ok((config, storage))
}

/// Parse UTF-8 envelope contents into the raw envelope type `T`.
pub(crate) fn parse<T: DeserializeOwned>(data: &[u8], origin: &str) -> Result<T, ConfigError> {
    let contents = std::str::from_utf8(data).map_err(|source| ConfigError::NotUtf8 {
        origin: origin.to_string(),
        source,
    })?;
    json5::from_str(contents).map_err(|source| ConfigError::ParseFailed {
        origin: origin.to_string(),
        source,
    })
}

/// Check the version and resolve the storage type, in that order.
pub(crate) fn validate_header(
    version: Option<i64>,
    storage_type: Option<&str>,
) -> Result<StorageType, ConfigError> {
    if version != Some(i64::from(SUPPORTED_VERSION)) {
        warn!("rejecting config with version {version:?} (supported={SUPPORTED_VERSION})");
        return Err(ConfigError::InvalidVersion { found: version });
    }
    storage_type.unwrap_or_default().parse().inspect_err(|_| {
        warn!("rejecting config with unsupported storage type {storage_type:?}");
    })
}

/// Decode the `sub` payload with the decoder registered for `storage_type`.
pub(crate) fn decode_sub(
    storage_type: StorageType,
    sub: Value,
    origin: &str,
) -> Result<StorageConfig, ConfigError> {
    debug!("decoding {storage_type} sub-config (origin={origin})");
    storage_type
        .decode(sub)
        .map_err(|source| ConfigError::DecodeFailed {
            origin: origin.to_string(),
            storage_type,
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accepts_supported_version_and_known_type() {
        let storage_type = validate_header(Some(1), Some("s3")).expect("valid header");
        assert_eq!(storage_type, StorageType::S3);
    }

    #[test]
    fn version_is_checked_before_type() {
        let err = validate_header(Some(2), Some("unsupported")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVersion { found: Some(2) }));
    }

    #[test]
    fn missing_version_is_invalid() {
        let err = validate_header(None, Some("s3")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVersion { found: None }));
    }

    #[test]
    fn missing_type_is_unsupported() {
        let err = validate_header(Some(1), None).unwrap_err();
        assert!(matches!(
            &err,
            ConfigError::UnsupportedStorageType { found } if found.is_empty()
        ));
    }

    #[test]
    fn parse_reports_origin() {
        let err = parse::<Value>(b"{ not json", "/etc/restore.json").unwrap_err();
        assert!(err.is_parse_error());
        assert!(err.to_string().contains("/etc/restore.json"));
    }

    #[test]
    fn parse_rejects_invalid_utf8() {
        let err = parse::<Value>(b"{\"a\": \"\xff\"}", BYTES_ORIGIN).unwrap_err();
        assert!(matches!(err, ConfigError::NotUtf8 { .. }));
    }

    #[test]
    fn decode_failure_names_backend() {
        let err = decode_sub(StorageType::S3, Value::Null, BYTES_ORIGIN).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DecodeFailed {
                storage_type: StorageType::S3,
                ..
            }
        ));
    }
}
