//! Facade crate smoke tests.

use autoback::{RestoreConfig, StorageType, init_logging};
use autoback_test_utils::{restore_envelope, to_bytes, write_config};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Logging init must tolerate repeated calls.
#[test]
fn init_logging_is_idempotent() {
    init_logging();
    init_logging();
}

/// Loading through the facade reaches the config crate.
#[test]
fn loads_restore_config_through_reexport() {
    init_logging();
    let temp = TempDir::new().expect("tmp");
    let path = write_config(
        temp.path(),
        "restore.json",
        to_bytes(&restore_envelope(1, "s3")),
    );

    let (config, storage) = RestoreConfig::load_from_path(&path).expect("load");
    assert_eq!(config.storage_type(), StorageType::S3);
    assert_eq!(storage.storage_type(), StorageType::S3);
    assert_eq!(
        autoback::config::DEFAULT_RESTORE_TIMEOUT,
        config.timeout()
    );
}
