//! Backup and restore configuration loading.
//!
//! Config files are read as raw bytes, `$NAME`/`${NAME}` references are
//! expanded from the process environment, and the result is decoded into a
//! versioned envelope plus the storage backend config selected by its `type`.

mod backup;
mod envelope;
mod error;
mod reader;
mod restore;

pub mod duration;
pub mod env;
pub mod storage;

/// Automatic backup envelope.
pub use backup::BackupConfig;
/// Supported envelope schema version.
pub use envelope::SUPPORTED_VERSION;
/// Public error type returned by config loading and validation APIs.
pub use error::ConfigError;
/// Environment substitution helpers.
pub use env::{expand_env, substitute_with};
/// Raw file reading with env substitution.
pub use reader::read_config_file;
/// Restore-on-startup envelope and its default timeout.
pub use restore::{DEFAULT_RESTORE_TIMEOUT, RestoreConfig};
/// Storage backend types.
pub use storage::{S3Config, StorageConfig, StorageType};
