//! Public SDK surface for autoback.
//!
//! Re-exports the config crate and provides a small logging initialization
//! helper so every consumer wires up output the same way.

/// Re-export for convenience.
pub use autoback_config as config;
pub use autoback_config::{
    BackupConfig, ConfigError, RestoreConfig, S3Config, StorageConfig, StorageType,
};

#[inline]
/// Initialize logging using env_logger if the "logging" feature is enabled.
///
/// Safe to call more than once; later calls are no-ops. Verbosity follows
/// `RUST_LOG`.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        if env_logger::try_init().is_ok() {
            log::debug!("logging initialized");
        }
    }
}
