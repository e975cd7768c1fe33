//! Test helpers shared across autoback crates.

pub mod files;
pub mod fixtures;

pub use files::write_config;
pub use fixtures::{backup_envelope, restore_envelope, s3_sub, to_bytes};
