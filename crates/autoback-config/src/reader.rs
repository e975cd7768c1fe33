//! Reads config files from disk and expands env references in their bytes.

use crate::ConfigError;
use crate::env::expand_env;
use log::debug;
use std::fs;
use std::path::Path;

/// Read `path` in full and substitute env references in its contents.
///
/// No parsing happens here. A missing file yields `ConfigError::NotFound`;
/// any other IO failure yields `ConfigError::ReadFailed`.
pub fn read_config_file(path: impl AsRef<Path>) -> Result<Vec<u8>, ConfigError> {
    let path = path.as_ref();
    let raw = fs::read(path).map_err(|err| ConfigError::from_io(path, err))?;
    debug!("read config file (path={}, bytes={})", path.display(), raw.len());
    Ok(expand_env(&raw).into_owned())
}
