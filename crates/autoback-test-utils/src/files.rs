use std::fs;
use std::path::{Path, PathBuf};

/// Write config contents to `dir/name`, creating parent directories if needed.
pub fn write_config(dir: &Path, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("dir");
    }
    fs::write(&path, contents).expect("write");
    path
}
