// src/files.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::error::{MergeError, Result};

fn unavailable(path: &Path) -> impl FnOnce(std::io::Error) -> MergeError + '_ {
    move |source| MergeError::ResourceUnavailable {
        path: path.to_path_buf(),
        source,
    }
}

/// Read a whole CSV or template file into memory.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(unavailable(path))?;
    debug!(path = %path.display(), bytes = text.len(), "read file");
    Ok(text)
}

/// Write `content` to `dir/name`, replacing any existing file.
pub fn write_text(dir: impl AsRef<Path>, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.as_ref().join(name);
    fs::write(&path, content.as_bytes()).map_err(unavailable(&path))?;
    debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(path)
}

/// Fails unless `dir` exists and is a directory. With `create`, missing
/// directories are made first.
pub fn ensure_dir(dir: impl AsRef<Path>, create: bool) -> Result<()> {
    let dir = dir.as_ref();
    if create {
        fs::create_dir_all(dir).map_err(unavailable(dir))?;
    }
    let meta = fs::metadata(dir).map_err(unavailable(dir))?;
    if !meta.is_dir() {
        return Err(MergeError::ResourceUnavailable {
            path: dir.to_path_buf(),
            source: std::io::Error::other("not a directory"),
        });
    }
    Ok(())
}
