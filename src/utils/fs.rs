//! Filesystem helpers.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, instrument};

use crate::error::Result;

/// Total size in bytes of `path` and everything below it.
///
/// Directories count their own metadata size plus their children. Symbolic
/// links add nothing and are not followed. An empty or missing root yields
/// `0`; errors met while walking are returned. The walk blocks the calling
/// thread.
#[instrument(skip(path), fields(root = %path.as_ref().display()))]
pub fn folder_size<P: AsRef<Path>>(path: P) -> Result<u64> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Ok(0);
    }
    match fs::symlink_metadata(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("Root does not exist");
            Ok(0)
        }
        Err(e) => Err(e.into()),
        Ok(_) => walk(path),
    }
}

fn walk(path: &Path) -> Result<u64> {
    let meta = fs::symlink_metadata(path)?;
    if meta.file_type().is_symlink() {
        debug!(path = %path.display(), "Skipping symlink");
        return Ok(0);
    }
    if !meta.is_dir() {
        return Ok(meta.len());
    }
    let mut total = meta.len();
    for entry in fs::read_dir(path)? {
        total += walk(&entry?.path())?;
    }
    Ok(total)
}
