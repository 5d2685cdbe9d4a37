use std::fs;
use std::io;
use std::path::Path;

use crate::fs_op::error::{FileOpsError, Result};

/// Lightweight classification of a filesystem path's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    /// Nothing at this path (a dangling symlink counts as `Other`).
    NotFound,
    Directory,
    File,
    /// Exists but is neither a regular file nor a directory
    /// (socket, FIFO, dangling symlink, ...).
    Other,
}

impl PathType {
    /// Classify `path` without following a final symlink to a missing target.
    ///
    /// Only `ErrorKind::NotFound` maps to `NotFound`; a path that cannot be
    /// inspected (permission denied, symlink loop, name too long) is an error.
    pub fn of<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let p = path.as_ref();
        match fs::symlink_metadata(p) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(PathType::NotFound),
            Err(e) => Err(e),
            Ok(_) if p.is_dir() => Ok(PathType::Directory),
            Ok(_) if p.is_file() => Ok(PathType::File),
            Ok(_) => Ok(PathType::Other),
        }
    }
}

/// Size of the file at `path` in bytes.
pub fn get_file_size<P: AsRef<Path>>(path: P) -> Result<u64> {
    let p = path.as_ref();
    match fs::metadata(p) {
        Ok(meta) => Ok(meta.len()),
        Err(e) => {
            tracing::warn!(op = "get_file_size", path = %p.display(), "error getting file size: {}", e);
            Err(FileOpsError::io("get_file_size", p, e))
        }
    }
}
