use std::fs;
use std::io;
use std::path::Path;

use fs_extra::file::{copy as fs_extra_copy, CopyOptions};

use crate::fs_op::create::ensure_parent_exists;
use crate::fs_op::error::{FileOpsError, Result};
use crate::fs_op::metadata::preserve_metadata;

/// Copy the file `src` to `dst`, keeping permissions and timestamps.
///
/// When `dst` already exists and `overwrite` is false nothing is touched
/// and `FileOpsError::DestinationExists` is returned. The parent of `dst`
/// is created first. Returns the number of bytes copied.
pub fn copy_file_safe<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q, overwrite: bool) -> Result<u64> {
    let s = src.as_ref();
    let d = dst.as_ref();

    if !overwrite && d.exists() {
        tracing::warn!(
            op = "copy_file_safe",
            path = %d.display(),
            "destination already exists; use overwrite to replace"
        );
        return Err(FileOpsError::DestinationExists(d.to_path_buf()));
    }

    if d.exists() && same_file(s, d) {
        tracing::warn!(op = "copy_file_safe", path = %d.display(), "source and destination are the same file");
        return Err(FileOpsError::SameFile(d.to_path_buf()));
    }

    let res = ensure_parent_exists(d).and_then(|()| {
        let mut options = CopyOptions::new();
        options.overwrite = overwrite;
        // 64 KiB buffer, same as the directory copy helpers.
        options.buffer_size = 64 * 1024;
        let n = fs_extra_copy(s, d, &options)
            .map_err(|e| FileOpsError::io("copy_file_safe", s, into_io_error(e)))?;
        preserve_metadata(s, d).map_err(|e| FileOpsError::io("copy_file_safe", d, e))?;
        Ok(n)
    });

    if let Err(e) = &res {
        tracing::warn!(
            op = "copy_file_safe",
            src = %s.display(),
            dst = %d.display(),
            "error copying: {}",
            e
        );
    }
    res
}

// Hard links share an inode but not a canonical path.
#[cfg(unix)]
fn same_file(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;
    match (fs::metadata(a), fs::metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

// Keep the io::ErrorKind behind fs_extra's error so callers can match on it.
fn into_io_error(e: fs_extra::error::Error) -> io::Error {
    use fs_extra::error::ErrorKind as K;
    let msg = e.to_string();
    let kind = match e.kind {
        K::Io(inner) => return inner,
        K::NotFound => io::ErrorKind::NotFound,
        K::PermissionDenied => io::ErrorKind::PermissionDenied,
        K::AlreadyExists => io::ErrorKind::AlreadyExists,
        K::Interrupted => io::ErrorKind::Interrupted,
        K::InvalidFile | K::InvalidFolder | K::InvalidFileName | K::InvalidPath => io::ErrorKind::InvalidInput,
        _ => io::ErrorKind::Other,
    };
    io::Error::new(kind, msg)
}
