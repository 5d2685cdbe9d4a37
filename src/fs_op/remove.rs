use std::fs;
use std::path::Path;

use crate::fs_op::error::{FileOpsError, Result};
use crate::fs_op::stat::PathType;

/// Remove a file or directory at `path`.
///
/// Directories are removed recursively. A path that does not exist is
/// treated as already deleted and returns `Ok(())`, so callers can delete
/// without checking first. A path that cannot be inspected is a failure,
/// not a missing path. Failures are logged and returned.
///
/// # Examples
///
/// ```no_run
/// use fileops::fs_op::remove::safe_delete;
/// safe_delete("/tmp/some_file.txt").expect("remove failed");
/// ```
pub fn safe_delete(path: impl AsRef<Path>) -> Result<()> {
    let p = path.as_ref();

    let res = PathType::of(p).and_then(|kind| match kind {
        PathType::NotFound => {
            tracing::debug!(op = "safe_delete", path = %p.display(), "nothing to delete");
            Ok(())
        }
        PathType::Directory => fs::remove_dir_all(p),
        PathType::File | PathType::Other => fs::remove_file(p),
    });

    res.map_err(|e| {
        tracing::warn!(op = "safe_delete", path = %p.display(), "error deleting: {}", e);
        FileOpsError::io("safe_delete", p, e)
    })
}
