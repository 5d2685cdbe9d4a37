use std::path::Path;

use crate::fs_op::error::{FileOpsError, Result};

/// Create `path` and all missing ancestors. A no-op when it already exists.
///
/// Unlike the other helpers this does not log: callers decide what a
/// failure here means.
pub fn ensure_directory<P: AsRef<Path>>(path: P) -> Result<()> {
    let p = path.as_ref();
    std::fs::create_dir_all(p).map_err(|e| FileOpsError::io("ensure_directory", p, e))
}

/// Ensure the parent directory of a file path exists.
///
/// A bare file name has an empty parent and needs nothing created.
pub fn ensure_parent_exists<P: AsRef<Path>>(path: P) -> Result<()> {
    match path.as_ref().parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_nested_dirs_idempotently() {
        let td = tempdir().unwrap();
        let dir = td.path().join("a/b/c");
        ensure_directory(&dir).unwrap();
        assert!(dir.is_dir());
        ensure_directory(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn fails_when_a_file_is_in_the_way() {
        let td = tempdir().unwrap();
        let f = td.path().join("file");
        std::fs::write(&f, b"x").unwrap();
        let err = ensure_directory(f.join("sub")).unwrap_err();
        assert!(matches!(err, FileOpsError::Io { op: "ensure_directory", .. }));
    }

    #[test]
    fn parent_of_bare_name_is_noop() {
        ensure_parent_exists("just_a_name.json").unwrap();
    }

    #[test]
    fn parent_is_created() {
        let td = tempdir().unwrap();
        let f = td.path().join("x/y/out.csv");
        ensure_parent_exists(&f).unwrap();
        assert!(td.path().join("x/y").is_dir());
        assert!(!f.exists());
    }
}
