use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// List every regular file under `directory`, recursively.
///
/// `extension` is a plain suffix test on the file name (`".log"` matches
/// `a.log` and also `weird.tar.log`); `None` keeps every file. Results come
/// back in walk order, which is stable for an unchanged tree but not
/// sorted. A `directory` that is a plain file yields nothing. Entries
/// that cannot be read are logged and skipped, so a missing or unreadable
/// `directory` yields whatever was collected (possibly nothing).
pub fn list_files_recursive<P: AsRef<Path>>(directory: P, extension: Option<&str>) -> Vec<PathBuf> {
    let dir = directory.as_ref();
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).follow_links(false) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(
                    op = "list_files_recursive",
                    path = %e.path().unwrap_or(dir).display(),
                    "error listing files: {}",
                    e
                );
                continue;
            }
        };
        // Symlinked directories are listed as neither files nor walked into.
        if entry.file_type().is_dir() || entry.path().is_dir() {
            continue;
        }
        let keep = match extension {
            None => true,
            Some(ext) => entry.file_name().to_string_lossy().ends_with(ext),
        };
        if keep {
            files.push(entry.into_path());
        }
    }

    files
}
