use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced by the filesystem and serialization helpers.
///
/// Every variant keeps the path it concerns and, where one exists, the
/// underlying fault as its `source`.
#[derive(Error, Debug)]
pub enum FileOpsError {
    /// Underlying IO error, tagged with the operation that hit it.
    #[error("{op} failed for `{}`: {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Copy refused because the destination exists and overwrite was off.
    #[error("destination `{}` already exists; pass overwrite to replace it", .0.display())]
    DestinationExists(PathBuf),

    /// Source and destination resolve to the same file; it was left as is.
    #[error("`{}` is both the source and the destination of the copy", .0.display())]
    SameFile(PathBuf),

    /// JSON could not be parsed or serialized.
    #[error("invalid JSON in `{}`: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// CSV could not be parsed or written.
    #[error("CSV error in `{}`: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row's columns differ from the header taken from the first row.
    #[error("row {row} of `{}` has columns {found:?}, expected {expected:?}", .path.display())]
    CsvShape {
        path: PathBuf,
        row: usize,
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// Nothing to write; the target was not touched.
    #[error("no data to write to `{}`", .0.display())]
    EmptyInput(PathBuf),
}

impl FileOpsError {
    pub(crate) fn io(op: &'static str, path: &Path, source: io::Error) -> Self {
        FileOpsError::Io {
            op,
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn json(path: &Path, source: serde_json::Error) -> Self {
        FileOpsError::Json {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn csv(path: &Path, source: csv::Error) -> Self {
        FileOpsError::Csv {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The `io::ErrorKind` behind this error, if it wraps an IO fault.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            FileOpsError::Io { source, .. } => Some(source.kind()),
            FileOpsError::Json { source, .. } => source.io_error_kind(),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FileOpsError>;
