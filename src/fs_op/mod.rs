//! Filesystem helpers: directory creation, removal, copying, stat and
//! recursive listing. All of them report failures as `FileOpsError` and
//! log a `tracing` event naming the operation and path.

pub mod copy;
pub mod create;
pub mod error;
pub(crate) mod metadata;
pub mod remove;
pub mod stat;
pub mod walk;

pub use copy::copy_file_safe;
pub use create::{ensure_directory, ensure_parent_exists};
pub use error::{FileOpsError, Result};
pub use remove::safe_delete;
pub use stat::{get_file_size, PathType};
pub use walk::list_files_recursive;
