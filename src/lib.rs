pub mod fs_op;
pub mod logging;
pub mod serde_io;
pub mod settings;

pub use crate::fs_op::{
    copy_file_safe, ensure_directory, get_file_size, list_files_recursive, safe_delete, FileOpsError, Result,
};
pub use crate::serde_io::{read_csv_file, read_json_file, write_csv_file, write_json_file, Row};
