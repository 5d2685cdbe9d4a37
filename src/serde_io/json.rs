use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::fs_op::create::ensure_parent_exists;
use crate::fs_op::error::{FileOpsError, Result};

/// Indentation used by `write_json_file_default`.
pub const DEFAULT_INDENT: usize = 2;

/// Read and parse the JSON document at `path`.
pub fn read_json_file<P: AsRef<Path>>(path: P) -> Result<Value> {
    read_json_as(path)
}

/// Read the JSON document at `path` straight into `T`.
pub fn read_json_as<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let p = path.as_ref();
    let res = File::open(p)
        .map_err(|e| FileOpsError::io("read_json_file", p, e))
        .and_then(|f| serde_json::from_reader(BufReader::new(f)).map_err(|e| FileOpsError::json(p, e)));
    if let Err(e) = &res {
        tracing::warn!(op = "read_json_file", path = %p.display(), "error reading JSON file: {}", e);
    }
    res
}

/// Write `data` to `path` as pretty-printed JSON indented by `indent` spaces.
///
/// Parent directories are created and an existing file is replaced.
/// Non-ASCII text is written as-is rather than `\u` escaped.
pub fn write_json_file<T, P>(data: &T, path: P, indent: usize) -> Result<()>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let p = path.as_ref();
    let res = ensure_parent_exists(p).and_then(|()| write_pretty(data, p, indent));
    if let Err(e) = &res {
        tracing::warn!(op = "write_json_file", path = %p.display(), "error writing JSON file: {}", e);
    }
    res
}

/// `write_json_file` with the default two-space indent.
pub fn write_json_file_default<T, P>(data: &T, path: P) -> Result<()>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    write_json_file(data, path, DEFAULT_INDENT)
}

fn write_pretty<T: Serialize + ?Sized>(data: &T, p: &Path, indent: usize) -> Result<()> {
    let file = File::create(p).map_err(|e| FileOpsError::io("write_json_file", p, e))?;
    let mut writer = BufWriter::new(file);
    let pad = vec![b' '; indent];
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(&pad));
    data.serialize(&mut ser).map_err(|e| FileOpsError::json(p, e))?;
    writer.flush().map_err(|e| FileOpsError::io("write_json_file", p, e))
}
