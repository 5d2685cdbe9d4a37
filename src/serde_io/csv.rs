use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use indexmap::IndexMap;

use crate::fs_op::create::ensure_parent_exists;
use crate::fs_op::error::{FileOpsError, Result};

/// One CSV record: column name to cell, in column order.
pub type Row = IndexMap<String, String>;

/// Dialect knobs for the `_with` variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    pub delimiter: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        CsvOptions { delimiter: b',' }
    }
}

/// Read a comma-separated file with a header row into row mappings.
pub fn read_csv_file<P: AsRef<Path>>(path: P) -> Result<Vec<Row>> {
    read_csv_with(path, &CsvOptions::default())
}

/// Read a delimited file with a header row using `opts`.
pub fn read_csv_with<P: AsRef<Path>>(path: P, opts: &CsvOptions) -> Result<Vec<Row>> {
    let p = path.as_ref();
    let res = File::open(p)
        .map_err(|e| FileOpsError::io("read_csv_file", p, e))
        .and_then(|f| {
            let mut reader = csv::ReaderBuilder::new()
                .delimiter(opts.delimiter)
                .has_headers(true)
                .from_reader(BufReader::new(f));
            reader
                .deserialize::<Row>()
                .collect::<std::result::Result<Vec<Row>, csv::Error>>()
                .map_err(|e| FileOpsError::csv(p, e))
        });
    if let Err(e) = &res {
        tracing::warn!(op = "read_csv_file", path = %p.display(), "error reading CSV file: {}", e);
    }
    res
}

/// Write `rows` to `path` as a comma-separated file with a header row.
///
/// Columns follow the first row's key order. Every other row must carry
/// exactly the same keys (in any order) or `FileOpsError::CsvShape` is
/// returned. An empty `rows` slice, or a first row without columns, is
/// refused with `EmptyInput`. In every error case the filesystem is left
/// untouched.
pub fn write_csv_file<P: AsRef<Path>>(rows: &[Row], path: P) -> Result<()> {
    write_csv_with(rows, path, &CsvOptions::default())
}

/// `write_csv_file` with a custom dialect.
pub fn write_csv_with<P: AsRef<Path>>(rows: &[Row], path: P, opts: &CsvOptions) -> Result<()> {
    let p = path.as_ref();
    let res = check_shape(rows, p)
        .and_then(|header| ensure_parent_exists(p).map(|()| header))
        .and_then(|header| write_rows(&header, rows, p, opts));
    if let Err(e) = &res {
        tracing::warn!(op = "write_csv_file", path = %p.display(), "error writing CSV file: {}", e);
    }
    res
}

fn check_shape<'a>(rows: &'a [Row], p: &Path) -> Result<Vec<&'a str>> {
    let first = rows
        .first()
        .filter(|r| !r.is_empty())
        .ok_or_else(|| FileOpsError::EmptyInput(p.to_path_buf()))?;
    let header: Vec<&str> = first.keys().map(String::as_str).collect();

    for (i, row) in rows.iter().enumerate().skip(1) {
        let same = row.len() == header.len() && header.iter().all(|k| row.contains_key(*k));
        if !same {
            return Err(FileOpsError::CsvShape {
                path: p.to_path_buf(),
                row: i,
                expected: header.iter().map(|k| k.to_string()).collect(),
                found: row.keys().cloned().collect(),
            });
        }
    }
    Ok(header)
}

fn write_rows(header: &[&str], rows: &[Row], p: &Path, opts: &CsvOptions) -> Result<()> {
    let file = File::create(p).map_err(|e| FileOpsError::io("write_csv_file", p, e))?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(opts.delimiter)
        .from_writer(file);

    writer.write_record(header).map_err(|e| FileOpsError::csv(p, e))?;
    for row in rows {
        // check_shape guarantees every header key is present.
        writer
            .write_record(header.iter().map(|k| row.get(*k).map(String::as_str).unwrap_or_default()))
            .map_err(|e| FileOpsError::csv(p, e))?;
    }
    writer.flush().map_err(|e| FileOpsError::io("write_csv_file", p, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn people() -> Vec<Row> {
        vec![
            row(&[("name", "Alice"), ("age", "30"), ("city", "New York")]),
            row(&[("name", "Bob"), ("age", "25"), ("city", "Los Angeles")]),
        ]
    }

    #[test]
    fn write_then_read_rows() {
        let td = tempdir().unwrap();
        let path = td.path().join("out/test.csv");
        write_csv_file(&people(), &path).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "name,age,city\nAlice,30,New York\nBob,25,Los Angeles\n"
        );
        assert_eq!(read_csv_file(&path).unwrap(), people());
    }

    #[test]
    fn header_follows_first_row_even_if_later_rows_differ_in_order() {
        let td = tempdir().unwrap();
        let path = td.path().join("t.csv");
        let rows = vec![row(&[("b", "1"), ("a", "2")]), row(&[("a", "4"), ("b", "3")])];
        write_csv_file(&rows, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "b,a\n1,2\n3,4\n");
    }

    #[test]
    fn quoting_survives_round_trip() {
        let td = tempdir().unwrap();
        let path = td.path().join("q.csv");
        let rows = vec![row(&[("text", "has,comma"), ("note", "say \"hi\"\nnext line")])];
        write_csv_file(&rows, &path).unwrap();
        assert_eq!(read_csv_file(&path).unwrap(), rows);
    }

    #[test]
    fn empty_rows_touch_nothing() {
        let td = tempdir().unwrap();
        let path = td.path().join("sub/empty.csv");
        let err = write_csv_file(&[], &path).unwrap_err();
        assert!(matches!(err, FileOpsError::EmptyInput(p) if p == path));
        assert!(!path.exists());
        assert!(!td.path().join("sub").exists());
    }

    #[test]
    fn rows_without_columns_are_refused() {
        let td = tempdir().unwrap();
        let path = td.path().join("blank.csv");
        let err = write_csv_file(&[Row::new(), Row::new()], &path).unwrap_err();
        assert!(matches!(err, FileOpsError::EmptyInput(p) if p == path));
        assert!(!path.exists());
    }

    #[test]
    fn mismatched_keys_are_rejected() {
        let td = tempdir().unwrap();
        let path = td.path().join("bad.csv");
        let rows = vec![row(&[("a", "1"), ("b", "2")]), row(&[("a", "1"), ("c", "2")])];
        match write_csv_file(&rows, &path) {
            Err(FileOpsError::CsvShape { row, .. }) => assert_eq!(row, 1),
            other => panic!("expected CsvShape, got {:?}", other),
        }
        assert!(!path.exists());
    }

    #[test]
    fn custom_delimiter() {
        let td = tempdir().unwrap();
        let path = td.path().join("semi.csv");
        let opts = CsvOptions { delimiter: b';' };
        write_csv_with(&people(), &path, &opts).unwrap();
        assert!(fs::read_to_string(&path).unwrap().starts_with("name;age;city\n"));
        assert_eq!(read_csv_with(&path, &opts).unwrap(), people());
    }

    #[test]
    fn header_only_file_reads_as_no_rows() {
        let td = tempdir().unwrap();
        let path = td.path().join("h.csv");
        fs::write(&path, "a,b\n").unwrap();
        assert!(read_csv_file(&path).unwrap().is_empty());
    }

    #[test]
    fn ragged_file_is_a_csv_error() {
        let td = tempdir().unwrap();
        let path = td.path().join("r.csv");
        fs::write(&path, "a,b\n1,2,3\n").unwrap();
        assert!(matches!(read_csv_file(&path), Err(FileOpsError::Csv { .. })));
    }
}
