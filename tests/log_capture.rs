// Failures are reported through `tracing`; a scoped subscriber captures them
// without touching stdout or stderr.

use std::io;
use std::sync::{Arc, Mutex};

use tempfile::tempdir;
use tracing_subscriber::fmt::MakeWriter;

use fileops::fs_op::{get_file_size, list_files_recursive};
use fileops::serde_io::{read_json_file, write_csv_file};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;
    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture<F: FnOnce()>(f: F) -> String {
    let sink = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    sink.text()
}

#[test]
fn missing_file_size_is_logged_with_op_and_path() {
    let td = tempdir().unwrap();
    let path = td.path().join("ghost.bin");
    let out = capture(|| {
        assert!(get_file_size(&path).is_err());
    });
    assert!(out.contains("WARN"), "log was: {}", out);
    assert!(out.contains("get_file_size"), "log was: {}", out);
    assert!(out.contains("ghost.bin"), "log was: {}", out);
}

#[test]
fn bad_json_is_logged() {
    let td = tempdir().unwrap();
    let path = td.path().join("broken.json");
    std::fs::write(&path, "[1, 2").unwrap();
    let out = capture(|| {
        assert!(read_json_file(&path).is_err());
    });
    assert!(out.contains("read_json_file"), "log was: {}", out);
    assert!(out.contains("broken.json"), "log was: {}", out);
}

#[test]
fn empty_csv_write_is_logged() {
    let td = tempdir().unwrap();
    let path = td.path().join("none.csv");
    let out = capture(|| {
        assert!(write_csv_file(&[], &path).is_err());
    });
    assert!(out.contains("no data to write"), "log was: {}", out);
}

#[test]
fn success_logs_nothing_at_warn() {
    let td = tempdir().unwrap();
    let path = td.path().join("five.bin");
    std::fs::write(&path, b"12345").unwrap();
    let out = capture(|| {
        assert_eq!(get_file_size(&path).unwrap(), 5);
    });
    assert!(!out.contains("WARN"), "log was: {}", out);
}

#[test]
fn unreadable_listing_entry_is_named_in_log() {
    let td = tempdir().unwrap();
    let missing = td.path().join("gone-dir");
    let out = capture(|| {
        assert!(list_files_recursive(&missing, None).is_empty());
    });
    assert!(out.contains("list_files_recursive"), "log was: {}", out);
    assert!(out.contains("gone-dir"), "log was: {}", out);
}

#[test]
fn same_file_copy_is_logged() {
    let td = tempdir().unwrap();
    let f = td.path().join("self.txt");
    std::fs::write(&f, b"keep").unwrap();
    let out = capture(|| {
        assert!(fileops::copy_file_safe(&f, &f, true).is_err());
    });
    assert!(out.contains("same file"), "log was: {}", out);
    assert_eq!(std::fs::read(&f).unwrap(), b"keep");
}
