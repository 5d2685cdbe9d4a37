//! JSON and CSV file readers and writers.

pub mod csv;
pub mod json;

pub use self::csv::{read_csv_file, read_csv_with, write_csv_file, write_csv_with, CsvOptions, Row};
pub use self::json::{read_json_as, read_json_file, write_json_file, write_json_file_default};
