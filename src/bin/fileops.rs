// fileops: command-line front end for the fileops helpers.
// Usage: cargo run --bin fileops -- <command>

use std::path::PathBuf;
use std::process::exit;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;

use fileops::fs_op::{copy_file_safe, ensure_directory, get_file_size, list_files_recursive, safe_delete};
use fileops::logging::init_tracing;
use fileops::serde_io::{read_csv_with, read_json_file, write_csv_with, write_json_file, Row};
use fileops::settings::{load_default_settings, load_settings, Settings};

#[derive(Parser, Debug)]
#[command(name = "fileops", version, about = "Small file and directory helpers")]
struct Cli {
    /// Settings file (TOML). Defaults to the user config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a directory and its parents.
    Mkdir { path: PathBuf },
    /// Delete a file or a directory tree.
    Rm { path: PathBuf },
    /// Copy a file, keeping permissions and timestamps.
    Cp {
        src: PathBuf,
        dst: PathBuf,
        #[arg(long)]
        overwrite: bool,
    },
    /// Print a file's size in bytes.
    Size { path: PathBuf },
    /// List files recursively.
    Ls {
        dir: PathBuf,
        /// Only names ending with this suffix, e.g. ".txt".
        #[arg(long)]
        ext: Option<String>,
    },
    /// Read a JSON file and pretty-print it.
    Json {
        path: PathBuf,
        #[arg(long)]
        indent: Option<usize>,
    },
    /// Read a CSV file and print its rows as JSON.
    Csv { path: PathBuf },
    /// Write, read back and delete sample JSON and CSV files.
    Selftest {
        #[arg(long, default_value = "test_files")]
        dir: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("error: {:#}", e);
            exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = match &cli.config {
        Some(p) => load_settings(p)?,
        None => load_default_settings()?,
    };
    init_tracing(if cli.verbose { "debug" } else { settings.log_level.as_str() });

    match cli.command {
        Command::Mkdir { path } => ensure_directory(&path)?,
        Command::Rm { path } => safe_delete(&path)?,
        Command::Cp { src, dst, overwrite } => {
            let n = copy_file_safe(&src, &dst, overwrite || settings.overwrite)?;
            println!("copied {} bytes to {}", n, dst.display());
        }
        Command::Size { path } => println!("{}", get_file_size(&path)?),
        Command::Ls { dir, ext } => {
            for p in list_files_recursive(&dir, ext.as_deref()) {
                println!("{}", p.display());
            }
        }
        Command::Json { path, indent } => {
            let doc = read_json_file(&path)?;
            print_json(&doc, indent.unwrap_or(settings.json_indent))?;
        }
        Command::Csv { path } => {
            let rows = read_csv_with(&path, &settings.csv_options()?)?;
            print_json(&rows, settings.json_indent)?;
        }
        Command::Selftest { dir } => selftest(&dir, &settings)?,
    }
    Ok(())
}

fn print_json<T: serde::Serialize + ?Sized>(data: &T, indent: usize) -> Result<()> {
    let pad = vec![b' '; indent];
    let mut out = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut out, serde_json::ser::PrettyFormatter::with_indent(&pad));
    data.serialize(&mut ser)?;
    println!("{}", String::from_utf8(out)?);
    Ok(())
}

fn selftest(dir: &std::path::Path, settings: &Settings) -> Result<()> {
    ensure_directory(dir)?;

    let doc = json!({"name": "test", "version": "1.0", "items": [1, 2, 3]});
    let json_file = dir.join("test.json");
    write_json_file(&doc, &json_file, settings.json_indent)?;
    println!("JSON file written to {}", json_file.display());
    let back = read_json_file(&json_file)?;
    println!("Read back: {}", back);
    anyhow::ensure!(back == doc, "JSON round trip changed the document");

    let rows: Vec<Row> = [("Alice", "30", "New York"), ("Bob", "25", "Los Angeles")]
        .iter()
        .map(|(name, age, city)| {
            [("name", *name), ("age", *age), ("city", *city)]
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        })
        .collect();
    let csv_file = dir.join("test.csv");
    let opts = settings.csv_options()?;
    write_csv_with(&rows, &csv_file, &opts)?;
    println!("CSV file written to {}", csv_file.display());
    let back = read_csv_with(&csv_file, &opts)?;
    println!("Read back: {}", serde_json::to_string(&back)?);
    anyhow::ensure!(back == rows, "CSV round trip changed the rows");

    safe_delete(dir).with_context(|| format!("cleaning up {}", dir.display()))?;
    println!("Test completed and cleaned up");
    Ok(())
}
