//! User settings for the `fileops` binary, stored as TOML.
//!
//! Every field has a default, so a missing file or a partial file is fine.
//! The default location is `<config dir>/fileops/settings.toml` as reported
//! by `directories-next`.

use std::fs;
use std::path::{Path, PathBuf};

use directories_next::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::serde_io::csv::CsvOptions;
use crate::serde_io::json::DEFAULT_INDENT;

/// Errors from loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings `{}`: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings `{}`: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("csv_delimiter must be a single ASCII character, got {0:?}")]
    Delimiter(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Spaces per level when the CLI writes JSON.
    pub json_indent: usize,
    pub csv_delimiter: String,
    /// Default for `cp` when `--overwrite` is not passed.
    pub overwrite: bool,
    /// Tracing level used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            json_indent: DEFAULT_INDENT,
            csv_delimiter: ",".to_string(),
            overwrite: false,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// CSV dialect derived from `csv_delimiter`.
    pub fn csv_options(&self) -> Result<CsvOptions, SettingsError> {
        match self.csv_delimiter.as_bytes() {
            [b] if b.is_ascii() => Ok(CsvOptions { delimiter: *b }),
            _ => Err(SettingsError::Delimiter(self.csv_delimiter.clone())),
        }
    }
}

/// `<config dir>/fileops/settings.toml`, if a home directory can be found.
pub fn default_settings_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "fileops").map(|d| d.config_dir().join("settings.toml"))
}

/// Load and validate settings from `path`.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let text = fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: Settings = toml::from_str(&text).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    settings.csv_options()?;
    Ok(settings)
}

/// Load from the default location, falling back to defaults when no file exists.
pub fn load_default_settings() -> Result<Settings, SettingsError> {
    match default_settings_path() {
        Some(p) if p.exists() => load_settings(&p),
        _ => Ok(Settings::default()),
    }
}
