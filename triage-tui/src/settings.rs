//! User settings stored as JSON in the config directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use thiserror::Error;
use triage_lib::source::hn::DEFAULT_PAGE_SIZE;

use crate::paths;

/// Settings error type.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid settings in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Typed settings. Missing keys fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Issue dataset to open when none is given on the command line.
    pub issues_path: Option<PathBuf>,
    /// Stories per page for the `stories` command.
    pub page_size: usize,
    /// Log level name (`error`, `warn`, `info`, `debug`, `trace`, `off`).
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            issues_path: None,
            page_size: DEFAULT_PAGE_SIZE,
            log_level: "debug".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the platform config directory.
    pub fn load() -> Result<Self, SettingsError> {
        match paths::settings_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load settings from a file; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        serde_json::from_str(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parsed log level, `Debug` if the name is not recognized.
    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Debug)
    }

    /// Page size for story listings, never zero.
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("triage-{}-{}.json", name, std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_file_is_default() {
        let settings = Settings::load_from(Path::new("/no/such/triage/settings.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = write_temp("partial", r#"{"page_size": 10, "log_level": "warn"}"#);
        let settings = Settings::load_from(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(settings.page_size(), 10);
        assert_eq!(settings.log_level(), LevelFilter::Warn);
        assert_eq!(settings.issues_path, None);
    }

    #[test]
    fn test_invalid_file_is_error() {
        let path = write_temp("invalid", "{ not json");
        let result = Settings::load_from(&path);
        let _ = fs::remove_file(&path);

        assert!(matches!(result, Err(SettingsError::Parse { .. })));
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let settings = Settings {
            log_level: "loud".to_string(),
            ..Settings::default()
        };
        assert_eq!(settings.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn test_zero_page_size_clamped() {
        let settings = Settings {
            page_size: 0,
            ..Settings::default()
        };
        assert_eq!(settings.page_size(), 1);
    }
}
