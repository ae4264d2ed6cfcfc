use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::AppConfig;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "tally.toml";

/// Error type for config I/O
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Read and parse a config file.
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Resolve the effective config: an explicit path must exist, otherwise
/// `tally.toml` in `dir` is used when present, otherwise defaults.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<AppConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    let candidate = dir.join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        read_config(&candidate)
    } else {
        Ok(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_config() -> &'static str {
        r##"[storage]
file = "lists/home.txt"

[ui]
clock_format = "%H:%M:%S"

[ui.colors]
background = "#000000"

[web]
bind = "0.0.0.0:9000"
title = "Chores"
"##
    }

    #[test]
    fn test_read_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, sample_config()).unwrap();

        let config = read_config(&path).unwrap();
        assert_eq!(config.storage.file, PathBuf::from("lists/home.txt"));
        assert_eq!(config.ui.clock_format, "%H:%M:%S");
        // Unset keys keep their defaults
        assert_eq!(config.ui.date_format, "%a, %b %-d, %Y");
        assert_eq!(config.ui.tick_ms, 250);
        assert_eq!(config.ui.colors.get("background").unwrap(), "#000000");
        assert_eq!(config.web.bind, "0.0.0.0:9000");
        assert_eq!(config.web.title, "Chores");
        assert_eq!(config.web.subheader, "This is a simple To-Do app");
        assert!(config.log.file.is_none());
    }

    #[test]
    fn test_load_config_defaults_without_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(None, tmp.path()).unwrap();
        assert_eq!(config.storage.file, PathBuf::from("todos.txt"));
        assert_eq!(config.web.title, "To-Do App");
    }

    #[test]
    fn test_load_config_discovers_file_in_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), sample_config()).unwrap();
        let config = load_config(None, tmp.path()).unwrap();
        assert_eq!(config.web.title, "Chores");
    }

    #[test]
    fn test_load_config_explicit_missing_is_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.toml");
        let err = load_config(Some(&missing), tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[storage\nfile = 3").unwrap();
        let err = read_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
