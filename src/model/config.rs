use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Configuration from tally.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backing file, relative to the working directory unless absolute.
    #[serde(default = "default_file")]
    pub file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            file: default_file(),
        }
    }
}

fn default_file() -> PathBuf {
    PathBuf::from("todos.txt")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// chrono format for the clock in the top-left corner
    #[serde(default = "default_clock_format")]
    pub clock_format: String,
    /// chrono format for the date in the top-right corner
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Event poll interval in milliseconds; also the clock tick.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            clock_format: default_clock_format(),
            date_format: default_date_format(),
            tick_ms: default_tick_ms(),
            colors: HashMap::new(),
        }
    }
}

fn default_clock_format() -> String {
    "%H:%M".to_string()
}

fn default_date_format() -> String {
    "%a, %b %-d, %Y".to_string()
}

fn default_tick_ms() -> u64 {
    250
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_subheader")]
    pub subheader: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        WebConfig {
            bind: default_bind(),
            title: default_title(),
            subheader: default_subheader(),
            tagline: default_tagline(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:8501".to_string()
}

fn default_title() -> String {
    "To-Do App".to_string()
}

fn default_subheader() -> String {
    "This is a simple To-Do app".to_string()
}

fn default_tagline() -> String {
    "This app is to increase your productivity.".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// Append log output to this file instead of stderr.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// EnvFilter directive used when RUST_LOG is unset.
    #[serde(default)]
    pub filter: Option<String>,
}
