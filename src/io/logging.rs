use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::model::config::LogConfig;

/// Where log output goes when no log file is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    Stderr,
    /// Drop output (the TUI owns the terminal).
    Silent,
}

/// Build the filter: RUST_LOG wins, then the config, then `default`.
pub fn build_filter(config: &LogConfig, default: &str) -> EnvFilter {
    let directive = std::env::var("RUST_LOG")
        .ok()
        .or_else(|| config.filter.clone())
        .unwrap_or_else(|| default.to_string());
    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global tracing subscriber.
pub fn init(config: &LogConfig, default_filter: &str, fallback: Fallback) -> std::io::Result<()> {
    let filter = build_filter(config, default_filter);

    if let Some(path) = config.file.as_deref() {
        let file = open_log_file(path)?;
        let result = tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .try_init();
        report_already_set(result);
        return Ok(());
    }

    match fallback {
        Fallback::Stderr => {
            let result = tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init();
            report_already_set(result);
        }
        Fallback::Silent => {}
    }
    Ok(())
}

/// A second install keeps the first subscriber; note it through that one.
fn report_already_set(result: Result<(), TryInitError>) {
    if let Err(e) = result {
        tracing::debug!("tracing subscriber already installed: {}", e);
    }
}

fn open_log_file(path: &Path) -> std::io::Result<std::fs::File> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_build_filter_falls_back_on_bad_directive() {
        let config = LogConfig {
            file: None,
            filter: Some("tally=[[[".into()),
        };
        // Must not panic; an invalid directive falls back to the default.
        let filter = build_filter(&config, "tally=warn");
        let _ = format!("{}", filter);
    }

    #[test]
    fn test_second_init_is_not_an_error() {
        let config = LogConfig::default();
        init(&config, "tally=warn", Fallback::Stderr).unwrap();
        init(&config, "tally=warn", Fallback::Stderr).unwrap();
    }

    #[test]
    fn test_open_log_file_creates_dirs() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("logs/tally.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
