//! Diagnostic logging setup.
//!
//! The terminal UI owns stdout, so interactive runs log to a file; the
//! one-shot print mode logs to stderr.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

/// Default log file: `<cache dir>/amphibians/amphibians.log`.
pub fn default_log_path() -> PathBuf {
    let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
    cache_dir.join("amphibians").join("amphibians.log")
}

impl LogTarget {
    /// File target from config, falling back to [`default_log_path`].
    pub fn from_config(config: &LoggingConfig) -> Self {
        LogTarget::File(config.file.clone().unwrap_or_else(default_log_path))
    }
}

/// RUST_LOG wins over the configured level.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

pub fn init_tracing(level: &str, target: &LogTarget) -> io::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(UtcTime::rfc_3339());

    let result = match target {
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            builder.with_writer(Mutex::new(file)).try_init()
        }
        LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
    };

    result.map_err(|e| io::Error::other(e.to_string()))
}

fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_ends_with_log_name() {
        assert!(default_log_path().ends_with("amphibians/amphibians.log"));
    }

    #[test]
    fn config_file_overrides_default() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            file: Some(PathBuf::from("/tmp/custom.log")),
        };
        assert_eq!(
            LogTarget::from_config(&config),
            LogTarget::File(PathBuf::from("/tmp/custom.log"))
        );
    }

    #[test]
    fn open_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("app.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
