use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::io::config_io::ConfigError;
use crate::model::config::LogConfig;

/// Environment variable holding an EnvFilter directive; wins over `[log].level`
pub const LOG_ENV: &str = "POMODESK_LOG";

const DEFAULT_LEVEL: &str = "info";

/// Build the filter: `POMODESK_LOG`, then the config level, then "info".
/// An unparsable directive falls back to the default.
pub fn build_filter(config: &LogConfig) -> EnvFilter {
    let directive = std::env::var(LOG_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| config.level.clone())
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string());
    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Install the global subscriber. The TUI owns the terminal, so events go
/// to `[log].file` when set and are discarded otherwise.
///
/// Returns false when a subscriber was already installed; that subscriber
/// keeps receiving events and `[log].file` is not used.
pub fn init_logging(config: &LogConfig) -> Result<bool, ConfigError> {
    let filter = build_filter(config);
    match &config.file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| ConfigError::LogFileError {
                    path: path.clone(),
                    source: e,
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| ConfigError::LogFileError {
                    path: path.clone(),
                    source: e,
                })?;
            let result = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
            Ok(report_install(result, Some(path)))
        }
        None => {
            let result = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::sink)
                .try_init();
            Ok(report_install(result, None))
        }
    }
}

fn report_install(
    result: Result<(), Box<dyn std::error::Error + Send + Sync>>,
    file: Option<&std::path::Path>,
) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            // Reaches whichever subscriber is already installed
            tracing::debug!(
                error = %e,
                log_file = ?file,
                "subscriber already installed, keeping it"
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn filter_uses_config_level() {
        // Only meaningful when the override variable is unset
        if std::env::var(LOG_ENV).is_ok() {
            return;
        }
        let config = LogConfig {
            level: Some("debug".into()),
            file: None,
        };
        assert_eq!(build_filter(&config).to_string(), "debug");
    }

    #[test]
    fn bad_directive_falls_back() {
        if std::env::var(LOG_ENV).is_ok() {
            return;
        }
        let config = LogConfig {
            level: Some("pomodesk=loud".into()),
            file: None,
        };
        assert_eq!(build_filter(&config).to_string(), "info");
    }

    #[test]
    fn log_file_parent_is_created() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("logs/pomodesk.log");
        let config = LogConfig {
            level: Some("info".into()),
            file: Some(path.clone()),
        };
        init_logging(&config).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn second_install_reports_existing_subscriber() {
        let config = LogConfig::default();
        // The first call may already lose to another test in this process
        let _ = init_logging(&config).unwrap();
        assert!(!init_logging(&config).unwrap());
    }
}
