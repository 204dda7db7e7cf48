use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::config::Config;
use crate::model::settings::MAX_MINUTES;
use crate::model::timer::{Durations, TimerMode};

/// Commented default written by `pomo config init`
pub const DEFAULT_CONFIG: &str = include_str!("../templates/config.toml");

/// Error type for config I/O
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("could not parse {path} for editing: {source}")]
    EditError {
        path: PathBuf,
        source: toml_edit::TomlError,
    },
    #[error("invalid {key} = {value}: expected 1-{max} minutes", max = MAX_MINUTES)]
    InvalidDuration { key: &'static str, value: u32 },
    #[error("{0} already exists (use --force to overwrite)")]
    AlreadyExists(PathBuf),
    #[error("could not open log file {path}: {source}")]
    LogFileError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Default config location, respecting XDG_CONFIG_HOME
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".config"));
    config_dir.join("pomodesk").join("config.toml")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// A loaded config file: the parsed config plus the toml_edit document used
/// for format-preserving writes.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub config: Config,
    /// Whether the file was present on disk
    pub exists: bool,
    doc: toml_edit::DocumentMut,
}

impl ConfigFile {
    /// Load `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(ConfigFile {
                path: path.to_path_buf(),
                config: Config::default(),
                exists: false,
                doc: toml_edit::DocumentMut::new(),
            });
        }
        let (config, doc) = read_config(path)?;
        Ok(ConfigFile {
            path: path.to_path_buf(),
            config,
            exists: true,
            doc,
        })
    }

    /// Record new timer durations in `[timer]` and write the file back,
    /// leaving the rest of the document as it was.
    pub fn save_durations(&mut self, durations: Durations) -> Result<(), ConfigError> {
        set_timer_durations(&mut self.doc, &durations);
        write_config(&self.path, &self.doc)?;
        self.config.timer.focus_minutes = durations.minutes(TimerMode::Focus);
        self.config.timer.short_break_minutes = durations.minutes(TimerMode::ShortBreak);
        self.config.timer.long_break_minutes = durations.minutes(TimerMode::LongBreak);
        self.exists = true;
        tracing::info!(path = %self.path.display(), "timer durations saved");
        Ok(())
    }
}

/// Read and validate a config file, returning both the parsed config and the
/// raw toml_edit document.
pub fn read_config(path: &Path) -> Result<(Config, toml_edit::DocumentMut), ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    validate(&config)?;
    let doc: toml_edit::DocumentMut = text.parse().map_err(|e| ConfigError::EditError {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok((config, doc))
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    let timer = &config.timer;
    for (key, value) in [
        ("timer.focus_minutes", timer.focus_minutes),
        ("timer.short_break_minutes", timer.short_break_minutes),
        ("timer.long_break_minutes", timer.long_break_minutes),
    ] {
        if value == 0 || value > MAX_MINUTES {
            return Err(ConfigError::InvalidDuration { key, value });
        }
    }
    Ok(())
}

/// Set the three duration keys in the `[timer]` table
pub fn set_timer_durations(doc: &mut toml_edit::DocumentMut, durations: &Durations) {
    if !doc.get("timer").is_some_and(|item| item.is_table_like()) {
        doc["timer"] = toml_edit::Item::Table(toml_edit::Table::new());
    }
    let timer = &mut doc["timer"];
    timer["focus_minutes"] = toml_edit::value(i64::from(durations.minutes(TimerMode::Focus)));
    timer["short_break_minutes"] =
        toml_edit::value(i64::from(durations.minutes(TimerMode::ShortBreak)));
    timer["long_break_minutes"] =
        toml_edit::value(i64::from(durations.minutes(TimerMode::LongBreak)));
}

/// Write the document to `path` atomically, creating parent directories.
pub fn write_config(path: &Path, doc: &toml_edit::DocumentMut) -> Result<(), ConfigError> {
    write_atomic(path, doc.to_string().as_bytes())
}

/// Write the commented default config. Refuses to overwrite unless `force`.
pub fn init_config(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }
    write_atomic(path, DEFAULT_CONFIG.as_bytes())
}

fn write_atomic(path: &Path, content: &[u8]) -> Result<(), ConfigError> {
    let write_err = |source| ConfigError::WriteError {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(write_err)?;
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(content).map_err(write_err)?;
    tmp.flush().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_config() -> &'static str {
        r##"# my settings
[timer]
focus_minutes = 30 # deep work
short_break_minutes = 5
long_break_minutes = 20

[ui]
colors = { focus = "#FF0000" }
"##
    }

    #[test]
    fn missing_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let file = ConfigFile::load(&tmp.path().join("config.toml")).unwrap();
        assert!(!file.exists);
        assert_eq!(file.config.timer.durations(), Durations::default());
    }

    #[test]
    fn load_existing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, sample_config()).unwrap();

        let file = ConfigFile::load(&path).unwrap();
        assert!(file.exists);
        assert_eq!(file.config.timer.durations(), Durations::from_minutes(30, 5, 20));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[timer\nfocus_minutes = ").unwrap();
        let err = ConfigFile::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn zero_duration_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[timer]\nshort_break_minutes = 0\n").unwrap();
        let err = ConfigFile::load(&path).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidDuration {
                key: "timer.short_break_minutes",
                value: 0
            }
        ));
        assert_eq!(
            err.to_string(),
            "invalid timer.short_break_minutes = 0: expected 1-1440 minutes"
        );
    }

    #[test]
    fn save_preserves_comments_and_other_sections() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, sample_config()).unwrap();

        let mut file = ConfigFile::load(&path).unwrap();
        file.save_durations(Durations::from_minutes(45, 10, 20)).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# my settings\n"));
        assert!(written.contains("focus_minutes = 45"));
        assert!(written.contains("short_break_minutes = 10"));
        assert!(written.contains("colors = { focus = \"#FF0000\" }"));
        assert_eq!(file.config.timer.focus_minutes, 45);

        let reread = ConfigFile::load(&path).unwrap();
        assert_eq!(reread.config.timer.durations(), Durations::from_minutes(45, 10, 20));
    }

    #[test]
    fn save_creates_missing_file_and_dirs() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested/dir/config.toml");

        let mut file = ConfigFile::load(&path).unwrap();
        file.save_durations(Durations::from_minutes(20, 4, 12)).unwrap();
        assert!(file.exists);

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "[timer]\nfocus_minutes = 20\nshort_break_minutes = 4\nlong_break_minutes = 12\n"
        );
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        init_config(&path, false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);

        fs::write(&path, "[timer]\nfocus_minutes = 40\n").unwrap();
        assert!(matches!(
            init_config(&path, false),
            Err(ConfigError::AlreadyExists(_))
        ));
        init_config(&path, true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }

    #[test]
    fn default_template_parses_to_defaults() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.timer.durations(), Durations::default());
        assert_eq!(config.timer.add_time_presets, vec![25, 10, 5, 1]);
        assert_eq!(config.log.level.as_deref(), Some("info"));
        assert!(config.log.file.is_none());
    }
}
