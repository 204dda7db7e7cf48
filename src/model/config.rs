use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::timer::Durations;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Default: see src/templates/config.toml
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u32,
    /// Default: see src/templates/config.toml
    #[serde(default = "default_short_break_minutes")]
    pub short_break_minutes: u32,
    /// Default: see src/templates/config.toml
    #[serde(default = "default_long_break_minutes")]
    pub long_break_minutes: u32,
    /// Minutes added by the add-time keys, in key order
    #[serde(default = "default_add_time_presets")]
    pub add_time_presets: Vec<i64>,
}

impl Default for TimerConfig {
    fn default() -> Self {
        TimerConfig {
            focus_minutes: default_focus_minutes(),
            short_break_minutes: default_short_break_minutes(),
            long_break_minutes: default_long_break_minutes(),
            add_time_presets: default_add_time_presets(),
        }
    }
}

impl TimerConfig {
    pub fn durations(&self) -> Durations {
        Durations::from_minutes(
            self.focus_minutes,
            self.short_break_minutes,
            self.long_break_minutes,
        )
    }
}

fn default_focus_minutes() -> u32 {
    25
}

fn default_short_break_minutes() -> u32 {
    5
}

fn default_long_break_minutes() -> u32 {
    15
}

fn default_add_time_presets() -> Vec<i64> {
    vec![25, 10, 5, 1]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Key hints in the status row
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Theme overrides, `name = "#RRGGBB"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Kitty keyboard protocol: true = force on, false = force off, absent = on (default).
    /// Disable if your terminal has issues with enhanced key reporting.
    #[serde(default)]
    pub kitty_keyboard: Option<bool>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
            kitty_keyboard: None,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// EnvFilter directive, e.g. "info" or "pomodesk=debug"
    #[serde(default)]
    pub level: Option<String>,
    /// Log destination. No file means log events are discarded.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.timer.focus_minutes, 25);
        assert_eq!(config.timer.short_break_minutes, 5);
        assert_eq!(config.timer.long_break_minutes, 15);
        assert_eq!(config.timer.add_time_presets, vec![25, 10, 5, 1]);
        assert!(config.ui.show_key_hints);
        assert!(config.ui.kitty_keyboard.is_none());
        assert!(config.log.file.is_none());
    }

    #[test]
    fn partial_timer_section() {
        let config: Config = toml::from_str("[timer]\nfocus_minutes = 50\n").unwrap();
        assert_eq!(config.timer.focus_minutes, 50);
        assert_eq!(config.timer.short_break_minutes, 5);
        assert_eq!(config.timer.durations(), Durations::from_minutes(50, 5, 15));
    }

    #[test]
    fn ui_and_log_sections() {
        let text = r##"
[ui]
show_key_hints = false
kitty_keyboard = false
colors = { background = "#000000" }

[log]
level = "debug"
file = "/tmp/pomodesk.log"
"##;
        let config: Config = toml::from_str(text).unwrap();
        assert!(!config.ui.show_key_hints);
        assert_eq!(config.ui.kitty_keyboard, Some(false));
        assert_eq!(config.ui.colors.get("background").map(String::as_str), Some("#000000"));
        assert_eq!(config.log.level.as_deref(), Some("debug"));
        assert_eq!(config.log.file, Some(PathBuf::from("/tmp/pomodesk.log")));
    }
}
