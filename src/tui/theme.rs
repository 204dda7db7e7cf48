use ratatui::style::Color;

use crate::model::{TimerMode, UiConfig};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    /// Accent for the focus mode
    pub focus: Color,
    /// Accent for both break modes
    pub break_color: Color,
    /// Completed task text
    pub done: Color,
    pub selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            red: Color::Rgb(0xFF, 0x44, 0x44),
            focus: Color::Rgb(0xFB, 0x41, 0x96),
            break_color: Color::Rgb(0x44, 0xDD, 0xFF),
            done: Color::Rgb(0x5A, 0x56, 0x8C),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(key = %key, value = %value, "ignoring unparsable color");
                continue;
            };
            let slot = match key.as_str() {
                "background" => &mut theme.background,
                "text" => &mut theme.text,
                "text_bright" => &mut theme.text_bright,
                "highlight" => &mut theme.highlight,
                "dim" => &mut theme.dim,
                "red" => &mut theme.red,
                "focus" => &mut theme.focus,
                "break" => &mut theme.break_color,
                "done" => &mut theme.done,
                "selection_bg" => &mut theme.selection_bg,
                _ => continue,
            };
            *slot = color;
        }

        theme
    }

    /// Accent color for a timer mode
    pub fn mode_color(&self, mode: TimerMode) -> Color {
        if mode.is_break() {
            self.break_color
        } else {
            self.focus
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#FF4444"),
            Some(Color::Rgb(0xFF, 0x44, 0x44))
        );
        assert_eq!(
            parse_hex_color("#0c001b"),
            Some(Color::Rgb(0x0C, 0x00, 0x1B))
        );
        assert_eq!(parse_hex_color("FF4444"), None); // missing #
        assert_eq!(parse_hex_color("#FF44"), None); // too short
        assert_eq!(parse_hex_color("#ZZZZZZ"), None); // invalid hex
        assert_eq!(parse_hex_color("#ééé"), None); // non-ascii
    }

    #[test]
    fn test_from_config_overrides() {
        let mut ui = UiConfig::default();
        ui.colors.insert("background".into(), "#000000".into());
        ui.colors.insert("break".into(), "#112233".into());
        ui.colors.insert("unknown".into(), "#445566".into());
        ui.colors.insert("focus".into(), "red".into());

        let theme = Theme::from_config(&ui);
        assert_eq!(theme.background, Color::Rgb(0, 0, 0));
        assert_eq!(theme.break_color, Color::Rgb(0x11, 0x22, 0x33));
        // Unparsable values keep the default
        assert_eq!(theme.focus, Theme::default().focus);
        assert_eq!(theme.text, Color::Rgb(0xB0, 0xAA, 0xFF));
    }

    #[test]
    fn test_mode_color() {
        let theme = Theme::default();
        assert_eq!(theme.mode_color(TimerMode::Focus), theme.focus);
        assert_eq!(theme.mode_color(TimerMode::ShortBreak), theme.break_color);
        assert_eq!(theme.mode_color(TimerMode::LongBreak), theme.break_color);
    }
}
