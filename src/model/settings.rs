use super::timer::{Durations, TimerMode};

/// Longest configurable countdown, in minutes (one day)
pub const MAX_MINUTES: u32 = 24 * 60;

/// Widest accepted field input, in digits
const MAX_DIGITS: usize = 4;

/// Edit buffer behind the settings overlay: one minutes field per mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    fields: [String; 3],
    selected: usize,
    original: Durations,
}

impl SettingsForm {
    pub fn from_durations(durations: Durations) -> Self {
        SettingsForm {
            fields: TimerMode::ALL.map(|mode| durations.minutes(mode).to_string()),
            selected: 0,
            original: durations,
        }
    }

    pub fn selected_mode(&self) -> TimerMode {
        TimerMode::ALL[self.selected]
    }

    pub fn field(&self, mode: TimerMode) -> &str {
        &self.fields[mode_index(mode)]
    }

    pub fn next_field(&mut self) {
        self.selected = (self.selected + 1) % self.fields.len();
    }

    pub fn prev_field(&mut self) {
        self.selected = (self.selected + self.fields.len() - 1) % self.fields.len();
    }

    /// Append a digit to the selected field. Other characters are refused.
    pub fn push_char(&mut self, c: char) -> bool {
        let field = &mut self.fields[self.selected];
        if !c.is_ascii_digit() || field.len() >= MAX_DIGITS {
            return false;
        }
        field.push(c);
        true
    }

    pub fn backspace(&mut self) {
        self.fields[self.selected].pop();
    }

    /// Durations described by the form. A field that is empty, zero, or over
    /// a day keeps the duration the form was opened with.
    pub fn save(&self) -> Durations {
        let mut durations = self.original;
        for mode in TimerMode::ALL {
            if let Some(minutes) = parse_minutes(self.field(mode)) {
                durations.set(mode, minutes * 60);
            }
        }
        durations
    }
}

fn mode_index(mode: TimerMode) -> usize {
    match mode {
        TimerMode::Focus => 0,
        TimerMode::ShortBreak => 1,
        TimerMode::LongBreak => 2,
    }
}

fn parse_minutes(text: &str) -> Option<u32> {
    let minutes: u32 = text.trim().parse().ok()?;
    (1..=MAX_MINUTES).contains(&minutes).then_some(minutes)
}
