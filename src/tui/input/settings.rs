use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

use super::plain_char;

/// Settings overlay: edit the three duration fields
pub(super) fn handle_settings(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_settings(false),
        KeyCode::Enter => app.close_settings(true),
        _ => {
            let Some(form) = app.settings_form.as_mut() else {
                return;
            };
            match key.code {
                KeyCode::Tab | KeyCode::Down => form.next_field(),
                KeyCode::BackTab | KeyCode::Up => form.prev_field(),
                KeyCode::Backspace => form.backspace(),
                _ => {
                    if let Some(c) = plain_char(&key) {
                        form.push_char(c);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::handle_key;
    use super::super::test_keys::*;
    use crate::model::{Durations, TimerMode};
    use crate::tui::app::Mode;
    use crate::tui::render::test_helpers::test_app;
    use crossterm::event::KeyCode;

    #[test]
    fn edit_long_break_and_save() {
        let mut app = test_app();
        handle_key(&mut app, ch('s'));
        assert_eq!(app.mode, Mode::Settings);

        handle_key(&mut app, key(KeyCode::Up));
        let form = app.settings_form.as_ref().unwrap();
        assert_eq!(form.selected_mode(), TimerMode::LongBreak);

        handle_key(&mut app, key(KeyCode::Backspace));
        handle_key(&mut app, key(KeyCode::Backspace));
        handle_key(&mut app, ch('2'));
        handle_key(&mut app, ch('0'));
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.timer.durations(), Durations::from_minutes(25, 5, 20));
    }

    #[test]
    fn letters_are_ignored_and_esc_cancels() {
        let mut app = test_app();
        handle_key(&mut app, ch('s'));
        handle_key(&mut app, ch('q'));
        assert!(!app.should_quit);
        let form = app.settings_form.as_ref().unwrap();
        assert_eq!(form.field(TimerMode::Focus), "25");
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.settings_form.is_none());
    }
}
