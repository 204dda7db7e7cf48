use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

use super::plain_char;

/// Insert mode: typing a new task title
pub(super) fn handle_insert(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Esc => app.mode = Mode::Navigate,
        KeyCode::Enter => {
            if let Some(id) = app.submit_input() {
                tracing::debug!(%id, "task added from input line");
            }
        }
        KeyCode::Backspace if ctrl || alt => app.input.delete_word_back(),
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Delete => app.input.delete(),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Home => app.input.home(),
        KeyCode::End => app.input.end(),
        KeyCode::Char('a') if ctrl => app.input.home(),
        KeyCode::Char('e') if ctrl => app.input.end(),
        KeyCode::Char('u') if ctrl => app.input.clear(),
        KeyCode::Char('w') if ctrl => app.input.delete_word_back(),
        _ => {
            if let Some(c) = plain_char(&key) {
                app.input.insert_char(c);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::handle_key;
    use super::super::test_keys::*;
    use super::*;
    use crate::tui::render::test_helpers::test_app;

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_key(app, ch(c));
        }
    }

    #[test]
    fn enter_adds_and_stays_in_insert() {
        let mut app = test_app();
        app.mode = Mode::Insert;
        type_str(&mut app, "Email Sam");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks.tasks()[0].title, "Email Sam");
        assert_eq!(app.input.text(), "");
        assert_eq!(app.mode, Mode::Insert);
    }

    #[test]
    fn blank_enter_adds_nothing() {
        let mut app = test_app();
        app.mode = Mode::Insert;
        type_str(&mut app, "  ");
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn esc_keeps_the_buffer() {
        let mut app = test_app();
        app.mode = Mode::Insert;
        type_str(&mut app, "half");
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.input.text(), "half");
    }

    #[test]
    fn navigation_letters_are_text_in_insert() {
        let mut app = test_app();
        app.mode = Mode::Insert;
        type_str(&mut app, "q1 fr");
        assert!(!app.should_quit);
        assert_eq!(app.input.text(), "q1 fr");
        assert!(!app.timer.is_full_screen());
    }

    #[test]
    fn ctrl_w_and_ctrl_u() {
        let mut app = test_app();
        app.mode = Mode::Insert;
        type_str(&mut app, "buy oat milk");
        handle_key(&mut app, ctrl('w'));
        assert_eq!(app.input.text(), "buy oat ");
        handle_key(&mut app, ctrl('u'));
        assert_eq!(app.input.text(), "");
    }
}
