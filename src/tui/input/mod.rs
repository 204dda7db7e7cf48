mod common;
mod edit;
mod navigate;
mod settings;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

// Import all submodule functions into this module's namespace
// so that submodules can access cross-module functions via `use super::*;`
#[allow(unused_imports)]
use common::*;
#[allow(unused_imports)]
use edit::*;
#[allow(unused_imports)]
use navigate::*;
#[allow(unused_imports)]
use settings::*;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    let key = normalize_key(key);

    // Ctrl+C / Ctrl+Q quit from any mode
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        app.should_quit = true;
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Insert => handle_insert(app, key),
        Mode::Settings => handle_settings(app, key),
    }
}

/// Handle bracketed paste. Only text-entry modes accept it.
pub fn handle_paste(app: &mut App, text: &str) {
    match app.mode {
        Mode::Insert => app.input.insert_str(text),
        Mode::Settings => {
            if let Some(form) = app.settings_form.as_mut() {
                for c in text.chars() {
                    form.push_char(c);
                }
            }
        }
        Mode::Navigate => {}
    }
}
