use crossterm::event::{KeyCode, KeyEvent};

use crate::model::{DateStep, TaskView, TimerMode};
use crate::tui::app::{App, Mode, Panel};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Any keypress dismisses the previous status message
    app.status = None;

    // Help overlay intercepts ? and Esc
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')
        ) {
            app.show_help = false;
        }
        return;
    }

    // Global keys
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            return;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            if !app.timer.is_full_screen() {
                app.focus = app.focus.other();
            }
            return;
        }
        KeyCode::Esc => {
            if app.timer.is_full_screen() {
                app.toggle_full_screen();
            }
            return;
        }
        _ => {}
    }

    if handle_timer_shortcut(app, key) {
        return;
    }

    match app.focus {
        Panel::Timer => handle_timer_panel(app, key),
        Panel::Tasks => handle_task_panel(app, key),
    }
}

/// Timer keys that work regardless of the focused panel.
/// Returns true when the key was consumed.
fn handle_timer_shortcut(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('r') => app.timer.reset(),
        KeyCode::Char('1') => app.timer.select_mode(TimerMode::Focus),
        KeyCode::Char('2') => app.timer.select_mode(TimerMode::ShortBreak),
        KeyCode::Char('3') => app.timer.select_mode(TimerMode::LongBreak),
        KeyCode::Char('!') => app.add_preset_time(0),
        KeyCode::Char('@') => app.add_preset_time(1),
        KeyCode::Char('#') => app.add_preset_time(2),
        KeyCode::Char('$') => app.add_preset_time(3),
        KeyCode::Char('f') => app.toggle_full_screen(),
        KeyCode::Char('s') => app.open_settings(),
        KeyCode::Char('d') => {
            app.timer.toggle_draggable();
            if app.timer.is_draggable() {
                app.set_status("Drag mode: h/l moves the timer panel");
            }
        }
        _ => return false,
    }
    true
}

fn handle_timer_panel(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_run_pause(),
        KeyCode::Char('h') | KeyCode::Left => app.move_timer_panel(true),
        KeyCode::Char('l') | KeyCode::Right => app.move_timer_panel(false),
        _ => {}
    }
}

fn handle_task_panel(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_task_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_task_cursor(-1),
        KeyCode::Char('g') | KeyCode::Home => app.task_cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.task_cursor = app.tasks.visible_count().saturating_sub(1);
        }
        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Char('n') => {
            app.mode = Mode::Insert;
        }
        KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter => app.toggle_selected_task(),
        KeyCode::Delete | KeyCode::Char('D') => app.delete_selected_task(),
        KeyCode::Char('p') => app.set_task_view(TaskView::Pending),
        KeyCode::Char('c') => app.set_task_view(TaskView::Completed),
        KeyCode::Char('v') => {
            let other = app.tasks.view().other();
            app.set_task_view(other);
        }
        KeyCode::Char('[') | KeyCode::Char('h') | KeyCode::Left => {
            app.tasks.navigate_date(DateStep::Prev);
        }
        KeyCode::Char(']') | KeyCode::Char('l') | KeyCode::Right => {
            app.tasks.navigate_date(DateStep::Next);
        }
        KeyCode::Char('t') => {
            app.tasks.jump_to_date(chrono::Local::now().date_naive());
        }
        _ => {}
    }
}
