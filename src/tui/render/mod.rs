pub mod big_digits;
pub mod help_overlay;
pub mod settings_overlay;
pub mod status_row;
pub mod task_panel;
pub mod timer_panel;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function: dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // panels
            Constraint::Length(1), // status row
        ])
        .split(area);

    let timer_area = if app.timer.is_full_screen() {
        timer_panel::render_timer_panel(frame, app, chunks[0]);
        chunks[0]
    } else {
        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[0]);
        let (timer_area, task_area) = if app.timer_left {
            (panels[0], panels[1])
        } else {
            (panels[1], panels[0])
        };
        task_panel::render_task_panel(frame, app, task_area);
        timer_panel::render_timer_panel(frame, app, timer_area);
        timer_area
    };

    // Settings overlay sits over the timer panel
    if let Some(form) = &app.settings_form {
        settings_overlay::render_settings_overlay(frame, app, form, timer_area);
    }

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }

    status_row::render_status_row(frame, app, chunks[1]);
}

/// Create a centered rectangle of the given percentage of the parent
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;
    use crate::tui::app::Panel;

    #[test]
    fn split_view_shows_both_panels() {
        let mut app = app_with_tasks(&["Inbox zero"]);
        let output = render_app(&mut app);
        let first = output.lines().next().unwrap();
        // Tasks on the left, timer on the right by default
        assert!(first.find("Tasks").unwrap() < first.find("Timer").unwrap());
        assert!(output.contains("[ ] Inbox zero"));
        assert!(output.contains("25:00") || output.contains("████"));
    }

    #[test]
    fn timer_can_sit_on_the_left() {
        let mut app = test_app();
        app.timer.toggle_draggable();
        app.move_timer_panel(true);
        let output = render_app(&mut app);
        let first = output.lines().next().unwrap();
        assert!(first.find("Timer").unwrap() < first.find("Tasks").unwrap());
    }

    #[test]
    fn full_screen_hides_tasks() {
        let mut app = app_with_tasks(&["Inbox zero"]);
        app.toggle_full_screen();
        let output = render_app(&mut app);
        assert!(!output.contains("Tasks"));
        assert!(!output.contains("Inbox zero"));
        assert!(output.contains("████"));
        assert_eq!(app.focus, Panel::Timer);
    }

    #[test]
    fn overlays_render_on_top() {
        let mut app = test_app();
        app.open_settings();
        assert!(render_app(&mut app).contains("Settings"));
        app.close_settings(false);
        app.show_help = true;
        assert!(render_app(&mut app).contains("Key Bindings"));
    }
}
