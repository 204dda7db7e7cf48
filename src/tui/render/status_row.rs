use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode, Panel};
use crate::util::unicode::truncate_to_width;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = if let Some(status) = &app.status {
        let color = if status.is_error {
            app.theme.red
        } else {
            app.theme.text_bright
        };
        Line::from(Span::styled(
            truncate_to_width(&format!(" {}", status.text), width),
            Style::default().fg(color).bg(bg),
        ))
    } else if app.show_key_hints {
        Line::from(Span::styled(
            truncate_to_width(key_hints(app), width),
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    } else {
        Line::from("")
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn key_hints(app: &App) -> &'static str {
    match app.mode {
        Mode::Insert => " Enter add  Esc done",
        Mode::Settings => " Tab next field  Enter save  Esc cancel",
        Mode::Navigate if app.timer.is_full_screen() => {
            " Space start/pause  r reset  f/Esc exit full screen"
        }
        Mode::Navigate => match app.focus {
            Panel::Tasks => " a add  x toggle  D delete  v view  [ ] day  Tab timer  ? help",
            Panel::Timer => " Space start/pause  r reset  1-3 mode  s settings  Tab tasks  ? help",
        },
    }
}
