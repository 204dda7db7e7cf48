use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::model::{MAX_MINUTES, SettingsForm, TimerMode};
use crate::tui::app::App;

const WIDTH: u16 = 40;
const HEIGHT: u16 = 9;

/// Render the duration form over the timer panel
pub fn render_settings_overlay(frame: &mut Frame, app: &App, form: &SettingsForm, area: Rect) {
    let bg = app.theme.background;
    let width = WIDTH.min(area.width);
    let height = HEIGHT.min(area.height);
    let overlay_area = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };
    frame.render_widget(Clear, overlay_area);

    let label_style = Style::default().fg(app.theme.text).bg(bg);
    let mut lines: Vec<Line> = vec![Line::from("")];
    for mode in TimerMode::ALL {
        let selected = form.selected_mode() == mode;
        let value_style = if selected {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };
        let marker = if selected { "\u{25B8} " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(
                marker,
                Style::default().fg(app.theme.mode_color(mode)).bg(bg),
            ),
            Span::styled(format!("{:<13}", mode.label()), label_style),
            Span::styled(format!(" {:>4} ", form.field(mode)), value_style),
            Span::styled(" min", label_style),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  1-{} min  Enter save  Esc cancel", MAX_MINUTES),
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .title(Span::styled(
            " Settings ",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), overlay_area);
}
