use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use super::centered_rect;
use crate::tui::app::App;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(70, 90, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(" Timer", header_style)));
    for (key, desc) in [
        (" Space/Enter", "Start / pause (timer panel)"),
        (" r", "Reset to the mode's duration"),
        (" 1 2 3", "Focus / short break / long break"),
        (" ! @ # $", "Add preset time while paused"),
        (" f", "Toggle full screen"),
        (" s", "Duration settings"),
        (" d", "Toggle drag mode (h/l moves the timer)"),
    ] {
        add_binding(&mut lines, key, desc, key_style, desc_style);
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Tasks", header_style)));
    for (key, desc) in [
        (" \u{2191}\u{2193}/jk", "Move cursor"),
        (" a/i", "Add a task"),
        (" Space/x", "Toggle done"),
        (" Del/D", "Delete task"),
        (" p c v", "Pending / completed / switch view"),
        (" [ ] \u{2190}\u{2192}", "Previous / next day"),
        (" t", "Jump to today"),
    ] {
        add_binding(&mut lines, key, desc, key_style, desc_style);
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" General", header_style)));
    for (key, desc) in [
        (" Tab", "Switch panel"),
        (" ?", "Toggle this help"),
        (" q", "Quit"),
    ] {
        add_binding(&mut lines, key, desc, key_style, desc_style);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .title(Span::styled(" Key Bindings ", header_style))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let key_width = 16;
    let padded_key = format!("{:<width$}", key, width = key_width);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn help_lists_timer_and_task_keys() {
        let app = test_app();
        let output = render_to_string(TERM_W, 30, |frame, area| {
            render_help_overlay(frame, &app, area);
        });
        assert!(output.contains("Key Bindings"));
        assert!(output.contains("Toggle full screen"));
        assert!(output.contains("Previous / next day"));
        assert!(output.contains("Quit"));
    }
}
