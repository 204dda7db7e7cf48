use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

use super::big_digits::{GLYPH_HEIGHT, big_rows, big_width};
use crate::model::{TimerMode, format_clock};
use crate::tui::app::{App, Panel};

/// Render the countdown: mode tabs, clock, progress, presets and run state
pub fn render_timer_panel(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let accent = app.theme.mode_color(app.timer.mode());
    let focused = app.focus == Panel::Timer || app.timer.is_full_screen();
    let border_color = if focused { accent } else { app.theme.dim };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(if app.timer.is_draggable() {
            BorderType::Double
        } else {
            BorderType::Rounded
        })
        .border_style(Style::default().fg(border_color).bg(bg))
        .title(Span::styled(
            " Timer ",
            Style::default().fg(app.theme.text_bright).bg(bg),
        ))
        .style(Style::default().bg(bg));
    if app.timer.is_draggable() {
        block = block.title_bottom(Line::from(Span::styled(
            " drag: h/l ",
            Style::default().fg(accent).bg(bg),
        )));
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let clock = format_clock(app.timer.seconds_remaining());
    let big = inner.width >= big_width(&clock) && inner.height >= GLYPH_HEIGHT + 6;
    let clock_height = if big { GLYPH_HEIGHT } else { 1 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .flex(Flex::Center)
        .constraints([
            Constraint::Length(1),            // mode tabs
            Constraint::Length(1),            // spacer
            Constraint::Length(clock_height), // clock
            Constraint::Length(1),            // spacer
            Constraint::Length(1),            // progress
            Constraint::Length(1),            // presets
            Constraint::Length(1),            // run state
        ])
        .split(inner);

    render_mode_tabs(frame, app, chunks[0]);
    render_clock(frame, app, chunks[2], &clock, big);
    render_progress(frame, app, chunks[4]);
    render_presets(frame, app, chunks[5]);
    render_run_state(frame, app, chunks[6]);
}

fn render_mode_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut spans: Vec<Span> = Vec::new();
    for (i, mode) in TimerMode::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ", Style::default().bg(bg)));
        }
        let style = if app.timer.mode() == mode {
            Style::default()
                .fg(bg)
                .bg(app.theme.mode_color(mode))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        spans.push(Span::styled(format!(" {} ", mode.label()), style));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn render_clock(frame: &mut Frame, app: &App, area: Rect, clock: &str, big: bool) {
    let style = Style::default()
        .fg(app.theme.mode_color(app.timer.mode()))
        .bg(app.theme.background)
        .add_modifier(Modifier::BOLD);
    let lines: Vec<Line> = if big {
        big_rows(clock)
            .into_iter()
            .map(|row| Line::from(Span::styled(row, style)))
            .collect()
    } else {
        vec![Line::from(Span::styled(clock.to_string(), style))]
    };
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_progress(frame: &mut Frame, app: &App, area: Rect) {
    let percent = app.timer.progress_percent();
    let gauge_area = Rect {
        x: area.x + 2,
        width: area.width.saturating_sub(4),
        ..area
    };
    let gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(app.theme.mode_color(app.timer.mode()))
                .bg(app.theme.selection_bg),
        )
        .ratio((percent / 100.0).clamp(0.0, 1.0))
        .label(Span::styled(
            format!("{:.0}%", percent),
            Style::default().fg(app.theme.text_bright),
        ))
        .use_unicode(true);
    frame.render_widget(gauge, gauge_area);
}

fn render_presets(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    // Adding time is only possible while paused
    let color = if app.timer.is_running() {
        app.theme.selection_bg
    } else {
        app.theme.text
    };
    let mut spans: Vec<Span> = Vec::new();
    for (i, minutes) in app.add_time_presets.iter().take(4).enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default().bg(bg)));
        }
        spans.push(Span::styled(
            format!("{:+}m", minutes),
            Style::default().fg(color).bg(bg),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn render_run_state(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let timer = &app.timer;
    let (action, state) = if timer.is_running() {
        ("Pause", "running")
    } else if timer.seconds_remaining() == 0 {
        ("Start", "time is up")
    } else if timer.seconds_remaining() < timer.initial_seconds() {
        ("Start", "paused")
    } else {
        ("Start", "ready")
    };
    let button_bg = if timer.seconds_remaining() == 0 {
        app.theme.dim
    } else {
        app.theme.mode_color(timer.mode())
    };
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", action),
            Style::default()
                .fg(bg)
                .bg(button_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", state),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
