use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::model::TaskView;
use crate::tui::app::{App, Mode, Panel};
use crate::util::unicode::{display_width, skip_width, truncate_to_width};

const PLACEHOLDER: &str = "Add a new task...";

/// Render the task checklist: view tabs, date, input line, rows and counts
pub fn render_task_panel(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.focus == Panel::Tasks;
    let border_color = if focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color).bg(bg))
        .title(Span::styled(
            " Tasks ",
            Style::default().fg(app.theme.text_bright).bg(bg),
        ))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // view tabs + date
            Constraint::Length(1), // spacer
            Constraint::Length(1), // input line
            Constraint::Length(1), // spacer
            Constraint::Min(1),    // task rows
            Constraint::Length(1), // footer counts
        ])
        .split(inner);

    render_header(frame, app, chunks[0]);
    render_input(frame, app, chunks[2]);
    render_rows(frame, app, chunks[4]);
    render_footer(frame, app, chunks[5]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut spans: Vec<Span> = Vec::new();
    for view in [TaskView::Pending, TaskView::Completed] {
        let count = match view {
            TaskView::Pending => app.tasks.pending_count(),
            TaskView::Completed => app.tasks.completed_count(),
        };
        let style = if app.tasks.view() == view {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        spans.push(Span::styled(
            format!(" {} ({}) ", view.label(), count),
            style,
        ));
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }

    let date = format!(
        "\u{2039} {} \u{203A}",
        app.tasks.current_date().format("%b %-d")
    );
    let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    let date_width = display_width(&date);
    let width = area.width as usize;
    if used + date_width < width {
        spans.push(Span::styled(
            " ".repeat(width - used - date_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(date, Style::default().fg(app.theme.text).bg(bg)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let editing = app.mode == Mode::Insert;
    let prefix_color = if editing {
        app.theme.highlight
    } else {
        app.theme.dim
    };
    let prefix = Span::styled("+ ", Style::default().fg(prefix_color).bg(bg));

    if app.input.text().is_empty() && !editing {
        let line = Line::from(vec![
            prefix,
            Span::styled(PLACEHOLDER, Style::default().fg(app.theme.dim).bg(bg)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let text_area = Rect {
        x: area.x + 2,
        width: area.width.saturating_sub(2),
        ..area
    };
    frame.render_widget(Paragraph::new(Line::from(prefix)), area);

    // Show the tail of the text that keeps the cursor inside the line
    let (before, _) = app.input.split_at_cursor();
    let cursor_col = display_width(before);
    let offset = (cursor_col + 1).saturating_sub(text_area.width as usize);
    let (visible, skipped) = skip_width(app.input.text(), offset);
    let text = Paragraph::new(Span::styled(
        visible.to_string(),
        Style::default().fg(app.theme.text_bright).bg(bg),
    ));
    frame.render_widget(text, text_area);

    if editing && text_area.width > 0 {
        let col = u16::try_from(cursor_col.saturating_sub(skipped))
            .unwrap_or(u16::MAX)
            .min(text_area.width - 1);
        frame.set_cursor_position((text_area.x + col, text_area.y));
    }
}

fn render_rows(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let height = area.height as usize;
    let count = app.tasks.visible_count();

    if count == 0 {
        let empty = Paragraph::new(Span::styled(
            "No tasks for this day",
            Style::default().fg(app.theme.dim).bg(bg),
        ))
        .alignment(Alignment::Center);
        let row = Rect {
            y: area.y + area.height / 3,
            height: 1,
            ..area
        };
        frame.render_widget(empty, row);
        return;
    }

    // Keep the cursor row on screen
    if app.task_cursor < app.task_scroll {
        app.task_scroll = app.task_cursor;
    } else if height > 0 && app.task_cursor >= app.task_scroll + height {
        app.task_scroll = app.task_cursor + 1 - height;
    }
    app.task_scroll = app.task_scroll.min(count.saturating_sub(height.max(1)));

    let highlight_cursor = app.focus == Panel::Tasks && app.mode == Mode::Navigate;
    let title_width = (area.width as usize).saturating_sub(4);
    let lines: Vec<Line> = app
        .tasks
        .visible()
        .enumerate()
        .skip(app.task_scroll)
        .take(height)
        .map(|(i, task)| {
            let row_bg = if highlight_cursor && i == app.task_cursor {
                app.theme.selection_bg
            } else {
                bg
            };
            let (check, title_style) = if task.completed {
                (
                    "[x] ",
                    Style::default()
                        .fg(app.theme.done)
                        .bg(row_bg)
                        .add_modifier(Modifier::CROSSED_OUT),
                )
            } else {
                ("[ ] ", Style::default().fg(app.theme.text).bg(row_bg))
            };
            let check_color = if task.completed {
                app.theme.done
            } else {
                app.theme.highlight
            };
            let title = truncate_to_width(&task.title, title_width);
            let pad = title_width.saturating_sub(display_width(&title));
            Line::from(vec![
                Span::styled(check, Style::default().fg(check_color).bg(row_bg)),
                Span::styled(title, title_style),
                Span::styled(" ".repeat(pad), Style::default().bg(row_bg)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let style = Style::default().fg(app.theme.dim).bg(app.theme.background);
    let left = format!("{} pending", app.tasks.pending_count());
    let right = format!("{} completed", app.tasks.completed_count());
    let width = area.width as usize;
    let pad = width.saturating_sub(display_width(&left) + display_width(&right));
    let line = Line::from(Span::styled(
        format!("{}{}{}", left, " ".repeat(pad), right),
        style,
    ));
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use insta::assert_snapshot;

    fn render_panel(app: &mut App, w: u16, h: u16) -> String {
        render_to_string(w, h, |frame, area| render_task_panel(frame, app, area))
    }

    #[test]
    fn empty_panel() {
        let mut app = test_app();
        let output = render_panel(&mut app, 44, 10);
        assert_snapshot!(output, @r"
        ╭ Tasks ───────────────────────────────────╮
        │ Pending (0)   Completed (0)    ‹ Oct 15 ›│
        │                                          │
        │+ Add a new task...                       │
        │                                          │
        │                                          │
        │          No tasks for this day           │
        │                                          │
        │0 pending                      0 completed│
        ╰──────────────────────────────────────────╯
        ");
    }

    #[test]
    fn pending_rows_and_counts() {
        let mut app = app_with_tasks(&["Write report", "Book dentist"]);
        app.tasks.toggle_task(app.tasks.tasks()[1].id);
        let output = render_panel(&mut app, TERM_W, 12);
        assert!(output.contains("[ ] Write report"));
        assert!(!output.contains("Book dentist"));
        assert!(output.contains("Pending (1)"));
        assert!(output.contains("Completed (1)"));
        assert!(output.contains("1 pending"));
        assert!(output.contains("1 completed"));
    }

    #[test]
    fn completed_view_shows_checked_rows() {
        let mut app = app_with_tasks(&["Write report"]);
        app.tasks.toggle_task(app.tasks.tasks()[0].id);
        app.set_task_view(TaskView::Completed);
        let output = render_panel(&mut app, TERM_W, 12);
        assert!(output.contains("[x] Write report"));
    }

    #[test]
    fn long_titles_are_truncated() {
        let mut app = app_with_tasks(&["A very long task title that does not fit"]);
        let output = render_panel(&mut app, 24, 10);
        assert!(output.contains("[ ] A very long task \u{2026}"));
    }

    #[test]
    fn insert_mode_shows_buffer() {
        let mut app = test_app();
        app.mode = Mode::Insert;
        app.input.insert_str("Plan week");
        let output = render_panel(&mut app, TERM_W, 10);
        assert!(output.contains("+ Plan week"));
        assert!(!output.contains(PLACEHOLDER));
    }

    fn cursor_after_paste(len: usize) -> (u16, u16, String) {
        let mut app = test_app();
        app.mode = Mode::Insert;
        crate::tui::input::handle_paste(&mut app, &"a".repeat(len));
        let backend = ratatui::backend::TestBackend::new(40, 10);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_task_panel(frame, &mut app, area);
            })
            .unwrap();
        let pos = terminal.get_cursor_position().unwrap();
        let input_row: String = terminal.backend().buffer().content[40 * 3..40 * 4]
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        (pos.x, pos.y, input_row)
    }

    #[test]
    fn huge_paste_keeps_cursor_on_the_input_line() {
        // 40 wide: border, "+ " prefix, then 36 text cells ending at x = 38
        for len in [65_535, 65_536, 70_000] {
            let (x, y, row) = cursor_after_paste(len);
            assert_eq!((x, y), (38, 3), "paste of {} chars", len);
            assert_eq!(row, format!("│+ {} │", "a".repeat(35)));
        }
    }

    #[test]
    fn long_input_scrolls_to_the_cursor() {
        let mut app = test_app();
        app.mode = Mode::Insert;
        app.input.insert_str("0123456789abcdefghijklmnopqrstuvwxyzXYZ");
        let output = render_panel(&mut app, 40, 10);
        assert!(output.contains("+ 456789abcdefghijklmnopqrstuvwxyzXYZ"));
        assert!(!output.contains("+ 0123"));
    }

    #[test]
    fn scroll_follows_cursor() {
        let titles: Vec<String> = (1..=10).map(|i| format!("task {}", i)).collect();
        let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
        let mut app = app_with_tasks(&refs);
        app.task_cursor = 9;
        // 10 rows total leaves 3 rows for tasks
        let output = render_panel(&mut app, 40, 10);
        assert_eq!(app.task_scroll, 7);
        assert!(output.contains("task 8"));
        assert!(output.contains("task 10"));
        assert!(!output.contains("task 7"));
    }
}
