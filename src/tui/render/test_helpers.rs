use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{Durations, TaskList, UiConfig};
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Render the whole screen for `app`
pub fn render_app(app: &mut App) -> String {
    render_to_string(TERM_W, TERM_H, |frame, _| {
        crate::tui::render::render(frame, app);
    })
}

/// An app with default durations, default UI config and no backing file.
/// The date cursor is pinned so rendered dates are stable.
pub fn test_app() -> App {
    let mut app = App::new(Durations::default(), &UiConfig::default(), vec![25, 10, 5, 1]);
    app.tasks = TaskList::new(chrono::NaiveDate::from_ymd_opt(2025, 10, 15).unwrap());
    app
}

/// A test app holding pending tasks with these titles, in order.
pub fn app_with_tasks(titles: &[&str]) -> App {
    let mut app = test_app();
    for title in titles {
        app.tasks.add_task(title).unwrap();
    }
    app
}
