use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    supports_keyboard_enhancement,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::ConfigFile;
use crate::model::{
    Durations, SettingsForm, TaskId, TaskList, TaskView, Timer, UiConfig, ZoomedViewport,
};

use super::input;
use super::line_input::LineInput;
use super::render;
use super::theme::Theme;

/// Longest the event loop sleeps between redraws
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Which panel receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Tasks,
    Timer,
}

impl Panel {
    pub fn other(self) -> Panel {
        match self {
            Panel::Tasks => Panel::Timer,
            Panel::Timer => Panel::Tasks,
        }
    }
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing a new task title
    Insert,
    /// Settings overlay open
    Settings,
}

/// One-line feedback shown in the status row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Main application state
pub struct App {
    pub timer: Timer,
    pub tasks: TaskList,
    pub viewport: ZoomedViewport,
    pub focus: Panel,
    /// Timer panel drawn on the left; only movable in drag mode
    pub timer_left: bool,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_help: bool,
    pub show_key_hints: bool,
    /// Minutes added by the add-time keys, in key order
    pub add_time_presets: Vec<i64>,
    /// Pending new-task title; kept when leaving Insert without adding
    pub input: LineInput,
    /// Cursor index into the visible task rows
    pub task_cursor: usize,
    /// First visible task row
    pub task_scroll: usize,
    pub settings_form: Option<SettingsForm>,
    /// Backing config file; None keeps saved settings in memory only
    pub config_file: Option<ConfigFile>,
    pub status: Option<StatusMessage>,
}

impl App {
    pub fn new(durations: Durations, ui: &UiConfig, add_time_presets: Vec<i64>) -> Self {
        App {
            timer: Timer::new(durations),
            tasks: TaskList::default(),
            viewport: ZoomedViewport::new(),
            focus: Panel::Tasks,
            timer_left: false,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(ui),
            show_help: false,
            show_key_hints: ui.show_key_hints,
            add_time_presets,
            input: LineInput::default(),
            task_cursor: 0,
            task_scroll: 0,
            settings_form: None,
            config_file: None,
            status: None,
        }
    }

    /// Build from a loaded config file. `durations` already carries any
    /// command-line overrides.
    pub fn from_config(file: ConfigFile, durations: Durations) -> Self {
        let mut app = App::new(
            durations,
            &file.config.ui,
            file.config.timer.add_time_presets.clone(),
        );
        app.config_file = Some(file);
        app
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: false,
        });
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: true,
        });
    }

    // -----------------------------------------------------------------------
    // Task panel
    // -----------------------------------------------------------------------

    /// Id of the task under the cursor in the active view
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.tasks.visible().nth(self.task_cursor).map(|t| t.id)
    }

    /// Keep the cursor on a visible row after the list changed
    pub fn clamp_task_cursor(&mut self) {
        let count = self.tasks.visible_count();
        self.task_cursor = self.task_cursor.min(count.saturating_sub(1));
    }

    pub fn move_task_cursor(&mut self, delta: isize) {
        let count = self.tasks.visible_count();
        if count == 0 {
            self.task_cursor = 0;
            return;
        }
        self.task_cursor = self.task_cursor.saturating_add_signed(delta).min(count - 1);
    }

    /// Add the pending title. The buffer is cleared only when a task was created.
    pub fn submit_input(&mut self) -> Option<TaskId> {
        let id = self.tasks.add_task(self.input.text())?;
        self.input.clear();
        if self.tasks.view() == TaskView::Pending {
            self.task_cursor = self.tasks.visible_count().saturating_sub(1);
        }
        Some(id)
    }

    pub fn toggle_selected_task(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.tasks.toggle_task(id);
            self.clamp_task_cursor();
        }
    }

    pub fn delete_selected_task(&mut self) {
        if let Some(id) = self.selected_task_id()
            && let Some(task) = self.tasks.delete_task(id)
        {
            self.set_status(format!("Deleted \"{}\"", task.title));
            self.clamp_task_cursor();
        }
    }

    pub fn set_task_view(&mut self, view: TaskView) {
        if self.tasks.view() != view {
            self.tasks.set_view(view);
            self.task_cursor = 0;
            self.task_scroll = 0;
        }
    }

    // -----------------------------------------------------------------------
    // Timer panel
    // -----------------------------------------------------------------------

    pub fn toggle_run_pause(&mut self) {
        if !self.timer.toggle_run_pause() {
            self.set_status("Time is up: reset (r) or pick a mode first");
        }
    }

    /// Apply the add-time preset at `index` (0-based key order)
    pub fn add_preset_time(&mut self, index: usize) {
        if let Some(&minutes) = self.add_time_presets.get(index) {
            self.timer.add_time(minutes);
        }
    }

    pub fn toggle_full_screen(&mut self) {
        self.timer.toggle_full_screen(&mut self.viewport);
        if self.timer.is_full_screen() {
            self.focus = Panel::Timer;
            if self.mode == Mode::Insert {
                self.mode = Mode::Navigate;
            }
        }
    }

    /// Move the timer panel to one side. Only allowed in drag mode.
    pub fn move_timer_panel(&mut self, left: bool) {
        if self.timer.is_draggable() {
            self.timer_left = left;
        }
    }

    pub fn open_settings(&mut self) {
        if self.timer.show_settings() {
            return;
        }
        self.timer.toggle_settings();
        self.settings_form = Some(SettingsForm::from_durations(self.timer.durations()));
        self.mode = Mode::Settings;
    }

    /// Close the settings overlay, applying and persisting the form on save.
    pub fn close_settings(&mut self, save: bool) {
        let form = self.settings_form.take();
        if self.timer.show_settings() {
            self.timer.toggle_settings();
        }
        self.mode = Mode::Navigate;

        let Some(form) = form.filter(|_| save) else {
            return;
        };
        let durations = form.save();
        self.timer.apply_durations(durations);

        let Some(file) = self.config_file.as_mut() else {
            self.set_status("Settings applied for this session");
            return;
        };
        match file.save_durations(durations) {
            Ok(()) => {
                let msg = format!("Settings saved to {}", file.path.display());
                self.set_status(msg);
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not save settings");
                self.set_error(format!("Settings applied, not saved: {}", e));
            }
        }
    }

    // -----------------------------------------------------------------------
    // Clock
    // -----------------------------------------------------------------------

    /// Deliver due ticks to the timer
    pub fn on_clock(&mut self, now: Instant) {
        if self.timer.advance_to(now) {
            let label = self.timer.mode().label();
            self.set_status(format!("{} finished", label));
        }
    }

    /// How long the event loop may wait for input before the next tick
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.timer
            .next_tick_in(now)
            .map_or(IDLE_POLL, |next| next.min(IDLE_POLL))
    }
}

/// Run the TUI application
pub fn run(config: ConfigFile, durations: Durations) -> Result<(), Box<dyn std::error::Error>> {
    let kitty_wanted = config.config.ui.kitty_keyboard.unwrap_or(true);
    let mut app = App::from_config(config, durations);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let kitty = kitty_wanted && supports_keyboard_enhancement().unwrap_or(false);
    if kitty {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if kitty {
            let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
        }
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    tracing::info!("tui started");
    let result = run_event_loop(&mut terminal, &mut app);

    // Dropping the app drops the timer and with it any live tick handle
    drop(app);

    // Restore terminal
    if kitty {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    tracing::info!("tui stopped");

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(app.poll_timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        app.on_clock(Instant::now());

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
