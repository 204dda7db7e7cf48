use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::display::FullscreenSurface;
use super::ticker::{TICK_INTERVAL, Ticker};

/// Which preset the countdown is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerMode {
    Focus,
    ShortBreak,
    LongBreak,
}

impl TimerMode {
    /// Display order of the mode tabs
    pub const ALL: [TimerMode; 3] = [TimerMode::Focus, TimerMode::ShortBreak, TimerMode::LongBreak];

    pub fn label(self) -> &'static str {
        match self {
            TimerMode::Focus => "Focus",
            TimerMode::ShortBreak => "Short Break",
            TimerMode::LongBreak => "Long Break",
        }
    }

    pub fn is_break(self) -> bool {
        matches!(self, TimerMode::ShortBreak | TimerMode::LongBreak)
    }
}

/// Per-mode countdown lengths, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Durations {
    pub focus: u32,
    pub short_break: u32,
    pub long_break: u32,
}

impl Default for Durations {
    fn default() -> Self {
        Durations {
            focus: 25 * 60,
            short_break: 5 * 60,
            long_break: 15 * 60,
        }
    }
}

impl Durations {
    pub fn from_minutes(focus: u32, short_break: u32, long_break: u32) -> Self {
        Durations {
            focus: focus.saturating_mul(60),
            short_break: short_break.saturating_mul(60),
            long_break: long_break.saturating_mul(60),
        }
    }

    pub fn for_mode(&self, mode: TimerMode) -> u32 {
        match mode {
            TimerMode::Focus => self.focus,
            TimerMode::ShortBreak => self.short_break,
            TimerMode::LongBreak => self.long_break,
        }
    }

    pub fn set(&mut self, mode: TimerMode, seconds: u32) {
        match mode {
            TimerMode::Focus => self.focus = seconds,
            TimerMode::ShortBreak => self.short_break = seconds,
            TimerMode::LongBreak => self.long_break = seconds,
        }
    }

    pub fn minutes(&self, mode: TimerMode) -> u32 {
        self.for_mode(mode) / 60
    }
}

/// Countdown state holder.
///
/// The timer is Running exactly when it holds a tick handle. Every
/// transition out of Running drops the handle, and dropping the timer drops
/// it too, so no tick can land after a stop or after teardown.
#[derive(Debug)]
pub struct Timer {
    mode: TimerMode,
    seconds_remaining: u32,
    initial_seconds: u32,
    durations: Durations,
    ticker: Option<Ticker>,
    full_screen: bool,
    show_settings: bool,
    draggable: bool,
}

impl Default for Timer {
    fn default() -> Self {
        Timer::new(Durations::default())
    }
}

impl Timer {
    /// A stopped timer seeded with the focus duration
    pub fn new(durations: Durations) -> Self {
        let focus = durations.focus;
        Timer {
            mode: TimerMode::Focus,
            seconds_remaining: focus,
            initial_seconds: focus,
            durations,
            ticker: None,
            full_screen: false,
            show_settings: false,
            draggable: false,
        }
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn initial_seconds(&self) -> u32 {
        self.initial_seconds
    }

    pub fn durations(&self) -> Durations {
        self.durations
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn is_full_screen(&self) -> bool {
        self.full_screen
    }

    pub fn show_settings(&self) -> bool {
        self.show_settings
    }

    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    /// Switch preset: stops the countdown and reseeds it from the mode's duration.
    pub fn select_mode(&mut self, mode: TimerMode) {
        self.ticker = None;
        self.mode = mode;
        let seconds = self.durations.for_mode(mode);
        self.seconds_remaining = seconds;
        self.initial_seconds = seconds;
        tracing::debug!(mode = mode.label(), seconds, "mode selected");
    }

    /// Start or pause. Returns false when nothing changed, which only happens
    /// when asked to start with no time left.
    pub fn toggle_run_pause(&mut self) -> bool {
        self.toggle_run_pause_at(Instant::now())
    }

    pub fn toggle_run_pause_at(&mut self, now: Instant) -> bool {
        if self.is_running() {
            self.pause()
        } else {
            self.start_at(now)
        }
    }

    /// Register the tick handle. Refused at zero: starting would leave a
    /// Running state with nothing to count.
    pub fn start_at(&mut self, now: Instant) -> bool {
        if self.is_running() || self.seconds_remaining == 0 {
            return false;
        }
        self.ticker = Some(Ticker::start(now, TICK_INTERVAL));
        tracing::info!(
            mode = self.mode.label(),
            remaining = self.seconds_remaining,
            "timer started"
        );
        true
    }

    pub fn pause(&mut self) -> bool {
        let was_running = self.ticker.take().is_some();
        if was_running {
            tracing::info!(remaining = self.seconds_remaining, "timer paused");
        }
        was_running
    }

    /// One elapsed second. Returns true when this tick finished the countdown.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining == 0 {
            self.ticker = None;
            tracing::info!(mode = self.mode.label(), "countdown finished");
            return true;
        }
        false
    }

    /// Deliver every tick due at `now`. Returns true if the countdown finished.
    pub fn advance_to(&mut self, now: Instant) -> bool {
        let due = match self.ticker.as_mut() {
            Some(ticker) => ticker.due(now),
            None => return false,
        };
        for _ in 0..due {
            if self.tick() {
                return true;
            }
        }
        false
    }

    /// Time until the next tick, or None while stopped.
    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        self.ticker.as_ref().map(|t| t.until_next(now))
    }

    /// Back to the start of the current countdown; mode unchanged.
    pub fn reset(&mut self) {
        self.ticker = None;
        self.seconds_remaining = self.initial_seconds;
    }

    /// Extend (or shorten) a stopped countdown by whole minutes. Both the
    /// remaining and the initial length move together. Ignored while running.
    pub fn add_time(&mut self, minutes: i64) -> bool {
        if self.is_running() {
            return false;
        }
        let delta = minutes.saturating_mul(60);
        self.seconds_remaining = clamp_seconds(i64::from(self.seconds_remaining) + delta, 0);
        self.initial_seconds = clamp_seconds(i64::from(self.initial_seconds) + delta, 1);
        true
    }

    /// Share of the current countdown already elapsed, 0..=100.
    pub fn progress_percent(&self) -> f64 {
        if self.initial_seconds == 0 {
            return 0.0;
        }
        let elapsed = f64::from(self.initial_seconds) - f64::from(self.seconds_remaining);
        elapsed / f64::from(self.initial_seconds) * 100.0
    }

    /// Install new per-mode durations. An untouched stopped countdown is
    /// reseeded from the new duration; a started or edited one is left alone.
    pub fn apply_durations(&mut self, durations: Durations) {
        let untouched = !self.is_running() && self.seconds_remaining == self.initial_seconds;
        self.durations = durations;
        if untouched {
            let seconds = durations.for_mode(self.mode);
            self.seconds_remaining = seconds;
            self.initial_seconds = seconds;
        }
    }

    /// Ask the surface to enter full screen if it isn't already, else leave it.
    pub fn toggle_full_screen(&mut self, surface: &mut dyn FullscreenSurface) {
        if surface.is_fullscreen() {
            surface.exit();
            self.full_screen = false;
        } else {
            surface.enter();
            self.full_screen = true;
        }
    }

    pub fn toggle_settings(&mut self) {
        self.show_settings = !self.show_settings;
    }

    pub fn toggle_draggable(&mut self) {
        self.draggable = !self.draggable;
    }
}

fn clamp_seconds(value: i64, min: u32) -> u32 {
    value.clamp(i64::from(min), i64::from(u32::MAX)) as u32
}

/// `MM:SS`, minutes zero-padded to two digits and free to grow past 99.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
