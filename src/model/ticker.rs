use std::time::{Duration, Instant};

/// Countdown resolution: one tick per elapsed second.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// A cancellable recurring schedule.
///
/// Holding a `Ticker` is what "registered" means; dropping it cancels the
/// schedule. The deadline advances by whole intervals, so a late poll
/// delivers every missed tick at once instead of drifting.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Instant,
}

impl Ticker {
    /// Register a schedule whose first tick fires one interval after `now`.
    pub fn start(now: Instant, interval: Duration) -> Self {
        let interval = interval.max(Duration::from_nanos(1));
        Ticker {
            interval,
            next_due: now + interval,
        }
    }

    /// Number of ticks that have come due at `now`, consuming them.
    pub fn due(&mut self, now: Instant) -> u32 {
        if now < self.next_due {
            return 0;
        }
        let behind = now.duration_since(self.next_due);
        let extra = behind.as_nanos() / self.interval.as_nanos();
        let count = u32::try_from(extra).unwrap_or(u32::MAX - 1) + 1;
        self.next_due += self.interval * count;
        count
    }

    /// Time left until the next tick comes due (zero if already overdue).
    pub fn until_next(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
