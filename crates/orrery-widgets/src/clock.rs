//! Local wall clock string and a once-per-interval refresh schedule.

use std::fmt::Display;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local, TimeZone};

/// `2024-03-09 07:05:01`
pub const CLOCK_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a timestamp as `YYYY-MM-DD HH:MM:SS` in its own zone.
pub fn format_clock<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    time.format(CLOCK_FORMAT).to_string()
}

/// The current local time, formatted for the clock widget.
pub fn local_now() -> String {
    format_clock(&Local::now())
}

/// Fires at most once per interval.
#[derive(Clone, Debug)]
pub struct Ticker {
    interval: Duration,
    next_due: Instant,
}

impl Ticker {
    /// A ticker that is due immediately, then every `interval`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now,
        }
    }

    /// Returns `true` if the interval has elapsed and schedules the next tick.
    ///
    /// Missed ticks are not replayed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now + self.interval;
        true
    }
}
