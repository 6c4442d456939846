//! Daily rollover schedule.
//!
//! Once a day, at a fixed UTC time, the daemon replaces the current
//! reservation with a fresh one (the original deployment ran this at
//! midnight). This module only computes *when* the next rollover is
//! due; the daemon owns the timer loop and the create-then-announce
//! sequence.

use chrono::{DateTime, Duration, Utc};

/// Errors constructing a rollover schedule.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// Hour or minute outside the valid clock range.
    #[error("invalid rollover time {hour:02}:{minute:02} (expected 00:00..=23:59)")]
    InvalidTime {
        /// The rejected hour value.
        hour: u32,
        /// The rejected minute value.
        minute: u32,
    },
}

/// A once-per-day trigger at a fixed UTC wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolloverSchedule {
    hour: u32,
    minute: u32,
}

impl RolloverSchedule {
    /// Create a schedule firing daily at `hour:minute` UTC.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidTime`] if `hour > 23` or
    /// `minute > 59`.
    pub const fn new(hour: u32, minute: u32) -> Result<Self, ScheduleError> {
        if hour > 23 || minute > 59 {
            return Err(ScheduleError::InvalidTime { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    /// The first trigger instant strictly after `now`.
    pub fn next_after(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let today = now
            .date_naive()
            .and_hms_opt(self.hour, self.minute, 0)
            .map(|naive| naive.and_utc());

        match today {
            Some(candidate) if candidate > now => candidate,
            Some(candidate) => candidate + Duration::days(1),
            // Unreachable with a validated hour/minute; fall back to a
            // plain 24h delay rather than panicking.
            None => now + Duration::days(1),
        }
    }

    /// How long to sleep from `now` until the next trigger.
    pub fn until_next(&self, now: DateTime<Utc>) -> std::time::Duration {
        (self.next_after(now) - now)
            .to_std()
            .unwrap_or(std::time::Duration::ZERO)
    }
}
