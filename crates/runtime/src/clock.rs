//! Game-day arithmetic.
//!
//! A game day starts at the reset hour, not at midnight: with a 4:00 reset,
//! 03:59 still belongs to the previous calendar date.

use chrono::{Duration, NaiveDate, NaiveDateTime};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameClock {
    reset_hour: u32,
}

impl GameClock {
    /// `reset_hour` is clamped to 0..=23.
    pub fn new(reset_hour: u32) -> Self {
        Self {
            reset_hour: reset_hour.min(23),
        }
    }

    pub fn reset_hour(&self) -> u32 {
        self.reset_hour
    }

    fn offset(&self) -> Duration {
        Duration::hours(i64::from(self.reset_hour))
    }

    /// The game day `now` falls in.
    pub fn game_day(&self, now: NaiveDateTime) -> NaiveDate {
        (now - self.offset()).date()
    }

    /// The first instant of the game day after the one `now` falls in.
    pub fn next_reset(&self, now: NaiveDateTime) -> NaiveDateTime {
        let start_of_day = self.game_day(now).and_time(chrono::NaiveTime::MIN);
        start_of_day + Duration::days(1) + self.offset()
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new(crate::RuntimeConfig::DEFAULT_RESET_HOUR)
    }
}
