//! Documents stored in the state slots.

use chrono::{NaiveDate, NaiveDateTime};
use respawn_core::{CalendarEvent, DailyInput, DayResult, PreviousState, Pressure, QuestId, process_day};
use serde::{Deserialize, Serialize};

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Avatar keys offered for this gender.
    pub const fn avatars(self) -> &'static [&'static str] {
        match self {
            Self::Male => &["m1", "m2", "m3", "m4"],
            Self::Female => &["f1", "f2", "f3", "f4"],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub gender: Gender,
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// The daily input together with the game day it was logged for.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoggedInput {
    pub day: NaiveDate,
    pub input: DailyInput,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkTask {
    pub title: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedTask {
    pub title: String,
    /// Game day of completion.
    pub day: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEvent {
    pub name: String,
    pub due: NaiveDate,
    #[serde(default)]
    pub pressure: Pressure,
}

impl StoredEvent {
    /// Whole days from `today` to the due date. Negative once overdue.
    pub fn days_left(&self, today: NaiveDate) -> i64 {
        (self.due - today).num_days()
    }

    pub fn to_event(&self, today: NaiveDate) -> CalendarEvent {
        CalendarEvent::new(self.name.clone(), self.days_left(today), self.pressure)
    }
}

/// Everything needed to recompute an advanced day.
///
/// `previous.total_xp` is the total before the day; `bonus_xp` collects XP
/// granted during the day outside quests (arrived events, work tasks).
/// `arrived` names the events whose reward is part of `bonus_xp`; they are
/// removed from the calendar once the record is stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub day: NaiveDate,
    pub input: DailyInput,
    pub previous: PreviousState,
    #[serde(default)]
    pub manual_completions: Vec<QuestId>,
    #[serde(default)]
    pub bonus_xp: u64,
    #[serde(default)]
    pub arrived: Vec<StoredEvent>,
}

impl DayRecord {
    pub fn evaluate(&self) -> DayResult {
        let previous = PreviousState {
            total_xp: self.previous.total_xp.saturating_add(self.bonus_xp),
            ..self.previous.clone()
        };
        process_day(&self.input, &previous, &self.manual_completions)
    }
}
