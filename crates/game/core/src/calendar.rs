//! Calendar deadlines as seen by the engine.
//!
//! Only `days_left` feeds the boss trigger. Due dates live with the caller,
//! which computes `days_left` for the current game day.

use crate::config::RulesConfig;

/// How much a deadline weighs on the player.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Pressure {
    Low,
    #[default]
    Medium,
    High,
}

impl Pressure {
    /// XP granted when an event of this pressure arrives.
    pub const fn xp_reward(self) -> u64 {
        match self {
            Self::Low => RulesConfig::PRESSURE_LOW_XP,
            Self::Medium => RulesConfig::PRESSURE_MEDIUM_XP,
            Self::High => RulesConfig::PRESSURE_HIGH_XP,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarEvent {
    pub name: String,
    /// Days until the due date. Zero or negative means it has arrived.
    pub days_left: i64,
    pub pressure: Pressure,
}

impl CalendarEvent {
    pub fn new(name: impl Into<String>, days_left: i64, pressure: Pressure) -> Self {
        Self {
            name: name.into(),
            days_left,
            pressure,
        }
    }

    /// True once the due date is today or in the past.
    pub fn has_arrived(&self) -> bool {
        self.days_left <= 0
    }

    /// True when the event is close enough to summon a boss.
    pub fn is_imminent(&self) -> bool {
        self.days_left <= RulesConfig::BOSS_CALENDAR_TRIGGER_DAYS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressure_rewards() {
        assert_eq!(Pressure::Low.xp_reward(), 15);
        assert_eq!(Pressure::Medium.xp_reward(), 25);
        assert_eq!(Pressure::High.xp_reward(), 40);
        assert_eq!("HIGH".parse::<Pressure>(), Ok(Pressure::High));
    }

    #[test]
    fn proximity() {
        let event = |days| CalendarEvent::new("Exam", days, Pressure::High);
        assert!(!event(4).is_imminent());
        assert!(event(3).is_imminent());
        assert!(!event(1).has_arrived());
        assert!(event(0).has_arrived());
    }
}
