//! Boss state machine.
//!
//! ```text
//! (none) --create--> Active --update--> Active
//!                           \--------> Defeated   hp reached 0
//!                            \-------> Escaped    days ran out first
//! ```
//!
//! A boss is updated once per day from the stat trend and never revives once
//! it leaves [`BossStatus::Active`].

use core::cmp::Ordering;

use crate::calendar::CalendarEvent;
use crate::config::RulesConfig;
use crate::stats::{StatKind, Stats};

/// What summoned the boss.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum BossKind {
    /// A multi-day stat slump.
    Stat,
    /// An approaching calendar deadline.
    Calendar,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum BossStatus {
    Active,
    Defeated,
    Escaped,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boss {
    pub name: String,
    pub kind: BossKind,
    pub hp: i32,
    pub max_hp: i32,
    pub days_remaining: i32,
    pub active: bool,
    pub defeated: bool,
}

impl Boss {
    pub fn status(&self) -> BossStatus {
        if self.defeated {
            BossStatus::Defeated
        } else if self.active {
            BossStatus::Active
        } else {
            BossStatus::Escaped
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status() != BossStatus::Active
    }

    /// Remaining hp as a whole percentage of `max_hp`.
    pub fn hp_percent(&self) -> u8 {
        if self.max_hp <= 0 {
            return 0;
        }
        let hp = i64::from(self.hp.clamp(0, self.max_hp));
        (hp * 100 / i64::from(self.max_hp)) as u8
    }
}

/// Advisory setback emitted when a boss escapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Penalty {
    pub effect: PenaltyEffect,
    pub energy_penalty: i32,
    pub focus_penalty: i32,
    pub duration_days: u32,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum PenaltyEffect {
    Demotivated,
}

impl Penalty {
    pub const ESCAPE: Self = Self {
        effect: PenaltyEffect::Demotivated,
        energy_penalty: RulesConfig::PENALTY_ENERGY,
        focus_penalty: RulesConfig::PENALTY_FOCUS,
        duration_days: RulesConfig::PENALTY_DURATION_DAYS,
    };

    /// Returns `stats` with the penalty subtracted. The engine never calls
    /// this itself; applying a penalty is up to the caller.
    #[must_use]
    pub fn apply(&self, stats: &Stats) -> Stats {
        Stats {
            energy: stats.energy - self.energy_penalty,
            focus: stats.focus - self.focus_penalty,
            ..*stats
        }
        .clamped()
    }
}

/// Spawns a fresh boss at full hp.
pub fn create_boss(name: impl Into<String>, kind: BossKind, days_remaining: i32) -> Boss {
    Boss {
        name: name.into(),
        kind,
        hp: RulesConfig::BOSS_MAX_HP,
        max_hp: RulesConfig::BOSS_MAX_HP,
        days_remaining,
        active: true,
        defeated: false,
    }
}

/// Net direction of the tracked stats: +1 per improvement, -1 per regression.
pub fn stat_trend(prev: &Stats, curr: &Stats) -> i32 {
    StatKind::TRACKED
        .into_iter()
        .map(|kind| match curr.get(kind).cmp(&prev.get(kind)) {
            Ordering::Greater => 1,
            Ordering::Less => -1,
            Ordering::Equal => 0,
        })
        .sum()
}

/// Runs one day of the boss fight and returns the new boss.
///
/// Improving stats hit the boss, flat stats chip at it, regressing stats heal
/// it. The day counter drops regardless. Hp reaching zero wins before the
/// counter is checked.
#[must_use]
pub fn update_boss(boss: &Boss, prev: &Stats, curr: &Stats) -> Boss {
    let delta = match stat_trend(prev, curr) {
        t if t >= 1 => -RulesConfig::BOSS_DAMAGE_IMPROVING,
        0 => -RulesConfig::BOSS_DAMAGE_STEADY,
        _ => RulesConfig::BOSS_HEAL_REGRESSING,
    };

    let mut next = boss.clone();
    next.hp = boss.hp.saturating_add(delta).clamp(0, boss.max_hp.max(0));
    next.days_remaining = boss.days_remaining.saturating_sub(1);

    if next.hp <= 0 {
        next.defeated = true;
        next.active = false;
    } else if next.days_remaining <= 0 {
        next.active = false;
    }
    next
}

/// The penalty owed for a boss that ran out the clock undefeated.
pub fn failure_penalty(boss: &Boss) -> Option<Penalty> {
    (!boss.defeated && boss.days_remaining <= 0).then_some(Penalty::ESCAPE)
}

/// Summons a calendar boss when the event is within the trigger window.
pub fn check_calendar_event(event: &CalendarEvent) -> Option<Boss> {
    if !event.is_imminent() {
        return None;
    }
    // Overdue events get a boss that is already out of time.
    let days = event.days_left.clamp(0, RulesConfig::BOSS_CALENDAR_TRIGGER_DAYS) as i32;
    Some(create_boss(
        format!("{} Stress", event.name),
        BossKind::Calendar,
        days,
    ))
}
