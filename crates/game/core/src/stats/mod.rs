//! Character stats derived from a day's input.
//!
//! Stats are never mutated across days. Each day they are recomputed from the
//! fixed baseline by [`calculate_stats`], so the four fields always land in
//! `[STAT_MIN, STAT_MAX]`.

mod calculator;

pub use calculator::calculate_stats;

use crate::config::RulesConfig;

/// The four bounded character attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub health: i32,
    pub energy: i32,
    pub focus: i32,
    pub resilience: i32,
}

/// Names a single stat; used for quest targets and trend tracking.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum StatKind {
    Health,
    Energy,
    Focus,
    Resilience,
}

impl StatKind {
    /// Stats compared day over day by the boss trend.
    pub const TRACKED: [StatKind; 3] = [StatKind::Energy, StatKind::Focus, StatKind::Resilience];
}

impl Stats {
    /// Starting point of every daily calculation.
    pub const BASELINE: Self = Self::uniform(RulesConfig::STAT_BASELINE);

    pub const fn new(health: i32, energy: i32, focus: i32, resilience: i32) -> Self {
        Self {
            health,
            energy,
            focus,
            resilience,
        }
    }

    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    pub const fn get(&self, kind: StatKind) -> i32 {
        match kind {
            StatKind::Health => self.health,
            StatKind::Energy => self.energy,
            StatKind::Focus => self.focus,
            StatKind::Resilience => self.resilience,
        }
    }

    /// True when the stat is low enough to warrant a corrective quest.
    pub const fn is_weak(&self, kind: StatKind) -> bool {
        self.get(kind) < RulesConfig::WEAK_STAT
    }

    /// Clamps every field into `[STAT_MIN, STAT_MAX]` independently.
    #[must_use]
    pub fn clamped(self) -> Self {
        let clamp = |v: i32| v.clamp(RulesConfig::STAT_MIN, RulesConfig::STAT_MAX);
        Self {
            health: clamp(self.health),
            energy: clamp(self.energy),
            focus: clamp(self.focus),
            resilience: clamp(self.resilience),
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::BASELINE
    }
}
