//! Daily quests: the fixed catalog, the selection policy and the completion
//! evaluator.
//!
//! Quests are value objects copied out of the immutable [`catalog`]. Nothing
//! mutates a quest after it is drawn.

mod catalog;
mod completion;
mod selection;

use core::fmt;
use core::str::FromStr;

pub use catalog::{QUEST_CATALOG, catalog};
pub use completion::{CompletionReport, check_quest_completion};
pub use selection::{DailyQuests, generate_daily_quests, weak_stats};

use crate::input::{DailyInput, InputField};
use crate::stats::StatKind;

/// Stable key of a catalog quest.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuestId {
    #[strum(serialize = "sleep_7h")]
    #[cfg_attr(feature = "serde", serde(rename = "sleep_7h"))]
    Sleep7h,
    #[strum(serialize = "screen_under_4h")]
    #[cfg_attr(feature = "serde", serde(rename = "screen_under_4h"))]
    ScreenUnder4h,
    #[strum(serialize = "water_3l")]
    #[cfg_attr(feature = "serde", serde(rename = "water_3l"))]
    Water3l,
    #[strum(serialize = "breathing_10min")]
    #[cfg_attr(feature = "serde", serde(rename = "breathing_10min"))]
    Breathing10min,
    #[strum(serialize = "short_walk")]
    #[cfg_attr(feature = "serde", serde(rename = "short_walk"))]
    ShortWalk,
    #[strum(serialize = "plan_day")]
    #[cfg_attr(feature = "serde", serde(rename = "plan_day"))]
    PlanDay,
}

impl QuestId {
    /// The catalog entry for this id.
    pub fn quest(self) -> &'static Quest {
        catalog::lookup(self)
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum QuestKind {
    /// Targets a weak stat.
    Corrective,
    Support,
    Preventive,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum CompletionMode {
    /// Completed when every condition holds for the day's input.
    Input,
    /// Completed when the player marks it done.
    Manual,
}

/// Direction of a condition threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Bound {
    /// `value >= threshold`
    AtLeast,
    /// `value <= threshold`, written with a `_max` suffix.
    AtMost,
}

/// A condition key such as `sleep_hours` or `screen_time_max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConditionKey {
    pub field: InputField,
    pub bound: Bound,
}

impl ConditionKey {
    const MAX_SUFFIX: &'static str = "_max";

    pub const fn at_least(field: InputField) -> Self {
        Self {
            field,
            bound: Bound::AtLeast,
        }
    }

    pub const fn at_most(field: InputField) -> Self {
        Self {
            field,
            bound: Bound::AtMost,
        }
    }
}

impl fmt::Display for ConditionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bound {
            Bound::AtLeast => write!(f, "{}", self.field),
            Bound::AtMost => write!(f, "{}{}", self.field, Self::MAX_SUFFIX),
        }
    }
}

/// Raised when a condition key names no known input field.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown condition key `{0}`")]
pub struct ConditionKeyError(pub String);

impl FromStr for ConditionKey {
    type Err = ConditionKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, bound) = match s.strip_suffix(Self::MAX_SUFFIX) {
            Some(name) => (name, Bound::AtMost),
            None => (s, Bound::AtLeast),
        };
        let field = name
            .parse::<InputField>()
            .map_err(|_| ConditionKeyError(s.to_owned()))?;
        Ok(Self { field, bound })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ConditionKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ConditionKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One threshold test against the day's input.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Condition {
    pub key: ConditionKey,
    pub threshold: f64,
}

impl Condition {
    pub const fn new(key: ConditionKey, threshold: f64) -> Self {
        Self { key, threshold }
    }

    /// Tests the raw input value against the threshold.
    pub fn holds(&self, input: &DailyInput) -> bool {
        let value = input.value(self.key.field);
        match self.key.bound {
            Bound::AtLeast => value >= self.threshold,
            Bound::AtMost => value <= self.threshold,
        }
    }
}

/// A catalog quest.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Quest {
    pub id: QuestId,
    pub title: &'static str,
    pub kind: QuestKind,
    pub completion: CompletionMode,
    /// Conjunctive conditions; only meaningful for [`CompletionMode::Input`].
    pub conditions: &'static [Condition],
    pub xp: u32,
    /// Stats this quest helps with. Used for selection, never enforced.
    pub targets: &'static [StatKind],
    /// Days before the quest may be drawn again. Selection only excludes the
    /// previous day's board, so values above 1 are informational.
    pub cooldown_days: u8,
}

impl Quest {
    pub fn targets_stat(&self, stat: StatKind) -> bool {
        self.targets.contains(&stat)
    }

    /// True when every condition holds. An input quest without conditions is
    /// never completed.
    pub fn conditions_met(&self, input: &DailyInput) -> bool {
        !self.conditions.is_empty() && self.conditions.iter().all(|c| c.holds(input))
    }
}
