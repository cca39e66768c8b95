//! Character mood and visual theme.

use crate::effects::{Effect, EffectSet};
use crate::stats::Stats;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Mood {
    Stressed,
    Tired,
    Energetic,
    Normal,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Theme {
    Rain,
    Night,
    Sunny,
    Normal,
}

/// Exactly one mood and one theme per evaluation. Never stored as authoritative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterState {
    pub mood: Mood,
    pub theme: Theme,
}

impl CharacterState {
    pub const STRESSED: Self = Self::new(Mood::Stressed, Theme::Rain);
    pub const TIRED: Self = Self::new(Mood::Tired, Theme::Night);
    pub const ENERGETIC: Self = Self::new(Mood::Energetic, Theme::Sunny);
    pub const NORMAL: Self = Self::new(Mood::Normal, Theme::Normal);

    pub const fn new(mood: Mood, theme: Theme) -> Self {
        Self { mood, theme }
    }
}

impl Default for CharacterState {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Resolves the mood by fixed priority, first match wins:
/// stressed, then tired, then energetic, otherwise normal.
///
/// `_stats` is not consulted yet; only the effects decide.
pub fn determine_character_state(_stats: &Stats, effects: EffectSet) -> CharacterState {
    if effects.has(Effect::LowResilience) || effects.has(Effect::BurnoutRisk) {
        CharacterState::STRESSED
    } else if effects.has(Effect::Fatigue) {
        CharacterState::TIRED
    } else if effects.has(Effect::HighEnergy) && effects.has(Effect::HighFocus) {
        CharacterState::ENERGETIC
    } else {
        CharacterState::NORMAL
    }
}
