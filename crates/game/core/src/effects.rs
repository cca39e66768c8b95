//! Status effects (buffs and debuffs) derived from stat thresholds.
//!
//! Each stat has a disjoint low (`< 40`) and high (`>= 60`, energy `>= 65`)
//! threshold, so a stat contributes at most one effect and a stat vector yields
//! between zero and four effects.

use bitflags::bitflags;

use crate::config::RulesConfig;
use crate::stats::Stats;

/// A single status effect tag.
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
pub enum Effect {
    Fatigue,
    HighEnergy,
    LowFocus,
    HighFocus,
    BurnoutRisk,
    GoodHealth,
    LowResilience,
    HighResilience,
}

impl Effect {
    pub const fn flag(self) -> EffectSet {
        match self {
            Self::Fatigue => EffectSet::FATIGUE,
            Self::HighEnergy => EffectSet::HIGH_ENERGY,
            Self::LowFocus => EffectSet::LOW_FOCUS,
            Self::HighFocus => EffectSet::HIGH_FOCUS,
            Self::BurnoutRisk => EffectSet::BURNOUT_RISK,
            Self::GoodHealth => EffectSet::GOOD_HEALTH,
            Self::LowResilience => EffectSet::LOW_RESILIENCE,
            Self::HighResilience => EffectSet::HIGH_RESILIENCE,
        }
    }

    /// True for buffs, false for debuffs.
    pub const fn is_buff(self) -> bool {
        matches!(
            self,
            Self::HighEnergy | Self::HighFocus | Self::GoodHealth | Self::HighResilience
        )
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Fatigue => "Fatigue",
            Self::HighEnergy => "High Energy",
            Self::LowFocus => "Low Focus",
            Self::HighFocus => "High Focus",
            Self::BurnoutRisk => "Burnout Risk",
            Self::GoodHealth => "Good Health",
            Self::LowResilience => "Low Resilience",
            Self::HighResilience => "High Resilience",
        }
    }

    const ALL: [Effect; 8] = [
        Self::Fatigue,
        Self::HighEnergy,
        Self::LowFocus,
        Self::HighFocus,
        Self::BurnoutRisk,
        Self::GoodHealth,
        Self::LowResilience,
        Self::HighResilience,
    ];
}

bitflags! {
    /// Set of active effects.
    ///
    /// Iteration through [`EffectSet::effects`] follows declaration order, which
    /// is also the order the classifier tests the thresholds in.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct EffectSet: u8 {
        const FATIGUE         = 1 << 0;
        const HIGH_ENERGY     = 1 << 1;
        const LOW_FOCUS       = 1 << 2;
        const HIGH_FOCUS      = 1 << 3;
        const BURNOUT_RISK    = 1 << 4;
        const GOOD_HEALTH     = 1 << 5;
        const LOW_RESILIENCE  = 1 << 6;
        const HIGH_RESILIENCE = 1 << 7;
    }
}

impl EffectSet {
    pub const fn has(self, effect: Effect) -> bool {
        self.contains(effect.flag())
    }

    pub fn add(&mut self, effect: Effect) {
        self.insert(effect.flag());
    }

    /// Active effects in declaration order.
    pub fn effects(self) -> impl Iterator<Item = Effect> {
        Effect::ALL.into_iter().filter(move |e| self.has(*e))
    }

    pub fn buffs(self) -> impl Iterator<Item = Effect> {
        self.effects().filter(|e| e.is_buff())
    }

    pub fn debuffs(self) -> impl Iterator<Item = Effect> {
        self.effects().filter(|e| !e.is_buff())
    }
}

impl FromIterator<Effect> for EffectSet {
    fn from_iter<I: IntoIterator<Item = Effect>>(iter: I) -> Self {
        iter.into_iter()
            .fold(EffectSet::empty(), |set, effect| set | effect.flag())
    }
}

// Serialized as a list of effect names rather than the raw bits.
#[cfg(feature = "serde")]
impl serde::Serialize for EffectSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.effects())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EffectSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let effects = <Vec<Effect> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(effects.into_iter().collect())
    }
}

/// Classifies a stat vector into its active effects.
pub fn determine_effects(stats: &Stats) -> EffectSet {
    let mut effects = EffectSet::empty();

    if stats.energy < RulesConfig::LOW_STAT {
        effects.add(Effect::Fatigue);
    }
    if stats.energy >= RulesConfig::HIGH_ENERGY {
        effects.add(Effect::HighEnergy);
    }
    if stats.focus < RulesConfig::LOW_STAT {
        effects.add(Effect::LowFocus);
    }
    if stats.focus >= RulesConfig::HIGH_FOCUS {
        effects.add(Effect::HighFocus);
    }
    if stats.health < RulesConfig::LOW_STAT {
        effects.add(Effect::BurnoutRisk);
    }
    if stats.health >= RulesConfig::HIGH_HEALTH {
        effects.add(Effect::GoodHealth);
    }
    if stats.resilience < RulesConfig::LOW_STAT {
        effects.add(Effect::LowResilience);
    }
    if stats.resilience >= RulesConfig::HIGH_RESILIENCE {
        effects.add(Effect::HighResilience);
    }

    effects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_high_stats_give_every_buff() {
        let effects = determine_effects(&Stats::new(65, 85, 65, 75));
        let listed: Vec<Effect> = effects.effects().collect();
        assert_eq!(
            listed,
            vec![
                Effect::HighEnergy,
                Effect::HighFocus,
                Effect::GoodHealth,
                Effect::HighResilience
            ]
        );
        assert_eq!(effects.debuffs().count(), 0);
    }

    #[test]
    fn thresholds_are_exact() {
        assert!(determine_effects(&Stats::new(50, 39, 50, 50)).has(Effect::Fatigue));
        assert!(!determine_effects(&Stats::new(50, 40, 50, 50)).has(Effect::Fatigue));
        assert!(!determine_effects(&Stats::new(50, 64, 50, 50)).has(Effect::HighEnergy));
        assert!(determine_effects(&Stats::new(50, 65, 50, 50)).has(Effect::HighEnergy));
        assert!(determine_effects(&Stats::new(50, 50, 60, 50)).has(Effect::HighFocus));
        assert!(determine_effects(&Stats::new(39, 50, 50, 50)).has(Effect::BurnoutRisk));
        assert!(determine_effects(&Stats::new(50, 50, 50, 60)).has(Effect::HighResilience));
    }

    #[test]
    fn middle_band_yields_nothing() {
        assert!(determine_effects(&Stats::BASELINE).is_empty());
    }

    #[test]
    fn low_and_high_never_coexist_per_stat() {
        for value in 0..=100 {
            let effects = determine_effects(&Stats::uniform(value));
            assert!(!(effects.has(Effect::Fatigue) && effects.has(Effect::HighEnergy)));
            assert!(!(effects.has(Effect::LowFocus) && effects.has(Effect::HighFocus)));
            assert!(effects.effects().count() <= 4);
        }
    }

    #[test]
    fn collects_from_iterator() {
        let set: EffectSet = [Effect::Fatigue, Effect::LowFocus].into_iter().collect();
        assert_eq!(set, EffectSet::FATIGUE | EffectSet::LOW_FOCUS);
        assert_eq!("burnout_risk".parse::<Effect>(), Ok(Effect::BurnoutRisk));
    }
}
