//! Experience ladder.
//!
//! Reaching level `L >= 2` costs the sum of an arithmetic series that starts
//! at [`RulesConfig::BASE_XP`] and grows by [`RulesConfig::XP_INCREMENT`] per
//! level step:
//!
//! ```text
//! threshold(L) = Σ_{k=2..L} (100 + 40·(k − 2))
//!              = 100·n + 20·n·(n − 1),  n = L − 1
//! ```
//!
//! Level is always a view over the total XP and is never stored on its own.

use crate::config::RulesConfig;

/// Level information derived from a total XP amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XpInfo {
    pub level: u32,
    pub total_xp: u64,
    /// Cumulative XP at which `level + 1` is reached.
    pub xp_for_next_level: u64,
    /// XP earned since reaching `level`.
    pub xp_progress_in_level: u64,
}

impl XpInfo {
    /// Returns the info for `total_xp + gained`.
    #[must_use]
    pub fn add(&self, gained: u64) -> Self {
        calculate_level_from_xp(self.total_xp.saturating_add(gained))
    }

    /// XP span of the current level.
    pub fn level_span(&self) -> u64 {
        self.xp_for_next_level
            .saturating_sub(xp_required_for_level(self.level))
    }

    /// Fraction of the current level completed, in `[0, 1)`.
    pub fn progress_ratio(&self) -> f64 {
        match self.level_span() {
            0 => 0.0,
            span => self.xp_progress_in_level as f64 / span as f64,
        }
    }
}

impl Default for XpInfo {
    fn default() -> Self {
        calculate_level_from_xp(0)
    }
}

/// Cumulative XP required to reach `level`. Level 1 (and below) requires 0.
///
/// Saturates at `u64::MAX` for levels that can never be reached.
pub const fn xp_required_for_level(level: u32) -> u64 {
    if level <= 1 {
        return 0;
    }
    let n = (level - 1) as u64;
    let base = RulesConfig::BASE_XP.saturating_mul(n);
    // n < 2^32, so n·(n − 1) fits in u64.
    let growth = RulesConfig::XP_INCREMENT.saturating_mul(n * (n - 1) / 2);
    base.saturating_add(growth)
}

/// Finds the highest level whose threshold `total_xp` has reached.
///
/// Scans upward from level 1, carrying the next step cost so each level costs
/// one addition.
pub fn calculate_level_from_xp(total_xp: u64) -> XpInfo {
    let mut level = 1u32;
    let mut current_threshold = 0u64;
    let mut step = RulesConfig::BASE_XP;

    let next_threshold = loop {
        match current_threshold.checked_add(step) {
            Some(next) if total_xp >= next => {
                level += 1;
                current_threshold = next;
                step += RulesConfig::XP_INCREMENT;
            }
            Some(next) => break next,
            None => break u64::MAX,
        }
    };

    XpInfo {
        level,
        total_xp,
        xp_for_next_level: next_threshold,
        xp_progress_in_level: total_xp - current_threshold,
    }
}
