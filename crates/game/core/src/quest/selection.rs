use arrayvec::ArrayVec;

use super::{Quest, QuestId, QuestKind, catalog};
use crate::config::RulesConfig;
use crate::effects::EffectSet;
use crate::stats::{StatKind, Stats};

/// Quests drawn for a single day, in selection order.
pub type DailyQuests = ArrayVec<Quest, { RulesConfig::MAX_DAILY_QUESTS }>;

/// Tracked stats below the weak threshold, in energy, focus, resilience order.
pub fn weak_stats(stats: &Stats) -> impl Iterator<Item = StatKind> + '_ {
    StatKind::TRACKED
        .into_iter()
        .filter(move |kind| stats.is_weak(*kind))
}

/// Draws today's quests from the catalog.
///
/// Three greedy passes over the catalog, each in catalog order:
///
/// 1. one corrective quest per weak stat,
/// 2. support quests until the board holds [`RulesConfig::SUPPORT_FILL_TARGET`],
/// 3. a single preventive quest.
///
/// Quests in `recent` are skipped in every pass. The board is capped at
/// [`RulesConfig::MAX_DAILY_QUESTS`].
///
/// `_effects` is accepted so callers pass the same view the mood resolver
/// sees; selection currently reads stats only.
pub fn generate_daily_quests(
    stats: &Stats,
    _effects: EffectSet,
    recent: &[QuestId],
) -> DailyQuests {
    let mut board = Board {
        quests: DailyQuests::new(),
        recent,
    };

    for stat in weak_stats(stats) {
        let pick = board.first_eligible(|q| q.kind == QuestKind::Corrective && q.targets_stat(stat));
        if let Some(quest) = pick {
            board.push(quest);
        }
    }

    for quest in catalog() {
        if board.quests.len() >= RulesConfig::SUPPORT_FILL_TARGET {
            break;
        }
        if quest.kind == QuestKind::Support && board.eligible(quest) {
            board.push(*quest);
        }
    }

    if let Some(quest) = board.first_eligible(|q| q.kind == QuestKind::Preventive) {
        board.push(quest);
    }

    board.quests
}

struct Board<'a> {
    quests: DailyQuests,
    recent: &'a [QuestId],
}

impl Board<'_> {
    fn eligible(&self, quest: &Quest) -> bool {
        !self.recent.contains(&quest.id) && !self.quests.iter().any(|q| q.id == quest.id)
    }

    fn first_eligible(&self, predicate: impl Fn(&Quest) -> bool) -> Option<Quest> {
        catalog()
            .iter()
            .find(|q| predicate(q) && self.eligible(q))
            .copied()
    }

    // Pushes past the cap are dropped, which is the truncation step.
    fn push(&mut self, quest: Quest) {
        let _ = self.quests.try_push(quest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::determine_effects;

    fn ids(quests: &DailyQuests) -> Vec<QuestId> {
        quests.iter().map(|q| q.id).collect()
    }

    fn generate(stats: Stats, recent: &[QuestId]) -> Vec<QuestId> {
        ids(&generate_daily_quests(&stats, determine_effects(&stats), recent))
    }

    #[test]
    fn healthy_stats_get_support_and_preventive() {
        assert_eq!(
            generate(Stats::uniform(70), &[]),
            vec![QuestId::Water3l, QuestId::Breathing10min, QuestId::ShortWalk]
        );
    }

    #[test]
    fn weak_energy_and_focus_get_both_correctives() {
        let stats = Stats::new(50, 30, 30, 50);
        assert_eq!(
            generate(stats, &[]),
            vec![
                QuestId::Sleep7h,
                QuestId::ScreenUnder4h,
                QuestId::Water3l,
                QuestId::ShortWalk
            ]
        );
    }

    #[test]
    fn weak_focus_alone_prefers_sleep() {
        // sleep_7h targets focus too and comes first in the catalog.
        let stats = Stats::new(50, 50, 30, 50);
        assert_eq!(generate(stats, &[])[0], QuestId::Sleep7h);
    }

    #[test]
    fn weak_resilience_has_no_corrective() {
        let stats = Stats::new(50, 50, 50, 10);
        assert_eq!(
            generate(stats, &[]),
            vec![QuestId::Water3l, QuestId::Breathing10min, QuestId::ShortWalk]
        );
    }

    #[test]
    fn recent_quests_are_skipped() {
        let stats = Stats::new(50, 30, 30, 50);
        let recent = [QuestId::Sleep7h, QuestId::Water3l, QuestId::ShortWalk];
        assert_eq!(
            generate(stats, &recent),
            vec![QuestId::ScreenUnder4h, QuestId::Breathing10min, QuestId::PlanDay]
        );
    }

    #[test]
    fn everything_recent_yields_empty_board() {
        let all: Vec<QuestId> = catalog().iter().map(|q| q.id).collect();
        assert!(generate(Stats::uniform(0), &all).is_empty());
    }

    #[test]
    fn selection_is_deterministic_and_capped() {
        for value in (0..=100).step_by(5) {
            for energy in [10, 50, 90] {
                let stats = Stats::new(value, energy, value, 100 - value);
                let first = generate(stats, &[]);
                assert_eq!(first, generate(stats, &[]));
                assert!(first.len() <= RulesConfig::MAX_DAILY_QUESTS);

                let mut unique = first.clone();
                unique.sort();
                unique.dedup();
                assert_eq!(unique.len(), first.len());
            }
        }
    }
}
