//! The once-per-day pipeline that ties every rule together.
//!
//! [`process_day`] is pure: it reads the day's input, the manual completions
//! and the caller's [`PreviousState`], and returns a fresh [`DayResult`]. The
//! caller owns persistence and decides when a new day starts.

use crate::boss::{
    Boss, BossKind, Penalty, check_calendar_event, create_boss, failure_penalty, update_boss,
};
use crate::calendar::CalendarEvent;
use crate::character::{CharacterState, determine_character_state};
use crate::config::RulesConfig;
use crate::effects::{EffectSet, determine_effects};
use crate::input::DailyInput;
use crate::leveling::{XpInfo, calculate_level_from_xp};
use crate::quest::{Quest, QuestId, check_quest_completion, generate_daily_quests};
use crate::stats::{StatKind, Stats, calculate_stats};

/// Name of the boss summoned by a stat slump.
pub const SLUMP_BOSS_NAME: &str = "Slump";

/// Snapshot carried from the previous day into [`process_day`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PreviousState {
    /// Yesterday's stats; the baseline is used when absent.
    pub stats: Option<Stats>,
    pub total_xp: u64,
    pub boss: Option<Boss>,
    /// Quests drawn yesterday. Excluded from today's draw.
    pub active_quests: Vec<QuestId>,
    /// Nearest pending deadline, if any.
    pub calendar_event: Option<CalendarEvent>,
    /// Consecutive days with both energy and focus weak.
    pub slump_days: u32,
}

/// Today's quests split by completion.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QuestBoard {
    pub active: Vec<Quest>,
    pub completed: Vec<Quest>,
}

impl QuestBoard {
    /// Every quest drawn today, active first.
    pub fn quest_ids(&self) -> Vec<QuestId> {
        self.active
            .iter()
            .chain(&self.completed)
            .map(|q| q.id)
            .collect()
    }

    pub fn contains(&self, id: QuestId) -> bool {
        self.active.iter().chain(&self.completed).any(|q| q.id == id)
    }
}

/// Everything computed for one day.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DayResult {
    pub stats: Stats,
    pub effects: EffectSet,
    pub character: CharacterState,
    pub quests: QuestBoard,
    pub xp: XpInfo,
    /// XP earned from today's quests.
    pub xp_gained: u64,
    pub boss: Option<Boss>,
    /// Advisory only; never applied to `stats`.
    pub penalty: Option<Penalty>,
    pub slump_days: u32,
}

impl DayResult {
    /// True if today's XP crossed at least one level threshold.
    pub fn leveled_up(&self, previous_total: u64) -> bool {
        self.xp.level > calculate_level_from_xp(previous_total).level
    }
}

/// Runs the full daily pipeline.
///
/// 1. stats, effects and character from `input`,
/// 2. quest draw excluding yesterday's quests,
/// 3. completion and XP,
/// 4. boss spawn (calendar first, then slump on the day the streak reaches
///    the trigger) when none is tracked,
/// 5. boss update and penalty while it is active.
///
/// Calling this more than once per day with the same `previous` yields the
/// same result; feeding it an already-advanced `previous` applies the boss
/// update twice.
pub fn process_day(input: &DailyInput, previous: &PreviousState, manual: &[QuestId]) -> DayResult {
    let prev_stats = previous.stats.unwrap_or(Stats::BASELINE);

    let stats = calculate_stats(input);
    let effects = determine_effects(&stats);
    let character = determine_character_state(&stats, effects);

    let drawn = generate_daily_quests(&stats, effects, &previous.active_quests);
    let report = check_quest_completion(&drawn, input, manual);
    let active = drawn
        .iter()
        .filter(|q| !report.is_completed(q.id))
        .copied()
        .collect();
    let xp = calculate_level_from_xp(previous.total_xp.saturating_add(report.xp_gained));

    let slump_days = if in_slump(&stats) {
        previous.slump_days.saturating_add(1)
    } else {
        0
    };

    let mut boss = previous.boss.clone();
    if boss.is_none() {
        boss = previous
            .calendar_event
            .as_ref()
            .and_then(check_calendar_event);
    }
    // Only the day the streak reaches the trigger summons; a streak that
    // outlives its boss does not summon another.
    if boss.is_none() && slump_days == RulesConfig::SLUMP_TRIGGER_DAYS {
        boss = Some(create_boss(
            SLUMP_BOSS_NAME,
            BossKind::Stat,
            RulesConfig::SLUMP_BOSS_DAYS,
        ));
    }

    let mut penalty = None;
    if let Some(current) = boss.as_mut().filter(|b| b.active) {
        *current = update_boss(current, &prev_stats, &stats);
        penalty = failure_penalty(current);
    }

    DayResult {
        stats,
        effects,
        character,
        quests: QuestBoard {
            active,
            completed: report.completed,
        },
        xp,
        xp_gained: report.xp_gained,
        boss,
        penalty,
        slump_days,
    }
}

fn in_slump(stats: &Stats) -> bool {
    stats.is_weak(StatKind::Energy) && stats.is_weak(StatKind::Focus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boss::BossStatus;
    use crate::calendar::Pressure;
    use crate::character::Mood;
    use crate::effects::Effect;

    fn healthy() -> DailyInput {
        DailyInput::new(8.0, 2.0, 1.0, 4.0, true)
    }

    fn rough() -> DailyInput {
        DailyInput::new(4.0, 8.0, 5.0, 1.0, false)
    }

    #[test]
    fn healthy_first_day() {
        let result = process_day(&healthy(), &PreviousState::default(), &[]);

        assert_eq!(result.stats, Stats::new(65, 85, 65, 75));
        for effect in [
            Effect::HighEnergy,
            Effect::HighFocus,
            Effect::GoodHealth,
            Effect::HighResilience,
        ] {
            assert!(result.effects.has(effect), "{effect} missing");
        }
        assert_eq!(result.character, CharacterState::ENERGETIC);

        assert_eq!(
            result.quests.completed.iter().map(|q| q.id).collect::<Vec<_>>(),
            vec![QuestId::Water3l]
        );
        assert_eq!(
            result.quests.active.iter().map(|q| q.id).collect::<Vec<_>>(),
            vec![QuestId::Breathing10min, QuestId::ShortWalk]
        );
        assert_eq!(result.xp_gained, 15);
        assert_eq!(result.xp.total_xp, 15);
        assert_eq!(result.xp.level, 1);
        assert_eq!(result.boss, None);
        assert_eq!(result.penalty, None);
    }

    #[test]
    fn manual_completion_moves_quest_and_adds_xp() {
        let previous = PreviousState {
            total_xp: 90,
            ..PreviousState::default()
        };
        let result = process_day(&healthy(), &previous, &[QuestId::ShortWalk]);

        assert_eq!(result.quests.active.len(), 1);
        assert_eq!(result.quests.completed.len(), 2);
        assert_eq!(result.xp_gained, 25);
        assert_eq!(result.xp.total_xp, 115);
        assert!(result.leveled_up(previous.total_xp));
    }

    #[test]
    fn yesterdays_quests_are_not_redrawn() {
        let first = process_day(&healthy(), &PreviousState::default(), &[]);
        let previous = PreviousState {
            active_quests: first.quests.quest_ids(),
            ..PreviousState::default()
        };
        let second = process_day(&healthy(), &previous, &[]);

        assert_eq!(second.quests.quest_ids(), vec![QuestId::PlanDay]);
    }

    #[test]
    fn calendar_event_spawns_and_updates_boss() {
        let previous = PreviousState {
            calendar_event: Some(CalendarEvent::new("Exam", 2, Pressure::High)),
            ..PreviousState::default()
        };
        let result = process_day(&healthy(), &previous, &[]);
        let boss = result.boss.unwrap();

        assert_eq!(boss.name, "Exam Stress");
        // baseline -> healthy is an improving trend
        assert_eq!(boss.hp, 70);
        assert_eq!(boss.days_remaining, 1);
        assert_eq!(boss.status(), BossStatus::Active);
    }

    #[test]
    fn distant_event_spawns_nothing() {
        let previous = PreviousState {
            calendar_event: Some(CalendarEvent::new("Trip", 10, Pressure::Low)),
            ..PreviousState::default()
        };
        assert_eq!(process_day(&healthy(), &previous, &[]).boss, None);
    }

    #[test]
    fn tracked_boss_blocks_a_new_one() {
        let existing = create_boss("Deadline Stress", BossKind::Calendar, 3);
        let previous = PreviousState {
            stats: Some(Stats::new(65, 85, 65, 75)),
            boss: Some(existing),
            calendar_event: Some(CalendarEvent::new("Exam", 1, Pressure::High)),
            ..PreviousState::default()
        };
        let boss = process_day(&healthy(), &previous, &[]).boss.unwrap();

        assert_eq!(boss.name, "Deadline Stress");
        // same stats as yesterday
        assert_eq!(boss.hp, 90);
    }

    #[test]
    fn boss_defeat_through_the_pipeline() {
        let previous = PreviousState {
            stats: Some(Stats::new(50, 50, 50, 50)),
            boss: Some(Boss {
                hp: 25,
                ..create_boss("Exam Stress", BossKind::Calendar, 3)
            }),
            ..PreviousState::default()
        };
        let result = process_day(&healthy(), &previous, &[]);
        let boss = result.boss.unwrap();

        assert_eq!(boss.status(), BossStatus::Defeated);
        assert_eq!(boss.hp, 0);
        assert_eq!(result.penalty, None);
    }

    #[test]
    fn boss_escape_emits_penalty() {
        let previous = PreviousState {
            stats: Some(Stats::new(65, 85, 65, 75)),
            boss: Some(Boss {
                hp: 50,
                ..create_boss("Exam Stress", BossKind::Calendar, 1)
            }),
            ..PreviousState::default()
        };
        let result = process_day(&rough(), &previous, &[]);

        assert_eq!(result.boss.unwrap().status(), BossStatus::Escaped);
        assert_eq!(result.penalty, Some(Penalty::ESCAPE));
        // advisory: stats are untouched
        assert_eq!(result.stats, calculate_stats(&rough()));
    }

    #[test]
    fn terminal_boss_is_carried_without_update() {
        let defeated = Boss {
            hp: 0,
            active: false,
            defeated: true,
            ..create_boss("Exam Stress", BossKind::Calendar, 1)
        };
        let previous = PreviousState {
            boss: Some(defeated.clone()),
            ..PreviousState::default()
        };
        let result = process_day(&rough(), &previous, &[]);
        assert_eq!(result.boss, Some(defeated));
        assert_eq!(result.penalty, None);
    }

    #[test]
    fn slump_needs_two_days() {
        let first = process_day(&rough(), &PreviousState::default(), &[]);
        assert_eq!(first.slump_days, 1);
        assert_eq!(first.boss, None);
        assert_eq!(first.character.mood, Mood::Stressed);

        let previous = PreviousState {
            stats: Some(first.stats),
            slump_days: first.slump_days,
            ..PreviousState::default()
        };
        let second = process_day(&rough(), &previous, &[]);
        let boss = second.boss.unwrap();

        assert_eq!(second.slump_days, 2);
        assert_eq!(boss.name, SLUMP_BOSS_NAME);
        assert_eq!(boss.kind, BossKind::Stat);
        // flat trend on the spawn day
        assert_eq!(boss.hp, 90);
        assert_eq!(boss.days_remaining, 2);
    }

    #[test]
    fn long_slump_summons_only_once() {
        let previous = PreviousState {
            stats: Some(calculate_stats(&rough())),
            slump_days: 4,
            ..PreviousState::default()
        };
        let result = process_day(&rough(), &previous, &[]);
        assert_eq!(result.slump_days, 5);
        assert_eq!(result.boss, None);
    }

    #[test]
    fn far_past_event_does_not_panic() {
        let previous = PreviousState {
            calendar_event: Some(CalendarEvent::new("Old", -3_000_000_000, Pressure::Low)),
            ..PreviousState::default()
        };
        let boss = process_day(&healthy(), &previous, &[]).boss.unwrap();
        assert_eq!(boss.status(), BossStatus::Escaped);
    }

    #[test]
    fn good_day_resets_slump() {
        let previous = PreviousState {
            slump_days: 5,
            ..PreviousState::default()
        };
        assert_eq!(process_day(&healthy(), &previous, &[]).slump_days, 0);
    }

    #[test]
    fn calendar_boss_wins_over_slump() {
        let previous = PreviousState {
            slump_days: 3,
            calendar_event: Some(CalendarEvent::new("Exam", 3, Pressure::Medium)),
            ..PreviousState::default()
        };
        let boss = process_day(&rough(), &previous, &[]).boss.unwrap();
        assert_eq!(boss.kind, BossKind::Calendar);
    }

    #[test]
    fn repeated_calls_agree() {
        let previous = PreviousState {
            stats: Some(Stats::uniform(40)),
            total_xp: 300,
            calendar_event: Some(CalendarEvent::new("Exam", 1, Pressure::Low)),
            ..PreviousState::default()
        };
        let manual = [QuestId::Breathing10min];
        assert_eq!(
            process_day(&healthy(), &previous, &manual),
            process_day(&healthy(), &previous, &manual)
        );
    }
}
