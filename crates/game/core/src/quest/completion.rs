use super::{CompletionMode, Quest, QuestId};
use crate::input::DailyInput;

/// Quests completed for the day and the XP they award.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CompletionReport {
    pub completed: Vec<Quest>,
    pub xp_gained: u64,
}

impl CompletionReport {
    pub fn is_completed(&self, id: QuestId) -> bool {
        self.completed.iter().any(|q| q.id == id)
    }
}

/// Evaluates which of `quests` are complete.
///
/// Manual quests are complete when their id is in `manual`. Input quests are
/// complete when every condition holds against the raw input.
pub fn check_quest_completion(
    quests: &[Quest],
    input: &DailyInput,
    manual: &[QuestId],
) -> CompletionReport {
    let completed: Vec<Quest> = quests
        .iter()
        .filter(|quest| match quest.completion {
            CompletionMode::Manual => manual.contains(&quest.id),
            CompletionMode::Input => quest.conditions_met(input),
        })
        .copied()
        .collect();
    let xp_gained = completed.iter().map(|q| u64::from(q.xp)).sum();

    CompletionReport {
        completed,
        xp_gained,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputField;
    use crate::quest::{Condition, ConditionKey, QuestKind, catalog};

    fn quest(id: QuestId) -> Quest {
        *id.quest()
    }

    #[test]
    fn input_quests_follow_the_day() {
        let quests = [quest(QuestId::Sleep7h), quest(QuestId::ScreenUnder4h), quest(QuestId::Water3l)];
        let input = DailyInput::new(7.5, 5.0, 2.0, 3.0, false);

        let report = check_quest_completion(&quests, &input, &[]);
        assert!(report.is_completed(QuestId::Sleep7h));
        assert!(!report.is_completed(QuestId::ScreenUnder4h));
        assert!(report.is_completed(QuestId::Water3l));
        assert_eq!(report.xp_gained, 25 + 15);
    }

    #[test]
    fn manual_quests_need_marking() {
        let quests = [quest(QuestId::Breathing10min), quest(QuestId::PlanDay)];
        let input = DailyInput::default();

        let report = check_quest_completion(&quests, &input, &[QuestId::PlanDay]);
        assert_eq!(report.completed.len(), 1);
        assert!(report.is_completed(QuestId::PlanDay));
        assert_eq!(report.xp_gained, 10);
    }

    #[test]
    fn marking_an_unlisted_quest_does_nothing() {
        let quests = [quest(QuestId::Breathing10min)];
        let report = check_quest_completion(&quests, &DailyInput::default(), &[QuestId::ShortWalk]);
        assert_eq!(report, CompletionReport::default());
    }

    #[test]
    fn multi_condition_quests_need_every_condition() {
        static CONDITIONS: [Condition; 2] = [
            Condition::new(ConditionKey::at_least(InputField::SleepHours), 7.0),
            Condition::new(ConditionKey::at_most(InputField::StressLevel), 2.0),
        ];
        let combo = Quest {
            conditions: &CONDITIONS,
            ..quest(QuestId::Sleep7h)
        };
        let pass = DailyInput::new(8.0, 0.0, 2.0, 0.0, false);

        assert_eq!(check_quest_completion(&[combo], &pass, &[]).completed.len(), 1);

        let fail_sleep = DailyInput { sleep_hours: 6.0, ..pass };
        let fail_stress = DailyInput { stress_level: 3.0, ..pass };
        assert!(check_quest_completion(&[combo], &fail_sleep, &[]).completed.is_empty());
        assert!(check_quest_completion(&[combo], &fail_stress, &[]).completed.is_empty());
    }

    #[test]
    fn input_quest_without_conditions_never_completes() {
        let bare = Quest {
            conditions: &[],
            ..quest(QuestId::Water3l)
        };
        let report = check_quest_completion(&[bare], &DailyInput::new(8.0, 0.0, 0.0, 6.0, true), &[]);
        assert!(report.completed.is_empty());
    }

    #[test]
    fn conditions_read_raw_values() {
        // 13h of sleep clamps to 12 for stats, but the quest sees 13.
        static LONG_SLEEP: [Condition; 1] =
            [Condition::new(ConditionKey::at_least(InputField::SleepHours), 12.5)];
        let long_sleep = Quest {
            conditions: &LONG_SLEEP,
            ..quest(QuestId::Sleep7h)
        };
        let report = check_quest_completion(&[long_sleep], &DailyInput::new(13.0, 0.0, 0.0, 0.0, false), &[]);
        assert!(report.is_completed(QuestId::Sleep7h));
    }

    #[test]
    fn full_catalog_on_a_perfect_day() {
        let manual: Vec<QuestId> = catalog()
            .iter()
            .filter(|q| q.completion == CompletionMode::Manual)
            .map(|q| q.id)
            .collect();
        let report = check_quest_completion(catalog(), &DailyInput::new(8.0, 1.0, 0.0, 4.0, true), &manual);
        assert_eq!(report.completed.len(), catalog().len());
        assert_eq!(report.xp_gained, 25 + 20 + 15 + 10 + 10 + 10);
        assert!(report.completed.iter().any(|q| q.kind == QuestKind::Preventive));
    }
}
