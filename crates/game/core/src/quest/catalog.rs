use super::{CompletionMode, Condition, ConditionKey, Quest, QuestId, QuestKind};
use crate::input::InputField;
use crate::stats::StatKind;

/// The fixed quest pool in selection order.
pub const QUEST_CATALOG: [Quest; 6] = [
    Quest {
        id: QuestId::Sleep7h,
        title: "Sleep at least 7 hours",
        kind: QuestKind::Corrective,
        completion: CompletionMode::Input,
        conditions: &[Condition::new(
            ConditionKey::at_least(InputField::SleepHours),
            7.0,
        )],
        xp: 25,
        targets: &[StatKind::Energy, StatKind::Focus],
        cooldown_days: 1,
    },
    Quest {
        id: QuestId::ScreenUnder4h,
        title: "Keep screen time under 4 hours",
        kind: QuestKind::Corrective,
        completion: CompletionMode::Input,
        conditions: &[Condition::new(
            ConditionKey::at_most(InputField::ScreenTime),
            4.0,
        )],
        xp: 20,
        targets: &[StatKind::Focus],
        cooldown_days: 1,
    },
    Quest {
        id: QuestId::Water3l,
        title: "Drink at least 3L of water",
        kind: QuestKind::Support,
        completion: CompletionMode::Input,
        conditions: &[Condition::new(
            ConditionKey::at_least(InputField::WaterIntake),
            3.0,
        )],
        xp: 15,
        targets: &[StatKind::Energy],
        cooldown_days: 1,
    },
    Quest {
        id: QuestId::Breathing10min,
        title: "10-minute breathing exercise",
        kind: QuestKind::Support,
        completion: CompletionMode::Manual,
        conditions: &[],
        xp: 10,
        targets: &[StatKind::Resilience],
        cooldown_days: 1,
    },
    Quest {
        id: QuestId::ShortWalk,
        title: "Take a short walk",
        kind: QuestKind::Preventive,
        completion: CompletionMode::Manual,
        conditions: &[],
        xp: 10,
        targets: &[StatKind::Health, StatKind::Resilience],
        cooldown_days: 2,
    },
    Quest {
        id: QuestId::PlanDay,
        title: "Plan tomorrow's tasks",
        kind: QuestKind::Preventive,
        completion: CompletionMode::Manual,
        conditions: &[],
        xp: 10,
        targets: &[],
        cooldown_days: 2,
    },
];

pub fn catalog() -> &'static [Quest] {
    &QUEST_CATALOG
}

pub(super) fn lookup(id: QuestId) -> &'static Quest {
    match id {
        QuestId::Sleep7h => &QUEST_CATALOG[0],
        QuestId::ScreenUnder4h => &QUEST_CATALOG[1],
        QuestId::Water3l => &QUEST_CATALOG[2],
        QuestId::Breathing10min => &QUEST_CATALOG[3],
        QuestId::ShortWalk => &QUEST_CATALOG[4],
        QuestId::PlanDay => &QUEST_CATALOG[5],
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn lookup_matches_every_id() {
        for id in QuestId::iter() {
            assert_eq!(lookup(id).id, id);
        }
    }

    #[test]
    fn catalog_spans_all_kinds_and_modes() {
        let kinds = [QuestKind::Corrective, QuestKind::Support, QuestKind::Preventive];
        for kind in kinds {
            assert!(catalog().iter().any(|q| q.kind == kind), "{kind} missing");
        }
        assert!(catalog().iter().any(|q| q.completion == CompletionMode::Input));
        assert!(catalog().iter().any(|q| q.completion == CompletionMode::Manual));
    }

    #[test]
    fn input_quests_carry_conditions() {
        for quest in catalog() {
            let has_conditions = !quest.conditions.is_empty();
            assert_eq!(
                has_conditions,
                quest.completion == CompletionMode::Input,
                "{}",
                quest.id
            );
        }
    }
}
