use chrono::{NaiveDate, NaiveDateTime};
use respawn_core::{BossKind, BossStatus, DailyInput, Mood, Penalty, QuestId};
use respawn_runtime::{GameClock, Gender, InMemoryStateRepo, Profile, RuntimeError, Session};

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 6, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn rough() -> DailyInput {
    DailyInput::new(4.0, 8.0, 5.0, 1.0, false)
}

fn healthy() -> DailyInput {
    DailyInput::new(8.0, 2.0, 1.0, 4.0, true)
}

fn new_session() -> Session<InMemoryStateRepo> {
    let session = Session::new(InMemoryStateRepo::new(), GameClock::new(4));
    session
        .set_profile(&Profile {
            username: "jun".into(),
            gender: Gender::Male,
            avatar: "m3".into(),
            email: Some("jun@example.com".into()),
        })
        .expect("Profile should be accepted");
    session
}

/// A week that slides into a slump, summons a boss and then recovers.
///
/// 1. Two rough days build a slump streak and summon the slump boss
/// 2. A third rough day keeps the boss healing
/// 3. Healthy days beat it down
#[test]
fn slump_week_scenario() {
    let session = new_session();

    // ================================================================
    // PHASE 1: Slump builds up
    // ================================================================
    session.submit_input(rough(), at(1, 9)).expect("Day 1 input");
    let day1 = session.advance_day(at(1, 9)).expect("Day 1 advance");
    assert_eq!(day1.slump_days, 1);
    assert_eq!(day1.boss, None);
    assert_eq!(day1.character.mood, Mood::Stressed);
    assert_eq!(
        day1.quests.quest_ids(),
        vec![
            QuestId::Sleep7h,
            QuestId::ScreenUnder4h,
            QuestId::Water3l,
            QuestId::ShortWalk
        ]
    );

    session.submit_input(rough(), at(2, 9)).expect("Day 2 input");
    let day2 = session.advance_day(at(2, 9)).expect("Day 2 advance");
    let boss = day2.boss.clone().expect("Slump boss should appear");
    assert_eq!(day2.slump_days, 2);
    assert_eq!(boss.kind, BossKind::Stat);
    assert_eq!(boss.hp, 90);
    assert_eq!(boss.days_remaining, 2);

    // ================================================================
    // PHASE 2: Boss escapes
    // ================================================================
    session.submit_input(rough(), at(3, 9)).expect("Day 3 input");
    let day3 = session.advance_day(at(3, 9)).expect("Day 3 advance");
    let boss = day3.boss.clone().expect("Boss is still tracked");
    assert_eq!(boss.hp, 80);
    assert_eq!(boss.days_remaining, 1);

    session.submit_input(rough(), at(4, 9)).expect("Day 4 input");
    let day4 = session.advance_day(at(4, 9)).expect("Day 4 advance");
    let boss = day4.boss.clone().expect("Escaped boss is shown on its last day");
    assert_eq!(boss.status(), BossStatus::Escaped);
    assert_eq!(day4.penalty, Some(Penalty::ESCAPE));

    // ================================================================
    // PHASE 3: Recovery, and a fresh boss can spawn again
    // ================================================================
    session.submit_input(healthy(), at(5, 9)).expect("Day 5 input");
    let day5 = session.advance_day(at(5, 9)).expect("Day 5 advance");
    assert_eq!(day5.boss, None);
    assert_eq!(day5.slump_days, 0);
    assert_eq!(day5.penalty, None);
}

#[test]
fn xp_only_grows() {
    let session = new_session();
    let mut last_total = 0;

    for day in 1..=6 {
        let input = if day % 2 == 0 { healthy() } else { rough() };
        session.submit_input(input, at(day, 8)).expect("Input");
        let result = session.advance_day(at(day, 8)).expect("Advance");

        for quest in result.quests.active.clone() {
            match session.complete_quest(quest.id, at(day, 20)) {
                Ok(result) => assert!(result.xp.total_xp >= last_total),
                Err(err) => panic!("Quest {} should be completable: {err}", quest.id),
            }
        }

        let xp = session.xp().expect("XP");
        assert!(xp.total_xp >= last_total);
        last_total = xp.total_xp;
    }

    assert!(last_total > 0);
}

#[test]
fn locked_input_cannot_be_replaced() {
    let session = new_session();
    session.submit_input(healthy(), at(1, 9)).expect("First input");

    match session.submit_input(rough(), at(1, 23)) {
        Err(RuntimeError::InputLocked { until }) => assert_eq!(until, at(2, 4)),
        other => panic!("Expected lock, got {other:?}"),
    }

    let result = session.advance_day(at(2, 1)).expect("Still day 1");
    assert_eq!(result.stats, respawn_core::calculate_stats(&healthy()));
}
