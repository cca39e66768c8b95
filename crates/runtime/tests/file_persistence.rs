use chrono::{NaiveDate, NaiveDateTime};
use respawn_core::{BossKind, DailyInput, Pressure, QuestId};
use respawn_runtime::{
    FileStateRepository, GameClock, Gender, Profile, RuntimeConfig, Session, Slot,
    StateRepository,
};
use tempfile::TempDir;

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 9, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn healthy() -> DailyInput {
    DailyInput::new(8.0, 2.0, 1.0, 4.0, true)
}

fn open(dir: &TempDir) -> Session<FileStateRepository> {
    let repo = FileStateRepository::new(dir.path()).expect("Failed to create repository");
    Session::new(repo, GameClock::new(4))
}

fn profile() -> Profile {
    Profile {
        username: "mina".into(),
        gender: Gender::Female,
        avatar: "f2".into(),
        email: None,
    }
}

#[test]
fn state_survives_reopening() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let first = {
        let session = open(&dir);
        session.set_profile(&profile()).expect("Profile");
        session.submit_input(healthy(), at(1, 9)).expect("Input");
        let due = NaiveDate::from_ymd_opt(2026, 9, 3).unwrap();
        session
            .add_event("Exam", due, Pressure::High, at(1, 9).date())
            .expect("Event");
        session.add_task("write summary", at(1, 9)).expect("Task");
        session.advance_day(at(1, 9)).expect("Advance")
    };

    for slot in [
        Slot::Profile,
        Slot::DailyInput,
        Slot::DayRecord,
        Slot::Xp,
        Slot::CalendarEvents,
    ] {
        assert!(
            dir.path().join(format!("{slot}.json")).exists(),
            "{slot}.json should be written"
        );
    }

    let session = open(&dir);
    assert_eq!(session.profile().unwrap(), Some(profile()));
    assert_eq!(session.tasks().unwrap().len(), 1);
    assert_eq!(session.snapshot(at(1, 22)).unwrap(), Some(first.clone()));
    assert_eq!(session.xp().unwrap(), first.xp);

    let boss = first.boss.clone().expect("Exam is two days out");
    assert_eq!(boss.kind, BossKind::Calendar);

    let result = session
        .complete_quest(QuestId::ShortWalk, at(1, 20))
        .expect("Short walk is on the board");
    assert_eq!(result.xp.total_xp, first.xp.total_xp + 10);

    let reopened = open(&dir);
    assert_eq!(reopened.xp().unwrap().total_xp, result.xp.total_xp);
    assert_eq!(reopened.advance_day(at(2, 1)).unwrap(), result);
}

#[test]
fn in_memory_config_writes_nothing() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = RuntimeConfig {
        data_dir: dir.path().join("unused"),
        in_memory: true,
        ..RuntimeConfig::default()
    };

    let session = Session::open(&config).expect("Open");
    session.set_profile(&profile()).expect("Profile");
    assert!(session.repository().exists(Slot::Profile));
    assert!(!config.data_dir.exists());
}

#[test]
fn file_config_opens_data_dir() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = RuntimeConfig {
        data_dir: dir.path().join("slots"),
        in_memory: false,
        ..RuntimeConfig::default()
    };

    let session = Session::open(&config).expect("Open");
    session.set_profile(&profile()).expect("Profile");
    assert!(config.data_dir.join("profile.json").exists());
}
