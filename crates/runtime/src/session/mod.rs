//! Player session over the persisted state slots.
//!
//! [`Session`] is the only writer of the slots. It turns wall-clock instants
//! into game days, enforces the daily input lock and performs the
//! once-per-day advance: read yesterday's record, run
//! [`process_day`](respawn_core::process_day), persist the new record.
//! Anything that changes today after the advance (manual quests, work tasks)
//! edits today's [`DayRecord`] and re-evaluates it, so nothing is counted twice.
//!
//! Storing the [`DayRecord`] commits an advance. Every other slot touched by
//! it (XP mirror, arrived events, completed tasks) is derived from the record
//! and brought in line afterwards, so a failed write is repaired by the next
//! call instead of losing or doubling anything.

mod calendar;
mod tasks;

use chrono::{NaiveDate, NaiveDateTime};
use respawn_core::{
    Boss, BossStatus, CalendarEvent, DailyInput, DayResult, PreviousState, QuestId, XpInfo,
    calculate_level_from_xp,
};
use tracing::{debug, info, warn};

pub use tasks::TaskCompletion;

use crate::clock::GameClock;
use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::records::{CompletedTask, DayRecord, LoggedInput, Profile, StoredEvent};
use crate::repository::{
    FileStateRepository, InMemoryStateRepo, Slot, SlotStore, StateRepository,
};

pub struct Session<R> {
    store: SlotStore<R>,
    clock: GameClock,
}

impl Session<Box<dyn StateRepository>> {
    /// Opens the repository selected by `config`.
    pub fn open(config: &RuntimeConfig) -> Result<Self> {
        let repo: Box<dyn StateRepository> = if config.in_memory {
            info!("Using in-memory state; nothing will be saved");
            Box::new(InMemoryStateRepo::new())
        } else {
            info!("Using state directory {}", config.data_dir.display());
            Box::new(FileStateRepository::new(&config.data_dir)?)
        };
        Ok(Self::new(repo, GameClock::new(config.reset_hour)))
    }
}

impl<R: StateRepository> Session<R> {
    pub fn new(repo: R, clock: GameClock) -> Self {
        Self {
            store: SlotStore::new(repo),
            clock,
        }
    }

    pub fn clock(&self) -> GameClock {
        self.clock
    }

    pub fn repository(&self) -> &R {
        self.store.repository()
    }

    // ===== profile =====

    pub fn set_profile(&self, profile: &Profile) -> Result<()> {
        if profile.username.trim().is_empty() {
            return Err(RuntimeError::InvalidProfile("username is empty".into()));
        }
        if !profile.gender.avatars().contains(&profile.avatar.as_str()) {
            return Err(RuntimeError::InvalidProfile(format!(
                "avatar `{}` is not available for {}",
                profile.avatar, profile.gender
            )));
        }
        let profile = Profile {
            username: profile.username.trim().to_owned(),
            ..profile.clone()
        };
        self.store.set(Slot::Profile, &profile)?;
        info!("Profile saved for {}", profile.username);
        Ok(())
    }

    pub fn profile(&self) -> Result<Option<Profile>> {
        Ok(self.store.get(Slot::Profile)?)
    }

    // ===== daily input =====

    /// Logs today's input. Once logged, input stays locked until the next
    /// reset.
    pub fn submit_input(&self, input: DailyInput, now: NaiveDateTime) -> Result<NaiveDateTime> {
        if let Some(until) = self.store.get::<NaiveDateTime>(Slot::DailyLock)?
            && until > now
        {
            warn!("Rejected daily input: locked until {}", until);
            return Err(RuntimeError::InputLocked { until });
        }

        let day = self.clock.game_day(now);
        let until = self.clock.next_reset(now);
        self.store.set(Slot::DailyInput, &LoggedInput { day, input })?;
        self.store.set(Slot::DailyLock, &until)?;

        info!(%day, "Daily input logged; locked until {}", until);
        Ok(until)
    }

    /// Today's logged input, if any.
    pub fn daily_input(&self, now: NaiveDateTime) -> Result<Option<DailyInput>> {
        let today = self.clock.game_day(now);
        Ok(self
            .store
            .get::<LoggedInput>(Slot::DailyInput)?
            .filter(|logged| logged.day == today)
            .map(|logged| logged.input))
    }

    pub fn locked_until(&self, now: NaiveDateTime) -> Result<Option<NaiveDateTime>> {
        Ok(self
            .store
            .get::<NaiveDateTime>(Slot::DailyLock)?
            .filter(|until| *until > now))
    }

    // ===== day advance =====

    /// Advances to the game day containing `now`.
    ///
    /// Within an already advanced day this recomputes the stored record and
    /// changes nothing.
    pub fn advance_day(&self, now: NaiveDateTime) -> Result<DayResult> {
        let today = self.clock.game_day(now);

        if self.profile()?.is_none() {
            return Err(RuntimeError::MissingProfile);
        }

        if let Some(record) = self.today_record(today)? {
            debug!(%today, "Day already advanced; recomputing");
            return self.settle(&record);
        }

        let input = self
            .daily_input(now)?
            .ok_or(RuntimeError::MissingDailyInput)?;

        let last = self.store.get::<DayRecord>(Slot::DayRecord)?;
        if let Some(last) = &last {
            // already paid for by the last record
            self.remove_arrived(last)?;
        }
        let yesterday = last.as_ref().map(DayRecord::evaluate);
        let total_xp = self.xp()?.total_xp;

        let (calendar_event, arrived) = self.resolve_calendar(today)?;
        let bonus_xp = arrived
            .iter()
            .fold(0u64, |sum, event| sum.saturating_add(event.pressure.xp_reward()));

        let boss = yesterday
            .as_ref()
            .and_then(|result| result.boss.clone())
            .filter(|boss| !boss.is_terminal());
        let previous = PreviousState {
            stats: yesterday.as_ref().map(|result| result.stats),
            total_xp,
            boss,
            active_quests: yesterday
                .as_ref()
                .map(|result| result.quests.quest_ids())
                .unwrap_or_default(),
            calendar_event,
            slump_days: yesterday.as_ref().map_or(0, |result| result.slump_days),
        };

        let record = DayRecord {
            day: today,
            input,
            previous,
            manual_completions: Vec::new(),
            bonus_xp,
            arrived,
        };

        let result = self.persist(&record)?;

        info!(
            %today,
            level = result.xp.level,
            total_xp = result.xp.total_xp,
            mood = %result.character.mood,
            "Advanced day"
        );
        log_boss_transition(record.previous.boss.as_ref(), &result);
        if let Some(penalty) = result.penalty {
            warn!(
                "Penalty issued: {} (-{} energy, -{} focus for {} day)",
                penalty.effect,
                penalty.energy_penalty,
                penalty.focus_penalty,
                penalty.duration_days
            );
        }

        Ok(result)
    }

    /// Today's result, if the day has been advanced.
    pub fn snapshot(&self, now: NaiveDateTime) -> Result<Option<DayResult>> {
        let today = self.clock.game_day(now);
        Ok(self.today_record(today)?.map(|record| record.evaluate()))
    }

    // ===== quests =====

    /// Marks a manual quest done and re-evaluates today.
    pub fn complete_quest(&self, id: QuestId, now: NaiveDateTime) -> Result<DayResult> {
        let today = self.clock.game_day(now);
        let Some(mut record) = self.today_record(today)? else {
            return Err(RuntimeError::QuestNotActive(id));
        };

        let current = record.evaluate();
        if !current.quests.contains(id) {
            return Err(RuntimeError::QuestNotActive(id));
        }
        if record.manual_completions.contains(&id) {
            debug!(quest = %id, "Quest already marked");
            return Ok(current);
        }

        record.manual_completions.push(id);
        let result = self.persist(&record)?;

        if result.quests.completed.iter().any(|q| q.id == id) {
            info!(quest = %id, xp = id.quest().xp, "Quest completed");
        }
        Ok(result)
    }

    // ===== xp =====

    /// Current total. The stored XP only ever trails the last record when a
    /// write after its commit failed, so the larger of the two wins.
    pub fn xp(&self) -> Result<XpInfo> {
        let stored = self.store.get::<XpInfo>(Slot::Xp)?.map_or(0, |xp| xp.total_xp);
        let recorded = self
            .store
            .get::<DayRecord>(Slot::DayRecord)?
            .map_or(0, |record| record.evaluate().xp.total_xp);
        Ok(calculate_level_from_xp(stored.max(recorded)))
    }

    /// Adds XP earned outside quests. Goes into today's record when the day
    /// has been advanced, otherwise straight into the stored total.
    fn grant_bonus(&self, xp: u64, today: NaiveDate) -> Result<XpInfo> {
        if let Some(mut record) = self.today_record(today)? {
            record.bonus_xp = record.bonus_xp.saturating_add(xp);
            return Ok(self.persist(&record)?.xp);
        }

        let before = self.xp()?;
        let after = before.add(xp);
        self.store.set(Slot::Xp, &after)?;
        log_level_up(before.level, after.level);
        Ok(after)
    }

    // ===== internals =====

    fn today_record(&self, today: NaiveDate) -> Result<Option<DayRecord>> {
        Ok(self
            .store
            .get::<DayRecord>(Slot::DayRecord)?
            .filter(|record| record.day == today))
    }

    /// Commits `record`, then brings the derived slots in line with it.
    fn persist(&self, record: &DayRecord) -> Result<DayResult> {
        let before = self.xp()?;
        self.store.set(Slot::DayRecord, record)?;

        let result = self.settle(record)?;
        log_level_up(before.level, result.xp.level);
        Ok(result)
    }

    /// Applies the side effects of a stored record. Safe to repeat.
    fn settle(&self, record: &DayRecord) -> Result<DayResult> {
        self.remove_arrived(record)?;
        self.prune_completed_tasks(record.day)?;

        let result = record.evaluate();
        self.store.set(Slot::Xp, &result.xp)?;
        Ok(result)
    }

    /// Splits the calendar as of `today`: the nearest pending event and the
    /// events that have arrived. Nothing is written.
    fn resolve_calendar(
        &self,
        today: NaiveDate,
    ) -> Result<(Option<CalendarEvent>, Vec<StoredEvent>)> {
        let events = self
            .store
            .get::<Vec<StoredEvent>>(Slot::CalendarEvents)?
            .unwrap_or_default();

        let (arrived, pending): (Vec<StoredEvent>, Vec<StoredEvent>) = events
            .into_iter()
            .partition(|event| event.days_left(today) <= 0);

        let nearest = pending
            .iter()
            .min_by_key(|event| event.due)
            .map(|event| event.to_event(today));
        Ok((nearest, arrived))
    }

    fn remove_arrived(&self, record: &DayRecord) -> Result<()> {
        if record.arrived.is_empty() {
            return Ok(());
        }
        let Some(mut events) = self.store.get::<Vec<StoredEvent>>(Slot::CalendarEvents)? else {
            return Ok(());
        };

        let before = events.len();
        events.retain(|event| !record.arrived.contains(event));
        if events.len() == before {
            return Ok(());
        }
        self.store.set(Slot::CalendarEvents, &events)?;

        for event in &record.arrived {
            info!(
                event = %event.name,
                pressure = %event.pressure,
                reward = event.pressure.xp_reward(),
                "Calendar event arrived"
            );
        }
        Ok(())
    }

    fn prune_completed_tasks(&self, today: NaiveDate) -> Result<()> {
        let Some(mut done) = self.store.get::<Vec<CompletedTask>>(Slot::CompletedTasks)? else {
            return Ok(());
        };
        let before = done.len();
        done.retain(|task| task.day == today);
        if done.len() != before {
            self.store.set(Slot::CompletedTasks, &done)?;
        }
        Ok(())
    }
}

fn log_level_up(before: u32, after: u32) {
    if after > before {
        info!("Level up: {} -> {}", before, after);
    }
}

fn log_boss_transition(previous: Option<&Boss>, result: &DayResult) {
    let Some(boss) = result.boss.as_ref() else {
        return;
    };
    if previous.is_none() {
        info!(boss = %boss.name, kind = %boss.kind, days = boss.days_remaining, "Boss appeared");
    }
    match boss.status() {
        BossStatus::Active => debug!(boss = %boss.name, hp = boss.hp, "Boss fight continues"),
        BossStatus::Defeated => info!(boss = %boss.name, "Boss defeated"),
        BossStatus::Escaped => warn!(boss = %boss.name, "Boss escaped"),
    }
}
