//! Named state slots and the typed accessor over a [`StateRepository`].

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{RepositoryError, Result, StateRepository};

/// One persisted document.
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
#[strum(serialize_all = "snake_case")]
pub enum Slot {
    Profile,
    /// Today's logged input, tagged with its game day.
    DailyInput,
    Xp,
    Tasks,
    CompletedTasks,
    CalendarEvents,
    /// Instant until which the daily input cannot be replaced.
    DailyLock,
    /// Inputs of the last advanced day, enough to recompute it. Writing it
    /// is what commits a day advance.
    DayRecord,
}

/// Typed, JSON-encoded view over a repository.
pub struct SlotStore<R> {
    repo: R,
}

impl<R: StateRepository> SlotStore<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn get<T: DeserializeOwned>(&self, slot: Slot) -> Result<Option<T>> {
        let Some(raw) = self.repo.load(slot)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| RepositoryError::CorruptedData {
                slot,
                reason: e.to_string(),
            })
    }

    pub fn set<T: Serialize + ?Sized>(&self, slot: Slot, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value).map_err(|e| RepositoryError::Json(e.to_string()))?;
        self.repo.store(slot, &raw)
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::repository::InMemoryStateRepo;

    #[test]
    fn typed_round_trip() {
        let store = SlotStore::new(InMemoryStateRepo::new());
        store.set(Slot::Xp, &115u64).unwrap();

        assert_eq!(store.get::<u64>(Slot::Xp).unwrap(), Some(115));
        assert_eq!(store.get::<u64>(Slot::Tasks).unwrap(), None);
    }

    #[test]
    fn set_replaces_previous_value() {
        let store = SlotStore::new(InMemoryStateRepo::new());
        store.set(Slot::DailyLock, "x").unwrap();
        store.set(Slot::DailyLock, "y").unwrap();
        assert_eq!(store.get::<String>(Slot::DailyLock).unwrap().as_deref(), Some("y"));
    }

    #[test]
    fn garbage_is_reported_as_corruption() {
        let repo = InMemoryStateRepo::new();
        repo.store(Slot::Xp, "{not json").unwrap();
        let store = SlotStore::new(repo);

        let err = store.get::<u64>(Slot::Xp).unwrap_err();
        assert!(matches!(
            err,
            RepositoryError::CorruptedData { slot: Slot::Xp, .. }
        ));
    }

    #[test]
    fn slot_names_are_snake_case() {
        assert_eq!(Slot::CompletedTasks.as_ref(), "completed_tasks");
        assert_eq!("day_record".parse::<Slot>(), Ok(Slot::DayRecord));
    }

    #[test]
    fn day_record_owns_boss_and_completions() {
        for name in ["boss", "manual_completions", "last_day"] {
            assert!(name.parse::<Slot>().is_err(), "{name} has no slot of its own");
        }
        assert_eq!(Slot::iter().count(), 8);
    }
}
