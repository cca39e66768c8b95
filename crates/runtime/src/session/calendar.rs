//! Calendar deadlines kept by the player.
//!
//! Events are stored with their due date; `days_left` is derived per game
//! day. Arrival is handled by the day advance.

use chrono::NaiveDate;
use respawn_core::Pressure;
use tracing::info;

use super::Session;
use crate::error::{Result, RuntimeError};
use crate::records::StoredEvent;
use crate::repository::{Slot, StateRepository};

impl<R: StateRepository> Session<R> {
    /// Adds a deadline. Names are unique and the due date may not be in the
    /// past.
    pub fn add_event(
        &self,
        name: &str,
        due: NaiveDate,
        pressure: Pressure,
        today: NaiveDate,
    ) -> Result<StoredEvent> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RuntimeError::InvalidEvent("name is empty".into()));
        }
        if due < today {
            return Err(RuntimeError::InvalidEvent(format!(
                "due date {due} is in the past"
            )));
        }

        let mut events = self.stored_events()?;
        if events.iter().any(|event| event.name == name) {
            return Err(RuntimeError::InvalidEvent(format!(
                "an event named `{name}` already exists"
            )));
        }

        let event = StoredEvent {
            name: name.to_owned(),
            due,
            pressure,
        };
        events.push(event.clone());
        events.sort_by_key(|event| event.due);
        self.store.set(Slot::CalendarEvents, &events)?;

        info!(event = %event.name, %due, %pressure, "Calendar event added");
        Ok(event)
    }

    pub fn remove_event(&self, name: &str) -> Result<StoredEvent> {
        let mut events = self.stored_events()?;
        let Some(position) = events.iter().position(|event| event.name == name) else {
            return Err(RuntimeError::EventNotFound(name.to_owned()));
        };
        let event = events.remove(position);
        self.store.set(Slot::CalendarEvents, &events)?;

        info!(event = %event.name, "Calendar event removed");
        Ok(event)
    }

    /// Stored events with their days left as of `today`, nearest first.
    pub fn events(&self, today: NaiveDate) -> Result<Vec<(StoredEvent, i64)>> {
        Ok(self
            .stored_events()?
            .into_iter()
            .map(|event| {
                let days_left = event.days_left(today);
                (event, days_left)
            })
            .collect())
    }

    fn stored_events(&self) -> Result<Vec<StoredEvent>> {
        Ok(self.store.get(Slot::CalendarEvents)?.unwrap_or_default())
    }
}
