//! In-memory StateRepository implementation for tests and throwaway runs.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::repository::{RepositoryError, Result, Slot, StateRepository};

/// In-memory implementation of StateRepository.
///
/// Nothing survives the process.
pub struct InMemoryStateRepo {
    slots: RwLock<HashMap<Slot, String>>,
}

impl InMemoryStateRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.read().map(|slots| slots.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryStateRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl StateRepository for InMemoryStateRepo {
    fn load(&self, slot: Slot) -> Result<Option<String>> {
        let slots = self
            .slots
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(slots.get(&slot).cloned())
    }

    fn store(&self, slot: Slot, value: &str) -> Result<()> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        slots.insert(slot, value.to_owned());
        Ok(())
    }

    fn remove(&self, slot: Slot) -> Result<()> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        slots.remove(&slot);
        Ok(())
    }

    fn exists(&self, slot: Slot) -> bool {
        self.slots
            .read()
            .map(|slots| slots.contains_key(&slot))
            .unwrap_or(false)
    }
}
