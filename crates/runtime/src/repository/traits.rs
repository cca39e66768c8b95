//! Repository contract for saving and loading player state slots.

use super::{Result, Slot};

/// Text store keyed by [`Slot`].
///
/// Implementations hold at most one value per slot and replace it on every
/// [`store`](StateRepository::store). A single writer is assumed.
pub trait StateRepository: Send + Sync {
    /// Load the raw JSON stored in `slot`.
    fn load(&self, slot: Slot) -> Result<Option<String>>;

    /// Replace the contents of `slot`.
    fn store(&self, slot: Slot, value: &str) -> Result<()>;

    /// Delete `slot`. Removing an empty slot is not an error.
    fn remove(&self, slot: Slot) -> Result<()>;

    fn exists(&self, slot: Slot) -> bool;
}

impl<R: StateRepository + ?Sized> StateRepository for Box<R> {
    fn load(&self, slot: Slot) -> Result<Option<String>> {
        (**self).load(slot)
    }

    fn store(&self, slot: Slot, value: &str) -> Result<()> {
        (**self).store(slot, value)
    }

    fn remove(&self, slot: Slot) -> Result<()> {
        (**self).remove(slot)
    }

    fn exists(&self, slot: Slot) -> bool {
        (**self).exists(slot)
    }
}
