//! Repository layer for persisted player state.
//!
//! State is split into named [`Slot`]s, each holding one JSON document.
//! Backends only move text; [`SlotStore`] adds the typed view on top.

mod error;
mod file;
mod memory;
mod slot;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileStateRepository;
pub use memory::InMemoryStateRepo;
pub use slot::{Slot, SlotStore};
pub use traits::StateRepository;
