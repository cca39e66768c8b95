//! Persistence and day-boundary orchestration around `respawn-core`.
//!
//! The rules engine is pure; this crate owns everything stateful around it.
//! Consumers open a [`Session`] over a [`StateRepository`] and drive it with
//! wall-clock instants.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the daily advance, quests, tasks and calendar
//! - [`repository`] stores JSON documents per [`Slot`]
//! - [`records`] defines the stored documents
//! - [`clock`] maps instants to game days
//! - [`config`] loads [`RuntimeConfig`] from the environment
pub mod clock;
pub mod config;
pub mod error;
pub mod records;
pub mod repository;
pub mod session;

pub use clock::GameClock;
pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use records::{
    CompletedTask, DayRecord, Gender, LoggedInput, Profile, StoredEvent, WorkTask,
};
pub use repository::{
    FileStateRepository, InMemoryStateRepo, RepositoryError, Slot, SlotStore, StateRepository,
};
pub use session::{Session, TaskCompletion};
