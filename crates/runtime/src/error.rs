//! Unified error type surfaced by the session API.
//!
//! Wraps repository failures and adds the domain refusals a player can hit
//! (missing setup, locked input, unknown quest, task or event).
use chrono::NaiveDateTime;
use respawn_core::QuestId;
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("no profile has been set up")]
    MissingProfile,

    #[error("invalid profile: {0}")]
    InvalidProfile(String),

    #[error("no daily input has been logged for today")]
    MissingDailyInput,

    #[error("daily input is locked until {until}")]
    InputLocked { until: NaiveDateTime },

    #[error("quest `{0}` is not on today's board")]
    QuestNotActive(QuestId),

    #[error("no task at index {0}")]
    TaskNotFound(usize),

    #[error("invalid task: {0}")]
    InvalidTask(String),

    #[error("no calendar event named `{0}`")]
    EventNotFound(String),

    #[error("invalid calendar event: {0}")]
    InvalidEvent(String),
}
