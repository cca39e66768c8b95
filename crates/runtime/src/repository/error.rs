//! Error types raised by repository implementations.

use thiserror::Error;

use super::Slot;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("state repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("corrupted data in slot `{slot}`: {reason}")]
    CorruptedData { slot: Slot, reason: String },
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
