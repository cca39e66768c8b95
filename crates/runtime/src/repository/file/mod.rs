//! File-based repository implementation.

mod state;

pub use state::FileStateRepository;
