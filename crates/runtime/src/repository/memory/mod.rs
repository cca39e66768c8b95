//! In-memory repository implementation for testing and development.

mod state;

pub use state::InMemoryStateRepo;
