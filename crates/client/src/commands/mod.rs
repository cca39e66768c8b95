//! Command implementations for the `respawn` binary
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod complete;
mod event;
mod log;
mod profile;
mod quests;
mod status;
mod task;
mod xp;

pub use complete::Complete;
pub use event::Event;
pub use log::Log;
pub use profile::ProfileCmd;
pub use quests::Quests;
pub use status::Status;
pub use task::Task;
pub use xp::Xp;

use anyhow::Result;
use chrono::NaiveDateTime;
use console::style;
use respawn_core::DayResult;
use respawn_runtime::{RuntimeError, Session, StateRepository};

/// The session every command runs against.
pub type PlayerSession = Session<Box<dyn StateRepository>>;

/// Today's result, advancing the day first when it has not happened yet.
///
/// Returns `None` (after telling the player what is missing) when there is no
/// profile or no input for today.
pub(crate) fn today(session: &PlayerSession, now: NaiveDateTime) -> Result<Option<DayResult>> {
    if let Some(result) = session.snapshot(now)? {
        return Ok(Some(result));
    }

    match session.advance_day(now) {
        Ok(result) => Ok(Some(result)),
        Err(RuntimeError::MissingProfile) => {
            println!(
                "{} No profile yet. Create one with {}",
                style("✗").red().bold(),
                style("respawn profile --name <NAME> --gender <male|female> --avatar <m1..f4>").cyan()
            );
            Ok(None)
        }
        Err(RuntimeError::MissingDailyInput) => {
            println!(
                "{} Nothing logged for today. Start with {}",
                style("✗").red().bold(),
                style("respawn log --sleep <H> --screen <H> --stress <0-5> --water <L>").cyan()
            );
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}
