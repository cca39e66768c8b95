//! Character status for today

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::Parser;
use console::style;

use super::{PlayerSession, today};
use crate::render;

/// Advance the day if needed and show the character
#[derive(Parser, Debug)]
pub struct Status {
    /// Print the full result as JSON
    #[arg(long)]
    json: bool,
}

impl Status {
    pub fn execute(self, session: &PlayerSession, now: NaiveDateTime) -> Result<()> {
        let Some(result) = today(session, now)? else {
            return Ok(());
        };

        if self.json {
            let json =
                serde_json::to_string_pretty(&result).context("Failed to serialize day result")?;
            println!("{json}");
            return Ok(());
        }

        let day = session.clock().game_day(now);
        if let Some(profile) = session.profile()? {
            println!(
                "{} {}",
                style(format!("=== {} · {} ===", profile.username, day)).bold().green(),
                style(format!("({})", profile.avatar)).dim()
            );
        }
        println!();
        render::print_day(&result);
        println!();
        render::print_quests(&result.quests);

        Ok(())
    }
}
