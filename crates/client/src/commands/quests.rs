//! Today's quest board

use anyhow::Result;
use chrono::NaiveDateTime;
use clap::Parser;

use super::{PlayerSession, today};
use crate::render;

/// List today's quests
#[derive(Parser, Debug)]
pub struct Quests {}

impl Quests {
    pub fn execute(self, session: &PlayerSession, now: NaiveDateTime) -> Result<()> {
        if let Some(result) = today(session, now)? {
            render::print_quests(&result.quests);
        }
        Ok(())
    }
}
