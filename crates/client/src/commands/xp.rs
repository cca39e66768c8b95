//! Level and XP

use anyhow::Result;
use clap::Parser;

use super::PlayerSession;
use crate::render;

/// Show level and XP
#[derive(Parser, Debug)]
pub struct Xp {}

impl Xp {
    pub fn execute(self, session: &PlayerSession) -> Result<()> {
        render::print_xp(&session.xp()?);
        Ok(())
    }
}
