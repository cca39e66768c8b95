//! Mark a manual quest as done

use anyhow::Result;
use chrono::NaiveDateTime;
use clap::Parser;
use console::style;
use respawn_core::{CompletionMode, QuestId};
use respawn_runtime::RuntimeError;

use super::{PlayerSession, today};
use crate::render;

/// Mark a manual quest as done
#[derive(Parser, Debug)]
pub struct Complete {
    /// Quest id as shown by `respawn quests` (e.g. short_walk)
    #[arg(value_name = "QUEST")]
    quest: QuestId,
}

impl Complete {
    pub fn execute(self, session: &PlayerSession, now: NaiveDateTime) -> Result<()> {
        if today(session, now)?.is_none() {
            return Ok(());
        }

        let quest = self.quest.quest();
        if quest.completion == CompletionMode::Input {
            println!(
                "{} {} completes from your logged input",
                style("!").yellow().bold(),
                style(quest.title).bold()
            );
        }

        match session.complete_quest(self.quest, now) {
            Ok(result) => {
                if result.quests.completed.iter().any(|q| q.id == self.quest) {
                    println!(
                        "{} {} {}",
                        style("✓").green().bold(),
                        quest.title,
                        style(format!("+{} XP", quest.xp)).cyan()
                    );
                }
                render::print_xp(&result.xp);
                Ok(())
            }
            Err(RuntimeError::QuestNotActive(id)) => {
                println!(
                    "{} {} is not on today's board",
                    style("✗").red().bold(),
                    style(id).cyan()
                );
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}
