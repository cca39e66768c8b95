//! Work tasks: a plain to-do list whose first few completions each day earn
//! a little XP.

use chrono::NaiveDateTime;
use respawn_core::{RulesConfig, XpInfo};
use tracing::info;

use super::Session;
use crate::error::{Result, RuntimeError};
use crate::records::{CompletedTask, WorkTask};
use crate::repository::{Slot, StateRepository};

/// Outcome of [`Session::complete_task`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskCompletion {
    pub task: WorkTask,
    /// Zero once the daily reward limit is used up.
    pub xp_awarded: u64,
    pub xp: XpInfo,
}

impl<R: StateRepository> Session<R> {
    pub fn tasks(&self) -> Result<Vec<WorkTask>> {
        Ok(self.store.get(Slot::Tasks)?.unwrap_or_default())
    }

    /// Tasks completed during the game day containing `now`.
    pub fn completed_tasks(&self, now: NaiveDateTime) -> Result<Vec<CompletedTask>> {
        let today = self.clock.game_day(now);
        let done: Vec<CompletedTask> = self.store.get(Slot::CompletedTasks)?.unwrap_or_default();
        Ok(done.into_iter().filter(|task| task.day == today).collect())
    }

    pub fn add_task(&self, title: &str, now: NaiveDateTime) -> Result<WorkTask> {
        let title = title.trim();
        if title.is_empty() {
            return Err(RuntimeError::InvalidTask("title is empty".into()));
        }

        let task = WorkTask {
            title: title.to_owned(),
            created_at: now,
        };
        let mut tasks = self.tasks()?;
        tasks.push(task.clone());
        self.store.set(Slot::Tasks, &tasks)?;

        info!(task = %task.title, "Task added");
        Ok(task)
    }

    /// Completes the task at `index` (0-based).
    pub fn complete_task(&self, index: usize, now: NaiveDateTime) -> Result<TaskCompletion> {
        let today = self.clock.game_day(now);
        let mut tasks = self.tasks()?;
        if index >= tasks.len() {
            return Err(RuntimeError::TaskNotFound(index));
        }
        let task = tasks.remove(index);

        let mut done: Vec<CompletedTask> = self.store.get(Slot::CompletedTasks)?.unwrap_or_default();
        done.retain(|t| t.day == today);
        let rewarded = done.len() < RulesConfig::TASK_XP_DAILY_LIMIT;
        done.push(CompletedTask {
            title: task.title.clone(),
            day: today,
        });

        self.store.set(Slot::Tasks, &tasks)?;
        self.store.set(Slot::CompletedTasks, &done)?;

        let (xp_awarded, xp) = if rewarded {
            (RulesConfig::TASK_XP, self.grant_bonus(RulesConfig::TASK_XP, today)?)
        } else {
            (0, self.xp()?)
        };

        info!(task = %task.title, xp = xp_awarded, "Task completed");
        Ok(TaskCompletion {
            task,
            xp_awarded,
            xp,
        })
    }

    pub fn remove_task(&self, index: usize) -> Result<WorkTask> {
        let mut tasks = self.tasks()?;
        if index >= tasks.len() {
            return Err(RuntimeError::TaskNotFound(index));
        }
        let task = tasks.remove(index);
        self.store.set(Slot::Tasks, &tasks)?;

        info!(task = %task.title, "Task removed");
        Ok(task)
    }
}
