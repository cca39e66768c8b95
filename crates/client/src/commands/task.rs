//! Work tasks

use anyhow::Result;
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use console::style;
use respawn_core::RulesConfig;
use respawn_runtime::RuntimeError;

use super::PlayerSession;

/// Manage work tasks
#[derive(Subcommand, Debug)]
pub enum Task {
    /// Add a task
    Add(AddTask),

    /// Complete a task by its list number
    Done(TaskNumber),

    /// Remove a task by its list number
    Rm(TaskNumber),

    /// List open tasks and today's completions
    List,
}

#[derive(Parser, Debug)]
pub struct AddTask {
    #[arg(value_name = "TITLE", num_args = 1.., required = true)]
    title: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct TaskNumber {
    /// Number shown by `respawn task list`
    #[arg(value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    number: u32,
}

impl TaskNumber {
    fn index(&self) -> usize {
        self.number as usize - 1
    }
}

impl Task {
    pub fn execute(self, session: &PlayerSession, now: NaiveDateTime) -> Result<()> {
        let outcome = match self {
            Task::Add(args) => add(session, &args.title.join(" "), now),
            Task::Done(args) => done(session, &args, now),
            Task::Rm(args) => remove(session, &args),
            Task::List => list(session, now),
        };

        match outcome {
            Err(RuntimeError::TaskNotFound(index)) => {
                println!("{} No task #{}", style("✗").red().bold(), index + 1);
                Ok(())
            }
            Err(RuntimeError::InvalidTask(reason)) => {
                println!("{} Invalid task: {}", style("✗").red().bold(), reason);
                Ok(())
            }
            other => Ok(other?),
        }
    }
}

fn add(session: &PlayerSession, title: &str, now: NaiveDateTime) -> respawn_runtime::Result<()> {
    let task = session.add_task(title, now)?;
    println!("{} Added {}", style("✓").green().bold(), style(task.title).bold());
    Ok(())
}

fn done(
    session: &PlayerSession,
    args: &TaskNumber,
    now: NaiveDateTime,
) -> respawn_runtime::Result<()> {
    let completion = session.complete_task(args.index(), now)?;
    if completion.xp_awarded > 0 {
        println!(
            "{} {} {}",
            style("✓").green().bold(),
            completion.task.title,
            style(format!("+{} XP", completion.xp_awarded)).cyan()
        );
    } else {
        println!(
            "{} {} {}",
            style("✓").green().bold(),
            completion.task.title,
            style(format!(
                "(daily limit of {} rewarded tasks reached)",
                RulesConfig::TASK_XP_DAILY_LIMIT
            ))
            .dim()
        );
    }
    Ok(())
}

fn remove(session: &PlayerSession, args: &TaskNumber) -> respawn_runtime::Result<()> {
    let task = session.remove_task(args.index())?;
    println!("{} Removed {}", style("✓").green().bold(), task.title);
    Ok(())
}

fn list(session: &PlayerSession, now: NaiveDateTime) -> respawn_runtime::Result<()> {
    let tasks = session.tasks()?;
    let completed = session.completed_tasks(now)?;

    println!("{}", style("Tasks").bold().yellow());
    if tasks.is_empty() {
        println!("  {}", style("Nothing open").dim());
    }
    for (i, task) in tasks.iter().enumerate() {
        println!(
            "  {:>2}. {} {}",
            i + 1,
            task.title,
            style(task.created_at.format("%m-%d %H:%M")).dim()
        );
    }

    if !completed.is_empty() {
        println!();
        println!(
            "{} ({}/{} rewarded)",
            style("Done today").bold().yellow(),
            completed.len().min(RulesConfig::TASK_XP_DAILY_LIMIT),
            RulesConfig::TASK_XP_DAILY_LIMIT
        );
        for task in &completed {
            println!("  {} {}", style("✓").green(), style(&task.title).dim());
        }
    }
    Ok(())
}
