//! Calendar deadlines

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use console::style;
use respawn_core::{Pressure, RulesConfig};
use respawn_runtime::RuntimeError;

use super::PlayerSession;

/// Manage calendar deadlines
#[derive(Subcommand, Debug)]
pub enum Event {
    /// Add a deadline
    Add(AddEvent),

    /// Remove a deadline by name
    Rm {
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// List deadlines, nearest first
    List,
}

#[derive(Parser, Debug)]
pub struct AddEvent {
    #[arg(value_name = "NAME")]
    name: String,

    /// Due date (YYYY-MM-DD)
    #[arg(value_name = "DATE")]
    due: NaiveDate,

    /// low, medium or high
    #[arg(long, default_value_t = Pressure::Medium)]
    pressure: Pressure,
}

impl Event {
    pub fn execute(self, session: &PlayerSession, now: NaiveDateTime) -> Result<()> {
        let today = session.clock().game_day(now);

        let outcome = match self {
            Event::Add(args) => session
                .add_event(&args.name, args.due, args.pressure, today)
                .map(|event| {
                    println!(
                        "{} Added {} due {} ({} pressure, +{} XP on arrival)",
                        style("✓").green().bold(),
                        style(&event.name).bold(),
                        event.due,
                        event.pressure,
                        event.pressure.xp_reward()
                    );
                }),
            Event::Rm { name } => session.remove_event(&name).map(|event| {
                println!("{} Removed {}", style("✓").green().bold(), event.name);
            }),
            Event::List => session.events(today).map(|events| print_events(&events)),
        };

        match outcome {
            Err(RuntimeError::EventNotFound(name)) => {
                println!("{} No event named {}", style("✗").red().bold(), style(name).cyan());
                Ok(())
            }
            Err(RuntimeError::InvalidEvent(reason)) => {
                println!("{} Invalid event: {}", style("✗").red().bold(), reason);
                Ok(())
            }
            other => Ok(other?),
        }
    }
}

fn print_events(events: &[(respawn_runtime::StoredEvent, i64)]) {
    println!("{}", style("Deadlines").bold().yellow());
    if events.is_empty() {
        println!("  {}", style("Nothing scheduled").dim());
        return;
    }
    for (event, days_left) in events {
        let when = match days_left {
            ..=0 => style("today".to_owned()).red().bold(),
            d if *d <= RulesConfig::BOSS_CALENDAR_TRIGGER_DAYS => {
                style(format!("in {d} day(s)")).yellow().bold()
            }
            d => style(format!("in {d} day(s)")).dim(),
        };
        println!(
            "  {} {} {} [{}]",
            style(&event.name).bold(),
            event.due,
            when,
            event.pressure
        );
    }
}
