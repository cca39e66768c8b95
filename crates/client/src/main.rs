//! `respawn`: log a day, watch the character react.
//!
//! Run with: `respawn <command>`. Configuration comes from the environment
//! (and `.env`), see [`RuntimeConfig::from_env`].

mod commands;
mod logging;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use respawn_runtime::{RuntimeConfig, Session};

use commands::{Complete, Event, Log, ProfileCmd, Quests, Status, Task, Xp};

/// Wellness tracker that plays like an RPG
#[derive(Parser)]
#[command(name = "respawn")]
#[command(about = "Turn your daily habits into character stats, quests and boss fights", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Show or set the player profile
    Profile(ProfileCmd),

    /// Log today's sleep, screen time, stress, water and exercise
    Log(Log),

    /// Advance the day if needed and show the character
    Status(Status),

    /// List today's quests
    Quests(Quests),

    /// Mark a manual quest as done
    Complete(Complete),

    /// Manage work tasks
    #[command(subcommand)]
    Task(Task),

    /// Manage calendar deadlines
    #[command(subcommand)]
    Event(Event),

    /// Show level and XP
    Xp(Xp),
}

fn main() -> Result<()> {
    // Load .env file if it exists (RESPAWN_DATA_DIR and friends)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = RuntimeConfig::from_env();

    logging::setup_logging(&config.log_dir)?;

    let session = Session::open(&config).context("Failed to open player state")?;
    let now = chrono::Local::now().naive_local();

    match cli.command {
        Command::Profile(cmd) => cmd.execute(&session),
        Command::Log(cmd) => cmd.execute(&session, now),
        Command::Status(cmd) => cmd.execute(&session, now),
        Command::Quests(cmd) => cmd.execute(&session, now),
        Command::Complete(cmd) => cmd.execute(&session, now),
        Command::Task(cmd) => cmd.execute(&session, now),
        Command::Event(cmd) => cmd.execute(&session, now),
        Command::Xp(cmd) => cmd.execute(&session),
    }
}
