//! Log today's wellness input

use anyhow::Result;
use chrono::NaiveDateTime;
use clap::Parser;
use console::style;
use respawn_core::DailyInput;
use respawn_runtime::RuntimeError;

use super::PlayerSession;

/// Log today's sleep, screen time, stress, water and exercise
#[derive(Parser, Debug)]
pub struct Log {
    /// Hours slept (0-12)
    #[arg(long, value_name = "HOURS")]
    sleep: f64,

    /// Hours of recreational screen time (0-16)
    #[arg(long, value_name = "HOURS")]
    screen: f64,

    /// Stress level (0-5)
    #[arg(long, value_name = "LEVEL")]
    stress: f64,

    /// Litres of water (0-6)
    #[arg(long, value_name = "LITRES")]
    water: f64,

    /// Exercised today
    #[arg(long)]
    exercise: bool,
}

impl Log {
    pub fn execute(self, session: &PlayerSession, now: NaiveDateTime) -> Result<()> {
        let input = DailyInput::new(
            self.sleep,
            self.screen,
            self.stress,
            self.water,
            self.exercise,
        );
        if input.clamped() != input {
            println!(
                "{}",
                style("Some values are out of range; stats will use the nearest valid value")
                    .yellow()
            );
        }

        match session.submit_input(input, now) {
            Ok(until) => {
                println!("{}", style("✓ Logged today's input").green().bold());
                println!(
                    "  {} {}",
                    style("Locked until").dim(),
                    until.format("%Y-%m-%d %H:%M")
                );
                println!("  Run {} to see how your character feels", style("respawn status").cyan());
                Ok(())
            }
            Err(RuntimeError::InputLocked { until }) => {
                println!(
                    "{} Today's input is already logged. It can be changed after {}",
                    style("✗").red().bold(),
                    style(until.format("%Y-%m-%d %H:%M")).cyan()
                );
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}
