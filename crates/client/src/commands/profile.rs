//! Show or set the player profile

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use respawn_runtime::{Gender, Profile};

use super::PlayerSession;

/// Show or set the player profile
#[derive(Parser, Debug)]
pub struct ProfileCmd {
    /// Display name (setting it saves the profile)
    #[arg(long, value_name = "NAME", requires_all = ["gender", "avatar"])]
    name: Option<String>,

    /// male or female
    #[arg(long)]
    gender: Option<Gender>,

    /// Avatar key: m1-m4 for male, f1-f4 for female
    #[arg(long)]
    avatar: Option<String>,

    #[arg(long)]
    email: Option<String>,
}

impl ProfileCmd {
    pub fn execute(self, session: &PlayerSession) -> Result<()> {
        let (Some(username), Some(gender), Some(avatar)) = (self.name, self.gender, self.avatar)
        else {
            return show(session);
        };

        let profile = Profile {
            username,
            gender,
            avatar,
            email: self.email,
        };
        session
            .set_profile(&profile)
            .context("Failed to save profile")?;

        println!("{}", style("✓ Profile saved").green().bold());
        show(session)
    }
}

fn show(session: &PlayerSession) -> Result<()> {
    let Some(profile) = session.profile()? else {
        println!("{}", style("No profile yet").dim());
        return Ok(());
    };

    println!("{} {}", style("Player:").bold().cyan(), profile.username);
    println!(
        "{} {} ({})",
        style("Avatar:").bold().cyan(),
        profile.avatar,
        profile.gender
    );
    if let Some(email) = &profile.email {
        println!("{} {}", style("Email:").bold().cyan(), email);
    }
    Ok(())
}
