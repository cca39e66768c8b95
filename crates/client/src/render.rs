//! Terminal rendering of engine results.

use console::style;
use respawn_core::{
    Boss, BossStatus, CharacterState, DayResult, EffectSet, Mood, Penalty, Quest, QuestBoard,
    RulesConfig, StatKind, Stats, XpInfo,
};

const BAR_WIDTH: usize = 20;

/// Fixed-width bar for `value` out of `max`.
pub fn bar(value: u64, max: u64) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value.min(max) * BAR_WIDTH as u64 / max) as usize
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

pub fn print_day(result: &DayResult) {
    print_character(&result.character);
    println!();
    print_stats(&result.stats);
    println!();
    print_effects(result.effects);
    println!();
    print_xp(&result.xp);

    if let Some(boss) = &result.boss {
        println!();
        print_boss(boss);
    }
    if let Some(penalty) = &result.penalty {
        print_penalty(penalty);
    }
    if result.slump_days > 0 && result.boss.is_none() {
        println!(
            "{} Energy and focus have been low for {} day(s)",
            style("!").yellow().bold(),
            result.slump_days
        );
    }
}

fn print_character(character: &CharacterState) {
    let mood = match character.mood {
        Mood::Stressed => style(character.mood.as_ref()).red(),
        Mood::Tired => style(character.mood.as_ref()).blue(),
        Mood::Energetic => style(character.mood.as_ref()).green(),
        Mood::Normal => style(character.mood.as_ref()).white(),
    };
    println!(
        "{} {}  {} {}",
        style("Mood:").bold().cyan(),
        mood.bold(),
        style("Theme:").bold().cyan(),
        character.theme
    );
}

fn print_stats(stats: &Stats) {
    println!("{}", style("Stats").bold().yellow());
    for kind in [
        StatKind::Health,
        StatKind::Energy,
        StatKind::Focus,
        StatKind::Resilience,
    ] {
        let value = stats.get(kind);
        let line = format!(
            "  {:<11} {} {:>3}",
            kind.as_ref(),
            bar(value.max(0) as u64, RulesConfig::STAT_MAX as u64),
            value
        );
        if stats.is_weak(kind) {
            println!("{}", style(line).red());
        } else {
            println!("{line}");
        }
    }
}

fn print_effects(effects: EffectSet) {
    println!("{}", style("Effects").bold().yellow());
    if effects.is_empty() {
        println!("  {}", style("none").dim());
        return;
    }
    for effect in effects.buffs() {
        println!("  {} {}", style("+").green().bold(), effect.label());
    }
    for effect in effects.debuffs() {
        println!("  {} {}", style("-").red().bold(), effect.label());
    }
}

pub fn print_xp(xp: &XpInfo) {
    println!(
        "{} {}  {} {}/{} ({} to next level)",
        style("Level").bold().yellow(),
        style(xp.level).bold(),
        bar(xp.xp_progress_in_level, xp.level_span()),
        xp.xp_progress_in_level,
        xp.level_span(),
        xp.xp_for_next_level.saturating_sub(xp.total_xp)
    );
    println!("  {} {}", style("Total XP:").dim(), xp.total_xp);
}

fn print_boss(boss: &Boss) {
    let status = match boss.status() {
        BossStatus::Active => style("active").red(),
        BossStatus::Defeated => style("defeated").green(),
        BossStatus::Escaped => style("escaped").yellow(),
    };
    println!(
        "{} {} [{}] ({})",
        style("Boss:").bold().magenta(),
        style(&boss.name).bold(),
        boss.kind,
        status.bold()
    );
    println!(
        "  HP {} {}/{}  {} day(s) left",
        bar(boss.hp.max(0) as u64, boss.max_hp.max(0) as u64),
        boss.hp,
        boss.max_hp,
        boss.days_remaining.max(0)
    );
}

fn print_penalty(penalty: &Penalty) {
    println!(
        "{} {}: -{} energy, -{} focus for {} day(s)",
        style("Penalty").red().bold(),
        penalty.effect,
        penalty.energy_penalty,
        penalty.focus_penalty,
        penalty.duration_days
    );
}

pub fn print_quests(board: &QuestBoard) {
    println!("{}", style("Today's quests").bold().yellow());
    if board.active.is_empty() && board.completed.is_empty() {
        println!("  {}", style("No quests today").dim());
        return;
    }
    for quest in &board.active {
        print_quest(quest, false);
    }
    for quest in &board.completed {
        print_quest(quest, true);
    }
}

fn print_quest(quest: &Quest, done: bool) {
    let mark = if done {
        style("✓").green().bold()
    } else {
        style("○").dim()
    };
    let title = if done {
        style(quest.title).dim()
    } else {
        style(quest.title).bold()
    };
    println!(
        "  {} {} {} {}",
        mark,
        title,
        style(format!("+{} XP", quest.xp)).cyan(),
        style(format!("[{} · {}]", quest.id, quest.completion)).dim()
    );
}
