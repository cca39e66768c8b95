//! Daily stat calculation.
//!
//! Each rule group adds to independent counters, so group order does not change
//! the outcome. The groups are still applied in the order below to keep the
//! arithmetic easy to follow against the rule table.
//!
//! | Group      | Condition                  | Adjustment                          |
//! |------------|----------------------------|-------------------------------------|
//! | sleep      | 7 ≤ sleep ≤ 9              | energy +15, focus +10               |
//! |            | sleep < 5                  | energy −20, focus −15               |
//! |            | sleep > 10                 | energy −5                           |
//! | screen     | screen < 2                 | focus +15                           |
//! |            | screen ≤ 4                 | focus +5                            |
//! |            | screen > 6                 | focus −15                           |
//! |            | screen > 4                 | focus −10                           |
//! | exercise   | exercised                  | health +15, energy +10, resil. +5   |
//! | stress     | stress ≥ 4                 | focus −15, health −10, resil. −5    |
//! |            | stress ≤ 1                 | resilience +10                      |
//! | resilience | sleep ≥ 7 and exercised    | resilience +10                      |
//! |            | stress ≥ 4 and sleep < 6   | resilience −15                      |
//! | water      | water < 2                  | energy −10                          |
//! |            | water ≥ 4                  | energy +10                          |
//! |            | water ≥ 3                  | energy +5                           |
//!
//! Rows inside the sleep, screen, stress and water groups are first-match.

use super::Stats;
use crate::input::DailyInput;

/// Computes today's stats from the baseline and the (clamped) input.
pub fn calculate_stats(input: &DailyInput) -> Stats {
    let input = input.clamped();
    let mut stats = Stats::BASELINE;

    apply_sleep(&mut stats, &input);
    apply_screen_time(&mut stats, &input);
    apply_exercise(&mut stats, &input);
    apply_stress(&mut stats, &input);
    apply_resilience(&mut stats, &input);
    apply_water(&mut stats, &input);

    stats.clamped()
}

fn apply_sleep(stats: &mut Stats, input: &DailyInput) {
    let sleep = input.sleep_hours;
    if (7.0..=9.0).contains(&sleep) {
        stats.energy += 15;
        stats.focus += 10;
    } else if sleep < 5.0 {
        stats.energy -= 20;
        stats.focus -= 15;
    } else if sleep > 10.0 {
        stats.energy -= 5;
    }
}

fn apply_screen_time(stats: &mut Stats, input: &DailyInput) {
    let screen = input.screen_time;
    if screen < 2.0 {
        stats.focus += 15;
    } else if screen <= 4.0 {
        stats.focus += 5;
    } else if screen > 6.0 {
        stats.focus -= 15;
    } else {
        // (4, 6]
        stats.focus -= 10;
    }
}

fn apply_exercise(stats: &mut Stats, input: &DailyInput) {
    if input.exercise {
        stats.health += 15;
        stats.energy += 10;
        stats.resilience += 5;
    }
}

fn apply_stress(stats: &mut Stats, input: &DailyInput) {
    let stress = input.stress_level;
    if stress >= 4.0 {
        stats.focus -= 15;
        stats.health -= 10;
        stats.resilience -= 5;
    } else if stress <= 1.0 {
        stats.resilience += 10;
    }
}

fn apply_resilience(stats: &mut Stats, input: &DailyInput) {
    if input.sleep_hours >= 7.0 && input.exercise {
        stats.resilience += 10;
    }
    if input.stress_level >= 4.0 && input.sleep_hours < 6.0 {
        stats.resilience -= 15;
    }
}

fn apply_water(stats: &mut Stats, input: &DailyInput) {
    let water = input.water_intake;
    if water < 2.0 {
        stats.energy -= 10;
    } else if water >= 4.0 {
        stats.energy += 10;
    } else if water >= 3.0 {
        stats.energy += 5;
    }
}
