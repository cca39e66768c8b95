//! Deterministic wellness rules shared by the runtime and the CLI.
//!
//! `respawn-core` turns one day of self-reported input into stats, effects,
//! a mood, a quest board, XP and a boss fight. Every function here is pure:
//! no I/O, no clocks, no logging. Callers persist the returned values and feed
//! them back in through [`PreviousState`] on the next day.
pub mod boss;
pub mod calendar;
pub mod character;
pub mod config;
pub mod day;
pub mod effects;
pub mod input;
pub mod leveling;
pub mod quest;
pub mod stats;

pub use boss::{
    Boss, BossKind, BossStatus, Penalty, PenaltyEffect, check_calendar_event, create_boss,
    failure_penalty, stat_trend, update_boss,
};
pub use calendar::{CalendarEvent, Pressure};
pub use character::{CharacterState, Mood, Theme, determine_character_state};
pub use config::RulesConfig;
pub use day::{DayResult, PreviousState, QuestBoard, SLUMP_BOSS_NAME, process_day};
pub use effects::{Effect, EffectSet, determine_effects};
pub use input::{DailyInput, InputField};
pub use leveling::{XpInfo, calculate_level_from_xp, xp_required_for_level};
pub use quest::{
    Bound, CompletionMode, CompletionReport, Condition, ConditionKey, ConditionKeyError,
    DailyQuests, Quest, QuestId, QuestKind, check_quest_completion, generate_daily_quests,
};
pub use stats::{StatKind, Stats, calculate_stats};
