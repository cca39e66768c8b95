/// Rule constants for the wellness engine.
///
/// Every threshold the engine tests against lives here so the rule tables in
/// the individual modules read as plain comparisons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RulesConfig;

impl RulesConfig {
    // ===== stat bounds =====
    pub const STAT_MIN: i32 = 0;
    pub const STAT_MAX: i32 = 100;
    /// Every stat starts from this value before the daily adjustments.
    pub const STAT_BASELINE: i32 = 50;

    // ===== input domains (values outside are clamped, never rejected) =====
    pub const MAX_SLEEP_HOURS: f64 = 12.0;
    pub const MAX_SCREEN_TIME: f64 = 16.0;
    pub const MAX_STRESS_LEVEL: f64 = 5.0;
    pub const MAX_WATER_INTAKE: f64 = 6.0;

    // ===== effect thresholds =====
    /// Below this a stat yields its "low" effect.
    pub const LOW_STAT: i32 = 40;
    pub const HIGH_ENERGY: i32 = 65;
    pub const HIGH_FOCUS: i32 = 60;
    pub const HIGH_HEALTH: i32 = 60;
    pub const HIGH_RESILIENCE: i32 = 60;

    // ===== leveling =====
    /// XP needed to go from level 1 to level 2.
    pub const BASE_XP: u64 = 100;
    /// Extra XP added to each subsequent level step.
    pub const XP_INCREMENT: u64 = 40;

    // ===== quests =====
    pub const MAX_DAILY_QUESTS: usize = 4;
    /// Support quests are added until the board holds this many quests.
    pub const SUPPORT_FILL_TARGET: usize = 3;
    /// A stat below this value asks for a corrective quest.
    pub const WEAK_STAT: i32 = 45;

    // ===== boss =====
    pub const BOSS_MAX_HP: i32 = 100;
    /// A calendar event this close (in days) summons a boss.
    pub const BOSS_CALENDAR_TRIGGER_DAYS: i64 = 3;
    pub const BOSS_DAMAGE_IMPROVING: i32 = 30;
    pub const BOSS_DAMAGE_STEADY: i32 = 10;
    pub const BOSS_HEAL_REGRESSING: i32 = 15;
    /// Consecutive slump days (energy and focus both weak) that summon a stat boss.
    pub const SLUMP_TRIGGER_DAYS: u32 = 2;
    pub const SLUMP_BOSS_DAYS: i32 = 3;

    // ===== failure penalty =====
    pub const PENALTY_ENERGY: i32 = 5;
    pub const PENALTY_FOCUS: i32 = 5;
    pub const PENALTY_DURATION_DAYS: u32 = 1;

    // ===== calendar pressure rewards =====
    pub const PRESSURE_LOW_XP: u64 = 15;
    pub const PRESSURE_MEDIUM_XP: u64 = 25;
    pub const PRESSURE_HIGH_XP: u64 = 40;

    // ===== work tasks =====
    pub const TASK_XP: u64 = 5;
    /// Only this many task completions per day are rewarded.
    pub const TASK_XP_DAILY_LIMIT: usize = 3;
}
