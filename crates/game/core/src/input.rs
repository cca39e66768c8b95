//! Self-reported daily wellness input.
//!
//! The input is owned by the caller and read-only to the engine. Stat
//! calculation works on a clamped copy; quest conditions read the raw values.

use crate::config::RulesConfig;

/// One day of self-reported wellness data.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyInput {
    /// Hours slept, expected in `[0, 12]`.
    pub sleep_hours: f64,
    /// Hours of recreational screen time, expected in `[0, 16]`.
    pub screen_time: f64,
    /// Self-rated stress, expected in `[0, 5]`.
    pub stress_level: f64,
    /// Litres of water, expected in `[0, 6]`.
    pub water_intake: f64,
    pub exercise: bool,
}

/// Numeric view of a [`DailyInput`] field, used by quest conditions.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum InputField {
    SleepHours,
    ScreenTime,
    StressLevel,
    WaterIntake,
    /// Read as `1.0` when exercised, `0.0` otherwise.
    Exercise,
}

impl DailyInput {
    pub fn new(
        sleep_hours: f64,
        screen_time: f64,
        stress_level: f64,
        water_intake: f64,
        exercise: bool,
    ) -> Self {
        Self {
            sleep_hours,
            screen_time,
            stress_level,
            water_intake,
            exercise,
        }
    }

    /// Returns a copy with every numeric field clamped into its valid range.
    ///
    /// NaN is treated as a missing value and becomes `0`.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            sleep_hours: clamp_field(self.sleep_hours, RulesConfig::MAX_SLEEP_HOURS),
            screen_time: clamp_field(self.screen_time, RulesConfig::MAX_SCREEN_TIME),
            stress_level: clamp_field(self.stress_level, RulesConfig::MAX_STRESS_LEVEL),
            water_intake: clamp_field(self.water_intake, RulesConfig::MAX_WATER_INTAKE),
            exercise: self.exercise,
        }
    }

    /// Raw (unclamped) value of a field.
    pub fn value(&self, field: InputField) -> f64 {
        match field {
            InputField::SleepHours => self.sleep_hours,
            InputField::ScreenTime => self.screen_time,
            InputField::StressLevel => self.stress_level,
            InputField::WaterIntake => self.water_intake,
            InputField::Exercise => {
                if self.exercise {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

fn clamp_field(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_values() {
        let input = DailyInput::new(20.0, -3.0, 9.0, 6.5, true).clamped();

        assert_eq!(input.sleep_hours, 12.0);
        assert_eq!(input.screen_time, 0.0);
        assert_eq!(input.stress_level, 5.0);
        assert_eq!(input.water_intake, 6.0);
        assert!(input.exercise);
    }

    #[test]
    fn nan_becomes_zero() {
        let input = DailyInput::new(f64::NAN, 2.0, 1.0, 1.0, false).clamped();
        assert_eq!(input.sleep_hours, 0.0);
    }

    #[test]
    fn exercise_reads_as_number() {
        let mut input = DailyInput::default();
        assert_eq!(input.value(InputField::Exercise), 0.0);
        input.exercise = true;
        assert_eq!(input.value(InputField::Exercise), 1.0);
    }

    #[test]
    fn field_names_are_snake_case() {
        assert_eq!(InputField::ScreenTime.as_ref(), "screen_time");
        assert_eq!("water_intake".parse::<InputField>(), Ok(InputField::WaterIntake));
    }
}
