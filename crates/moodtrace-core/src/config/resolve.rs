use chrono::TimeDelta;

use super::input::{MoodDeltaConfigInput, ScoreBandsInput};
use super::validate::{
    ConfigError, finite_score, positive_duration, positive_finite, unit_interval,
};
use super::{
    DEFAULT_CELEBRATION_THRESHOLD, DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_DECLINE_THRESHOLD,
    DEFAULT_DISTRESS_CEILING, DEFAULT_GENERAL_TRIGGER_MULTIPLIER, DEFAULT_MINIMUM_MAGNITUDE,
    DEFAULT_PLATEAU_MIN_DURATION_SECS, DEFAULT_PLATEAU_VARIANCE_THRESHOLD,
    DEFAULT_POSITIVE_BASELINE, DEFAULT_RECOVERY_FLOOR, DEFAULT_REPAIR_MAGNITUDE,
    DEFAULT_SUDDEN_MAGNITUDE_THRESHOLD, DEFAULT_SUDDEN_VELOCITY_THRESHOLD,
    DEFAULT_TIME_WINDOW_SECS, DEFAULT_TURNING_POINT_MERGE_SECS,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBands {
    /// Scores strictly below this are the distressed range.
    pub distress_ceiling: f64,
    /// A rise out of distress landing at or above this is a repair.
    pub recovery_floor: f64,
    /// Scores at or above this are already positive before a rise.
    pub positive_baseline: f64,
    /// A rise out of distress of at least this size that lands on the positive
    /// baseline is a repair even below the recovery floor.
    pub repair_magnitude: f64,
}

impl Default for ScoreBands {
    fn default() -> Self {
        Self {
            distress_ceiling: DEFAULT_DISTRESS_CEILING,
            recovery_floor: DEFAULT_RECOVERY_FLOOR,
            positive_baseline: DEFAULT_POSITIVE_BASELINE,
            repair_magnitude: DEFAULT_REPAIR_MAGNITUDE,
        }
    }
}

/// Resolved, validated, immutable engine configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodDeltaConfig {
    pub minimum_magnitude: f64,
    pub time_window: TimeDelta,
    pub confidence_threshold: f64,
    pub celebration_threshold: f64,
    pub decline_threshold: f64,
    pub general_trigger_multiplier: f64,
    pub plateau_variance_threshold: f64,
    pub turning_point_merge_threshold: TimeDelta,
    pub plateau_min_duration: TimeDelta,
    pub sudden_velocity_threshold: f64,
    pub sudden_magnitude_threshold: f64,
    pub bands: ScoreBands,
}

impl MoodDeltaConfig {
    /// Magnitude a trajectory-level record must reach to trigger extraction.
    #[must_use]
    pub fn general_trigger_magnitude(&self) -> f64 {
        self.minimum_magnitude * self.general_trigger_multiplier
    }
}

impl Default for MoodDeltaConfig {
    fn default() -> Self {
        Self {
            minimum_magnitude: DEFAULT_MINIMUM_MAGNITUDE,
            time_window: secs(DEFAULT_TIME_WINDOW_SECS),
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            celebration_threshold: DEFAULT_CELEBRATION_THRESHOLD,
            decline_threshold: DEFAULT_DECLINE_THRESHOLD,
            general_trigger_multiplier: DEFAULT_GENERAL_TRIGGER_MULTIPLIER,
            plateau_variance_threshold: DEFAULT_PLATEAU_VARIANCE_THRESHOLD,
            turning_point_merge_threshold: secs(DEFAULT_TURNING_POINT_MERGE_SECS),
            plateau_min_duration: secs(DEFAULT_PLATEAU_MIN_DURATION_SECS),
            sudden_velocity_threshold: DEFAULT_SUDDEN_VELOCITY_THRESHOLD,
            sudden_magnitude_threshold: DEFAULT_SUDDEN_MAGNITUDE_THRESHOLD,
            bands: ScoreBands::default(),
        }
    }
}

#[allow(
    clippy::cast_possible_wrap,
    reason = "default durations are small compile-time constants"
)]
fn secs(value: u64) -> TimeDelta {
    TimeDelta::seconds(value as i64)
}

fn resolve_bands(input: ScoreBandsInput) -> Result<ScoreBands, ConfigError> {
    let distress_ceiling = finite_score(
        input.distress_ceiling,
        DEFAULT_DISTRESS_CEILING,
        "distress_ceiling must be finite",
    )?;
    let recovery_floor = finite_score(
        input.recovery_floor,
        DEFAULT_RECOVERY_FLOOR,
        "recovery_floor must be finite",
    )?;
    let positive_baseline = finite_score(
        input.positive_baseline,
        DEFAULT_POSITIVE_BASELINE,
        "positive_baseline must be finite",
    )?;
    let repair_magnitude = positive_finite(
        input.repair_magnitude,
        DEFAULT_REPAIR_MAGNITUDE,
        ConfigError::InvalidScoreBands("repair_magnitude must be finite and > 0"),
    )?;
    if distress_ceiling >= recovery_floor {
        return Err(ConfigError::InvalidScoreBands(
            "distress_ceiling must be below recovery_floor",
        ));
    }
    if distress_ceiling >= positive_baseline {
        return Err(ConfigError::InvalidScoreBands(
            "distress_ceiling must be below positive_baseline",
        ));
    }
    Ok(ScoreBands {
        distress_ceiling,
        recovery_floor,
        positive_baseline,
        repair_magnitude,
    })
}

pub fn resolve_config(input: MoodDeltaConfigInput) -> Result<MoodDeltaConfig, ConfigError> {
    Ok(MoodDeltaConfig {
        minimum_magnitude: positive_finite(
            input.minimum_magnitude,
            DEFAULT_MINIMUM_MAGNITUDE,
            ConfigError::InvalidMinimumMagnitude,
        )?,
        time_window: positive_duration(
            input.time_window_secs,
            DEFAULT_TIME_WINDOW_SECS,
            ConfigError::InvalidTimeWindow,
        )?,
        confidence_threshold: unit_interval(
            input.confidence_threshold,
            DEFAULT_CONFIDENCE_THRESHOLD,
            ConfigError::InvalidConfidenceThreshold,
        )?,
        celebration_threshold: positive_finite(
            input.celebration_threshold,
            DEFAULT_CELEBRATION_THRESHOLD,
            ConfigError::InvalidCelebrationThreshold,
        )?,
        decline_threshold: positive_finite(
            input.decline_threshold,
            DEFAULT_DECLINE_THRESHOLD,
            ConfigError::InvalidDeclineThreshold,
        )?,
        general_trigger_multiplier: positive_finite(
            input.general_trigger_multiplier,
            DEFAULT_GENERAL_TRIGGER_MULTIPLIER,
            ConfigError::InvalidGeneralTriggerMultiplier,
        )?,
        plateau_variance_threshold: positive_finite(
            input.plateau_variance_threshold,
            DEFAULT_PLATEAU_VARIANCE_THRESHOLD,
            ConfigError::InvalidPlateauVarianceThreshold,
        )?,
        turning_point_merge_threshold: positive_duration(
            input.turning_point_merge_secs,
            DEFAULT_TURNING_POINT_MERGE_SECS,
            ConfigError::InvalidTurningPointMergeThreshold,
        )?,
        plateau_min_duration: positive_duration(
            input.plateau_min_duration_secs,
            DEFAULT_PLATEAU_MIN_DURATION_SECS,
            ConfigError::InvalidPlateauMinDuration,
        )?,
        sudden_velocity_threshold: positive_finite(
            input.sudden_velocity_threshold,
            DEFAULT_SUDDEN_VELOCITY_THRESHOLD,
            ConfigError::InvalidSuddenVelocityThreshold,
        )?,
        sudden_magnitude_threshold: positive_finite(
            input.sudden_magnitude_threshold,
            DEFAULT_SUDDEN_MAGNITUDE_THRESHOLD,
            ConfigError::InvalidSuddenMagnitudeThreshold,
        )?,
        bands: resolve_bands(input.bands)?,
    })
}
