use chrono::TimeDelta;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid minimum_magnitude: must be finite and > 0")]
    InvalidMinimumMagnitude,
    #[error("invalid time_window_secs: must be > 0")]
    InvalidTimeWindow,
    #[error("invalid confidence_threshold: must be in [0, 1]")]
    InvalidConfidenceThreshold,
    #[error("invalid celebration_threshold: must be finite and > 0")]
    InvalidCelebrationThreshold,
    #[error("invalid decline_threshold: must be finite and > 0")]
    InvalidDeclineThreshold,
    #[error("invalid general_trigger_multiplier: must be finite and > 0")]
    InvalidGeneralTriggerMultiplier,
    #[error("invalid plateau_variance_threshold: must be finite and > 0")]
    InvalidPlateauVarianceThreshold,
    #[error("invalid turning_point_merge_secs: must be > 0")]
    InvalidTurningPointMergeThreshold,
    #[error("invalid plateau_min_duration_secs: must be > 0")]
    InvalidPlateauMinDuration,
    #[error("invalid sudden_velocity_threshold: must be finite and > 0")]
    InvalidSuddenVelocityThreshold,
    #[error("invalid sudden_magnitude_threshold: must be finite and > 0")]
    InvalidSuddenMagnitudeThreshold,
    #[error("invalid bands: {0}")]
    InvalidScoreBands(&'static str),
}

pub(super) fn positive_finite(
    raw: Option<f64>,
    default: f64,
    invalid_error: ConfigError,
) -> Result<f64, ConfigError> {
    let value = raw.unwrap_or(default);
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(invalid_error)
    }
}

pub(super) fn unit_interval(
    raw: Option<f64>,
    default: f64,
    invalid_error: ConfigError,
) -> Result<f64, ConfigError> {
    let value = raw.unwrap_or(default);
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(invalid_error)
    }
}

pub(super) fn positive_duration(
    raw_secs: Option<u64>,
    default_secs: u64,
    invalid_error: ConfigError,
) -> Result<TimeDelta, ConfigError> {
    let secs = raw_secs.unwrap_or(default_secs);
    if secs == 0 {
        return Err(invalid_error);
    }
    i64::try_from(secs)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .ok_or(invalid_error)
}

pub(super) fn finite_score(
    raw: Option<f64>,
    default: f64,
    field: &'static str,
) -> Result<f64, ConfigError> {
    let value = raw.unwrap_or(default);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::InvalidScoreBands(field))
    }
}
