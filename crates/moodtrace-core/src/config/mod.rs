mod input;
mod resolve;
mod validate;

pub const DEFAULT_MINIMUM_MAGNITUDE: f64 = 1.5;
pub const DEFAULT_TIME_WINDOW_SECS: u64 = 60 * 60;
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.7;
pub const DEFAULT_CELEBRATION_THRESHOLD: f64 = 3.0;
pub const DEFAULT_DECLINE_THRESHOLD: f64 = 2.5;
pub const DEFAULT_GENERAL_TRIGGER_MULTIPLIER: f64 = 1.5;
pub const DEFAULT_PLATEAU_VARIANCE_THRESHOLD: f64 = 0.5;
pub const DEFAULT_TURNING_POINT_MERGE_SECS: u64 = 30 * 60;
pub const DEFAULT_PLATEAU_MIN_DURATION_SECS: u64 = 3 * 60 * 60;
pub const DEFAULT_SUDDEN_VELOCITY_THRESHOLD: f64 = 20.0;
pub const DEFAULT_SUDDEN_MAGNITUDE_THRESHOLD: f64 = 2.0;
pub const DEFAULT_DISTRESS_CEILING: f64 = 4.0;
pub const DEFAULT_RECOVERY_FLOOR: f64 = 6.5;
pub const DEFAULT_POSITIVE_BASELINE: f64 = 6.0;
pub const DEFAULT_REPAIR_MAGNITUDE: f64 = 3.0;

pub use input::{MoodDeltaConfigInput, ScoreBandsInput};
pub use resolve::{MoodDeltaConfig, ScoreBands, resolve_config};
pub use validate::ConfigError;
