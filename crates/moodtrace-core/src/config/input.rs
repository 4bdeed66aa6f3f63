use serde::{Deserialize, Serialize};

/// Score boundaries used to classify a delta by the states it crosses.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoreBandsInput {
    pub distress_ceiling: Option<f64>,
    pub recovery_floor: Option<f64>,
    pub positive_baseline: Option<f64>,
    pub repair_magnitude: Option<f64>,
}

/// Plain options record supplied at construction time. Unset fields take defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MoodDeltaConfigInput {
    pub minimum_magnitude: Option<f64>,
    pub time_window_secs: Option<u64>,
    pub confidence_threshold: Option<f64>,
    pub celebration_threshold: Option<f64>,
    pub decline_threshold: Option<f64>,
    pub general_trigger_multiplier: Option<f64>,
    pub plateau_variance_threshold: Option<f64>,
    pub turning_point_merge_secs: Option<u64>,
    pub plateau_min_duration_secs: Option<u64>,
    pub sudden_velocity_threshold: Option<f64>,
    pub sudden_magnitude_threshold: Option<f64>,
    pub bands: ScoreBandsInput,
}
