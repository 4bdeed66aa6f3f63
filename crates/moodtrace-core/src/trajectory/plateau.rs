use tracing::debug;

use crate::config::MoodDeltaConfig;
use crate::models::{PlateauReport, TrajectoryPoint};

/// Low population variance held for longer than the minimum duration.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    reason = "point counts are conversational-scale"
)]
pub fn detect_emotional_plateau(
    points: &[TrajectoryPoint],
    config: &MoodDeltaConfig,
) -> PlateauReport {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return PlateauReport::empty();
    };

    let count = points.len() as f64;
    let average_score = points.iter().map(|point| point.mood_score).sum::<f64>() / count;
    let variance = points
        .iter()
        .map(|point| (point.mood_score - average_score).powi(2))
        .sum::<f64>()
        / count;
    let duration = (last.timestamp - first.timestamp).max(chrono::TimeDelta::zero());
    let is_plateau = variance < config.plateau_variance_threshold
        && duration > config.plateau_min_duration;

    if is_plateau {
        debug!(
            average_score,
            variance,
            duration_minutes = duration.num_minutes(),
            "emotional plateau detected"
        );
    }
    PlateauReport {
        is_plateau,
        average_score,
        variance,
        duration_ms: duration.num_milliseconds(),
    }
}
