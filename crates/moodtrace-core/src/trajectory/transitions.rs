use tracing::debug;

use crate::config::MoodDeltaConfig;
use crate::models::{DeltaDirection, SuddenTransition, TrajectoryPoint, TransitionKind};

use super::velocity::pair_velocity;

/// Sudden requires both a steep slope and a real score swing between the
/// first and last point.
#[must_use]
pub fn classify_transition_type(
    velocity: f64,
    points: &[TrajectoryPoint],
    config: &MoodDeltaConfig,
) -> TransitionKind {
    let magnitude = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (last.mood_score - first.mood_score).abs(),
        _ => 0.0,
    };
    if velocity.abs() > config.sudden_velocity_threshold
        && magnitude >= config.sudden_magnitude_threshold
    {
        TransitionKind::Sudden
    } else {
        TransitionKind::Gradual
    }
}

#[must_use]
pub fn detect_sudden_transitions(
    points: &[TrajectoryPoint],
    config: &MoodDeltaConfig,
) -> Vec<SuddenTransition> {
    points
        .windows(2)
        .filter_map(|pair| {
            let velocity = pair_velocity(&pair[0], &pair[1]);
            if classify_transition_type(velocity, pair, config) != TransitionKind::Sudden {
                return None;
            }
            let magnitude = (pair[1].mood_score - pair[0].mood_score).abs();
            debug!(
                magnitude,
                velocity,
                message_id = %pair[1].message_id,
                "sudden mood transition detected"
            );
            Some(SuddenTransition {
                kind: TransitionKind::Sudden,
                magnitude,
                velocity,
                direction: DeltaDirection::between(pair[0].mood_score, pair[1].mood_score),
                timestamp: pair[1].timestamp,
                from_message_id: pair[0].message_id.clone(),
                to_message_id: pair[1].message_id.clone(),
            })
        })
        .collect()
}
