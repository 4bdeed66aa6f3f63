use crate::config::MoodDeltaConfig;
use crate::models::{
    DeltaDirection, EmotionalTrajectory, PlateauReport, SuddenTransition, TrajectoryDirection,
    TrajectoryReport, TurningPoint,
};

use super::{
    calculate_mood_velocity, classify_transition_type, detect_emotional_plateau,
    detect_sudden_transitions, identify_turning_points,
};

/// Runs every trajectory analysis over one window.
#[must_use]
pub fn analyze_trajectory(
    trajectory: &EmotionalTrajectory,
    config: &MoodDeltaConfig,
) -> TrajectoryReport {
    let points = &trajectory.points;
    let velocity = calculate_mood_velocity(points);
    let transition = classify_transition_type(velocity, points, config);
    let sudden_transitions = detect_sudden_transitions(points, config);
    let plateau = detect_emotional_plateau(points, config);
    let turning_points = identify_turning_points(trajectory, config);
    let net_change = match (points.first(), points.last()) {
        (Some(first), Some(last)) => last.mood_score - first.mood_score,
        _ => 0.0,
    };
    let observed_direction = observed_direction(
        net_change,
        &plateau,
        &sudden_transitions,
        &turning_points,
        config,
    );
    TrajectoryReport {
        velocity,
        transition,
        sudden_transitions,
        plateau,
        turning_points,
        observed_direction,
    }
}

/// Fills `turning_points` on the trajectory in place.
pub fn annotate_trajectory(trajectory: &mut EmotionalTrajectory, config: &MoodDeltaConfig) {
    trajectory.turning_points = identify_turning_points(trajectory, config);
}

fn observed_direction(
    net_change: f64,
    plateau: &PlateauReport,
    sudden_transitions: &[SuddenTransition],
    turning_points: &[TurningPoint],
    config: &MoodDeltaConfig,
) -> TrajectoryDirection {
    if plateau.is_plateau {
        return TrajectoryDirection::Stable;
    }
    let swings_both_ways = sudden_transitions
        .iter()
        .any(|t| t.direction == DeltaDirection::Positive)
        && sudden_transitions
            .iter()
            .any(|t| t.direction == DeltaDirection::Negative);
    if turning_points.len() >= 2 || swings_both_ways {
        return TrajectoryDirection::Volatile;
    }
    if net_change >= config.minimum_magnitude {
        TrajectoryDirection::Improving
    } else if net_change <= -config.minimum_magnitude {
        TrajectoryDirection::Declining
    } else if turning_points.is_empty() {
        TrajectoryDirection::Stable
    } else {
        TrajectoryDirection::Volatile
    }
}
