use std::collections::BTreeSet;

use chrono::TimeDelta;
use tracing::debug;

use crate::config::MoodDeltaConfig;
use crate::models::{EmotionalTrajectory, TrajectoryPoint, TurningPoint};

use super::hints::{ReversalDirection, context_hints, turning_point_kind};

/// Local reversals whose combined swing exceeds the trajectory's significance.
/// Runs of equal scores count as one step, so a flat bottom or top still reverses.
/// Reversals closer together than the merge threshold collapse into the larger one.
#[must_use]
pub fn identify_turning_points(
    trajectory: &EmotionalTrajectory,
    config: &MoodDeltaConfig,
) -> Vec<TurningPoint> {
    if trajectory.points.len() < 3 {
        return Vec::new();
    }
    let runs = trajectory
        .points
        .chunk_by(|left, right| left.mood_score == right.mood_score)
        .collect::<Vec<_>>();
    let candidates = runs
        .windows(3)
        .filter_map(|window| reversal_at(window, trajectory.significance));
    let turning_points = merge_nearby(candidates, config.turning_point_merge_threshold);
    for turning_point in &turning_points {
        debug!(
            kind = turning_point.kind.as_str(),
            magnitude = turning_point.magnitude,
            message_id = %turning_point.message_id,
            "turning point identified"
        );
    }
    turning_points
}

/// The pivot is the middle of the flat run, earlier on ties.
fn reversal_at(runs: &[&[TrajectoryPoint]], significance: f64) -> Option<TurningPoint> {
    let [before, flat, after] = runs else {
        return None;
    };
    let last_before = before.last()?;
    let first_after = after.first()?;
    let pivot = flat.get(flat.len().saturating_sub(1) / 2)?;
    let rise_in = pivot.mood_score - last_before.mood_score;
    let rise_out = first_after.mood_score - pivot.mood_score;
    let direction = if rise_in < 0.0 && rise_out > 0.0 {
        ReversalDirection::Upturn
    } else if rise_in > 0.0 && rise_out < 0.0 {
        ReversalDirection::Downturn
    } else {
        return None;
    };
    let magnitude = rise_in.abs() + rise_out.abs();
    if !(magnitude > significance) {
        return None;
    }
    let hints = flat.iter().flat_map(context_hints).collect::<BTreeSet<_>>();
    Some(TurningPoint {
        timestamp: pivot.timestamp,
        magnitude,
        kind: turning_point_kind(direction, &hints),
        message_id: pivot.message_id.clone(),
        score: pivot.mood_score,
    })
}

fn merge_nearby(
    candidates: impl Iterator<Item = TurningPoint>,
    window: TimeDelta,
) -> Vec<TurningPoint> {
    let mut merged: Vec<TurningPoint> = Vec::new();
    for candidate in candidates {
        match merged.last_mut() {
            Some(last) if candidate.timestamp - last.timestamp <= window => {
                if candidate.magnitude > last.magnitude {
                    *last = candidate;
                }
            }
            _ => merged.push(candidate),
        }
    }
    merged
}
