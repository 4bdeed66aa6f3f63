use chrono::{DateTime, Utc};

use crate::models::TrajectoryPoint;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

#[allow(
    clippy::cast_precision_loss,
    reason = "conversation spans in milliseconds stay far below f64 mantissa range"
)]
pub(crate) fn elapsed_hours(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / MILLIS_PER_HOUR
}

/// Net score change per hour between two points. Zero or negative elapsed
/// time yields 0.
pub(crate) fn pair_velocity(first: &TrajectoryPoint, last: &TrajectoryPoint) -> f64 {
    let hours = elapsed_hours(first.timestamp, last.timestamp);
    if !(hours > 0.0) {
        return 0.0;
    }
    let velocity = (last.mood_score - first.mood_score) / hours;
    if velocity.is_finite() { velocity } else { 0.0 }
}

/// Points-per-hour between the first and last point of the window.
#[must_use]
pub fn calculate_mood_velocity(points: &[TrajectoryPoint]) -> f64 {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) => pair_velocity(first, last),
        _ => 0.0,
    }
}
