use chrono::TimeDelta;

use crate::models::TrajectoryPoint;

/// Splits a time-ordered slice wherever neighbors are more than `window` apart.
#[must_use]
pub fn segment_by_time_window(
    points: &[TrajectoryPoint],
    window: TimeDelta,
) -> Vec<&[TrajectoryPoint]> {
    let mut segments = Vec::new();
    let mut start = 0;
    for idx in 1..points.len() {
        if points[idx].timestamp - points[idx - 1].timestamp > window {
            segments.push(&points[start..idx]);
            start = idx;
        }
    }
    if start < points.len() {
        segments.push(&points[start..]);
    }
    segments
}
