//! Trajectory-level analysis over timestamped mood points.
mod hints;
mod plateau;
mod report;
mod segment;
mod transitions;
mod turning;
mod velocity;

pub use hints::{
    ContextHint, ReversalDirection, context_hints, hint_for_token, turning_point_kind,
};
pub use plateau::detect_emotional_plateau;
pub use report::{analyze_trajectory, annotate_trajectory};
pub use segment::segment_by_time_window;
pub use transitions::{classify_transition_type, detect_sudden_transitions};
pub use turning::identify_turning_points;
pub use velocity::calculate_mood_velocity;

#[cfg(test)]
mod tests;
