//! Point-to-point delta detection between two mood analyses.
mod confidence;
mod sequence;

use tracing::{debug, trace};

use crate::config::{MoodDeltaConfig, ScoreBands};
use crate::models::{Delta, DeltaDirection, DeltaKind, MoodAnalysisResult};

pub use confidence::{EmotionalPolarity, has_conflicting_signals, polarity_of};
pub use sequence::detect_conversational_deltas;

/// Compares two analyses and returns a classified delta, or `None` when the
/// change stays under the significance floor.
#[must_use]
pub fn detect_delta(
    current: &MoodAnalysisResult,
    previous: &MoodAnalysisResult,
    config: &MoodDeltaConfig,
) -> Option<Delta> {
    let magnitude = (current.score - previous.score).abs();
    if !(magnitude >= config.minimum_magnitude) {
        trace!(
            magnitude,
            floor = config.minimum_magnitude,
            "mood change below significance floor"
        );
        return None;
    }

    let direction = DeltaDirection::between(previous.score, current.score);
    let kind = classify_delta(
        previous.score,
        current.score,
        direction,
        &config.bands,
        config.celebration_threshold,
    );
    let confidence = confidence::delta_confidence(current, previous);
    let factors = confidence::explanatory_factors(current, previous);

    debug!(
        magnitude,
        direction = direction.as_str(),
        kind = kind.as_str(),
        confidence,
        "mood delta detected"
    );
    Some(Delta {
        magnitude,
        direction,
        kind,
        confidence,
        factors,
    })
}

/// Priority order: repair, decline, celebration, then plateau.
#[must_use]
pub fn classify_delta(
    previous_score: f64,
    current_score: f64,
    direction: DeltaDirection,
    bands: &ScoreBands,
    celebration_threshold: f64,
) -> DeltaKind {
    let magnitude = (current_score - previous_score).abs();
    match direction {
        DeltaDirection::Positive
            if previous_score < bands.distress_ceiling
                && (current_score >= bands.recovery_floor
                    || (magnitude >= bands.repair_magnitude
                        && current_score >= bands.positive_baseline)) =>
        {
            DeltaKind::MoodRepair
        }
        DeltaDirection::Negative => DeltaKind::Decline,
        DeltaDirection::Positive
            if previous_score >= bands.positive_baseline
                && magnitude >= celebration_threshold =>
        {
            DeltaKind::Celebration
        }
        DeltaDirection::Positive => DeltaKind::Plateau,
    }
}
