use tracing::debug;

use crate::config::MoodDeltaConfig;
use crate::models::{Delta, DeltaKind, ExtractionDecision, SuddenTransition, TurningPoint};

/// Whether a delta should be handed to the extraction pipeline.
#[must_use]
pub fn should_trigger_extraction(delta: &Delta, config: &MoodDeltaConfig) -> bool {
    match delta.kind {
        DeltaKind::MoodRepair => true,
        DeltaKind::Decline => delta.magnitude >= config.decline_threshold,
        DeltaKind::Celebration => delta.magnitude >= config.celebration_threshold,
        DeltaKind::Plateau => false,
    }
}

#[must_use]
pub fn should_trigger_turning_point(turning_point: &TurningPoint, config: &MoodDeltaConfig) -> bool {
    turning_point.magnitude >= config.general_trigger_magnitude()
}

#[must_use]
pub fn should_trigger_transition(transition: &SuddenTransition, config: &MoodDeltaConfig) -> bool {
    transition.magnitude >= config.general_trigger_magnitude()
}

#[must_use]
pub fn plan_extraction(deltas: &[Delta], config: &MoodDeltaConfig) -> Vec<ExtractionDecision> {
    let decisions = deltas
        .iter()
        .map(|delta| ExtractionDecision {
            delta: delta.clone(),
            should_trigger: should_trigger_extraction(delta, config),
            confident: delta.confidence >= config.confidence_threshold,
        })
        .collect::<Vec<_>>();
    debug!(
        deltas = decisions.len(),
        triggered = decisions.iter().filter(|d| d.should_trigger).count(),
        "extraction plan built"
    );
    decisions
}
