use tracing::debug;

use crate::config::MoodDeltaConfig;
use crate::models::{Delta, DeltaKind, MoodAnalysisResult};

use super::confidence::clamp_unit;
use super::detect_delta;

const MOOD_REPAIR_SEQUENCE_BOOST: f64 = 0.1;
const EARLY_SHIFT_FACTOR: &str = "Early conversation shift";
const CONCLUSION_SHIFT_FACTOR: &str = "Conversation conclusion shift";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConversationPhase {
    Early,
    Middle,
    Conclusion,
}

impl ConversationPhase {
    /// Phase of the pair at `pair_index` among `pair_count` adjacent pairs,
    /// measured at the pair's midpoint.
    #[allow(
        clippy::cast_precision_loss,
        reason = "sequence lengths are conversational-scale"
    )]
    fn of_pair(pair_index: usize, pair_count: usize) -> Self {
        let position = (pair_index as f64 + 0.5) / pair_count as f64;
        if position < 1.0 / 3.0 {
            Self::Early
        } else if position >= 2.0 / 3.0 {
            Self::Conclusion
        } else {
            Self::Middle
        }
    }

    const fn factor(self) -> Option<&'static str> {
        match self {
            Self::Early => Some(EARLY_SHIFT_FACTOR),
            Self::Middle => None,
            Self::Conclusion => Some(CONCLUSION_SHIFT_FACTOR),
        }
    }
}

/// Runs the delta comparator over adjacent pairs of one conversation's analyses.
#[must_use]
pub fn detect_conversational_deltas(
    sequence: &[MoodAnalysisResult],
    config: &MoodDeltaConfig,
) -> Vec<Delta> {
    let pair_count = sequence.len().saturating_sub(1);
    let deltas = sequence
        .windows(2)
        .enumerate()
        .filter_map(|(pair_index, pair)| {
            let mut delta = detect_delta(&pair[1], &pair[0], config)?;
            if let Some(factor) = ConversationPhase::of_pair(pair_index, pair_count).factor() {
                delta.factors.push(factor.to_string());
            }
            if delta.kind == DeltaKind::MoodRepair {
                delta.confidence = clamp_unit(delta.confidence + MOOD_REPAIR_SEQUENCE_BOOST);
            }
            Some(delta)
        })
        .collect::<Vec<_>>();
    debug!(
        analyses = sequence.len(),
        deltas = deltas.len(),
        "conversational deltas detected"
    );
    deltas
}
