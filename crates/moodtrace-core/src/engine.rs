use crate::config::{MoodDeltaConfig, MoodDeltaConfigInput, resolve_config};
use crate::delta;
use crate::error::Result;
use crate::models::{
    Delta, EmotionalTrajectory, ExtractionDecision, MoodAnalysisResult, PlateauReport,
    SuddenTransition, TrajectoryPoint, TrajectoryReport, TransitionKind, TurningPoint,
};
use crate::trajectory;
use crate::trigger;

/// Stateless detection engine. Each instance owns its configuration and every
/// call is a pure function of its inputs, so one engine can be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoodDeltaEngine {
    config: MoodDeltaConfig,
}

impl MoodDeltaEngine {
    #[must_use]
    pub const fn new(config: MoodDeltaConfig) -> Self {
        Self { config }
    }

    pub fn from_input(input: MoodDeltaConfigInput) -> Result<Self> {
        Ok(Self::new(resolve_config(input)?))
    }

    #[must_use]
    pub const fn config(&self) -> &MoodDeltaConfig {
        &self.config
    }

    #[must_use]
    pub fn detect_delta(
        &self,
        current: &MoodAnalysisResult,
        previous: &MoodAnalysisResult,
    ) -> Option<Delta> {
        delta::detect_delta(current, previous, &self.config)
    }

    #[must_use]
    pub fn detect_conversational_deltas(&self, sequence: &[MoodAnalysisResult]) -> Vec<Delta> {
        delta::detect_conversational_deltas(sequence, &self.config)
    }

    #[must_use]
    pub fn calculate_mood_velocity(&self, points: &[TrajectoryPoint]) -> f64 {
        trajectory::calculate_mood_velocity(points)
    }

    #[must_use]
    pub fn classify_transition_type(
        &self,
        velocity: f64,
        points: &[TrajectoryPoint],
    ) -> TransitionKind {
        trajectory::classify_transition_type(velocity, points, &self.config)
    }

    #[must_use]
    pub fn detect_sudden_transitions(&self, points: &[TrajectoryPoint]) -> Vec<SuddenTransition> {
        trajectory::detect_sudden_transitions(points, &self.config)
    }

    #[must_use]
    pub fn detect_emotional_plateau(&self, points: &[TrajectoryPoint]) -> PlateauReport {
        trajectory::detect_emotional_plateau(points, &self.config)
    }

    #[must_use]
    pub fn identify_turning_points(&self, trajectory: &EmotionalTrajectory) -> Vec<TurningPoint> {
        trajectory::identify_turning_points(trajectory, &self.config)
    }

    pub fn annotate_trajectory(&self, trajectory: &mut EmotionalTrajectory) {
        trajectory::annotate_trajectory(trajectory, &self.config);
    }

    #[must_use]
    pub fn analyze_trajectory(&self, trajectory: &EmotionalTrajectory) -> TrajectoryReport {
        trajectory::analyze_trajectory(trajectory, &self.config)
    }

    /// Conversation windows separated by gaps longer than the configured time window.
    #[must_use]
    pub fn segment_conversations<'a>(
        &self,
        points: &'a [TrajectoryPoint],
    ) -> Vec<&'a [TrajectoryPoint]> {
        trajectory::segment_by_time_window(points, self.config.time_window)
    }

    #[must_use]
    pub fn should_trigger_extraction(&self, delta: &Delta) -> bool {
        trigger::should_trigger_extraction(delta, &self.config)
    }

    #[must_use]
    pub fn should_trigger_turning_point(&self, turning_point: &TurningPoint) -> bool {
        trigger::should_trigger_turning_point(turning_point, &self.config)
    }

    #[must_use]
    pub fn should_trigger_transition(&self, transition: &SuddenTransition) -> bool {
        trigger::should_trigger_transition(transition, &self.config)
    }

    #[must_use]
    pub fn plan_extraction(&self, deltas: &[Delta]) -> Vec<ExtractionDecision> {
        trigger::plan_extraction(deltas, &self.config)
    }

    /// Sequencer plus trigger decisions for one conversation's analyses.
    #[must_use]
    pub fn evaluate_conversation(&self, sequence: &[MoodAnalysisResult]) -> Vec<ExtractionDecision> {
        self.plan_extraction(&self.detect_conversational_deltas(sequence))
    }
}
