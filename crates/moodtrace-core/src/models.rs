use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{MoodTraceError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisFactor {
    #[serde(rename = "type")]
    pub kind: String,
    pub weight: f64,
    #[serde(default)]
    pub evidence: Vec<String>,
}

/// Point-in-time output of an upstream mood scorer. Consumed read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodAnalysisResult {
    pub score: f64,
    pub confidence: f64,
    #[serde(default)]
    pub descriptors: Vec<String>,
    #[serde(default)]
    pub factors: Vec<AnalysisFactor>,
}

impl MoodAnalysisResult {
    #[must_use]
    pub fn evidence_count(&self) -> usize {
        self.factors.iter().map(|factor| factor.evidence.len()).sum()
    }

    /// Highest-weighted factor; the first one wins on ties.
    #[must_use]
    pub fn dominant_factor(&self) -> Option<&AnalysisFactor> {
        self.factors.iter().fold(None::<&AnalysisFactor>, |best, factor| match best {
            Some(current) if current.weight >= factor.weight => Some(current),
            _ => Some(factor),
        })
    }

    pub fn evidence(&self) -> impl Iterator<Item = &str> {
        self.factors
            .iter()
            .flat_map(|factor| factor.evidence.iter().map(String::as_str))
    }

    pub fn validate(&self) -> Result<()> {
        if !self.score.is_finite() {
            return Err(MoodTraceError::Validation(format!(
                "score must be finite, got {}",
                self.score
            )));
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(MoodTraceError::Validation(format!(
                "confidence must be in [0, 1], got {}",
                self.confidence
            )));
        }
        if let Some(factor) = self.factors.iter().find(|factor| !factor.weight.is_finite()) {
            return Err(MoodTraceError::Validation(format!(
                "factor {} has a non-finite weight",
                factor.kind
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub timestamp: DateTime<Utc>,
    pub mood_score: f64,
    pub message_id: String,
    #[serde(default)]
    pub emotions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl TrajectoryPoint {
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>, mood_score: f64, message_id: impl Into<String>) -> Self {
        Self {
            timestamp,
            mood_score,
            message_id: message_id.into(),
            emotions: Vec::new(),
            context: None,
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    #[must_use]
    pub fn with_emotions<I, S>(mut self, emotions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.emotions = emotions.into_iter().map(Into::into).collect();
        self
    }
}

/// Returns the index of the first point whose timestamp precedes its predecessor.
pub fn ensure_time_ordered(points: &[TrajectoryPoint]) -> Result<()> {
    match points
        .windows(2)
        .position(|pair| pair[1].timestamp < pair[0].timestamp)
    {
        Some(idx) => Err(MoodTraceError::UnorderedPoints { index: idx + 1 }),
        None => Ok(()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeltaDirection {
    Positive,
    Negative,
}

impl DeltaDirection {
    #[must_use]
    pub fn between(before: f64, after: f64) -> Self {
        if after > before {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeltaKind {
    /// Significant but moderate shift that crosses no state boundary.
    Plateau,
    Decline,
    MoodRepair,
    Celebration,
}

impl DeltaKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plateau => "plateau",
            Self::Decline => "decline",
            Self::MoodRepair => "mood_repair",
            Self::Celebration => "celebration",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "plateau" => Some(Self::Plateau),
            "decline" => Some(Self::Decline),
            "mood_repair" => Some(Self::MoodRepair),
            "celebration" => Some(Self::Celebration),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    pub magnitude: f64,
    pub direction: DeltaDirection,
    #[serde(rename = "type")]
    pub kind: DeltaKind,
    pub confidence: f64,
    pub factors: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrajectoryDirection {
    Improving,
    Declining,
    Volatile,
    Stable,
}

impl TrajectoryDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Declining => "declining",
            Self::Volatile => "volatile",
            Self::Stable => "stable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalTrajectory {
    pub points: Vec<TrajectoryPoint>,
    /// Caller-supplied hint; never derived by the engine.
    pub direction: TrajectoryDirection,
    pub significance: f64,
    #[serde(default)]
    pub turning_points: Vec<TurningPoint>,
}

impl EmotionalTrajectory {
    #[must_use]
    pub fn new(
        points: Vec<TrajectoryPoint>,
        direction: TrajectoryDirection,
        significance: f64,
    ) -> Self {
        Self {
            points,
            direction,
            significance,
            turning_points: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurningPointKind {
    Breakthrough,
    Setback,
    SupportReceived,
    Realization,
}

impl TurningPointKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakthrough => "breakthrough",
            Self::Setback => "setback",
            Self::SupportReceived => "support_received",
            Self::Realization => "realization",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurningPoint {
    pub timestamp: DateTime<Utc>,
    pub magnitude: f64,
    #[serde(rename = "type")]
    pub kind: TurningPointKind,
    pub message_id: String,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    Sudden,
    Gradual,
}

impl TransitionKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sudden => "sudden",
            Self::Gradual => "gradual",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuddenTransition {
    #[serde(rename = "type")]
    pub kind: TransitionKind,
    pub magnitude: f64,
    /// Points per hour between the two neighbors.
    pub velocity: f64,
    pub direction: DeltaDirection,
    pub timestamp: DateTime<Utc>,
    pub from_message_id: String,
    pub to_message_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlateauReport {
    pub is_plateau: bool,
    pub average_score: f64,
    pub variance: f64,
    pub duration_ms: i64,
}

impl PlateauReport {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            is_plateau: false,
            average_score: 0.0,
            variance: 0.0,
            duration_ms: 0,
        }
    }

    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        TimeDelta::milliseconds(self.duration_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryReport {
    pub velocity: f64,
    pub transition: TransitionKind,
    pub sudden_transitions: Vec<SuddenTransition>,
    pub plateau: PlateauReport,
    pub turning_points: Vec<TurningPoint>,
    pub observed_direction: TrajectoryDirection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionDecision {
    pub delta: Delta,
    pub should_trigger: bool,
    /// Delta confidence cleared the configured confidence threshold.
    pub confident: bool,
}
