use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{TrajectoryPoint, TurningPointKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextHint {
    Support,
    Insight,
    Reflection,
    Recovery,
    Crisis,
}

impl ContextHint {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Support => "support",
            Self::Insight => "insight",
            Self::Reflection => "reflection",
            Self::Recovery => "recovery",
            Self::Crisis => "crisis",
        }
    }
}

const HINT_TOKENS: &[(&str, ContextHint)] = &[
    ("support", ContextHint::Support),
    ("supported", ContextHint::Support),
    ("supportive", ContextHint::Support),
    ("comfort", ContextHint::Support),
    ("comforted", ContextHint::Support),
    ("encouragement", ContextHint::Support),
    ("encouraged", ContextHint::Support),
    ("reassurance", ContextHint::Support),
    ("reassured", ContextHint::Support),
    ("validated", ContextHint::Support),
    ("cared", ContextHint::Support),
    ("insight", ContextHint::Insight),
    ("realization", ContextHint::Insight),
    ("realize", ContextHint::Insight),
    ("realized", ContextHint::Insight),
    ("understand", ContextHint::Insight),
    ("understood", ContextHint::Insight),
    ("pattern", ContextHint::Insight),
    ("clarity", ContextHint::Insight),
    ("epiphany", ContextHint::Insight),
    ("reflection", ContextHint::Reflection),
    ("reflective", ContextHint::Reflection),
    ("reflect", ContextHint::Reflection),
    ("reflecting", ContextHint::Reflection),
    ("introspection", ContextHint::Reflection),
    ("hindsight", ContextHint::Reflection),
    ("recovery", ContextHint::Recovery),
    ("recovering", ContextHint::Recovery),
    ("healing", ContextHint::Recovery),
    ("crisis", ContextHint::Crisis),
    ("panic", ContextHint::Crisis),
    ("loss", ContextHint::Crisis),
    ("rejection", ContextHint::Crisis),
];

/// Maps one token to its hint by exact, case-insensitive match.
#[must_use]
pub fn hint_for_token(token: &str) -> Option<ContextHint> {
    let normalized = token.trim().to_ascii_lowercase();
    HINT_TOKENS
        .iter()
        .find(|(candidate, _)| *candidate == normalized)
        .map(|(_, hint)| *hint)
}

/// Normalized hints carried by a point's context tag and emotion labels.
#[must_use]
pub fn context_hints(point: &TrajectoryPoint) -> BTreeSet<ContextHint> {
    point
        .context
        .iter()
        .chain(point.emotions.iter())
        .flat_map(|raw| raw.split(|ch: char| !ch.is_alphanumeric()))
        .filter_map(hint_for_token)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReversalDirection {
    /// Declining trend turns upward.
    Upturn,
    /// Improving trend turns downward.
    Downturn,
}

/// Support outranks recovery on an upturn, and recovery outranks insight.
/// Crisis language on a downturn keeps it a setback even when reflective.
#[must_use]
pub fn turning_point_kind(
    direction: ReversalDirection,
    hints: &BTreeSet<ContextHint>,
) -> TurningPointKind {
    match direction {
        ReversalDirection::Upturn if hints.contains(&ContextHint::Support) => {
            TurningPointKind::SupportReceived
        }
        ReversalDirection::Upturn if hints.contains(&ContextHint::Recovery) => {
            TurningPointKind::Breakthrough
        }
        ReversalDirection::Upturn if hints.contains(&ContextHint::Insight) => {
            TurningPointKind::Realization
        }
        ReversalDirection::Upturn => TurningPointKind::Breakthrough,
        ReversalDirection::Downturn if hints.contains(&ContextHint::Crisis) => {
            TurningPointKind::Setback
        }
        ReversalDirection::Downturn
            if hints.contains(&ContextHint::Insight)
                || hints.contains(&ContextHint::Reflection) =>
        {
            TurningPointKind::Realization
        }
        ReversalDirection::Downturn => TurningPointKind::Setback,
    }
}
