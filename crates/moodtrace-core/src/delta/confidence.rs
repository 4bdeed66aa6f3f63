use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::MoodAnalysisResult;

const EVIDENCE_STEP: f64 = 0.02;
const EVIDENCE_BOOST_CAP: f64 = 0.12;
const SPARSE_EVIDENCE_PENALTY: f64 = 0.1;
const CONFLICT_PENALTY: f64 = 0.15;
const CONFLICTED_CONFIDENCE_CEILING: f64 = 0.85;
const STRUCTURAL_SHIFT_BOOST: f64 = 0.05;
const EXPRESSIVENESS_MIN_EVIDENCE: usize = 2;

const POSITIVE_TERMS: &[&str] = &[
    "calm",
    "confident",
    "content",
    "excited",
    "glad",
    "grateful",
    "happy",
    "hopeful",
    "joy",
    "joyful",
    "love",
    "optimistic",
    "peaceful",
    "proud",
    "relief",
    "relieved",
    "thankful",
];

const NEGATIVE_TERMS: &[&str] = &[
    "afraid",
    "angry",
    "anxiety",
    "anxious",
    "ashamed",
    "depressed",
    "exhausted",
    "fear",
    "frustrated",
    "hopeless",
    "hurt",
    "lonely",
    "overwhelmed",
    "sad",
    "scared",
    "stressed",
    "upset",
    "worried",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionalPolarity {
    Positive,
    Negative,
}

/// Polarity of a single emotion label or evidence word, by exact lexicon match.
#[must_use]
pub fn polarity_of(term: &str) -> Option<EmotionalPolarity> {
    let normalized = term.trim().to_ascii_lowercase();
    if POSITIVE_TERMS.contains(&normalized.as_str()) {
        Some(EmotionalPolarity::Positive)
    } else if NEGATIVE_TERMS.contains(&normalized.as_str()) {
        Some(EmotionalPolarity::Negative)
    } else {
        None
    }
}

/// True when positive and negative emotional language co-occur in one analysis.
#[must_use]
pub fn has_conflicting_signals(analysis: &MoodAnalysisResult) -> bool {
    let mut positive = false;
    let mut negative = false;
    let evidence_words = analysis
        .evidence()
        .flat_map(|item| item.split(|ch: char| !ch.is_alphanumeric()));
    for term in analysis
        .descriptors
        .iter()
        .map(String::as_str)
        .chain(evidence_words)
    {
        match polarity_of(term) {
            Some(EmotionalPolarity::Positive) => positive = true,
            Some(EmotionalPolarity::Negative) => negative = true,
            None => {}
        }
        if positive && negative {
            return true;
        }
    }
    false
}

pub(super) fn delta_confidence(current: &MoodAnalysisResult, previous: &MoodAnalysisResult) -> f64 {
    let mut confidence = (current.confidence + previous.confidence) / 2.0;
    confidence += evidence_adjustment(current, previous);
    if dominant_shift(current, previous).is_some() {
        confidence += STRUCTURAL_SHIFT_BOOST;
    }
    if has_conflicting_signals(current) {
        confidence = (confidence - CONFLICT_PENALTY).min(CONFLICTED_CONFIDENCE_CEILING);
    }
    clamp_unit(confidence)
}

pub(super) fn explanatory_factors(
    current: &MoodAnalysisResult,
    previous: &MoodAnalysisResult,
) -> Vec<String> {
    let mut factors = Vec::new();

    let new_descriptors = new_descriptors(current, previous);
    if !new_descriptors.is_empty() {
        factors.push(format!(
            "New emotional expressions: {}",
            new_descriptors.join(", ")
        ));
    }
    if let Some((from, to)) = dominant_shift(current, previous) {
        factors.push(format!("Shift from {from} to {to}"));
    }
    let current_evidence = current.evidence_count();
    if current_evidence >= EXPRESSIVENESS_MIN_EVIDENCE
        && current_evidence > previous.evidence_count().saturating_mul(2)
    {
        factors.push("Increased emotional expressiveness".to_string());
    }
    factors
}

pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

#[allow(
    clippy::cast_precision_loss,
    reason = "evidence counts are conversational-scale and far below f64 mantissa range"
)]
fn evidence_adjustment(current: &MoodAnalysisResult, previous: &MoodAnalysisResult) -> f64 {
    let count = current.evidence_count();
    if count == 0 {
        return -SPARSE_EVIDENCE_PENALTY;
    }
    let seen = previous
        .evidence()
        .map(normalize_term)
        .collect::<HashSet<_>>();
    let novel = current
        .evidence()
        .map(normalize_term)
        .collect::<HashSet<_>>()
        .difference(&seen)
        .count();
    ((count + novel) as f64 * EVIDENCE_STEP).min(EVIDENCE_BOOST_CAP)
}

fn dominant_shift<'a>(
    current: &'a MoodAnalysisResult,
    previous: &'a MoodAnalysisResult,
) -> Option<(&'a str, &'a str)> {
    let from = previous.dominant_factor()?.kind.as_str();
    let to = current.dominant_factor()?.kind.as_str();
    (from != to).then_some((from, to))
}

fn new_descriptors<'a>(
    current: &'a MoodAnalysisResult,
    previous: &MoodAnalysisResult,
) -> Vec<&'a str> {
    let known = previous
        .descriptors
        .iter()
        .map(|label| normalize_term(label))
        .collect::<HashSet<_>>();
    let mut emitted = HashSet::new();
    current
        .descriptors
        .iter()
        .map(|label| label.trim())
        .filter(|label| !label.is_empty())
        .filter(|label| {
            let key = normalize_term(label);
            !known.contains(&key) && emitted.insert(key)
        })
        .collect()
}

fn normalize_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}
