use std::collections::BTreeSet;

use chrono::{DateTime, TimeDelta, TimeZone, Utc};

use super::*;
use crate::config::MoodDeltaConfig;
use crate::models::{
    DeltaDirection, EmotionalTrajectory, TrajectoryDirection, TrajectoryPoint, TransitionKind,
    TurningPointKind,
};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
}

fn point(minutes: i64, score: f64, id: &str) -> TrajectoryPoint {
    TrajectoryPoint::new(t0() + TimeDelta::minutes(minutes), score, id)
}

fn series(samples: &[(i64, f64)]) -> Vec<TrajectoryPoint> {
    samples
        .iter()
        .enumerate()
        .map(|(idx, (minutes, score))| point(*minutes, *score, &format!("m{idx}")))
        .collect()
}

fn trajectory(points: Vec<TrajectoryPoint>, significance: f64) -> EmotionalTrajectory {
    EmotionalTrajectory::new(points, TrajectoryDirection::Volatile, significance)
}

#[test]
fn velocity_over_ninety_minutes_uses_endpoints() {
    let points = series(&[(0, 4.0), (30, 4.5), (60, 5.2), (90, 6.0)]);
    let velocity = calculate_mood_velocity(&points);
    assert!(velocity > 0.5 && velocity < 3.0);
    assert!((velocity - 2.0 / 1.5).abs() < 1e-9);
}

#[test]
fn velocity_is_negative_for_declining_sequences() {
    let points = series(&[(0, 7.0), (60, 6.0), (120, 4.0)]);
    assert!(calculate_mood_velocity(&points) < 0.0);
}

#[test]
fn velocity_scales_inversely_with_elapsed_time() {
    let fast = calculate_mood_velocity(&series(&[(0, 3.0), (10, 8.0)]));
    let slow = calculate_mood_velocity(&series(&[(0, 3.0), (120, 8.0)]));
    assert!((fast - 30.0).abs() < 1e-9);
    assert!((slow - 2.5).abs() < 1e-9);
    assert!(fast > slow * 10.0);
}

#[test]
fn degenerate_windows_have_zero_velocity() {
    assert_eq!(calculate_mood_velocity(&[]), 0.0);
    assert_eq!(calculate_mood_velocity(&series(&[(0, 5.0)])), 0.0);
    assert_eq!(calculate_mood_velocity(&series(&[(0, 3.0), (0, 8.0)])), 0.0);
    assert_eq!(calculate_mood_velocity(&series(&[(30, 3.0), (0, 8.0)])), 0.0);
}

#[test]
fn five_minute_jump_is_sudden() {
    let config = MoodDeltaConfig::default();
    let points = series(&[(0, 3.0), (5, 7.5)]);
    let velocity = calculate_mood_velocity(&points);
    assert!(velocity.abs() > 50.0);
    assert_eq!(
        classify_transition_type(velocity, &points, &config),
        TransitionKind::Sudden
    );
}

#[test]
fn slow_large_change_and_fast_small_wiggle_are_gradual() {
    let config = MoodDeltaConfig::default();
    let slow = series(&[(0, 3.0), (120, 8.0)]);
    assert_eq!(
        classify_transition_type(calculate_mood_velocity(&slow), &slow, &config),
        TransitionKind::Gradual
    );

    let wiggle = vec![
        point(0, 5.0, "a"),
        TrajectoryPoint::new(t0() + TimeDelta::seconds(10), 5.5, "b"),
    ];
    let velocity = calculate_mood_velocity(&wiggle);
    assert!(velocity > 100.0);
    assert_eq!(
        classify_transition_type(velocity, &wiggle, &config),
        TransitionKind::Gradual
    );
}

#[test]
fn sudden_transitions_report_only_abrupt_pairs() {
    let config = MoodDeltaConfig::default();
    let points = series(&[(0, 5.0), (60, 5.3), (65, 1.0), (180, 1.5)]);
    let transitions = detect_sudden_transitions(&points, &config);
    assert_eq!(transitions.len(), 1);
    let transition = &transitions[0];
    assert_eq!(transition.kind, TransitionKind::Sudden);
    assert_eq!(transition.direction, DeltaDirection::Negative);
    assert!((transition.magnitude - 4.3).abs() < 1e-9);
    assert!(transition.velocity < -50.0);
    assert_eq!(transition.timestamp, t0() + TimeDelta::minutes(65));
    assert_eq!(transition.from_message_id, "m1");
    assert_eq!(transition.to_message_id, "m2");
}

#[test]
fn stable_scores_over_several_hours_form_a_plateau() {
    let config = MoodDeltaConfig::default();
    let points = series(&[(0, 6.0), (60, 6.3), (120, 5.8), (180, 6.1), (240, 6.2)]);
    let report = detect_emotional_plateau(&points, &config);
    assert!(report.is_plateau);
    assert!((report.average_score - 6.08).abs() < 1e-9);
    assert!(report.variance < 0.5);
    assert_eq!(report.duration(), TimeDelta::hours(4));
}

#[test]
fn alternating_extremes_are_never_a_plateau() {
    let config = MoodDeltaConfig::default();
    let points = series(&[(0, 3.0), (120, 8.5), (240, 2.8), (360, 7.9)]);
    assert!(!detect_emotional_plateau(&points, &config).is_plateau);
}

#[test]
fn stable_but_short_window_is_not_a_plateau() {
    let config = MoodDeltaConfig::default();
    let points = series(&[(0, 6.0), (60, 6.1), (120, 6.0)]);
    assert!(!detect_emotional_plateau(&points, &config).is_plateau);
}

#[test]
fn single_point_and_empty_windows_short_circuit() {
    let config = MoodDeltaConfig::default();
    let single = detect_emotional_plateau(&series(&[(0, 6.5)]), &config);
    assert!(!single.is_plateau);
    assert_eq!(single.duration_ms, 0);
    assert!((single.average_score - 6.5).abs() < f64::EPSILON);
    assert_eq!(single.variance, 0.0);

    let empty = detect_emotional_plateau(&[], &config);
    assert_eq!(empty, crate::models::PlateauReport::empty());
}

fn labelled_reversals() -> Vec<TrajectoryPoint> {
    vec![
        point(0, 6.0, "m0"),
        point(60, 3.0, "m1").with_context("friend offered support"),
        point(120, 6.5, "m2"),
        point(180, 4.0, "m3"),
        point(240, 4.5, "m4"),
    ]
}

#[test]
fn turning_points_are_labelled_from_reversal_and_hints() {
    let config = MoodDeltaConfig::default();
    let turning_points = identify_turning_points(&trajectory(labelled_reversals(), 2.0), &config);
    let kinds = turning_points.iter().map(|tp| tp.kind).collect::<Vec<_>>();
    assert_eq!(
        kinds,
        vec![
            TurningPointKind::SupportReceived,
            TurningPointKind::Setback,
            TurningPointKind::Breakthrough,
        ]
    );
    assert!((turning_points[0].magnitude - 6.5).abs() < 1e-9);
    assert_eq!(turning_points[0].message_id, "m1");
    assert!((turning_points[0].score - 3.0).abs() < f64::EPSILON);
}

#[test]
fn turning_point_magnitude_must_exceed_significance() {
    let config = MoodDeltaConfig::default();
    let turning_points = identify_turning_points(&trajectory(labelled_reversals(), 3.5), &config);
    assert_eq!(turning_points.len(), 2);
    assert!(turning_points.iter().all(|tp| tp.magnitude > 3.5));

    let turning_points = identify_turning_points(&trajectory(labelled_reversals(), 3.0), &config);
    assert_eq!(turning_points.len(), 2);
}

#[test]
fn insight_language_marks_realization_in_either_direction() {
    let config = MoodDeltaConfig::default();
    let upturn = vec![
        point(0, 6.0, "m0"),
        point(60, 3.0, "m1").with_emotions(["realized_pattern"]),
        point(120, 6.0, "m2"),
    ];
    let downturn = vec![
        point(0, 4.0, "m0"),
        point(60, 7.0, "m1").with_context("Reflection"),
        point(120, 4.0, "m2"),
    ];
    assert_eq!(
        identify_turning_points(&trajectory(upturn, 1.0), &config)[0].kind,
        TurningPointKind::Realization
    );
    assert_eq!(
        identify_turning_points(&trajectory(downturn, 1.0), &config)[0].kind,
        TurningPointKind::Realization
    );
}

#[test]
fn nearby_turning_points_merge_into_the_larger_one() {
    let config = MoodDeltaConfig::default();
    let points = series(&[(0, 5.0), (10, 2.0), (20, 5.5), (30, 3.0)]);
    let turning_points = identify_turning_points(&trajectory(points, 1.0), &config);
    assert_eq!(turning_points.len(), 1);
    assert_eq!(turning_points[0].message_id, "m1");
    assert_eq!(turning_points[0].kind, TurningPointKind::Breakthrough);
    assert!((turning_points[0].magnitude - 6.5).abs() < 1e-9);
}

#[test]
fn short_or_monotonic_trajectories_have_no_turning_points() {
    let config = MoodDeltaConfig::default();
    let short = series(&[(0, 2.0), (60, 8.0)]);
    assert!(identify_turning_points(&trajectory(short, 0.5), &config).is_empty());
    let flat_then_rise = series(&[(0, 5.0), (60, 5.0), (120, 8.0), (180, 9.0)]);
    assert!(identify_turning_points(&trajectory(flat_then_rise, 0.5), &config).is_empty());
}

#[test]
fn flat_bottom_and_flat_top_reversals_are_turning_points() {
    let config = MoodDeltaConfig::default();
    let valley = series(&[(0, 8.0), (60, 3.0), (120, 3.0), (180, 8.0)]);
    let turning_points = identify_turning_points(&trajectory(valley, 1.0), &config);
    assert_eq!(turning_points.len(), 1);
    assert_eq!(turning_points[0].kind, TurningPointKind::Breakthrough);
    assert_eq!(turning_points[0].message_id, "m1");
    assert!((turning_points[0].magnitude - 10.0).abs() < 1e-9);

    let peak = series(&[(0, 3.0), (60, 8.0), (120, 8.0), (180, 3.0)]);
    let turning_points = identify_turning_points(&trajectory(peak, 1.0), &config);
    assert_eq!(turning_points.len(), 1);
    assert_eq!(turning_points[0].kind, TurningPointKind::Setback);
    assert_eq!(turning_points[0].message_id, "m1");
    assert!((turning_points[0].magnitude - 10.0).abs() < 1e-9);
}

#[test]
fn long_flat_run_pivots_at_its_middle_and_reads_hints_from_the_whole_run() {
    let config = MoodDeltaConfig::default();
    let points = vec![
        point(0, 8.0, "m0"),
        point(60, 2.5, "m1"),
        point(120, 2.5, "m2"),
        point(180, 2.5, "m3").with_context("support"),
        point(240, 7.0, "m4"),
    ];
    let turning_points = identify_turning_points(&trajectory(points, 1.0), &config);
    assert_eq!(turning_points.len(), 1);
    assert_eq!(turning_points[0].message_id, "m2");
    assert_eq!(turning_points[0].kind, TurningPointKind::SupportReceived);

    let shelf = series(&[(0, 3.0), (60, 5.0), (120, 5.0), (180, 7.0)]);
    assert!(identify_turning_points(&trajectory(shelf, 0.5), &config).is_empty());
}

#[test]
fn recovery_and_crisis_hints_steer_labels() {
    let recovery_and_insight: BTreeSet<ContextHint> =
        [ContextHint::Recovery, ContextHint::Insight]
            .into_iter()
            .collect();
    assert_eq!(
        turning_point_kind(ReversalDirection::Upturn, &recovery_and_insight),
        TurningPointKind::Breakthrough
    );
    let insight: BTreeSet<ContextHint> = [ContextHint::Insight].into_iter().collect();
    assert_eq!(
        turning_point_kind(ReversalDirection::Upturn, &insight),
        TurningPointKind::Realization
    );

    let config = MoodDeltaConfig::default();
    let downturn = vec![
        point(0, 4.0, "m0"),
        point(60, 7.5, "m1").with_emotions(["panic", "reflective"]),
        point(120, 3.0, "m2"),
    ];
    assert_eq!(
        identify_turning_points(&trajectory(downturn, 1.0), &config)[0].kind,
        TurningPointKind::Setback
    );
    assert_eq!(hint_for_token("Healing"), Some(ContextHint::Recovery));
}

#[test]
fn hint_table_uses_exact_tokens() {
    assert_eq!(hint_for_token("Supported"), Some(ContextHint::Support));
    assert_eq!(hint_for_token("unsupported"), None);
    let hints = context_hints(&point(0, 5.0, "m0").with_emotions(["cared_for", "calm"]));
    assert!(hints.contains(&ContextHint::Support));
    assert_eq!(hints.len(), 1);
}

#[test]
fn support_outranks_insight_on_upturns() {
    let hints: BTreeSet<ContextHint> = [ContextHint::Insight, ContextHint::Support]
        .into_iter()
        .collect();
    assert_eq!(
        turning_point_kind(ReversalDirection::Upturn, &hints),
        TurningPointKind::SupportReceived
    );
    assert_eq!(
        turning_point_kind(ReversalDirection::Downturn, &hints),
        TurningPointKind::Realization
    );
    assert_eq!(
        turning_point_kind(ReversalDirection::Downturn, &BTreeSet::new()),
        TurningPointKind::Setback
    );
}

#[test]
fn segments_split_on_gaps_longer_than_window() {
    let points = series(&[(0, 5.0), (30, 5.5), (200, 6.0), (260, 6.2), (400, 4.0)]);
    let segments = segment_by_time_window(&points, TimeDelta::hours(1));
    let lengths = segments.iter().map(|s| s.len()).collect::<Vec<_>>();
    assert_eq!(lengths, vec![2, 2, 1]);
    assert!(segment_by_time_window(&[], TimeDelta::hours(1)).is_empty());
}

#[test]
fn report_marks_plateau_as_stable() {
    let config = MoodDeltaConfig::default();
    let points = series(&[(0, 6.0), (60, 6.3), (120, 5.8), (180, 6.1), (240, 6.2)]);
    let report = analyze_trajectory(&trajectory(points, 1.0), &config);
    assert!(report.plateau.is_plateau);
    assert_eq!(report.observed_direction, TrajectoryDirection::Stable);
}

#[test]
fn report_marks_steady_rise_as_improving_and_swings_as_volatile() {
    let config = MoodDeltaConfig::default();
    let rising = series(&[(0, 3.0), (60, 4.0), (120, 5.5)]);
    let report = analyze_trajectory(&trajectory(rising, 1.0), &config);
    assert_eq!(report.observed_direction, TrajectoryDirection::Improving);
    assert_eq!(report.transition, TransitionKind::Gradual);
    assert!(report.turning_points.is_empty());

    let swinging = series(&[(0, 3.0), (60, 8.5), (120, 2.8), (180, 7.9)]);
    let report = analyze_trajectory(&trajectory(swinging, 1.0), &config);
    assert_eq!(report.turning_points.len(), 2);
    assert_eq!(report.observed_direction, TrajectoryDirection::Volatile);
}

#[test]
fn annotate_fills_turning_points_and_is_idempotent() {
    let config = MoodDeltaConfig::default();
    let mut annotated = trajectory(labelled_reversals(), 2.0);
    annotate_trajectory(&mut annotated, &config);
    assert_eq!(annotated.turning_points.len(), 3);
    let first = annotated.turning_points.clone();
    annotate_trajectory(&mut annotated, &config);
    assert_eq!(annotated.turning_points, first);
}
