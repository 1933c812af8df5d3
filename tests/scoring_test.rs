// ABOUTME: Integration tests for assessment scoring
// ABOUTME: Covers age brackets, classification, weights, validation, batch scoring, and progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

//! Scoring Integration Tests
//!
//! Exercises `pitchside::scoring` end to end:
//! - Age bracket boundaries
//! - Strength and weakness classification against age standards
//! - Category weights and performance levels
//! - Validation failures and missing-data warnings
//! - Batch scoring and progress comparison

#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{all_max_assessment, captured_on, complete_assessment};
use pitchside::errors::ErrorOutcome;
use pitchside::models::{
    AgeCategory, Assessment, Metric, MetricCategory, PerformanceLevel, Position,
};
use pitchside::scoring;

fn u17(assessment_id: &str) -> Assessment {
    Assessment::new("player-9", assessment_id, 16, Position::Defender, captured_on(1))
}

// ============================================================================
// Age Brackets
// ============================================================================

#[test]
fn test_age_category_boundaries_map_to_younger_bracket() {
    let table = [
        (9, AgeCategory::U13),
        (13, AgeCategory::U13),
        (14, AgeCategory::U15),
        (15, AgeCategory::U15),
        (16, AgeCategory::U17),
        (17, AgeCategory::U17),
        (18, AgeCategory::U19),
        (19, AgeCategory::U19),
        (20, AgeCategory::Senior),
        (34, AgeCategory::Senior),
    ];

    for (age, expected) in table {
        let assessment = Assessment::new("p", "a", age, Position::Forward, captured_on(1));
        let result = scoring::score(&assessment).unwrap();
        assert_eq!(result.age_category, expected, "age {age}");
    }
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn test_fast_sprint_is_strength_for_u17() {
    let result = scoring::score(&u17("sprint").with_metric(Metric::Sprint30m, 4.1)).unwrap();

    assert!(result.is_strength(Metric::Sprint30m));
    let finding = &result.strengths[0];
    assert!((finding.standard - 4.5).abs() < 1e-9);
    assert!((finding.delta - 0.4).abs() < 1e-9);
}

#[test]
fn test_low_ball_control_and_passing_are_weaknesses() {
    let assessment = u17("weak")
        .with_metric(Metric::BallControl, 2.0)
        .with_metric(Metric::PassingAccuracy, 50.0);
    let result = scoring::score(&assessment).unwrap();

    let weaknesses: Vec<Metric> = result.weakness_metrics().collect();
    assert_eq!(weaknesses.len(), 2);
    assert!(weaknesses.contains(&Metric::BallControl));
    assert!(weaknesses.contains(&Metric::PassingAccuracy));
    // 1.5 / 3.5 is a larger relative gap than 25 / 75
    assert_eq!(weaknesses[0], Metric::BallControl);
    assert!(result.strengths.is_empty());
}

#[test]
fn test_physical_score_ignores_sprint_value_but_classification_does_not() {
    let slow = scoring::score(&u17("slow").with_metric(Metric::Sprint30m, 6.5)).unwrap();
    let fast = scoring::score(&u17("fast").with_metric(Metric::Sprint30m, 3.8)).unwrap();

    assert!((slow.categories.physical - fast.categories.physical).abs() < f64::EPSILON);
    assert!((slow.categories.physical - 0.6).abs() < 1e-9);
    assert!(slow.is_weakness(Metric::Sprint30m));
    assert!(fast.is_strength(Metric::Sprint30m));
}

// ============================================================================
// Weights and Levels
// ============================================================================

#[test]
fn test_all_max_assessment_is_elite() {
    let result = scoring::score(&all_max_assessment("player-1", "max")).unwrap();

    assert!((result.categories.physical - 3.0).abs() < 1e-9);
    assert!((result.categories.technical - 5.0).abs() < 1e-9);
    assert!((result.overall - 4.6).abs() < 1e-9);
    assert!((result.overall_percent - 92.0).abs() < 1e-9);
    assert_eq!(result.performance_level, PerformanceLevel::Elite);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_overall_is_weighted_sum_of_categories() {
    let result = scoring::score(&complete_assessment("player-1", "spring", 2)).unwrap();
    let c = result.categories;
    let expected = 0.2 * c.physical + 0.4 * c.technical + 0.2 * c.tactical + 0.2 * c.psychological;

    assert!((result.overall - expected).abs() < 1e-9);
    for category in MetricCategory::ALL {
        let value = c.get(category);
        assert!((0.0..=5.0).contains(&value), "{category:?} = {value}");
    }
}

#[test]
fn test_missing_metrics_are_warnings_not_errors() {
    let result = scoring::score(&u17("partial").with_metric(Metric::Coachability, 4.0)).unwrap();

    assert_eq!(result.warnings.len(), 14);
    assert!(result
        .warnings
        .iter()
        .all(|w| w.metric != Metric::Coachability));
    assert!((result.categories.psychological - 2.0).abs() < 1e-9);
    assert_eq!(result.performance_level, PerformanceLevel::Beginner);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_out_of_scale_values_are_rejected() {
    let cases = [
        (Metric::BallControl, 7.0, "ball_control"),
        (Metric::PassingAccuracy, 120.0, "passing_accuracy"),
        (Metric::Sprint30m, -1.0, "sprint_30m"),
        (Metric::Positioning, f64::NAN, "positioning"),
    ];

    for (metric, value, field) in cases {
        let err = scoring::score(&u17("bad").with_metric(metric, value)).unwrap_err();
        assert_eq!(err.outcome(), ErrorOutcome::Validation, "{field}");
        assert!(err.message.contains(field), "{}", err.message);
    }
}

#[test]
fn test_age_outside_supported_range_is_rejected() {
    for age in [4, 61] {
        let assessment = Assessment::new("p", "a", age, Position::Goalkeeper, captured_on(1));
        let err = scoring::validate_assessment(&assessment).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.context.player_id.as_deref(), Some("p"));
    }
}

#[test]
fn test_blank_identifiers_are_rejected() {
    let assessment = Assessment::new("  ", "a", 15, Position::Forward, captured_on(1));
    let err = scoring::score(&assessment).unwrap_err();
    assert!(err.is_validation());
    assert!(err.message.contains("player_id"));
}

// ============================================================================
// Determinism, Batch, and Progress
// ============================================================================

#[test]
fn test_scoring_is_byte_identical_across_runs() {
    let assessment = complete_assessment("player-1", "spring", 2);
    let first = serde_json::to_string(&scoring::score(&assessment).unwrap()).unwrap();
    let second = serde_json::to_string(&scoring::score(&assessment).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_score_batch_keeps_input_order_and_isolates_failures() {
    let squad: Vec<Assessment> = (0..12)
        .map(|i| {
            let assessment = complete_assessment(&format!("player-{i}"), "preseason", 1);
            if i == 5 {
                assessment.with_metric(Metric::DecisionMaking, 9.0)
            } else {
                assessment
            }
        })
        .collect();

    let results = scoring::score_batch(&squad);

    assert_eq!(results.len(), squad.len());
    for (i, result) in results.iter().enumerate() {
        if i == 5 {
            assert!(result.as_ref().unwrap_err().is_validation());
        } else {
            assert_eq!(result.as_ref().unwrap().player_id, format!("player-{i}"));
        }
    }
}

#[test]
fn test_compare_reports_resolved_weaknesses() {
    let before = scoring::score(
        &u17("autumn")
            .with_metric(Metric::PassingAccuracy, 60.0)
            .with_metric(Metric::BallControl, 3.0),
    )
    .unwrap();
    let after = scoring::score(
        &u17("spring")
            .with_metric(Metric::PassingAccuracy, 82.0)
            .with_metric(Metric::BallControl, 3.0),
    )
    .unwrap();

    let report = scoring::compare(&before, &after).unwrap();

    assert_eq!(report.previous_assessment_id, "autumn");
    assert_eq!(report.current_assessment_id, "spring");
    assert_eq!(report.category_deltas.len(), 4);
    assert!(report.overall_delta > 0.0);
    assert_eq!(report.resolved_weaknesses, vec![Metric::PassingAccuracy]);
    assert!(report.new_weaknesses.is_empty());
    let technical = report
        .category_deltas
        .iter()
        .find(|d| d.category == MetricCategory::Technical)
        .unwrap();
    assert!((technical.delta - 0.22).abs() < 1e-9);
}
