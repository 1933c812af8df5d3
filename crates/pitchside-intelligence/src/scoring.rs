// ABOUTME: Assessment scoring engine producing normalized category and overall scores
// ABOUTME: Classifies strengths and weaknesses against age benchmarks and compares assessments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

//! Scoring engine.
//!
//! Every category is scored on a 0-5 scale by averaging over the category's
//! full metric list, so a missing metric pulls the score down instead of
//! being skipped. Physical metrics are scored on presence only: each
//! recorded physical test contributes a fixed number of points regardless
//! of the measured value, capping the physical score at 3.0. Physical
//! values still take part in strength and weakness classification.

use pitchside_core::constants::{normalization, schema, strength_margins};
use pitchside_core::errors::{AppError, AppResult, ValidationError};
use pitchside_core::models::{
    Assessment, CategoryDelta, CategoryScores, IncompleteDataWarning, Metric, MetricCategory,
    MetricFinding, MetricKind, PerformanceLevel, ProgressReport, ScoreResult,
};
use rayon::prelude::*;
use tracing::debug;

use crate::benchmarks;

/// Reject structurally invalid assessments
///
/// # Errors
///
/// Returns a validation `AppError` naming the offending field
pub fn validate_assessment(assessment: &Assessment) -> AppResult<()> {
    assessment
        .validate()
        .map_err(|e| AppError::from(e).with_player_id(&assessment.player_id))
}

/// Value of a metric on the 0-5 scale
fn normalized(metric: Metric, value: f64) -> f64 {
    match metric.kind() {
        MetricKind::Percentage => value / normalization::PERCENT_DIVISOR,
        MetricKind::Ordinal => value,
        MetricKind::Measured => normalization::PHYSICAL_PRESENCE_POINTS,
    }
}

#[allow(clippy::cast_precision_loss)] // metric counts are tiny
fn category_score(assessment: &Assessment, category: MetricCategory) -> f64 {
    let metrics: Vec<Metric> = category.metrics().collect();
    let total: f64 = metrics
        .iter()
        .filter_map(|m| assessment.value(*m).map(|v| normalized(*m, v)))
        .sum();
    total / metrics.len() as f64
}

const fn strength_margin(category: MetricCategory) -> f64 {
    match category {
        MetricCategory::Physical => strength_margins::PHYSICAL,
        MetricCategory::Technical => strength_margins::TECHNICAL,
        MetricCategory::Tactical => strength_margins::TACTICAL,
        MetricCategory::Psychological => strength_margins::PSYCHOLOGICAL,
    }
}

fn classify(assessment: &Assessment) -> (Vec<MetricFinding>, Vec<MetricFinding>) {
    let age_category = assessment.age_category();
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();

    for metric in Metric::ALL {
        let (Some(value), Some(bench)) = (
            assessment.value(metric),
            benchmarks::benchmark(age_category, metric),
        ) else {
            continue;
        };
        let delta = bench.favorable_delta(value);
        let finding = MetricFinding {
            metric,
            category: metric.category(),
            value,
            standard: bench.standard,
            delta,
            relative_gap: delta / bench.standard,
        };
        if delta < 0.0 {
            weaknesses.push(finding);
        } else if delta > 0.0 && delta >= strength_margin(metric.category()) * bench.standard {
            strengths.push(finding);
        }
    }

    // Stable sort keeps declaration order for equal gaps
    strengths.sort_by(|a, b| b.relative_gap.abs().total_cmp(&a.relative_gap.abs()));
    weaknesses.sort_by(|a, b| b.relative_gap.abs().total_cmp(&a.relative_gap.abs()));
    (strengths, weaknesses)
}

/// Score one assessment
///
/// Missing metrics never fail scoring; they are reported as warnings.
///
/// # Errors
///
/// Returns a validation `AppError` when the assessment is structurally invalid
pub fn score(assessment: &Assessment) -> AppResult<ScoreResult> {
    validate_assessment(assessment)?;

    let categories = CategoryScores {
        physical: category_score(assessment, MetricCategory::Physical),
        technical: category_score(assessment, MetricCategory::Technical),
        tactical: category_score(assessment, MetricCategory::Tactical),
        psychological: category_score(assessment, MetricCategory::Psychological),
    };
    let overall = categories.weighted_overall();
    let (strengths, weaknesses) = classify(assessment);
    let warnings: Vec<IncompleteDataWarning> = assessment
        .missing_metrics()
        .into_iter()
        .map(|metric| IncompleteDataWarning {
            metric,
            category: metric.category(),
        })
        .collect();

    debug!(
        player_id = %assessment.player_id,
        assessment_id = %assessment.assessment_id,
        overall,
        strengths = strengths.len(),
        weaknesses = weaknesses.len(),
        missing = warnings.len(),
        "Scored assessment"
    );

    Ok(ScoreResult {
        schema_version: schema::SCORE_RESULT_VERSION,
        player_id: assessment.player_id.clone(),
        assessment_id: assessment.assessment_id.clone(),
        age_category: assessment.age_category(),
        categories,
        overall,
        overall_percent: overall * normalization::SCALE_TO_PERCENT,
        performance_level: PerformanceLevel::from_score(overall),
        strengths,
        weaknesses,
        warnings,
    })
}

/// Score a squad in parallel, one result per input in input order
#[must_use]
pub fn score_batch(assessments: &[Assessment]) -> Vec<AppResult<ScoreResult>> {
    assessments.par_iter().map(score).collect()
}

/// Compare two scores of the same player
///
/// # Errors
///
/// Returns a validation `AppError` when the scores belong to different players
pub fn compare(previous: &ScoreResult, current: &ScoreResult) -> AppResult<ProgressReport> {
    if previous.player_id != current.player_id {
        return Err(ValidationError::MismatchedSource {
            expected: previous.player_id.clone(),
        }
        .into());
    }

    let category_deltas = MetricCategory::ALL
        .into_iter()
        .map(|category| {
            let before = previous.categories.get(category);
            let after = current.categories.get(category);
            CategoryDelta {
                category,
                previous: before,
                current: after,
                delta: after - before,
            }
        })
        .collect();

    let resolved_weaknesses = previous
        .weakness_metrics()
        .filter(|m| !current.is_weakness(*m))
        .collect();
    let new_weaknesses = current
        .weakness_metrics()
        .filter(|m| !previous.is_weakness(*m))
        .collect();

    Ok(ProgressReport {
        player_id: current.player_id.clone(),
        previous_assessment_id: previous.assessment_id.clone(),
        current_assessment_id: current.assessment_id.clone(),
        category_deltas,
        overall_delta: current.overall - previous.overall,
        previous_level: previous.performance_level,
        current_level: current.performance_level,
        resolved_weaknesses,
        new_weaknesses,
    })
}
