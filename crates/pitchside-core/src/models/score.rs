// ABOUTME: Scoring result types including category scores, findings, and progress reports
// ABOUTME: Performance level classification on the shared 0-5 scale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

use super::assessment::{AgeCategory, Metric, MetricCategory};
use crate::constants::category_weights;
use crate::constants::performance_thresholds::{ADVANCED, DEVELOPING, ELITE, INTERMEDIATE};

/// Coarse performance band derived from the overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceLevel {
    /// Below 3.0
    Beginner,
    /// 3.0 to below 3.5
    Developing,
    /// 3.5 to below 4.0
    Intermediate,
    /// 4.0 to below 4.5
    Advanced,
    /// 4.5 and above
    Elite,
}

impl PerformanceLevel {
    /// Classify an overall score
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= ELITE {
            Self::Elite
        } else if score >= ADVANCED {
            Self::Advanced
        } else if score >= INTERMEDIATE {
            Self::Intermediate
        } else if score >= DEVELOPING {
            Self::Developing
        } else {
            Self::Beginner
        }
    }

    /// Convert to string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Developing => "developing",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Elite => "elite",
        }
    }
}

impl fmt::Display for PerformanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-category scores on the 0-5 scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct CategoryScores {
    /// Physical score (presence-only, at most 3.0)
    pub physical: f64,
    /// Technical score
    pub technical: f64,
    /// Tactical score
    pub tactical: f64,
    /// Psychological score
    pub psychological: f64,
}

impl CategoryScores {
    /// Score for one category
    #[must_use]
    pub const fn get(&self, category: MetricCategory) -> f64 {
        match category {
            MetricCategory::Physical => self.physical,
            MetricCategory::Technical => self.technical,
            MetricCategory::Tactical => self.tactical,
            MetricCategory::Psychological => self.psychological,
        }
    }

    /// Weighted overall score
    #[must_use]
    pub fn weighted_overall(&self) -> f64 {
        category_weights::PSYCHOLOGICAL.mul_add(
            self.psychological,
            category_weights::TACTICAL.mul_add(
                self.tactical,
                category_weights::TECHNICAL
                    .mul_add(self.technical, category_weights::PHYSICAL * self.physical),
            ),
        )
    }
}

/// A metric classified against its benchmark standard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricFinding {
    /// Metric classified
    pub metric: Metric,
    /// Category of the metric
    pub category: MetricCategory,
    /// Recorded value
    pub value: f64,
    /// Benchmark standard for the player's age category
    pub standard: f64,
    /// Signed distance from the standard, positive when favorable
    pub delta: f64,
    /// `delta / standard`
    pub relative_gap: f64,
}

/// A metric that was not recorded and scored as zero
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncompleteDataWarning {
    /// Missing metric
    pub metric: Metric,
    /// Category it would have contributed to
    pub category: MetricCategory,
}

/// Normalized, age-adjusted evaluation of one assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Serialized shape version
    pub schema_version: u32,
    /// Player the assessment belongs to
    pub player_id: String,
    /// Source assessment
    pub assessment_id: String,
    /// Age bracket used for benchmarks
    pub age_category: AgeCategory,
    /// Per-category scores
    pub categories: CategoryScores,
    /// Weighted overall score (0-5)
    pub overall: f64,
    /// Overall score on a 0-100 scale
    pub overall_percent: f64,
    /// Performance band
    pub performance_level: PerformanceLevel,
    /// Metrics clearly above standard, largest gap first
    pub strengths: Vec<MetricFinding>,
    /// Metrics below standard, largest gap first
    pub weaknesses: Vec<MetricFinding>,
    /// Metrics that were missing
    pub warnings: Vec<IncompleteDataWarning>,
}

impl ScoreResult {
    /// Metrics flagged as weaknesses, in ranked order
    pub fn weakness_metrics(&self) -> impl Iterator<Item = Metric> + '_ {
        self.weaknesses.iter().map(|f| f.metric)
    }

    /// Whether a metric is in the weakness list
    #[must_use]
    pub fn is_weakness(&self, metric: Metric) -> bool {
        self.weaknesses.iter().any(|f| f.metric == metric)
    }

    /// Whether a metric is in the strength list
    #[must_use]
    pub fn is_strength(&self, metric: Metric) -> bool {
        self.strengths.iter().any(|f| f.metric == metric)
    }
}

/// Change in one category between two assessments
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryDelta {
    /// Category compared
    pub category: MetricCategory,
    /// Earlier score
    pub previous: f64,
    /// Later score
    pub current: f64,
    /// `current - previous`
    pub delta: f64,
}

/// Comparison of two scored assessments for the same player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Player compared
    pub player_id: String,
    /// Earlier assessment
    pub previous_assessment_id: String,
    /// Later assessment
    pub current_assessment_id: String,
    /// One entry per category in declaration order
    pub category_deltas: Vec<CategoryDelta>,
    /// Change of the overall score
    pub overall_delta: f64,
    /// Earlier performance band
    pub previous_level: PerformanceLevel,
    /// Later performance band
    pub current_level: PerformanceLevel,
    /// Weaknesses that are no longer weaknesses
    pub resolved_weaknesses: Vec<Metric>,
    /// Weaknesses that were not weaknesses before
    pub new_weaknesses: Vec<Metric>,
}

impl ProgressReport {
    /// Whether the performance band moved up
    #[must_use]
    pub fn level_improved(&self) -> bool {
        self.current_level > self.previous_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_performance_level_thresholds() {
        assert_eq!(PerformanceLevel::from_score(4.6), PerformanceLevel::Elite);
        assert_eq!(PerformanceLevel::from_score(4.5), PerformanceLevel::Elite);
        assert_eq!(PerformanceLevel::from_score(4.49), PerformanceLevel::Advanced);
        assert_eq!(PerformanceLevel::from_score(4.0), PerformanceLevel::Advanced);
        assert_eq!(PerformanceLevel::from_score(3.5), PerformanceLevel::Intermediate);
        assert_eq!(PerformanceLevel::from_score(3.0), PerformanceLevel::Developing);
        assert_eq!(PerformanceLevel::from_score(2.99), PerformanceLevel::Beginner);
        assert_eq!(PerformanceLevel::from_score(0.0), PerformanceLevel::Beginner);
    }

    #[test]
    fn test_weighted_overall_uses_fixed_weights() {
        let scores = CategoryScores {
            physical: 1.0,
            technical: 1.0,
            tactical: 1.0,
            psychological: 1.0,
        };
        assert!((scores.weighted_overall() - 1.0).abs() < 1e-9);

        let technical_only = CategoryScores {
            technical: 5.0,
            ..CategoryScores::default()
        };
        assert!((technical_only.weighted_overall() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_level_serializes_snake_case() {
        let json = serde_json::to_string(&PerformanceLevel::Elite).unwrap();
        assert_eq!(json, "\"elite\"");
    }
}
