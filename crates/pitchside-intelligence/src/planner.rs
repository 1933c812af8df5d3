// ABOUTME: Periodization planner turning a score and constraints into a phased training program
// ABOUTME: Defines the ProgramPlanner trait and the deterministic rule-based implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

//! Periodization planner.
//!
//! The rule-based planner is fully deterministic: the same score,
//! constraints, prior program, and catalog snapshot always produce the same
//! program, byte for byte. Drafts are not safety-checked here; run the
//! result through [`crate::governor::SafetyGovernor`] before persisting.

use chrono::{DateTime, Utc};
use pitchside_core::constants::{normalization, schema};
use pitchside_core::errors::{AppError, AppResult, ValidationError};
use pitchside_core::models::{
    program_id_for, DrillCategory, Intensity, Metric, MetricCategory, Microcycle, Phase, PhaseKind,
    PlanningConstraints, ProgramWarning, ScoreResult, TrainingProgram, Weekday,
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::catalog::DrillCatalog;
use crate::config::{PhaseSplitConfig, PlanningConfig};
use crate::load::LoadModel;
use crate::sessions::SessionBuilder;

/// Drill categories a training day can focus on, in tie-break order
pub const TRAINABLE_CATEGORIES: [DrillCategory; 6] = [
    DrillCategory::Technical,
    DrillCategory::Tactical,
    DrillCategory::Possession,
    DrillCategory::SpeedAgility,
    DrillCategory::Cardio,
    DrillCategory::Gym,
];

/// Extra ranking weight per weakness metric mapped to a drill category
const WEAKNESS_WEIGHT: f64 = 2.0;

/// Everything a planner needs for one generation
#[derive(Debug, Clone, Copy)]
pub struct PlanningInput<'a> {
    /// Score of the source assessment
    pub score: &'a ScoreResult,
    /// Capture time of the source assessment
    pub assessment_captured_at: DateTime<Utc>,
    /// Player constraints
    pub constraints: &'a PlanningConstraints,
    /// Program for the same assessment if one exists, else the current program
    pub prior: Option<&'a TrainingProgram>,
    /// Catalog snapshot for this generation
    pub catalog: &'a DrillCatalog,
}

/// Produces draft programs
///
/// Implementations must be deterministic for identical inputs.
pub trait ProgramPlanner: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Build a draft program
    ///
    /// # Errors
    ///
    /// Returns a validation `AppError` for unsupported constraints or a prior
    /// program belonging to another player
    fn plan(&self, input: &PlanningInput<'_>) -> AppResult<TrainingProgram>;
}

/// Weeks per phase as `[foundation, build, peak]`
///
/// Foundation and Build get their rounded share (at least one week each);
/// Build then Foundation shrink until Peak has at least one week.
#[must_use]
// Fractions are validated to (0, 1) so the rounded product fits in u32
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn phase_split(duration_weeks: u32, config: &PhaseSplitConfig) -> [u32; 3] {
    let weeks = f64::from(duration_weeks);
    let mut foundation = ((config.foundation_fraction * weeks).round() as u32).max(1);
    let mut build = ((config.build_fraction * weeks).round() as u32).max(1);
    while foundation + build >= duration_weeks {
        if build > 1 {
            build -= 1;
        } else if foundation > 1 {
            foundation -= 1;
        } else {
            break;
        }
    }
    let peak = duration_weeks.saturating_sub(foundation + build);
    [foundation, build, peak]
}

const fn phase_focus(kind: PhaseKind) -> &'static str {
    match kind {
        PhaseKind::Foundation => "General preparation and movement quality",
        PhaseKind::Build => "Targeted development of priority areas",
        PhaseKind::Peak => "Match sharpness with a closing taper",
    }
}

/// Phases covering `duration_weeks`
#[must_use]
pub fn build_phases(duration_weeks: u32, config: &PhaseSplitConfig) -> Vec<Phase> {
    let split = phase_split(duration_weeks, config);
    let mut start = 1;
    PhaseKind::ALL
        .into_iter()
        .zip(split)
        .filter(|(_, weeks)| *weeks > 0)
        .map(|(kind, weeks)| {
            let phase = Phase {
                kind,
                name: kind.display_name().to_owned(),
                focus: phase_focus(kind).to_owned(),
                intensity: kind.intensity(),
                start_week: start,
                end_week: start + weeks - 1,
            };
            start += weeks;
            phase
        })
        .collect()
}

/// Main-block intensity for a week, tapering the final Peak week
#[must_use]
pub fn week_intensity(phase: &Phase, week: u32) -> Intensity {
    if phase.kind == PhaseKind::Peak && phase.weeks() >= 2 && week == phase.end_week {
        Intensity::Medium
    } else {
        phase.intensity
    }
}

/// Fixed weekday pattern for a supported number of training days
#[must_use]
pub const fn training_weekdays(days: u8) -> &'static [Weekday] {
    match days {
        3 => &[Weekday::Monday, Weekday::Wednesday, Weekday::Friday],
        4 => &[
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Thursday,
            Weekday::Friday,
        ],
        5 => &[
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Friday,
            Weekday::Saturday,
        ],
        _ => &[],
    }
}

const fn drill_categories_for(category: MetricCategory) -> &'static [DrillCategory] {
    match category {
        MetricCategory::Technical => &[DrillCategory::Technical, DrillCategory::Possession],
        MetricCategory::Tactical => &[DrillCategory::Tactical, DrillCategory::Possession],
        MetricCategory::Physical => &[
            DrillCategory::SpeedAgility,
            DrillCategory::Cardio,
            DrillCategory::Gym,
        ],
        MetricCategory::Psychological => &[DrillCategory::Possession, DrillCategory::Tactical],
    }
}

/// Drill category that trains a metric
#[must_use]
pub const fn drill_category_for_metric(metric: Metric) -> DrillCategory {
    match metric {
        Metric::Sprint30m => DrillCategory::SpeedAgility,
        Metric::EnduranceDistance | Metric::AerobicCapacity => DrillCategory::Cardio,
        Metric::JumpHeight | Metric::BodyFat => DrillCategory::Gym,
        Metric::PassingAccuracy | Metric::Coachability | Metric::MentalToughness => {
            DrillCategory::Possession
        }
        Metric::BallControl | Metric::DribblingSuccess | Metric::ShootingAccuracy => {
            DrillCategory::Technical
        }
        Metric::DefensiveDuelsWon
        | Metric::GameIntelligence
        | Metric::Positioning
        | Metric::DecisionMaking => DrillCategory::Tactical,
    }
}

/// Trainable drill categories ordered by need, most needed first
///
/// A category's weight is the largest deficit (`5 - score`) among the scoring
/// categories it serves, plus a fixed bonus per weakness metric it trains.
/// Ties keep [`TRAINABLE_CATEGORIES`] order.
#[must_use]
#[allow(clippy::cast_precision_loss)] // weakness counts are tiny
pub fn focus_ranking(score: &ScoreResult) -> Vec<DrillCategory> {
    let weight = |drill_category: DrillCategory| -> f64 {
        let deficit = MetricCategory::ALL
            .into_iter()
            .filter(|c| drill_categories_for(*c).contains(&drill_category))
            .map(|c| normalization::SCALE_MAX - score.categories.get(c))
            .fold(0.0_f64, f64::max);
        let weaknesses = score
            .weakness_metrics()
            .filter(|m| drill_category_for_metric(*m) == drill_category)
            .count();
        WEAKNESS_WEIGHT.mul_add(weaknesses as f64, deficit)
    };

    let mut weighted: Vec<(DrillCategory, f64)> = TRAINABLE_CATEGORIES
        .into_iter()
        .map(|c| (c, weight(c)))
        .collect();
    weighted.sort_by(|a, b| b.1.total_cmp(&a.1));
    weighted.into_iter().map(|(c, _)| c).collect()
}

/// Revision and superseded id given the prior program
///
/// A prior built from a more recent assessment stays current, so it is not a
/// predecessor of the incoming program.
fn lineage(
    prior: Option<&TrainingProgram>,
    assessment_id: &str,
    captured_at: DateTime<Utc>,
) -> (u32, Option<Uuid>) {
    match prior {
        None => (1, None),
        Some(prior) if prior.assessment_id == assessment_id => (prior.revision, prior.supersedes),
        Some(prior)
            if (prior.assessment_captured_at, prior.assessment_id.as_str())
                > (captured_at, assessment_id) =>
        {
            (1, None)
        }
        Some(prior) => (prior.revision + 1, Some(prior.id)),
    }
}

/// Deterministic rule-based planner
#[derive(Debug, Clone)]
pub struct RuleBasedPlanner {
    config: PlanningConfig,
    load: LoadModel,
}

impl Default for RuleBasedPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleBasedPlanner {
    /// Create a planner using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(PlanningConfig::global().clone())
    }

    /// Create with custom configuration
    #[must_use]
    pub fn with_config(config: PlanningConfig) -> Self {
        let load = LoadModel::new(&config.load);
        Self { config, load }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &PlanningConfig {
        &self.config
    }
}

impl ProgramPlanner for RuleBasedPlanner {
    fn name(&self) -> &'static str {
        "rule_based"
    }

    #[allow(clippy::cast_possible_truncation)] // slot counts are at most 5
    fn plan(&self, input: &PlanningInput<'_>) -> AppResult<TrainingProgram> {
        let score = input.score;
        let constraints = input.constraints;
        constraints
            .validate()
            .map_err(|e| AppError::from(e).with_player_id(&score.player_id))?;
        if let Some(prior) = input.prior {
            if prior.player_id != score.player_id {
                return Err(ValidationError::MismatchedSource {
                    expected: score.player_id.clone(),
                }
                .into());
            }
        }

        let health_flags = constraints.normalized_health_flags();
        let builder = SessionBuilder {
            catalog: input.catalog,
            health_flags: &health_flags,
            load: &self.load,
            default_block_minutes: self.config.load.default_block_minutes,
        };

        let phases = build_phases(constraints.duration_weeks, &self.config.phases);
        let days = training_weekdays(constraints.training_days_per_week);
        let Some((recovery_day, training_days)) = days.split_last() else {
            return Err(ValidationError::UnsupportedTrainingDays(
                constraints.training_days_per_week,
            )
            .into());
        };
        let ranking = focus_ranking(score);
        let window = ranking.len().min(training_days.len() + 1);

        let mut warnings: Vec<ProgramWarning> = Vec::new();
        let mut microcycles = Vec::with_capacity(constraints.duration_weeks as usize);

        for phase in &phases {
            for week in phase.start_week..=phase.end_week {
                let intensity = week_intensity(phase, week);
                let mut cycle = Microcycle::new(week, phase.kind);
                let week_index = (week - 1) as usize;

                for (slot, day) in training_days.iter().enumerate() {
                    let rank = (slot + week_index) % window;
                    cycle.schedule(builder.training_session(
                        week,
                        *day,
                        ranking[rank],
                        rank as u32,
                        intensity,
                        &mut warnings,
                    ));
                }
                cycle.schedule(builder.recovery_session(week, *recovery_day, &mut warnings));
                cycle.refresh_load();
                microcycles.push(cycle);
            }
        }

        let (revision, supersedes) = lineage(
            input.prior,
            &score.assessment_id,
            input.assessment_captured_at,
        );
        let program = TrainingProgram {
            schema_version: schema::TRAINING_PROGRAM_VERSION,
            id: program_id_for(&score.player_id, &score.assessment_id),
            player_id: score.player_id.clone(),
            assessment_id: score.assessment_id.clone(),
            assessment_captured_at: input.assessment_captured_at,
            age_category: score.age_category,
            duration_weeks: constraints.duration_weeks,
            training_days_per_week: constraints.training_days_per_week,
            health_flags,
            revision,
            supersedes,
            phases,
            microcycles,
            warnings,
        };

        debug!(
            player_id = %program.player_id,
            ranking = ?ranking,
            "Computed focus ranking"
        );
        info!(
            planner = self.name(),
            player_id = %program.player_id,
            assessment_id = %program.assessment_id,
            weeks = program.duration_weeks,
            revision = program.revision,
            warnings = program.warnings.len(),
            "Drafted training program"
        );

        Ok(program)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_split_twelve_weeks() {
        assert_eq!(phase_split(12, &PhaseSplitConfig::default()), [5, 5, 2]);
    }

    #[test]
    fn test_phase_split_short_programs_keep_every_phase() {
        let config = PhaseSplitConfig::default();
        for weeks in 3..=52 {
            let [f, b, p] = phase_split(weeks, &config);
            assert!(f >= 1 && b >= 1 && p >= 1, "{weeks} weeks -> {f}/{b}/{p}");
            assert_eq!(f + b + p, weeks);
        }
        assert_eq!(phase_split(3, &config), [1, 1, 1]);
    }

    #[test]
    fn test_phases_are_contiguous() {
        let phases = build_phases(12, &PhaseSplitConfig::default());
        assert_eq!(phases.len(), 3);
        assert_eq!((phases[0].start_week, phases[0].end_week), (1, 5));
        assert_eq!((phases[1].start_week, phases[1].end_week), (6, 10));
        assert_eq!((phases[2].start_week, phases[2].end_week), (11, 12));
    }

    #[test]
    fn test_taper_only_on_multi_week_peak() {
        let phases = build_phases(12, &PhaseSplitConfig::default());
        let peak = &phases[2];
        assert_eq!(week_intensity(peak, 11), Intensity::High);
        assert_eq!(week_intensity(peak, 12), Intensity::Medium);

        let short = build_phases(3, &PhaseSplitConfig::default());
        assert_eq!(week_intensity(&short[2], 3), Intensity::High);
    }

    #[test]
    fn test_weekday_patterns() {
        assert_eq!(training_weekdays(3).len(), 3);
        assert_eq!(training_weekdays(4)[2], Weekday::Thursday);
        assert_eq!(training_weekdays(5).last(), Some(&Weekday::Saturday));
        assert!(training_weekdays(6).is_empty());
    }
}
