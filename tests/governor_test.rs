// ABOUTME: Integration tests for the safety governor
// ABOUTME: Covers load ceilings, weekly rest minimums, and contraindicated drill replacement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

//! Safety Governor Integration Tests
//!
//! Plans real drafts from the built-in catalog, then governs them under
//! default and deliberately tight settings. Every governed week must end
//! with a restorative session and either fit its load ceiling or carry a
//! `LoadCeilingUnreachable` warning.

#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{complete_assessment, physically_untested_assessment};
use pitchside::drills::builtin_drills;
use pitchside::models::{
    Assessment, BlockContent, DrillAssignment, DrillCategory, PlanningConstraints,
    ProgramWarning, Session, TrainingProgram, Weekday,
};
use pitchside::scoring;
use pitchside_intelligence::{
    DrillCatalog, GovernorContext, PlanningConfig, PlanningInput, ProgramPlanner,
    RuleBasedPlanner, SafetyGovernor,
};

fn draft(
    assessment: &Assessment,
    constraints: &PlanningConstraints,
    config: &PlanningConfig,
    catalog: &DrillCatalog,
) -> TrainingProgram {
    let score = scoring::score(assessment).unwrap();
    RuleBasedPlanner::with_config(config.clone())
        .plan(&PlanningInput {
            score: &score,
            assessment_captured_at: assessment.captured_at,
            constraints,
            prior: None,
            catalog,
        })
        .unwrap()
}

fn govern(
    program: TrainingProgram,
    config: &PlanningConfig,
    catalog: &DrillCatalog,
    health_flags: &[String],
) -> TrainingProgram {
    let context = GovernorContext {
        catalog,
        health_flags,
        ceiling: config.ceilings.for_category(program.age_category),
    };
    SafetyGovernor::with_config(config).validate(program, &context)
}

fn assert_safety_invariant(program: &TrainingProgram, ceiling: f64) {
    for cycle in &program.microcycles {
        assert!(
            cycle.has_restorative_day(),
            "week {} has no restorative session",
            cycle.week
        );
        assert!(
            cycle.load <= ceiling + 1e-9 || program.has_unreachable_ceiling_warning(cycle.week),
            "week {} load {} over ceiling {} without warning",
            cycle.week,
            cycle.load,
            ceiling
        );
    }
}

fn tight_config(ceiling: f64) -> PlanningConfig {
    let mut config = PlanningConfig::default();
    config.ceilings.u13 = ceiling;
    config.ceilings.u15 = ceiling;
    config.ceilings.u17 = ceiling;
    config.ceilings.u19 = ceiling;
    config.ceilings.senior = ceiling;
    config
}

// ============================================================================
// Safety Invariant
// ============================================================================

#[test]
fn test_safety_invariant_across_ages_and_schedules() {
    let catalog = DrillCatalog::from_drills(builtin_drills());

    for config in [PlanningConfig::default(), tight_config(120.0)] {
        for age in [11, 14, 16, 18, 27] {
            for days in [3, 4, 5] {
                let mut assessment = complete_assessment("player-1", "spring", 2);
                assessment.age = age;
                let program = draft(
                    &assessment,
                    &PlanningConstraints::new(days, 12),
                    &config,
                    &catalog,
                );
                let ceiling = config.ceilings.for_category(program.age_category);
                let governed = govern(program, &config, &catalog, &[]);
                assert_safety_invariant(&governed, ceiling);
            }
        }
    }
}

#[test]
fn test_tight_ceiling_reduces_every_week() {
    let catalog = DrillCatalog::from_drills(builtin_drills());
    let config = tight_config(60.0);
    let program = draft(
        &complete_assessment("player-1", "spring", 2),
        &PlanningConstraints::new(4, 12),
        &config,
        &catalog,
    );
    let drafted_total = program.total_load();

    let governed = govern(program, &config, &catalog, &[]);

    assert_safety_invariant(&governed, 60.0);
    assert!(governed.total_load() < drafted_total);
    for cycle in &governed.microcycles {
        assert!(
            governed.warnings.iter().any(|w| matches!(
                w,
                ProgramWarning::LoadReduced { week, from, to }
                    if *week == cycle.week && to <= from
            )),
            "week {} has no LoadReduced warning",
            cycle.week
        );
    }
}

#[test]
fn test_unreachable_ceiling_is_flagged_and_respects_block_floor() {
    let catalog = DrillCatalog::from_drills(builtin_drills());
    let config = tight_config(5.0);
    let program = draft(
        &complete_assessment("player-1", "spring", 2),
        &PlanningConstraints::new(5, 4),
        &config,
        &catalog,
    );

    let governed = govern(program, &config, &catalog, &[]);

    for cycle in &governed.microcycles {
        assert!(governed.has_unreachable_ceiling_warning(cycle.week));
        for block in cycle.sessions().flat_map(|s| s.blocks.iter()) {
            if !block.is_placeholder() {
                assert!(block.duration_minutes >= config.load.min_block_minutes);
            }
        }
    }
}

// ============================================================================
// Rest Minimum
// ============================================================================

#[test]
fn test_missing_recovery_day_is_inserted() {
    let catalog = DrillCatalog::from_drills(builtin_drills());
    let config = PlanningConfig::default();
    let mut program = draft(
        &complete_assessment("player-1", "spring", 2),
        &PlanningConstraints::new(4, 12),
        &config,
        &catalog,
    );
    // Peak week: every remaining session is High
    let week = &mut program.microcycles[10];
    week.days[Weekday::Friday.index()] = None;
    week.refresh_load();
    assert!(!week.has_restorative_day());

    let governed = govern(program, &config, &catalog, &[]);

    assert!(governed.microcycles[10].has_restorative_day());
    assert!(governed
        .warnings
        .contains(&ProgramWarning::RecoveryDayInserted {
            week: 11,
            day: Weekday::Wednesday,
        }));
}

#[test]
fn test_full_hard_week_downgrades_latest_session() {
    let catalog = DrillCatalog::from_drills(builtin_drills());
    let config = PlanningConfig::default();
    let mut program = draft(
        &complete_assessment("player-1", "spring", 2),
        &PlanningConstraints::new(3, 12),
        &config,
        &catalog,
    );
    let week = &mut program.microcycles[10];
    let template: Session = week.sessions().next().cloned().unwrap();
    for day in Weekday::ALL {
        let mut session = template.clone();
        session.day = day;
        week.schedule(session);
    }
    week.refresh_load();
    assert!(!week.has_restorative_day());

    let governed = govern(program, &config, &catalog, &[]);

    assert!(governed.microcycles[10].has_restorative_day());
    assert!(governed.warnings.contains(&ProgramWarning::SessionDowngraded {
        week: 11,
        day: Weekday::Sunday,
    }));
}

// ============================================================================
// Contraindications
// ============================================================================

#[test]
fn test_contraindicated_drill_is_replaced_with_first_safe_drill() {
    let catalog = DrillCatalog::from_drills(builtin_drills());
    let config = PlanningConfig::default();
    let program = draft(
        &physically_untested_assessment("player-2", "intake"),
        &PlanningConstraints::new(4, 12),
        &config,
        &catalog,
    );
    let flags = vec!["hamstring_strain".to_owned()];

    let governed = govern(program, &config, &catalog, &flags);

    assert!(governed
        .warnings
        .contains(&ProgramWarning::ContraindicatedDrillReplaced {
            week: 1,
            day: Weekday::Thursday,
            drill_id: "gym-nordic-curl".into(),
            replacement: Some("gym-goblet-squat".into()),
        }));
    for block in governed
        .microcycles
        .iter()
        .flat_map(|c| c.sessions())
        .flat_map(|s| s.blocks.iter())
    {
        if let Some(drill) = block.drill_id().and_then(|id| catalog.get(id)) {
            assert!(!drill.conflicts_with(&flags), "{} survived", drill.id);
        }
    }
}

#[test]
fn test_no_safe_drill_leaves_rest_placeholder() {
    let catalog = DrillCatalog::from_drills(builtin_drills());
    let config = PlanningConfig::default();
    let program = draft(
        &physically_untested_assessment("player-3", "intake"),
        &PlanningConstraints::new(4, 12),
        &config,
        &catalog,
    );
    let flags = vec![
        "hamstring_strain".to_owned(),
        "knee_injury".to_owned(),
        "back_injury".to_owned(),
    ];

    let governed = govern(program, &config, &catalog, &flags);

    let thursday = governed.microcycles[0].days[Weekday::Thursday.index()]
        .as_ref()
        .unwrap();
    let main = &thursday.blocks[1];
    assert_eq!(main.category, DrillCategory::Gym);
    assert!(main.is_placeholder());
    assert!(governed
        .warnings
        .contains(&ProgramWarning::ContraindicatedDrillReplaced {
            week: 1,
            day: Weekday::Thursday,
            drill_id: "gym-nordic-curl".into(),
            replacement: None,
        }));
}

#[test]
fn test_drill_missing_from_catalog_is_replaced() {
    let catalog = DrillCatalog::from_drills(builtin_drills());
    let config = PlanningConfig::default();
    let mut program = draft(
        &physically_untested_assessment("player-4", "intake"),
        &PlanningConstraints::new(4, 12),
        &config,
        &catalog,
    );
    let thursday = program.microcycles[0].days[Weekday::Thursday.index()]
        .as_mut()
        .unwrap();
    thursday.blocks[1].content = BlockContent::Drill(DrillAssignment {
        drill_id: "gym-box-jump-series".into(),
        name: "Box Jump Series".into(),
        sets: Some(4),
        reps: Some(6),
        equipment: vec!["plyo box".into()],
    });

    let governed = govern(program, &config, &catalog, &[]);

    let expected = catalog
        .first_safe(DrillCategory::Gym, &[])
        .map(|d| d.id.clone());
    assert!(expected.is_some());
    assert!(governed
        .warnings
        .contains(&ProgramWarning::ContraindicatedDrillReplaced {
            week: 1,
            day: Weekday::Thursday,
            drill_id: "gym-box-jump-series".into(),
            replacement: expected,
        }));
    for block in governed
        .microcycles
        .iter()
        .flat_map(|c| c.sessions())
        .flat_map(|s| s.blocks.iter())
    {
        if let Some(id) = block.drill_id() {
            assert!(catalog.get(id).is_some(), "{id} was not screened");
        }
    }
}
