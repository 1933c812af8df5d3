// ABOUTME: Core data models for assessments, scores, drills, and training programs
// ABOUTME: Re-exports the fundamental data structures shared across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

//! # Data Models
//!
//! Every model serializes with fixed `snake_case` field names. `ScoreResult`
//! and `TrainingProgram` also carry a `schema_version` so renderers can detect
//! shape changes.

mod assessment;
mod drill;
mod program;
mod score;

// Assessment domain
pub use assessment::{
    AgeCategory, Assessment, Direction, Gender, Metric, MetricCategory, MetricKind,
    PhysicalMetrics, Position, PsychologicalMetrics, TacticalMetrics, TechnicalMetrics,
};

// Scoring domain
pub use score::{
    CategoryDelta, CategoryScores, IncompleteDataWarning, MetricFinding, PerformanceLevel,
    ProgressReport, ScoreResult,
};

// Drill library
pub use drill::{Drill, DrillCategory, DrillFilter, Intensity};

// Program domain
pub use program::{
    program_id_for, BlockContent, BlockRole, DrillAssignment, Microcycle, Phase, PhaseKind,
    PlanningConstraints, ProgramWarning, Session, SessionBlock, SessionKind, TrainingProgram,
    Weekday,
};
