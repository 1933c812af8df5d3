// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Fixed scoring weights, thresholds, validation limits, and schema versions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

//! Constants module
//!
//! Values here are part of the scoring and planning contract. They are not
//! configuration: changing one changes the meaning of every stored score.

/// Category weights used for the overall score
pub mod category_weights {
    /// Physical category weight
    pub const PHYSICAL: f64 = 0.2;
    /// Technical category weight
    pub const TECHNICAL: f64 = 0.4;
    /// Tactical category weight
    pub const TACTICAL: f64 = 0.2;
    /// Psychological category weight
    pub const PSYCHOLOGICAL: f64 = 0.2;
}

/// Normalization onto the shared 0-5 scale
pub mod normalization {
    /// Upper bound of the category scale
    pub const SCALE_MAX: f64 = 5.0;
    /// Divisor mapping a 0-100 percentage onto 0-5
    pub const PERCENT_DIVISOR: f64 = 20.0;
    /// Points a recorded physical metric contributes (presence-only scoring)
    pub const PHYSICAL_PRESENCE_POINTS: f64 = 3.0;
    /// Multiplier from the 0-5 scale to a 0-100 display percentage
    pub const SCALE_TO_PERCENT: f64 = 20.0;
}

/// Performance level thresholds on the 0-5 scale
pub mod performance_thresholds {
    /// Elite lower bound
    pub const ELITE: f64 = 4.5;
    /// Advanced lower bound
    pub const ADVANCED: f64 = 4.0;
    /// Intermediate lower bound
    pub const INTERMEDIATE: f64 = 3.5;
    /// Developing lower bound
    pub const DEVELOPING: f64 = 3.0;
}

/// Relative margin a metric must clear its standard by to count as a strength
pub mod strength_margins {
    /// Physical metrics (2% of the standard)
    pub const PHYSICAL: f64 = 0.02;
    /// Technical metrics (5% of the standard)
    pub const TECHNICAL: f64 = 0.05;
    /// Tactical metrics (10% of the standard)
    pub const TACTICAL: f64 = 0.10;
    /// Psychological metrics (10% of the standard)
    pub const PSYCHOLOGICAL: f64 = 0.10;
}

/// Structural limits enforced by assessment validation
pub mod assessment_limits {
    /// Youngest supported player age
    pub const MIN_AGE: u32 = 5;
    /// Oldest supported player age
    pub const MAX_AGE: u32 = 60;
    /// Lowest ordinal rating
    pub const ORDINAL_MIN: f64 = 1.0;
    /// Highest ordinal rating
    pub const ORDINAL_MAX: f64 = 5.0;
    /// Upper bound for percentage metrics
    pub const PERCENT_MAX: f64 = 100.0;
}

/// Limits on planning constraints
pub mod planning_limits {
    /// Supported training days per week
    pub const SUPPORTED_TRAINING_DAYS: [u8; 3] = [3, 4, 5];
    /// Shortest program (one week per phase)
    pub const MIN_DURATION_WEEKS: u32 = 3;
    /// Longest program
    pub const MAX_DURATION_WEEKS: u32 = 52;
    /// Days in a microcycle
    pub const DAYS_PER_WEEK: usize = 7;
}

/// Versions of the serialized shapes read by downstream renderers
pub mod schema {
    /// `ScoreResult` shape version
    pub const SCORE_RESULT_VERSION: u32 = 1;
    /// `TrainingProgram` shape version
    pub const TRAINING_PROGRAM_VERSION: u32 = 1;
}

/// Identifier namespaces
pub mod identifiers {
    use uuid::Uuid;

    /// UUID v5 namespace for deterministic program ids
    pub const PROGRAM_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_2a4e_8d3b_5c7f_9e0a_1b2c_3d4e_5f60);
}
