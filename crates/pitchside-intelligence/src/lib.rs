// ABOUTME: Scoring and program-generation engine for the Pitchside platform
// ABOUTME: Benchmarks, scoring, drill catalog snapshots, planner, governor, and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

#![deny(unsafe_code)]

//! # Pitchside Intelligence
//!
//! Everything in this crate is a pure function of its inputs. The only I/O in
//! the workspace (drill library and program repository) lives in the root
//! crate, which hands a [`catalog::DrillCatalog`] snapshot and the prior
//! program into the planner.
//!
//! ## Modules
//!
//! - **benchmarks**: Age-keyed reference standards per metric
//! - **scoring**: Assessment validation, scoring, batch scoring, and progress comparison
//! - **catalog**: Immutable per-generation drill catalog snapshot
//! - **load**: Session load model
//! - **planner**: `ProgramPlanner` trait and the rule-based periodization planner
//! - **governor**: Safety governor enforcing load ceilings, rest minimums, and contraindications
//! - **config**: Planning configuration with environment overrides

/// Age-keyed benchmark standards
pub mod benchmarks;

/// Drill catalog snapshot used by planning and governing
pub mod catalog;

/// Planning configuration
pub mod config;

/// Safety governor
pub mod governor;

/// Training load model
pub mod load;

/// Periodization planner
pub mod planner;

/// Assessment scoring engine
pub mod scoring;

mod sessions;

pub use catalog::DrillCatalog;
pub use config::{ConfigError, PlanningConfig};
pub use governor::{GovernorContext, SafetyGovernor};
pub use planner::{PlanningInput, ProgramPlanner, RuleBasedPlanner};
