// ABOUTME: Main library entry point for the Pitchside assessment and training-program service
// ABOUTME: Wires drill library, program repository, and the generation pipeline around the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

#![deny(unsafe_code)]

//! # Pitchside
//!
//! Assessment scoring and periodized training-program generation for youth
//! soccer players. Scoring, planning, and governing are pure and live in
//! `pitchside-intelligence`; this crate adds the parts that touch the outside
//! world.
//!
//! ## Architecture
//!
//! - **drills**: Drill library providers with `auto | db | static` sourcing
//! - **repositories**: Program repository (in-memory and `SQLite`)
//! - **pipeline**: Typed generation stages with bounded dependency calls
//! - **database**: `SQLite` schema and table managers
//! - **config**: Environment configuration
//! - **logging**: Structured logging setup
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use chrono::Utc;
//! use pitchside::drills::DrillLibrary;
//! use pitchside::models::{Assessment, Metric, PlanningConstraints, Position};
//! use pitchside::pipeline::{GenerationPipeline, GenerationRequest};
//! use pitchside::repositories::InMemoryProgramRepository;
//!
//! # async fn example() -> Result<(), pitchside::errors::AppError> {
//! let pipeline = GenerationPipeline::new(
//!     Arc::new(DrillLibrary::static_only()),
//!     Arc::new(InMemoryProgramRepository::new()),
//! );
//! let assessment = Assessment::new("player-7", "spring-2025", 16, Position::Midfielder, Utc::now())
//!     .with_metric(Metric::PassingAccuracy, 71.0);
//! let outcome = pipeline
//!     .generate(GenerationRequest::new(assessment, PlanningConstraints::new(4, 12)))
//!     .await?;
//! println!("{} weeks, level {}", outcome.program.duration_weeks, outcome.score.performance_level.as_str());
//! # Ok(())
//! # }
//! ```

/// Service configuration
pub mod config;

/// Service constants
pub mod constants;

/// `SQLite` schema and table managers
pub mod database;

/// Drill library providers
pub mod drills;

/// Error types
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Generation pipeline
pub mod pipeline;

/// Program repository
pub mod repositories;

pub use pitchside_core::models;
pub use pitchside_intelligence::{benchmarks, scoring};
