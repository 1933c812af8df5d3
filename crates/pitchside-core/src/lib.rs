// ABOUTME: Core types and constants for the Pitchside coaching platform
// ABOUTME: Foundation crate with error handling, assessment/drill/program models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

#![deny(unsafe_code)]

//! # Pitchside Core
//!
//! Foundation crate providing shared types and constants for the Pitchside
//! assessment-scoring and training-program generator. This crate is designed
//! to change infrequently, enabling incremental compilation benefits in the
//! workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ValidationError`
//! - **constants**: Scoring weights, thresholds, and validation limits
//! - **models**: Assessment, score, drill, and training-program data structures

/// Unified error handling system with standard error codes and tagged outcomes
pub mod errors;

/// Fixed scoring and planning constants organized by domain
pub mod constants;

/// Core data models (Assessment, `ScoreResult`, Drill, `TrainingProgram`)
pub mod models;
