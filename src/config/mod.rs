// ABOUTME: Configuration module for the generation service
// ABOUTME: Re-exports environment configuration and the planning configuration from the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

//! Configuration
//!
//! Service settings (database, drill source, dependency policy) are read
//! here. Planning policy (phase split, load ceilings, intensity factors)
//! belongs to [`pitchside_intelligence::config`] and is re-exported.

/// Environment-driven service configuration
pub mod environment;

pub use environment::{DependencyConfig, DrillSourceMode, ServerConfig};
pub use pitchside_intelligence::config::{
    LoadCeilingConfig, LoadConfig, PhaseSplitConfig, PlanningConfig,
};
