// ABOUTME: Service-level constants for the generation pipeline and its dependencies
// ABOUTME: Dependency names, environment defaults, and database table names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

//! # Constants Module
//!
//! Scoring and planning constants live in `pitchside_core::constants`; this
//! module holds what only the service layer needs.

pub use pitchside_core::constants::*;

/// Service names for structured logging
pub mod service_names {
    /// Default service name
    pub const PITCHSIDE: &str = "pitchside";
}

/// Names of external dependencies, used in error details and logs
pub mod dependencies {
    /// Drill library provider
    pub const DRILL_LIBRARY: &str = "drill_library";
    /// Program repository
    pub const PROGRAM_REPOSITORY: &str = "program_repository";
}

/// Defaults applied when environment variables are absent
pub mod defaults {
    /// Default database location
    pub const DATABASE_URL: &str = "sqlite:./data/pitchside.db";
    /// Timeout for one dependency call
    pub const DEPENDENCY_TIMEOUT_MS: u64 = 5_000;
    /// Backoff before the single retry
    pub const DEPENDENCY_RETRY_BACKOFF_MS: u64 = 200;
    /// Attempts per dependency call (first try plus one retry)
    pub const DEPENDENCY_MAX_ATTEMPTS: u32 = 2;
}

