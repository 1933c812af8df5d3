// ABOUTME: Planning configuration for phase splits, load ceilings, and load reduction policy
// ABOUTME: Provides defaults, environment variable overrides, validation, and a global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

//! Planning Configuration Module
//!
//! Holds the tunable policy of the planner and governor. Scoring weights and
//! thresholds are deliberately not here: they live in
//! `pitchside_core::constants` because stored scores depend on them.
//!
//! Environment overrides:
//! - `PITCHSIDE_PHASE_FOUNDATION_FRACTION`, `PITCHSIDE_PHASE_BUILD_FRACTION`
//! - `PITCHSIDE_LOAD_CEILING_U13` .. `PITCHSIDE_LOAD_CEILING_SENIOR`
//! - `PITCHSIDE_LOAD_TRIM_FRACTION`, `PITCHSIDE_LOAD_MIN_BLOCK_MINUTES`,
//!   `PITCHSIDE_LOAD_DEFAULT_BLOCK_MINUTES`

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use pitchside_core::models::{AgeCategory, Intensity};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static PLANNING_CONFIG: OnceLock<PlanningConfig> = OnceLock::new();

/// Foundation/Build/Peak split as fractions of the program length
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseSplitConfig {
    /// Share of weeks in Foundation
    pub foundation_fraction: f64,
    /// Share of weeks in Build; Peak takes the remainder
    pub build_fraction: f64,
}

impl Default for PhaseSplitConfig {
    fn default() -> Self {
        Self {
            foundation_fraction: 0.4,
            build_fraction: 0.4,
        }
    }
}

/// Load model and reduction policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadConfig {
    /// Multiplier for Low blocks
    pub low_factor: f64,
    /// Multiplier for Medium blocks
    pub medium_factor: f64,
    /// Multiplier for High blocks
    pub high_factor: f64,
    /// Duration used when a drill has none
    pub default_block_minutes: u32,
    /// Fraction removed per duration trim step
    pub trim_fraction: f64,
    /// Duration trimming never goes below this
    pub min_block_minutes: u32,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            low_factor: Intensity::Low.default_factor(),
            medium_factor: Intensity::Medium.default_factor(),
            high_factor: Intensity::High.default_factor(),
            default_block_minutes: 20,
            trim_fraction: 0.25,
            min_block_minutes: 10,
        }
    }
}

/// Weekly load ceilings per age category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCeilingConfig {
    /// U13 ceiling
    pub u13: f64,
    /// U15 ceiling
    pub u15: f64,
    /// U17 ceiling
    pub u17: f64,
    /// U19 ceiling
    pub u19: f64,
    /// Senior ceiling
    pub senior: f64,
}

impl Default for LoadCeilingConfig {
    fn default() -> Self {
        Self {
            u13: 220.0,
            u15: 260.0,
            u17: 300.0,
            u19: 340.0,
            senior: 360.0,
        }
    }
}

impl LoadCeilingConfig {
    /// Ceiling for an age category
    #[must_use]
    pub const fn for_category(&self, category: AgeCategory) -> f64 {
        match category {
            AgeCategory::U13 => self.u13,
            AgeCategory::U15 => self.u15,
            AgeCategory::U17 => self.u17,
            AgeCategory::U19 => self.u19,
            AgeCategory::Senior => self.senior,
        }
    }
}

/// Main planning configuration container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PlanningConfig {
    /// Phase split policy
    pub phases: PhaseSplitConfig,
    /// Load model
    pub load: LoadConfig,
    /// Weekly ceilings
    pub ceilings: LoadCeilingConfig,
}

impl PlanningConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PLANNING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load planning config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found
    pub fn validate(&self) -> Result<(), ConfigError> {
        let phases = &self.phases;
        for fraction in [phases.foundation_fraction, phases.build_fraction] {
            if !(fraction > 0.0 && fraction < 1.0) {
                return Err(ConfigError::ValueOutOfRange(
                    "phase fractions must be between 0 and 1 (exclusive)",
                ));
            }
        }
        if phases.foundation_fraction + phases.build_fraction >= 1.0 {
            return Err(ConfigError::InvalidRange(
                "foundation_fraction + build_fraction must be < 1.0 to leave room for Peak",
            ));
        }

        let load = &self.load;
        if !(load.low_factor > 0.0
            && load.low_factor <= load.medium_factor
            && load.medium_factor <= load.high_factor
            && load.high_factor.is_finite())
        {
            return Err(ConfigError::InvalidRange(
                "intensity factors must be positive and ascending low <= medium <= high",
            ));
        }
        if !(load.trim_fraction > 0.0 && load.trim_fraction < 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "trim_fraction must be between 0 and 1 (exclusive)",
            ));
        }
        if load.min_block_minutes == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_block_minutes must be positive",
            ));
        }
        if load.default_block_minutes < load.min_block_minutes {
            return Err(ConfigError::InvalidRange(
                "default_block_minutes must be >= min_block_minutes",
            ));
        }

        let ceilings = &self.ceilings;
        for ceiling in [
            ceilings.u13,
            ceilings.u15,
            ceilings.u17,
            ceilings.u19,
            ceilings.senior,
        ] {
            if !(ceiling.is_finite() && ceiling > 0.0) {
                return Err(ConfigError::ValueOutOfRange(
                    "load ceilings must be positive",
                ));
            }
        }

        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when a variable is set but unparseable
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "PITCHSIDE_PHASE_FOUNDATION_FRACTION",
            &mut self.phases.foundation_fraction,
        )?;
        Self::apply_env_var(
            "PITCHSIDE_PHASE_BUILD_FRACTION",
            &mut self.phases.build_fraction,
        )?;

        Self::apply_env_var("PITCHSIDE_LOAD_CEILING_U13", &mut self.ceilings.u13)?;
        Self::apply_env_var("PITCHSIDE_LOAD_CEILING_U15", &mut self.ceilings.u15)?;
        Self::apply_env_var("PITCHSIDE_LOAD_CEILING_U17", &mut self.ceilings.u17)?;
        Self::apply_env_var("PITCHSIDE_LOAD_CEILING_U19", &mut self.ceilings.u19)?;
        Self::apply_env_var("PITCHSIDE_LOAD_CEILING_SENIOR", &mut self.ceilings.senior)?;

        Self::apply_env_var("PITCHSIDE_LOAD_TRIM_FRACTION", &mut self.load.trim_fraction)?;
        Self::apply_env_var(
            "PITCHSIDE_LOAD_MIN_BLOCK_MINUTES",
            &mut self.load.min_block_minutes,
        )?;
        Self::apply_env_var(
            "PITCHSIDE_LOAD_DEFAULT_BLOCK_MINUTES",
            &mut self.load.default_block_minutes,
        )?;

        Ok(self)
    }
}
