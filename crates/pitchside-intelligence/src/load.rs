// ABOUTME: Training load model converting block duration and intensity into load units
// ABOUTME: Shared by the planner and the safety governor so both compute loads identically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

use pitchside_core::models::{Intensity, Microcycle, Session, SessionBlock};

use crate::config::LoadConfig;

/// Block load = minutes x intensity factor
#[derive(Debug, Clone, PartialEq)]
pub struct LoadModel {
    low_factor: f64,
    medium_factor: f64,
    high_factor: f64,
}

impl LoadModel {
    /// Build from configuration
    #[must_use]
    pub const fn new(config: &LoadConfig) -> Self {
        Self {
            low_factor: config.low_factor,
            medium_factor: config.medium_factor,
            high_factor: config.high_factor,
        }
    }

    /// Multiplier for an intensity
    #[must_use]
    pub const fn factor(&self, intensity: Intensity) -> f64 {
        match intensity {
            Intensity::Low => self.low_factor,
            Intensity::Medium => self.medium_factor,
            Intensity::High => self.high_factor,
        }
    }

    /// Load of `minutes` at `intensity`
    #[must_use]
    pub fn block_load(&self, minutes: u32, intensity: Intensity) -> f64 {
        f64::from(minutes) * self.factor(intensity)
    }

    /// Recompute a block's load; placeholders carry zero
    pub fn refresh_block(&self, block: &mut SessionBlock) {
        block.load = if block.is_placeholder() {
            0.0
        } else {
            self.block_load(block.duration_minutes, block.intensity)
        };
    }

    /// Recompute every block and the session totals
    pub fn refresh_session(&self, session: &mut Session) {
        for block in &mut session.blocks {
            self.refresh_block(block);
        }
        session.refresh_totals();
    }

    /// Recompute every session and the weekly load
    pub fn refresh_week(&self, week: &mut Microcycle) {
        for session in week.sessions_mut() {
            self.refresh_session(session);
        }
        week.refresh_load();
    }
}

impl Default for LoadModel {
    fn default() -> Self {
        Self::new(&LoadConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_factors() {
        let model = LoadModel::default();
        assert!((model.block_load(20, Intensity::Low) - 20.0).abs() < f64::EPSILON);
        assert!((model.block_load(20, Intensity::Medium) - 30.0).abs() < f64::EPSILON);
        assert!((model.block_load(20, Intensity::High) - 40.0).abs() < f64::EPSILON);
    }
}
