// ABOUTME: Drill library types with fixed categories, intensities, and contraindications
// ABOUTME: Drills are immutable catalog entries selected by the periodization planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// The nine fixed drill categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrillCategory {
    /// Ball mastery, first touch, finishing
    Technical,
    /// Shape, pressing, and decision games
    Tactical,
    /// Rondos and small-sided keep-ball
    Possession,
    /// Acceleration, change of direction
    SpeedAgility,
    /// Aerobic and repeated-sprint conditioning
    Cardio,
    /// Strength and power in the gym
    Gym,
    /// Range of motion work
    Mobility,
    /// Regeneration and cool-down
    Recovery,
    /// Injury-prevention warm-ups
    Prehab,
}

impl DrillCategory {
    /// All categories in declaration order
    pub const ALL: [Self; 9] = [
        Self::Technical,
        Self::Tactical,
        Self::Possession,
        Self::SpeedAgility,
        Self::Cardio,
        Self::Gym,
        Self::Mobility,
        Self::Recovery,
        Self::Prehab,
    ];

    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Tactical => "tactical",
            Self::Possession => "possession",
            Self::SpeedAgility => "speed_agility",
            Self::Cardio => "cardio",
            Self::Gym => "gym",
            Self::Mobility => "mobility",
            Self::Recovery => "recovery",
            Self::Prehab => "prehab",
        }
    }

    /// Parse from database string representation
    ///
    /// Unknown categories are rejected rather than defaulted, since a drill
    /// filed under the wrong category would change program content.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "technical" => Some(Self::Technical),
            "tactical" => Some(Self::Tactical),
            "possession" => Some(Self::Possession),
            "speed_agility" | "speed-agility" => Some(Self::SpeedAgility),
            "cardio" => Some(Self::Cardio),
            "gym" => Some(Self::Gym),
            "mobility" => Some(Self::Mobility),
            "recovery" => Some(Self::Recovery),
            "prehab" => Some(Self::Prehab),
            _ => None,
        }
    }
}

impl fmt::Display for DrillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Session and block intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    /// Easy, conversational effort
    #[default]
    Low,
    /// Moderate effort
    Medium,
    /// Hard effort
    High,
}

impl Intensity {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Default load multiplier (Low 1.0, Medium 1.5, High 2.0)
    #[must_use]
    pub const fn default_factor(&self) -> f64 {
        match self {
            Self::Low => 1.0,
            Self::Medium => 1.5,
            Self::High => 2.0,
        }
    }

    /// One step lower, or `None` when already Low
    #[must_use]
    pub const fn lowered(&self) -> Option<Self> {
        match self {
            Self::High => Some(Self::Medium),
            Self::Medium => Some(Self::Low),
            Self::Low => None,
        }
    }
}

/// One drill in the library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drill {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Category the drill is filed under
    pub category: DrillCategory,
    /// Short description
    #[serde(default)]
    pub description: String,
    /// Planned duration in minutes
    pub duration_minutes: Option<u32>,
    /// Number of sets
    pub sets: Option<u32>,
    /// Repetitions per set
    pub reps: Option<u32>,
    /// Intended intensity
    pub intensity: Option<Intensity>,
    /// Equipment needed
    #[serde(default)]
    pub equipment: Vec<String>,
    /// Coaching cues
    #[serde(default)]
    pub coaching_points: Vec<String>,
    /// Health conditions under which the drill must not be assigned
    #[serde(default)]
    pub contraindications: Vec<String>,
}

impl Drill {
    /// Whether any contraindication matches one of the player's health flags
    ///
    /// Matching is case-insensitive on trimmed values.
    #[must_use]
    pub fn conflicts_with(&self, health_flags: &[String]) -> bool {
        self.contraindications.iter().any(|contra| {
            health_flags
                .iter()
                .any(|flag| contra.trim().eq_ignore_ascii_case(flag.trim()))
        })
    }
}

/// Filter options for listing drills
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrillFilter {
    /// Drop drills contraindicated for any of these health flags
    pub health_flags: Vec<String>,
    /// Drop drills longer than this many minutes
    pub max_duration_minutes: Option<u32>,
    /// Maximum number of results
    pub limit: Option<u32>,
}

impl DrillFilter {
    /// Filter that excludes drills conflicting with the given flags
    #[must_use]
    pub const fn excluding(health_flags: Vec<String>) -> Self {
        Self {
            health_flags,
            max_duration_minutes: None,
            limit: None,
        }
    }

    /// Whether a drill passes every criterion except `limit`
    #[must_use]
    pub fn matches(&self, drill: &Drill) -> bool {
        if drill.conflicts_with(&self.health_flags) {
            return false;
        }
        match (self.max_duration_minutes, drill.duration_minutes) {
            (Some(max), Some(minutes)) => minutes <= max,
            _ => true,
        }
    }

    /// Apply the filter to a list, keeping input order
    #[must_use]
    pub fn apply(&self, drills: Vec<Drill>) -> Vec<Drill> {
        let matching = drills.into_iter().filter(|d| self.matches(d));
        match self.limit {
            Some(limit) => matching.take(limit as usize).collect(),
            None => matching.collect(),
        }
    }
}
