// ABOUTME: Periodized training program model with phases, microcycles, sessions, and blocks
// ABOUTME: Deterministic program identity and planning constraint validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::assessment::AgeCategory;
use super::drill::{Drill, DrillCategory, Intensity};
use crate::constants::identifiers::PROGRAM_NAMESPACE;
use crate::constants::planning_limits::{
    DAYS_PER_WEEK, MAX_DURATION_WEEKS, MIN_DURATION_WEEKS, SUPPORTED_TRAINING_DAYS,
};
use crate::errors::ValidationError;

/// Deterministic program id for a (player, assessment) pair
///
/// Regenerating from the same assessment always yields the same id.
#[must_use]
pub fn program_id_for(player_id: &str, assessment_id: &str) -> Uuid {
    let name = format!("{}:{player_id}:{assessment_id}", player_id.len());
    Uuid::new_v5(&PROGRAM_NAMESPACE, name.as_bytes())
}

/// Training block of the macrocycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    /// General preparation
    Foundation,
    /// Specific development
    Build,
    /// Sharpening and taper
    Peak,
}

impl PhaseKind {
    /// All phases in program order
    pub const ALL: [Self; 3] = [Self::Foundation, Self::Build, Self::Peak];

    /// Convert to string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Foundation => "foundation",
            Self::Build => "build",
            Self::Peak => "peak",
        }
    }

    /// Display name
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Foundation => "Foundation",
            Self::Build => "Build",
            Self::Peak => "Peak",
        }
    }

    /// Base intensity of main blocks in this phase
    #[must_use]
    pub const fn intensity(&self) -> Intensity {
        match self {
            Self::Foundation => Intensity::Low,
            Self::Build => Intensity::Medium,
            Self::Peak => Intensity::High,
        }
    }
}

/// A contiguous range of weeks sharing one training emphasis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    /// Phase kind
    pub kind: PhaseKind,
    /// Display name
    pub name: String,
    /// Human-readable emphasis
    pub focus: String,
    /// Base intensity
    pub intensity: Intensity,
    /// First week (1-based, inclusive)
    pub start_week: u32,
    /// Last week (1-based, inclusive)
    pub end_week: u32,
}

impl Phase {
    /// Number of weeks in the phase
    #[must_use]
    pub const fn weeks(&self) -> u32 {
        self.end_week + 1 - self.start_week
    }

    /// Whether the 1-based week falls inside this phase
    #[must_use]
    pub const fn contains(&self, week: u32) -> bool {
        week >= self.start_week && week <= self.end_week
    }
}

/// Day of the training week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

impl Weekday {
    /// All days, Monday first
    pub const ALL: [Self; DAYS_PER_WEEK] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Zero-based index, Monday = 0
    #[must_use]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Convert to string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a session is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    /// Warm-up plus a main focus block
    Training,
    /// Low-intensity mobility plus recovery
    Recovery,
}

/// Position of a block inside its session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockRole {
    /// Prehab warm-up before the main block
    WarmUp,
    /// Main focus work
    Main,
    /// Mobility work in a recovery session
    Mobility,
    /// Regeneration work in a recovery session
    Recovery,
}

/// Drill details copied into the program so it reads without the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillAssignment {
    /// Drill id in the library
    pub drill_id: String,
    /// Drill name
    pub name: String,
    /// Sets, if prescribed
    pub sets: Option<u32>,
    /// Reps, if prescribed
    pub reps: Option<u32>,
    /// Equipment needed
    pub equipment: Vec<String>,
}

impl From<&Drill> for DrillAssignment {
    fn from(drill: &Drill) -> Self {
        Self {
            drill_id: drill.id.clone(),
            name: drill.name.clone(),
            sets: drill.sets,
            reps: drill.reps,
            equipment: drill.equipment.clone(),
        }
    }
}

/// Block payload: a concrete drill or an explicit rest placeholder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockContent {
    /// Assigned drill
    Drill(DrillAssignment),
    /// No eligible drill; the slot is kept as rest
    Rest {
        /// Why no drill was assigned
        reason: String,
    },
}

/// One block of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionBlock {
    /// Role in the session
    pub role: BlockRole,
    /// Drill category the block draws from
    pub category: DrillCategory,
    /// Block intensity
    pub intensity: Intensity,
    /// Planned minutes (zero for rest placeholders)
    pub duration_minutes: u32,
    /// Drill or placeholder
    pub content: BlockContent,
    /// `duration_minutes * intensity factor`
    pub load: f64,
}

impl SessionBlock {
    /// Whether the block is a rest placeholder
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self.content, BlockContent::Rest { .. })
    }

    /// Assigned drill id, if any
    #[must_use]
    pub fn drill_id(&self) -> Option<&str> {
        match &self.content {
            BlockContent::Drill(assignment) => Some(&assignment.drill_id),
            BlockContent::Rest { .. } => None,
        }
    }
}

/// One training day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Day of the week
    pub day: Weekday,
    /// Training or recovery
    pub kind: SessionKind,
    /// Focus drill category
    pub focus: DrillCategory,
    /// Position of the focus in the priority ranking; `None` for recovery days
    pub focus_rank: Option<u32>,
    /// Highest block intensity
    pub intensity: Intensity,
    /// Ordered blocks
    pub blocks: Vec<SessionBlock>,
    /// Sum of block loads
    pub load: f64,
}

impl Session {
    /// Whether the session satisfies the weekly rest minimum
    #[must_use]
    pub fn is_restorative(&self) -> bool {
        self.kind == SessionKind::Recovery || self.intensity == Intensity::Low
    }

    /// Recompute `intensity` and `load` from the blocks
    pub fn refresh_totals(&mut self) {
        self.intensity = self
            .blocks
            .iter()
            .map(|b| b.intensity)
            .max()
            .unwrap_or(Intensity::Low);
        self.load = self.blocks.iter().map(|b| b.load).sum();
    }
}

/// One week of the program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Microcycle {
    /// 1-based week number
    pub week: u32,
    /// Phase the week belongs to
    pub phase: PhaseKind,
    /// Seven day slots, Monday first; `None` is an implicit rest day
    pub days: [Option<Session>; DAYS_PER_WEEK],
    /// Sum of session loads
    pub load: f64,
}

impl Microcycle {
    /// Empty week
    #[must_use]
    pub fn new(week: u32, phase: PhaseKind) -> Self {
        Self {
            week,
            phase,
            days: Default::default(),
            load: 0.0,
        }
    }

    /// Scheduled sessions in day order
    pub fn sessions(&self) -> impl Iterator<Item = &Session> {
        self.days.iter().flatten()
    }

    /// Scheduled sessions in day order, mutably
    pub fn sessions_mut(&mut self) -> impl Iterator<Item = &mut Session> {
        self.days.iter_mut().flatten()
    }

    /// Number of scheduled sessions
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.sessions().count()
    }

    /// First day without a session
    #[must_use]
    pub fn first_free_day(&self) -> Option<Weekday> {
        Weekday::ALL
            .into_iter()
            .find(|day| self.days[day.index()].is_none())
    }

    /// Whether at least one session is recovery or low intensity
    #[must_use]
    pub fn has_restorative_day(&self) -> bool {
        self.sessions().any(Session::is_restorative)
    }

    /// Place a session on its day
    pub fn schedule(&mut self, session: Session) {
        let index = session.day.index();
        self.days[index] = Some(session);
    }

    /// Recompute the weekly load from the sessions
    pub fn refresh_load(&mut self) {
        self.load = self.sessions().map(|s| s.load).sum();
    }
}

/// Structured notes recorded while planning or governing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProgramWarning {
    /// No eligible drill existed for a block
    EmptyDrillCategory {
        /// Week number
        week: u32,
        /// Day of the block
        day: Weekday,
        /// Category that had no eligible drill
        category: DrillCategory,
    },
    /// The weekly load could not be brought under the ceiling
    LoadCeilingUnreachable {
        /// Week number
        week: u32,
        /// Load after every reduction
        load: f64,
        /// Ceiling for the player's age category
        ceiling: f64,
    },
    /// Load was reduced to meet the ceiling
    LoadReduced {
        /// Week number
        week: u32,
        /// Load before reduction
        from: f64,
        /// Load after reduction
        to: f64,
    },
    /// A recovery session was added to satisfy the rest minimum
    RecoveryDayInserted {
        /// Week number
        week: u32,
        /// Day used
        day: Weekday,
    },
    /// A session was downgraded to Low to satisfy the rest minimum
    SessionDowngraded {
        /// Week number
        week: u32,
        /// Day downgraded
        day: Weekday,
    },
    /// A contraindicated drill was replaced
    ContraindicatedDrillReplaced {
        /// Week number
        week: u32,
        /// Day of the block
        day: Weekday,
        /// Drill removed
        drill_id: String,
        /// Drill substituted, `None` when a rest block was used
        replacement: Option<String>,
    },
}

/// A complete periodized program for one player and assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingProgram {
    /// Serialized shape version
    pub schema_version: u32,
    /// Deterministic id, see [`program_id_for`]
    pub id: Uuid,
    /// Player
    pub player_id: String,
    /// Source assessment
    pub assessment_id: String,
    /// Capture time of the source assessment
    pub assessment_captured_at: DateTime<Utc>,
    /// Age bracket used for load ceilings
    pub age_category: AgeCategory,
    /// Total weeks
    pub duration_weeks: u32,
    /// Sessions per week
    pub training_days_per_week: u8,
    /// Health flags the program was screened against
    pub health_flags: Vec<String>,
    /// 1 for the first program of a player, incremented per new assessment
    pub revision: u32,
    /// Program this one replaces as current
    pub supersedes: Option<Uuid>,
    /// Phases in order
    pub phases: Vec<Phase>,
    /// One microcycle per week
    pub microcycles: Vec<Microcycle>,
    /// Planning and governing notes
    pub warnings: Vec<ProgramWarning>,
}

impl TrainingProgram {
    /// Phase covering a 1-based week
    #[must_use]
    pub fn phase_for_week(&self, week: u32) -> Option<&Phase> {
        self.phases.iter().find(|p| p.contains(week))
    }

    /// Sum of weekly loads
    #[must_use]
    pub fn total_load(&self) -> f64 {
        self.microcycles.iter().map(|m| m.load).sum()
    }

    /// Whether a `LoadCeilingUnreachable` warning exists for the week
    #[must_use]
    pub fn has_unreachable_ceiling_warning(&self, week: u32) -> bool {
        self.warnings.iter().any(|w| {
            matches!(
                w,
                ProgramWarning::LoadCeilingUnreachable { week: warned, .. } if *warned == week
            )
        })
    }
}

/// Player-specific planning request parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningConstraints {
    /// Sessions per week (3, 4, or 5)
    pub training_days_per_week: u8,
    /// Program length in weeks
    pub duration_weeks: u32,
    /// Health or injury flags, matched against drill contraindications
    #[serde(default)]
    pub health_flags: Vec<String>,
}

impl PlanningConstraints {
    /// Constraints with no health flags
    #[must_use]
    pub const fn new(training_days_per_week: u8, duration_weeks: u32) -> Self {
        Self {
            training_days_per_week,
            duration_weeks,
            health_flags: Vec::new(),
        }
    }

    /// Add health flags
    #[must_use]
    pub fn with_health_flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.health_flags.extend(flags.into_iter().map(Into::into));
        self
    }

    /// Reject unsupported day counts and durations
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnsupportedTrainingDays`] or
    /// [`ValidationError::DurationOutOfRange`]
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !SUPPORTED_TRAINING_DAYS.contains(&self.training_days_per_week) {
            return Err(ValidationError::UnsupportedTrainingDays(
                self.training_days_per_week,
            ));
        }
        if !(MIN_DURATION_WEEKS..=MAX_DURATION_WEEKS).contains(&self.duration_weeks) {
            return Err(ValidationError::DurationOutOfRange {
                weeks: self.duration_weeks,
                min: MIN_DURATION_WEEKS,
                max: MAX_DURATION_WEEKS,
            });
        }
        for flag in &self.health_flags {
            if flag.trim().is_empty() {
                return Err(ValidationError::EmptyField {
                    field: "health_flags",
                });
            }
        }
        Ok(())
    }

    /// Health flags trimmed, lowercased, sorted, and deduplicated
    #[must_use]
    pub fn normalized_health_flags(&self) -> Vec<String> {
        let mut flags: Vec<String> = self
            .health_flags
            .iter()
            .map(|f| f.trim().to_lowercase())
            .collect();
        flags.sort();
        flags.dedup();
        flags
    }
}
