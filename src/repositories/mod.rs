// ABOUTME: Program repository abstraction with idempotent upsert keyed by player and assessment
// ABOUTME: Tracks the current program per player and stores read-only score snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

//! # Program Repository
//!
//! Programs are keyed by `(player_id, assessment_id)`. Upserting the same key
//! replaces the stored program instead of adding a record. Exactly one program
//! per player is current: the one whose source assessment was captured last,
//! with ties broken by assessment id. Arrival order never decides.

/// In-memory implementation backed by `DashMap`
pub mod memory;
/// `SQLite` implementation
pub mod sqlite;

pub use memory::InMemoryProgramRepository;
pub use sqlite::SqliteProgramRepository;

use crate::errors::AppResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pitchside_core::models::{ScoreResult, TrainingProgram};
use serde::{Deserialize, Serialize};

/// What an upsert did to the stored record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpsertStatus {
    /// No record existed for the key
    Created,
    /// A record existed with different content
    Updated,
    /// A record existed with identical content
    Unchanged,
}

/// Result of [`ProgramRepository::upsert_program`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertOutcome {
    /// Effect on the stored record
    pub status: UpsertStatus,
    /// Whether the upserted program is the player's current program afterwards
    pub is_current: bool,
}

/// Stored program with bookkeeping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramRecord {
    /// The program
    pub program: TrainingProgram,
    /// Whether this is the player's current program
    pub is_current: bool,
    /// First insert time
    pub created_at: DateTime<Utc>,
    /// Last content change
    pub updated_at: DateTime<Utc>,
}

/// Persistence for generated programs and score snapshots
#[async_trait]
pub trait ProgramRepository: Send + Sync {
    /// Backend name for logs
    fn name(&self) -> &'static str;

    /// Insert or replace the program for its `(player, assessment)` key and
    /// recompute the player's current program
    async fn upsert_program(&self, program: &TrainingProgram) -> AppResult<UpsertOutcome>;

    /// The player's current program
    async fn get_current_program(&self, player_id: &str) -> AppResult<Option<TrainingProgram>>;

    /// The program generated from one assessment
    async fn get_program(
        &self,
        player_id: &str,
        assessment_id: &str,
    ) -> AppResult<Option<TrainingProgram>>;

    /// Every stored program of a player, newest source assessment first
    async fn list_program_history(&self, player_id: &str) -> AppResult<Vec<ProgramRecord>>;

    /// Store the score computed from an assessment, replacing any earlier one
    async fn save_score_snapshot(&self, score: &ScoreResult) -> AppResult<()>;

    /// Read a stored score
    async fn get_score_snapshot(
        &self,
        player_id: &str,
        assessment_id: &str,
    ) -> AppResult<Option<ScoreResult>>;
}
