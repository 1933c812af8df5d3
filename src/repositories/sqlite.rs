// ABOUTME: SQLite program repository delegating to the program table manager
// ABOUTME: Adapts ProgramManager to the ProgramRepository trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

use super::{ProgramRecord, ProgramRepository, UpsertOutcome};
use crate::database::{Database, ProgramManager};
use crate::errors::AppResult;
use async_trait::async_trait;
use pitchside_core::models::{ScoreResult, TrainingProgram};

/// `SQLite` implementation of `ProgramRepository`
#[derive(Clone)]
pub struct SqliteProgramRepository {
    manager: ProgramManager,
}

impl SqliteProgramRepository {
    /// Create a repository over the given database
    #[must_use]
    pub fn new(db: &Database) -> Self {
        Self {
            manager: db.programs(),
        }
    }
}

#[async_trait]
impl ProgramRepository for SqliteProgramRepository {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    async fn upsert_program(&self, program: &TrainingProgram) -> AppResult<UpsertOutcome> {
        self.manager.upsert_program(program).await
    }

    async fn get_current_program(&self, player_id: &str) -> AppResult<Option<TrainingProgram>> {
        self.manager.get_current_program(player_id).await
    }

    async fn get_program(
        &self,
        player_id: &str,
        assessment_id: &str,
    ) -> AppResult<Option<TrainingProgram>> {
        self.manager.get_program(player_id, assessment_id).await
    }

    async fn list_program_history(&self, player_id: &str) -> AppResult<Vec<ProgramRecord>> {
        self.manager.list_program_history(player_id).await
    }

    async fn save_score_snapshot(&self, score: &ScoreResult) -> AppResult<()> {
        self.manager.save_score_snapshot(score).await
    }

    async fn get_score_snapshot(
        &self,
        player_id: &str,
        assessment_id: &str,
    ) -> AppResult<Option<ScoreResult>> {
        self.manager
            .get_score_snapshot(player_id, assessment_id)
            .await
    }
}
