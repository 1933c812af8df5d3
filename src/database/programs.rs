// ABOUTME: Database operations for generated training programs and score snapshots
// ABOUTME: Transactional upsert keyed by player and assessment with current-program recomputation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

use crate::errors::{AppError, AppResult};
use crate::repositories::{ProgramRecord, UpsertOutcome, UpsertStatus};
use chrono::{DateTime, SecondsFormat, Utc};
use pitchside_core::models::{ScoreResult, TrainingProgram};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use tracing::debug;

/// Database manager for `training_programs` and `score_snapshots`
#[derive(Clone)]
pub struct ProgramManager {
    pool: SqlitePool,
}

/// Sortable timestamp text: fixed-width RFC 3339 in UTC
fn sortable_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(value: &str) -> AppResult<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value)
        .map_err(|e| AppError::internal(format!("Invalid datetime: {e}")))?
        .with_timezone(&Utc))
}

impl ProgramManager {
    /// Create a new program manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert or replace a program and recompute the player's current flag
    ///
    /// Runs in one transaction, so readers never see a player without a
    /// current program or with two. Concurrent upserts for the same player
    /// serialize on the write lock.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any statement fails
    pub async fn upsert_program(&self, program: &TrainingProgram) -> AppResult<UpsertOutcome> {
        let program_json = serde_json::to_string(program)?;
        let program_id = program.id.to_string();
        let captured_at = sortable_timestamp(&program.assessment_captured_at);
        let supersedes = program.supersedes.map(|id| id.to_string());
        let now = Utc::now().to_rfc3339();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        // Take the write lock before the first read; a reader upgrading to a
        // writer gets SQLITE_BUSY without waiting on the busy timeout.
        sqlx::query("UPDATE training_programs SET is_current = 0 WHERE player_id = ?")
            .bind(&program.player_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to clear current program: {e}")))?;

        let existing: Option<String> = sqlx::query_scalar(
            "SELECT program_json FROM training_programs WHERE player_id = ? AND assessment_id = ?",
        )
        .bind(&program.player_id)
        .bind(&program.assessment_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to read existing program: {e}")))?;

        let status = match existing {
            None => UpsertStatus::Created,
            Some(ref json) if *json == program_json => UpsertStatus::Unchanged,
            Some(_) => UpsertStatus::Updated,
        };

        if status != UpsertStatus::Unchanged {
            sqlx::query(
                r"
                INSERT INTO training_programs (
                    id, player_id, assessment_id, assessment_captured_at, revision,
                    supersedes, is_current, program_json, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, 0, ?, ?, ?)
                ON CONFLICT(player_id, assessment_id) DO UPDATE SET
                    id = excluded.id,
                    assessment_captured_at = excluded.assessment_captured_at,
                    revision = excluded.revision,
                    supersedes = excluded.supersedes,
                    program_json = excluded.program_json,
                    updated_at = excluded.updated_at
                ",
            )
            .bind(&program_id)
            .bind(&program.player_id)
            .bind(&program.assessment_id)
            .bind(&captured_at)
            .bind(i64::from(program.revision))
            .bind(&supersedes)
            .bind(&program_json)
            .bind(&now)
            .bind(&now)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to upsert program: {e}")))?;
        }

        sqlx::query(
            r"
            UPDATE training_programs SET is_current = 1
            WHERE id = (
                SELECT id FROM training_programs
                WHERE player_id = ?
                ORDER BY assessment_captured_at DESC, assessment_id DESC
                LIMIT 1
            )
            ",
        )
        .bind(&program.player_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to mark current program: {e}")))?;

        let is_current: i64 = sqlx::query_scalar(
            "SELECT is_current FROM training_programs WHERE player_id = ? AND assessment_id = ?",
        )
        .bind(&program.player_id)
        .bind(&program.assessment_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to read current flag: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit program upsert: {e}")))?;

        debug!(
            player_id = %program.player_id,
            assessment_id = %program.assessment_id,
            status = ?status,
            is_current = is_current != 0,
            "Upserted program"
        );

        Ok(UpsertOutcome {
            status,
            is_current: is_current != 0,
        })
    }

    /// Get the player's current program
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails or the stored JSON is invalid
    pub async fn get_current_program(&self, player_id: &str) -> AppResult<Option<TrainingProgram>> {
        let json: Option<String> = sqlx::query_scalar(
            "SELECT program_json FROM training_programs WHERE player_id = ? AND is_current = 1",
        )
        .bind(player_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get current program: {e}")))?;

        json.map(|j| serde_json::from_str(&j).map_err(AppError::from))
            .transpose()
    }

    /// Get the program generated from one assessment
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails or the stored JSON is invalid
    pub async fn get_program(
        &self,
        player_id: &str,
        assessment_id: &str,
    ) -> AppResult<Option<TrainingProgram>> {
        let json: Option<String> = sqlx::query_scalar(
            "SELECT program_json FROM training_programs WHERE player_id = ? AND assessment_id = ?",
        )
        .bind(player_id)
        .bind(assessment_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get program: {e}")))?;

        json.map(|j| serde_json::from_str(&j).map_err(AppError::from))
            .transpose()
    }

    /// List every program of a player, newest source assessment first
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails or a row is malformed
    pub async fn list_program_history(&self, player_id: &str) -> AppResult<Vec<ProgramRecord>> {
        let rows = sqlx::query(
            r"
            SELECT program_json, is_current, created_at, updated_at
            FROM training_programs
            WHERE player_id = ?
            ORDER BY assessment_captured_at DESC, assessment_id DESC
            ",
        )
        .bind(player_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list program history: {e}")))?;

        rows.iter().map(row_to_program_record).collect()
    }

    /// Insert or replace a score snapshot
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the database operation fails
    pub async fn save_score_snapshot(&self, score: &ScoreResult) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO score_snapshots (player_id, assessment_id, score_json, created_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(player_id, assessment_id) DO UPDATE SET
                score_json = excluded.score_json
            ",
        )
        .bind(&score.player_id)
        .bind(&score.assessment_id)
        .bind(serde_json::to_string(score)?)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to save score snapshot: {e}")))?;

        Ok(())
    }

    /// Get a score snapshot
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails or the stored JSON is invalid
    pub async fn get_score_snapshot(
        &self,
        player_id: &str,
        assessment_id: &str,
    ) -> AppResult<Option<ScoreResult>> {
        let json: Option<String> = sqlx::query_scalar(
            "SELECT score_json FROM score_snapshots WHERE player_id = ? AND assessment_id = ?",
        )
        .bind(player_id)
        .bind(assessment_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get score snapshot: {e}")))?;

        json.map(|j| serde_json::from_str(&j).map_err(AppError::from))
            .transpose()
    }
}

/// Convert a database row to a `ProgramRecord`
fn row_to_program_record(row: &SqliteRow) -> AppResult<ProgramRecord> {
    let program_json: String = row.get("program_json");
    let is_current: i64 = row.get("is_current");
    let created_at: String = row.get("created_at");
    let updated_at: String = row.get("updated_at");

    Ok(ProgramRecord {
        program: serde_json::from_str(&program_json)?,
        is_current: is_current != 0,
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })
}
