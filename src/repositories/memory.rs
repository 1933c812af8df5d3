// ABOUTME: In-memory program repository using DashMap entry locks per player
// ABOUTME: Single-writer per player store used by tests and storage-less deployments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

use super::{ProgramRecord, ProgramRepository, UpsertOutcome, UpsertStatus};
use crate::errors::AppResult;
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use pitchside_core::models::{ScoreResult, TrainingProgram};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Programs of one player keyed by assessment id
type PlayerPrograms = BTreeMap<String, ProgramRecord>;

/// `DashMap`-backed repository
///
/// All writes for a player go through that player's map entry, which holds
/// the shard lock for the whole read-modify-write.
#[derive(Clone, Default)]
pub struct InMemoryProgramRepository {
    programs: Arc<DashMap<String, PlayerPrograms>>,
    snapshots: Arc<DashMap<(String, String), ScoreResult>>,
}

impl InMemoryProgramRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored programs across all players
    #[must_use]
    pub fn len(&self) -> usize {
        self.programs.iter().map(|entry| entry.value().len()).sum()
    }

    /// Whether nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Recompute `is_current` flags; returns the assessment id now current
fn recompute_current(records: &mut PlayerPrograms) -> Option<String> {
    let current = records
        .values()
        .max_by(|a, b| {
            a.program
                .assessment_captured_at
                .cmp(&b.program.assessment_captured_at)
                .then_with(|| a.program.assessment_id.cmp(&b.program.assessment_id))
        })
        .map(|record| record.program.assessment_id.clone());

    for (assessment_id, record) in records.iter_mut() {
        record.is_current = current.as_deref() == Some(assessment_id.as_str());
    }
    current
}

#[async_trait]
impl ProgramRepository for InMemoryProgramRepository {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn upsert_program(&self, program: &TrainingProgram) -> AppResult<UpsertOutcome> {
        let now = Utc::now();
        let mut entry = self.programs.entry(program.player_id.clone()).or_default();
        let records = entry.value_mut();

        let status = match records.get_mut(&program.assessment_id) {
            Some(existing) if existing.program == *program => UpsertStatus::Unchanged,
            Some(existing) => {
                existing.program = program.clone();
                existing.updated_at = now;
                UpsertStatus::Updated
            }
            None => {
                records.insert(
                    program.assessment_id.clone(),
                    ProgramRecord {
                        program: program.clone(),
                        is_current: false,
                        created_at: now,
                        updated_at: now,
                    },
                );
                UpsertStatus::Created
            }
        };

        let current = recompute_current(records);
        Ok(UpsertOutcome {
            status,
            is_current: current.as_deref() == Some(program.assessment_id.as_str()),
        })
    }

    async fn get_current_program(&self, player_id: &str) -> AppResult<Option<TrainingProgram>> {
        Ok(self.programs.get(player_id).and_then(|records| {
            records
                .values()
                .find(|record| record.is_current)
                .map(|record| record.program.clone())
        }))
    }

    async fn get_program(
        &self,
        player_id: &str,
        assessment_id: &str,
    ) -> AppResult<Option<TrainingProgram>> {
        Ok(self.programs.get(player_id).and_then(|records| {
            records
                .get(assessment_id)
                .map(|record| record.program.clone())
        }))
    }

    async fn list_program_history(&self, player_id: &str) -> AppResult<Vec<ProgramRecord>> {
        let mut history: Vec<ProgramRecord> = self
            .programs
            .get(player_id)
            .map(|records| records.values().cloned().collect())
            .unwrap_or_default();
        history.sort_by(|a, b| {
            b.program
                .assessment_captured_at
                .cmp(&a.program.assessment_captured_at)
                .then_with(|| b.program.assessment_id.cmp(&a.program.assessment_id))
        });
        Ok(history)
    }

    async fn save_score_snapshot(&self, score: &ScoreResult) -> AppResult<()> {
        self.snapshots.insert(
            (score.player_id.clone(), score.assessment_id.clone()),
            score.clone(),
        );
        Ok(())
    }

    async fn get_score_snapshot(
        &self,
        player_id: &str,
        assessment_id: &str,
    ) -> AppResult<Option<ScoreResult>> {
        Ok(self
            .snapshots
            .get(&(player_id.to_owned(), assessment_id.to_owned()))
            .map(|snapshot| snapshot.value().clone()))
    }
}
