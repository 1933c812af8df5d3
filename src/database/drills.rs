// ABOUTME: Database operations for the drill catalog
// ABOUTME: Upserts, counts, and lists drills by category with contraindication and duration filters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

use crate::errors::{AppError, AppResult};
use chrono::Utc;
use pitchside_core::models::{Drill, DrillCategory, DrillFilter, Intensity};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

/// Database manager for the `drills` table
#[derive(Clone)]
pub struct DrillManager {
    pool: SqlitePool,
}

impl DrillManager {
    /// Create a new drill manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert or replace a drill
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the database operation fails
    pub async fn upsert_drill(&self, drill: &Drill) -> AppResult<()> {
        let now = Utc::now().to_rfc3339();
        sqlx::query(
            r"
            INSERT INTO drills (
                id, name, category, description, duration_minutes, sets, reps, intensity,
                equipment, coaching_points, contraindications, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                category = excluded.category,
                description = excluded.description,
                duration_minutes = excluded.duration_minutes,
                sets = excluded.sets,
                reps = excluded.reps,
                intensity = excluded.intensity,
                equipment = excluded.equipment,
                coaching_points = excluded.coaching_points,
                contraindications = excluded.contraindications,
                updated_at = excluded.updated_at
            ",
        )
        .bind(&drill.id)
        .bind(&drill.name)
        .bind(drill.category.as_str())
        .bind(&drill.description)
        .bind(drill.duration_minutes.map(i64::from))
        .bind(drill.sets.map(i64::from))
        .bind(drill.reps.map(i64::from))
        .bind(drill.intensity.map(|i| i.as_str()))
        .bind(serde_json::to_string(&drill.equipment)?)
        .bind(serde_json::to_string(&drill.coaching_points)?)
        .bind(serde_json::to_string(&drill.contraindications)?)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to upsert drill {}: {e}", drill.id)))?;

        Ok(())
    }

    /// Get a drill by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails or the row is malformed
    pub async fn get_drill(&self, id: &str) -> AppResult<Option<Drill>> {
        let row = sqlx::query(
            r"
            SELECT id, name, category, description, duration_minutes, sets, reps, intensity,
                   equipment, coaching_points, contraindications
            FROM drills
            WHERE id = ?
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get drill: {e}")))?;

        row.map(|r| row_to_drill(&r)).transpose()
    }

    /// List drills of one category ordered by id
    ///
    /// Duration is filtered in SQL; contraindications and the limit are
    /// applied afterwards so the limit counts only eligible drills.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails or a row is malformed
    pub async fn list_drills(
        &self,
        category: DrillCategory,
        filter: &DrillFilter,
    ) -> AppResult<Vec<Drill>> {
        let mut conditions = vec!["category = ?".to_owned()];
        if filter.max_duration_minutes.is_some() {
            conditions.push("(duration_minutes IS NULL OR duration_minutes <= ?)".to_owned());
        }

        let query = format!(
            r"
            SELECT id, name, category, description, duration_minutes, sets, reps, intensity,
                   equipment, coaching_points, contraindications
            FROM drills
            WHERE {}
            ORDER BY id ASC
            ",
            conditions.join(" AND ")
        );

        let mut sql_query = sqlx::query(&query).bind(category.as_str());
        if let Some(max) = filter.max_duration_minutes {
            sql_query = sql_query.bind(i64::from(max));
        }

        let rows = sql_query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list drills: {e}")))?;

        let drills = rows.iter().map(row_to_drill).collect::<AppResult<Vec<_>>>()?;
        Ok(filter.apply(drills))
    }

    /// Count drills, optionally within one category
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn count_drills(&self, category: Option<DrillCategory>) -> AppResult<u64> {
        let count: i64 = match category {
            Some(category) => {
                sqlx::query_scalar("SELECT COUNT(*) FROM drills WHERE category = ?")
                    .bind(category.as_str())
                    .fetch_one(&self.pool)
                    .await
            }
            None => {
                sqlx::query_scalar("SELECT COUNT(*) FROM drills")
                    .fetch_one(&self.pool)
                    .await
            }
        }
        .map_err(|e| AppError::database(format!("Failed to count drills: {e}")))?;

        Ok(count.unsigned_abs())
    }

    /// Delete every drill
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn clear(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM drills")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to clear drills: {e}")))?;
        Ok(result.rows_affected())
    }
}

fn json_list(row: &SqliteRow, column: &str) -> AppResult<Vec<String>> {
    let raw: Option<String> = row.get(column);
    Ok(raw
        .map(|s| serde_json::from_str(&s))
        .transpose()?
        .unwrap_or_default())
}

/// Narrow an optional INTEGER column, rejecting negative or oversized values
fn column_u32(drill_id: &str, column: &str, value: Option<i64>) -> AppResult<Option<u32>> {
    value
        .map(|v| {
            u32::try_from(v).map_err(|_| {
                AppError::database(format!("Drill {drill_id} has invalid {column} value {v}"))
            })
        })
        .transpose()
}

/// Convert a database row to a `Drill`
fn row_to_drill(row: &SqliteRow) -> AppResult<Drill> {
    let id: String = row.get("id");
    let category_str: String = row.get("category");
    let category = DrillCategory::parse(&category_str).ok_or_else(|| {
        AppError::database(format!("Drill {id} has unknown category '{category_str}'"))
    })?;
    let intensity: Option<String> = row.get("intensity");
    let duration_minutes: Option<i64> = row.get("duration_minutes");
    let sets: Option<i64> = row.get("sets");
    let reps: Option<i64> = row.get("reps");

    Ok(Drill {
        name: row.get("name"),
        category,
        description: row.get("description"),
        duration_minutes: column_u32(&id, "duration_minutes", duration_minutes)?,
        sets: column_u32(&id, "sets", sets)?,
        reps: column_u32(&id, "reps", reps)?,
        intensity: intensity.as_deref().and_then(Intensity::parse),
        equipment: json_list(row, "equipment")?,
        coaching_points: json_list(row, "coaching_points")?,
        contraindications: json_list(row, "contraindications")?,
        id,
    })
}
