// ABOUTME: SQLite database connection and schema management for drills, programs, and scores
// ABOUTME: Opens the pool, runs idempotent migrations, and hands out table managers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

//! # Database Management
//!
//! One `SQLite` pool backs the drill catalog, the generated programs, and the
//! score snapshots. Migrations are `CREATE ... IF NOT EXISTS` and run on
//! every connect.

/// Drill catalog table operations
pub mod drills;
/// Program and score snapshot table operations
pub mod programs;

pub use drills::DrillManager;
pub use programs::ProgramManager;

use crate::errors::AppResult;
use sqlx::{sqlite::SqlitePoolOptions, Pool, Sqlite};
use tracing::debug;

/// Database handle shared by the drill library and the program repository
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or a migration fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:")
            && !database_url.contains(":memory:")
            && !database_url.contains('?')
        {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        let pool = SqlitePoolOptions::new()
            .connect(&connection_options)
            .await?;

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Wrap an existing pool, running migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a migration fails
    pub async fn from_pool(pool: Pool<Sqlite>) -> AppResult<Self> {
        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Drill catalog manager over this pool
    #[must_use]
    pub fn drills(&self) -> DrillManager {
        DrillManager::new(self.pool.clone())
    }

    /// Program and snapshot manager over this pool
    #[must_use]
    pub fn programs(&self) -> ProgramManager {
        ProgramManager::new(self.pool.clone())
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_drills().await?;
        self.migrate_programs().await?;
        debug!("Database migrations complete");
        Ok(())
    }

    async fn migrate_drills(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS drills (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                category TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                duration_minutes INTEGER,
                sets INTEGER,
                reps INTEGER,
                intensity TEXT,
                equipment TEXT NOT NULL DEFAULT '[]',
                coaching_points TEXT NOT NULL DEFAULT '[]',
                contraindications TEXT NOT NULL DEFAULT '[]',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_drills_category ON drills(category)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn migrate_programs(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS training_programs (
                id TEXT PRIMARY KEY,
                player_id TEXT NOT NULL,
                assessment_id TEXT NOT NULL,
                assessment_captured_at TEXT NOT NULL,
                revision INTEGER NOT NULL,
                supersedes TEXT,
                is_current INTEGER NOT NULL DEFAULT 0,
                program_json TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                UNIQUE(player_id, assessment_id)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_training_programs_current ON training_programs(player_id, is_current)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS score_snapshots (
                player_id TEXT NOT NULL,
                assessment_id TEXT NOT NULL,
                score_json TEXT NOT NULL,
                created_at TEXT NOT NULL,
                PRIMARY KEY (player_id, assessment_id)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
