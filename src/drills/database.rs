// ABOUTME: Database-backed drill library provider
// ABOUTME: Reads drills from the SQLite drills table through DrillManager
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

use super::DrillLibraryProvider;
use crate::database::{Database, DrillManager};
use crate::errors::AppResult;
use async_trait::async_trait;
use pitchside_core::models::{Drill, DrillCategory, DrillFilter};

/// Drill library reading the `drills` table
#[derive(Clone)]
pub struct DatabaseDrillLibrary {
    manager: DrillManager,
}

impl DatabaseDrillLibrary {
    /// Create a provider over the given database
    #[must_use]
    pub fn new(db: &Database) -> Self {
        Self {
            manager: db.drills(),
        }
    }
}

#[async_trait]
impl DrillLibraryProvider for DatabaseDrillLibrary {
    fn source_name(&self) -> &'static str {
        "database"
    }

    async fn list_drills(
        &self,
        category: DrillCategory,
        filter: &DrillFilter,
    ) -> AppResult<Vec<Drill>> {
        self.manager.list_drills(category, filter).await
    }
}
