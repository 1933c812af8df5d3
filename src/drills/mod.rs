// ABOUTME: Drill library providers with database-first and static-fallback sourcing
// ABOUTME: Defines the DrillLibraryProvider trait, the static catalog, and the mode-switching library
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

//! # Drill Library
//!
//! [`DrillLibrary`] is the provider the pipeline talks to. In
//! [`DrillSourceMode::Auto`] it asks the database first and falls back to the
//! built-in catalog when the database errors or has nothing for the
//! requested category. `Db` mode never falls back; `Static` mode never
//! touches the database.

/// Built-in drill definitions
pub mod builtin;
/// Database-backed provider
pub mod database;

pub use builtin::{builtin_drills, DrillData, BUILTIN_DRILLS};
pub use database::DatabaseDrillLibrary;

use crate::config::DrillSourceMode;
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use pitchside_core::models::{Drill, DrillCategory, DrillFilter};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Source of catalog drills
#[async_trait]
pub trait DrillLibraryProvider: Send + Sync {
    /// Name used in logs
    fn source_name(&self) -> &'static str;

    /// Drills of one category passing the filter, ordered by id
    async fn list_drills(
        &self,
        category: DrillCategory,
        filter: &DrillFilter,
    ) -> AppResult<Vec<Drill>>;
}

/// In-memory catalog, by default the built-in drills
#[derive(Debug, Clone)]
pub struct StaticDrillLibrary {
    by_category: BTreeMap<DrillCategory, Vec<Drill>>,
}

impl StaticDrillLibrary {
    /// Library holding the built-in catalog
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_drills(builtin_drills())
    }

    /// Library holding exactly the given drills
    #[must_use]
    pub fn from_drills(drills: Vec<Drill>) -> Self {
        let mut by_category: BTreeMap<DrillCategory, Vec<Drill>> = BTreeMap::new();
        for drill in drills {
            by_category.entry(drill.category).or_default().push(drill);
        }
        for list in by_category.values_mut() {
            list.sort_by(|a, b| a.id.cmp(&b.id));
        }
        Self { by_category }
    }

    /// Copy without any drills of one category
    #[must_use]
    pub fn without_category(mut self, category: DrillCategory) -> Self {
        self.by_category.remove(&category);
        self
    }
}

impl Default for StaticDrillLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

#[async_trait]
impl DrillLibraryProvider for StaticDrillLibrary {
    fn source_name(&self) -> &'static str {
        "static"
    }

    async fn list_drills(
        &self,
        category: DrillCategory,
        filter: &DrillFilter,
    ) -> AppResult<Vec<Drill>> {
        let drills = self
            .by_category
            .get(&category)
            .cloned()
            .unwrap_or_default();
        Ok(filter.apply(drills))
    }
}

/// Drill library honoring a [`DrillSourceMode`]
pub struct DrillLibrary {
    mode: DrillSourceMode,
    database: Option<Box<dyn DrillLibraryProvider>>,
    fallback: StaticDrillLibrary,
}

impl DrillLibrary {
    /// Library with the given mode, database provider, and static fallback
    #[must_use]
    pub fn new(
        mode: DrillSourceMode,
        database: Option<Box<dyn DrillLibraryProvider>>,
        fallback: StaticDrillLibrary,
    ) -> Self {
        Self {
            mode,
            database,
            fallback,
        }
    }

    /// Library that only serves the built-in catalog
    #[must_use]
    pub fn static_only() -> Self {
        Self::new(DrillSourceMode::Static, None, StaticDrillLibrary::builtin())
    }

    /// Library for a configured `DRILL_SOURCE` over an optional database
    ///
    /// `Static` ignores the database. `Auto` without a database serves the
    /// built-in catalog; `Db` without one fails on every call.
    #[must_use]
    pub fn from_config(mode: DrillSourceMode, database: Option<&Database>) -> Self {
        let provider = match mode {
            DrillSourceMode::Static => None,
            DrillSourceMode::Auto | DrillSourceMode::Db => database.map(|db| {
                Box::new(DatabaseDrillLibrary::new(db)) as Box<dyn DrillLibraryProvider>
            }),
        };
        Self::new(mode, provider, StaticDrillLibrary::builtin())
    }

    /// Active mode
    #[must_use]
    pub const fn mode(&self) -> DrillSourceMode {
        self.mode
    }

    async fn list_with_fallback(
        &self,
        database: &dyn DrillLibraryProvider,
        category: DrillCategory,
        filter: &DrillFilter,
    ) -> AppResult<Vec<Drill>> {
        match database.list_drills(category, filter).await {
            Ok(drills) if !drills.is_empty() => Ok(drills),
            Ok(_) => {
                debug!(
                    category = %category,
                    source = database.source_name(),
                    "No drills in database for category, using built-in catalog"
                );
                self.fallback.list_drills(category, filter).await
            }
            Err(e) => {
                warn!(
                    category = %category,
                    source = database.source_name(),
                    error = %e,
                    "Drill database unavailable, using built-in catalog"
                );
                self.fallback.list_drills(category, filter).await
            }
        }
    }
}

#[async_trait]
impl DrillLibraryProvider for DrillLibrary {
    fn source_name(&self) -> &'static str {
        match self.mode {
            DrillSourceMode::Auto => "auto",
            DrillSourceMode::Db => "database",
            DrillSourceMode::Static => "static",
        }
    }

    async fn list_drills(
        &self,
        category: DrillCategory,
        filter: &DrillFilter,
    ) -> AppResult<Vec<Drill>> {
        match (self.mode, self.database.as_deref()) {
            (DrillSourceMode::Static, _) | (DrillSourceMode::Auto, None) => {
                self.fallback.list_drills(category, filter).await
            }
            (DrillSourceMode::Auto, Some(database)) => {
                self.list_with_fallback(database, category, filter).await
            }
            (DrillSourceMode::Db, Some(database)) => database.list_drills(category, filter).await,
            (DrillSourceMode::Db, None) => Err(AppError::config(
                "DRILL_SOURCE=db requires a database-backed drill provider",
            )),
        }
    }
}
