// ABOUTME: Immutable drill catalog snapshot loaded once per program generation
// ABOUTME: Deterministic, contraindication-aware drill selection by category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

//! Drill catalog snapshot.
//!
//! The planner and governor both read from the same snapshot so a
//! substitution never picks a drill the planner could not have seen.

use pitchside_core::models::{Drill, DrillCategory};
use std::collections::BTreeMap;

/// Drills grouped by category, each group sorted by id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrillCatalog {
    by_category: BTreeMap<DrillCategory, Vec<Drill>>,
}

impl DrillCatalog {
    /// Build a snapshot; duplicate ids within a category keep the first occurrence
    pub fn from_drills(drills: impl IntoIterator<Item = Drill>) -> Self {
        let mut by_category: BTreeMap<DrillCategory, Vec<Drill>> = BTreeMap::new();
        for drill in drills {
            by_category.entry(drill.category).or_default().push(drill);
        }
        for group in by_category.values_mut() {
            group.sort_by(|a, b| a.id.cmp(&b.id));
            group.dedup_by(|a, b| a.id == b.id);
        }
        Self { by_category }
    }

    /// Replace the drills of one category
    pub fn insert_category(&mut self, category: DrillCategory, drills: Vec<Drill>) {
        let mut group: Vec<Drill> = drills
            .into_iter()
            .filter(|d| d.category == category)
            .collect();
        group.sort_by(|a, b| a.id.cmp(&b.id));
        group.dedup_by(|a, b| a.id == b.id);
        self.by_category.insert(category, group);
    }

    /// Drills of a category sorted by id
    #[must_use]
    pub fn drills(&self, category: DrillCategory) -> &[Drill] {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Drills of a category that do not conflict with the health flags
    #[must_use]
    pub fn eligible(&self, category: DrillCategory, health_flags: &[String]) -> Vec<&Drill> {
        self.drills(category)
            .iter()
            .filter(|d| !d.conflicts_with(health_flags))
            .collect()
    }

    /// Deterministic pick: eligible drill at `index mod n`
    #[must_use]
    pub fn select(
        &self,
        category: DrillCategory,
        health_flags: &[String],
        index: usize,
    ) -> Option<&Drill> {
        let eligible = self.eligible(category, health_flags);
        if eligible.is_empty() {
            return None;
        }
        eligible.get(index % eligible.len()).copied()
    }

    /// First eligible drill in a category
    #[must_use]
    pub fn first_safe(&self, category: DrillCategory, health_flags: &[String]) -> Option<&Drill> {
        self.select(category, health_flags, 0)
    }

    /// Look up a drill by id
    #[must_use]
    pub fn get(&self, drill_id: &str) -> Option<&Drill> {
        self.by_category
            .values()
            .flat_map(|group| group.iter())
            .find(|d| d.id == drill_id)
    }

    /// Total number of drills
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_category.values().map(Vec::len).sum()
    }

    /// Whether the snapshot holds no drills
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
