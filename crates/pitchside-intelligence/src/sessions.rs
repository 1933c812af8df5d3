// ABOUTME: Session and block construction shared by the planner and the safety governor
// ABOUTME: Picks drills from the catalog snapshot or falls back to explicit rest placeholders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

use pitchside_core::models::{
    BlockContent, BlockRole, DrillAssignment, DrillCategory, Intensity, ProgramWarning, Session,
    SessionBlock, SessionKind, Weekday,
};

use crate::catalog::DrillCatalog;
use crate::load::LoadModel;

pub(crate) struct SessionBuilder<'a> {
    pub catalog: &'a DrillCatalog,
    pub health_flags: &'a [String],
    pub load: &'a LoadModel,
    pub default_block_minutes: u32,
}

impl SessionBuilder<'_> {
    pub fn block(
        &self,
        role: BlockRole,
        category: DrillCategory,
        intensity: Intensity,
        week: u32,
        day: Weekday,
        warnings: &mut Vec<ProgramWarning>,
    ) -> SessionBlock {
        let index = week as usize + day.index();
        let mut block = match self.catalog.select(category, self.health_flags, index) {
            Some(drill) => SessionBlock {
                role,
                category,
                intensity,
                duration_minutes: drill.duration_minutes.unwrap_or(self.default_block_minutes),
                content: BlockContent::Drill(DrillAssignment::from(drill)),
                load: 0.0,
            },
            None => {
                warnings.push(ProgramWarning::EmptyDrillCategory {
                    week,
                    day,
                    category,
                });
                Self::placeholder(role, category, intensity)
            }
        };
        self.load.refresh_block(&mut block);
        block
    }

    pub fn placeholder(
        role: BlockRole,
        category: DrillCategory,
        intensity: Intensity,
    ) -> SessionBlock {
        SessionBlock {
            role,
            category,
            intensity,
            duration_minutes: 0,
            content: BlockContent::Rest {
                reason: format!("no eligible {category} drill"),
            },
            load: 0.0,
        }
    }

    pub fn training_session(
        &self,
        week: u32,
        day: Weekday,
        focus: DrillCategory,
        focus_rank: u32,
        intensity: Intensity,
        warnings: &mut Vec<ProgramWarning>,
    ) -> Session {
        let blocks = vec![
            self.block(
                BlockRole::WarmUp,
                DrillCategory::Prehab,
                Intensity::Low,
                week,
                day,
                warnings,
            ),
            self.block(BlockRole::Main, focus, intensity, week, day, warnings),
        ];
        let mut session = Session {
            day,
            kind: SessionKind::Training,
            focus,
            focus_rank: Some(focus_rank),
            intensity,
            blocks,
            load: 0.0,
        };
        session.refresh_totals();
        session
    }

    pub fn recovery_session(
        &self,
        week: u32,
        day: Weekday,
        warnings: &mut Vec<ProgramWarning>,
    ) -> Session {
        let blocks = vec![
            self.block(
                BlockRole::Mobility,
                DrillCategory::Mobility,
                Intensity::Low,
                week,
                day,
                warnings,
            ),
            self.block(
                BlockRole::Recovery,
                DrillCategory::Recovery,
                Intensity::Low,
                week,
                day,
                warnings,
            ),
        ];
        let mut session = Session {
            day,
            kind: SessionKind::Recovery,
            focus: DrillCategory::Recovery,
            focus_rank: None,
            intensity: Intensity::Low,
            blocks,
            load: 0.0,
        };
        session.refresh_totals();
        session
    }
}
