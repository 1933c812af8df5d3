// ABOUTME: Safety governor enforcing weekly load ceilings, rest minimums, and contraindications
// ABOUTME: Consumes a draft program and returns a governed program with recorded adjustments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

//! Safety governor.
//!
//! Rules run per week in a fixed order: contraindication screening, rest
//! minimum, then load ceiling. Every loop strictly lowers an intensity or a
//! duration, so the pass always terminates. Sessions and categories are
//! never removed; when the ceiling cannot be met the week keeps its reduced
//! load and a `LoadCeilingUnreachable` warning is recorded.

use pitchside_core::models::{
    BlockContent, DrillAssignment, Intensity, Microcycle, ProgramWarning, Session, SessionKind,
    TrainingProgram,
};
use std::cmp::Reverse;
use tracing::{debug, warn};

use crate::catalog::DrillCatalog;
use crate::config::{LoadConfig, PlanningConfig};
use crate::load::LoadModel;
use crate::sessions::SessionBuilder;

/// Inputs the governor checks a program against
#[derive(Debug, Clone, Copy)]
pub struct GovernorContext<'a> {
    /// Catalog snapshot the draft was planned from
    pub catalog: &'a DrillCatalog,
    /// Player health flags
    pub health_flags: &'a [String],
    /// Weekly load ceiling for the player's age category
    pub ceiling: f64,
}

/// Rule pass applied to every draft before it is persisted
#[derive(Debug, Clone)]
pub struct SafetyGovernor {
    config: LoadConfig,
    load: LoadModel,
}

impl Default for SafetyGovernor {
    fn default() -> Self {
        Self::new()
    }
}

impl SafetyGovernor {
    /// Create a governor using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(PlanningConfig::global())
    }

    /// Create with custom configuration
    #[must_use]
    pub fn with_config(config: &PlanningConfig) -> Self {
        Self {
            config: config.load.clone(),
            load: LoadModel::new(&config.load),
        }
    }

    /// Enforce every rule and return the governed program
    #[must_use]
    pub fn validate(
        &self,
        draft: TrainingProgram,
        context: &GovernorContext<'_>,
    ) -> TrainingProgram {
        let mut program = draft;
        let mut warnings = Vec::new();

        for week in &mut program.microcycles {
            self.screen_contraindications(week, context, &mut warnings);
            self.enforce_rest_minimum(week, context, &mut warnings);
            self.enforce_load_ceiling(week, context.ceiling, &mut warnings);
        }

        if !warnings.is_empty() {
            debug!(
                player_id = %program.player_id,
                adjustments = warnings.len(),
                "Governor adjusted program"
            );
        }
        program.warnings.extend(warnings);
        program
    }

    fn screen_contraindications(
        &self,
        week: &mut Microcycle,
        context: &GovernorContext<'_>,
        warnings: &mut Vec<ProgramWarning>,
    ) {
        let week_number = week.week;
        for session in week.sessions_mut() {
            let day = session.day;
            for block in &mut session.blocks {
                let Some(drill_id) = block.drill_id() else {
                    continue;
                };
                // Drills outside the snapshot cannot be screened and are replaced too
                let known = context.catalog.get(drill_id);
                if known.is_some_and(|drill| !drill.conflicts_with(context.health_flags)) {
                    continue;
                }
                let removed = drill_id.to_owned();
                let replacement = context.catalog.first_safe(block.category, context.health_flags);
                let replacement_id = replacement.map(|d| d.id.clone());
                match replacement {
                    Some(safe) => {
                        block.content = BlockContent::Drill(DrillAssignment::from(safe));
                        block.duration_minutes = safe
                            .duration_minutes
                            .unwrap_or(self.config.default_block_minutes);
                    }
                    None => {
                        *block = SessionBuilder::placeholder(
                            block.role,
                            block.category,
                            block.intensity,
                        );
                    }
                }
                warn!(
                    week = week_number,
                    day = %day,
                    drill_id = %removed,
                    in_catalog = known.is_some(),
                    replacement = ?replacement_id,
                    "Replaced contraindicated drill"
                );
                warnings.push(ProgramWarning::ContraindicatedDrillReplaced {
                    week: week_number,
                    day,
                    drill_id: removed,
                    replacement: replacement_id,
                });
            }
            self.load.refresh_session(session);
        }
        week.refresh_load();
    }

    fn enforce_rest_minimum(
        &self,
        week: &mut Microcycle,
        context: &GovernorContext<'_>,
        warnings: &mut Vec<ProgramWarning>,
    ) {
        if week.has_restorative_day() {
            return;
        }
        let week_number = week.week;

        if let Some(day) = week.first_free_day() {
            let builder = SessionBuilder {
                catalog: context.catalog,
                health_flags: context.health_flags,
                load: &self.load,
                default_block_minutes: self.config.default_block_minutes,
            };
            let session = builder.recovery_session(week_number, day, warnings);
            week.schedule(session);
            warnings.push(ProgramWarning::RecoveryDayInserted {
                week: week_number,
                day,
            });
        } else if let Some(session) = reduction_order(week)
            .first()
            .and_then(|index| week.days[*index].as_mut())
        {
            let day = session.day;
            for block in &mut session.blocks {
                block.intensity = Intensity::Low;
            }
            self.load.refresh_session(session);
            warnings.push(ProgramWarning::SessionDowngraded {
                week: week_number,
                day,
            });
        }
        week.refresh_load();
    }

    fn enforce_load_ceiling(
        &self,
        week: &mut Microcycle,
        ceiling: f64,
        warnings: &mut Vec<ProgramWarning>,
    ) {
        week.refresh_load();
        let original = week.load;
        if original <= ceiling {
            return;
        }

        // Intensity first: High -> Medium across sessions, then Medium -> Low
        let order = reduction_order(week);
        'intensity: for from in [Intensity::High, Intensity::Medium] {
            for index in &order {
                let Some(session) = week.days[*index].as_mut() else {
                    continue;
                };
                if self.lower_session(session, from) {
                    week.refresh_load();
                    if week.load <= ceiling {
                        break 'intensity;
                    }
                }
            }
        }

        // Then durations, one trim step per session per round
        while week.load > ceiling {
            let mut trimmed_any = false;
            for index in &order {
                let Some(session) = week.days[*index].as_mut() else {
                    continue;
                };
                if self.trim_session(session) {
                    trimmed_any = true;
                    week.refresh_load();
                    if week.load <= ceiling {
                        break;
                    }
                }
            }
            if !trimmed_any {
                break;
            }
        }

        warnings.push(ProgramWarning::LoadReduced {
            week: week.week,
            from: original,
            to: week.load,
        });

        if week.load > ceiling {
            warn!(
                week = week.week,
                load = week.load,
                ceiling,
                "Weekly load ceiling unreachable"
            );
            warnings.push(ProgramWarning::LoadCeilingUnreachable {
                week: week.week,
                load: week.load,
                ceiling,
            });
        }
    }

    /// Lower every block at `from` by one step; returns whether anything changed
    fn lower_session(&self, session: &mut Session, from: Intensity) -> bool {
        let Some(lower) = from.lowered() else {
            return false;
        };
        let mut changed = false;
        for block in &mut session.blocks {
            if block.intensity == from {
                block.intensity = lower;
                changed = true;
            }
        }
        if changed {
            self.load.refresh_session(session);
        }
        changed
    }

    /// Shorten every trimmable block once; returns whether anything changed
    // Durations are small positive minute counts
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn trim_session(&self, session: &mut Session) -> bool {
        let floor = self.config.min_block_minutes;
        let keep = 1.0 - self.config.trim_fraction;
        let mut changed = false;
        for block in &mut session.blocks {
            if block.is_placeholder() || block.duration_minutes <= floor {
                continue;
            }
            let current = block.duration_minutes;
            let target = (f64::from(current) * keep).round() as u32;
            block.duration_minutes = target.clamp(floor, current - 1);
            changed = true;
        }
        if changed {
            self.load.refresh_session(session);
        }
        changed
    }
}

/// Day indices in reduction order: training sessions from the lowest-ranked
/// focus (latest day breaking ties), then recovery sessions
fn reduction_order(week: &Microcycle) -> Vec<usize> {
    let mut sessions: Vec<&Session> = week.sessions().collect();
    sessions.sort_by_key(|s| {
        (
            s.kind == SessionKind::Recovery,
            Reverse(s.focus_rank),
            Reverse(s.day),
        )
    });
    sessions.into_iter().map(|s| s.day.index()).collect()
}
