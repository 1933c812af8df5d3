// ABOUTME: Generation pipeline composing scoring, planning, governing, and persistence as typed stages
// ABOUTME: Bounds every dependency call and writes nothing until a governed program exists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

//! # Generation Pipeline
//!
//! validate → score → load drill catalog → load prior program → plan →
//! govern → persist. Each stage returns [`AppResult`]; the first failure
//! ends the run. The catalog read, the prior-program read, and the writes
//! go through [`call_with_retry`].

/// Timeout and retry policy for dependency calls
pub mod resilience;

pub use resilience::{call_with_retry, RetryPolicy};

use crate::config::ServerConfig;
use crate::constants::dependencies;
use crate::database::Database;
use crate::drills::{DrillLibrary, DrillLibraryProvider};
use crate::errors::{AppError, AppResult};
use crate::repositories::{ProgramRepository, SqliteProgramRepository, UpsertOutcome};
use pitchside_core::models::{
    Assessment, DrillCategory, DrillFilter, PlanningConstraints, ScoreResult, TrainingProgram,
};
use pitchside_intelligence::{
    scoring, DrillCatalog, GovernorContext, PlanningConfig, PlanningInput, ProgramPlanner,
    RuleBasedPlanner, SafetyGovernor,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// One program generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Source assessment
    pub assessment: Assessment,
    /// Player constraints
    pub constraints: PlanningConstraints,
}

impl GenerationRequest {
    /// Bundle an assessment with constraints
    #[must_use]
    pub const fn new(assessment: Assessment, constraints: PlanningConstraints) -> Self {
        Self {
            assessment,
            constraints,
        }
    }
}

/// Everything a successful run produced
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// Score of the source assessment
    pub score: ScoreResult,
    /// Governed, persisted program
    pub program: TrainingProgram,
    /// What the upsert did
    pub upsert: UpsertOutcome,
}

/// Assessment-to-program pipeline
pub struct GenerationPipeline {
    drills: Arc<dyn DrillLibraryProvider>,
    repository: Arc<dyn ProgramRepository>,
    planner: Arc<dyn ProgramPlanner>,
    governor: SafetyGovernor,
    config: PlanningConfig,
    retry: RetryPolicy,
}

impl GenerationPipeline {
    /// Pipeline with the rule-based planner and the global planning configuration
    #[must_use]
    pub fn new(
        drills: Arc<dyn DrillLibraryProvider>,
        repository: Arc<dyn ProgramRepository>,
    ) -> Self {
        let config = PlanningConfig::global().clone();
        Self {
            drills,
            repository,
            planner: Arc::new(RuleBasedPlanner::with_config(config.clone())),
            governor: SafetyGovernor::with_config(&config),
            config,
            retry: RetryPolicy::default(),
        }
    }

    /// Pipeline wired from service configuration
    ///
    /// The drill library follows `DRILL_SOURCE`, programs persist to
    /// `database`, and dependency calls use the configured timeout and
    /// backoff.
    #[must_use]
    pub fn from_config(config: &ServerConfig, database: &Database) -> Self {
        Self::new(
            Arc::new(DrillLibrary::from_config(config.drill_source, Some(database))),
            Arc::new(SqliteProgramRepository::new(database)),
        )
        .with_retry_policy(RetryPolicy::from_config(&config.dependency))
    }

    /// Connect to `DATABASE_URL` and build the pipeline from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated
    pub async fn connect(config: &ServerConfig) -> AppResult<(Self, Database)> {
        let database = Database::new(&config.database_url).await?;
        info!(config = %config.summary(), "Connected generation pipeline");
        Ok((Self::from_config(config, &database), database))
    }

    /// Use a different planner
    #[must_use]
    pub fn with_planner(mut self, planner: Arc<dyn ProgramPlanner>) -> Self {
        self.planner = planner;
        self
    }

    /// Use a different planning configuration
    ///
    /// Rebuilds the rule-based planner and the governor; call
    /// [`Self::with_planner`] afterwards to keep a custom planner.
    #[must_use]
    pub fn with_planning_config(mut self, config: PlanningConfig) -> Self {
        self.planner = Arc::new(RuleBasedPlanner::with_config(config.clone()));
        self.governor = SafetyGovernor::with_config(&config);
        self.config = config;
        self
    }

    /// Use a different dependency retry policy
    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Dependency retry policy in use
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Name of the drill source in use
    #[must_use]
    pub fn drill_source(&self) -> &'static str {
        self.drills.source_name()
    }

    /// Program repository the pipeline writes to
    #[must_use]
    pub fn repository(&self) -> &Arc<dyn ProgramRepository> {
        &self.repository
    }

    /// Run every stage for one request
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed input, or a
    /// `DependencyUnavailable` error when the drill library or repository
    /// keeps failing
    #[instrument(
        skip(self, request),
        fields(
            player_id = %request.assessment.player_id,
            assessment_id = %request.assessment.assessment_id,
            planner = self.planner.name(),
        )
    )]
    pub async fn generate(&self, request: GenerationRequest) -> AppResult<GenerationOutcome> {
        let GenerationRequest {
            assessment,
            constraints,
        } = request;

        Self::validate(&assessment, &constraints)?;
        let score = scoring::score(&assessment)?;
        let catalog = self.load_catalog().await?;
        let prior = self
            .load_prior(&assessment.player_id, &assessment.assessment_id)
            .await?;

        let draft = self.planner.plan(&PlanningInput {
            score: &score,
            assessment_captured_at: assessment.captured_at,
            constraints: &constraints,
            prior: prior.as_ref(),
            catalog: &catalog,
        })?;
        let program = self.govern(draft, &catalog);
        let upsert = self.persist(&score, &program).await?;

        info!(
            program_id = %program.id,
            revision = program.revision,
            weeks = program.duration_weeks,
            warnings = program.warnings.len(),
            status = ?upsert.status,
            is_current = upsert.is_current,
            "Generated training program"
        );

        Ok(GenerationOutcome {
            score,
            program,
            upsert,
        })
    }

    fn validate(assessment: &Assessment, constraints: &PlanningConstraints) -> AppResult<()> {
        scoring::validate_assessment(assessment)?;
        constraints
            .validate()
            .map_err(|e| AppError::from(e).with_player_id(&assessment.player_id))
    }

    /// Snapshot every category of the drill library
    async fn load_catalog(&self) -> AppResult<DrillCatalog> {
        let catalog = call_with_retry(dependencies::DRILL_LIBRARY, &self.retry, || async {
            let mut catalog = DrillCatalog::default();
            for category in DrillCategory::ALL {
                let drills = self
                    .drills
                    .list_drills(category, &DrillFilter::default())
                    .await?;
                catalog.insert_category(category, drills);
            }
            Ok(catalog)
        })
        .await?;

        debug!(
            source = self.drills.source_name(),
            drills = catalog.len(),
            "Loaded drill catalog"
        );
        Ok(catalog)
    }

    /// Program previously generated from the same assessment, else the
    /// player's current program
    async fn load_prior(
        &self,
        player_id: &str,
        assessment_id: &str,
    ) -> AppResult<Option<TrainingProgram>> {
        call_with_retry(
            dependencies::PROGRAM_REPOSITORY,
            &self.retry,
            || async {
                match self.repository.get_program(player_id, assessment_id).await? {
                    Some(program) => Ok(Some(program)),
                    None => self.repository.get_current_program(player_id).await,
                }
            },
        )
        .await
    }

    fn govern(&self, draft: TrainingProgram, catalog: &DrillCatalog) -> TrainingProgram {
        let health_flags = draft.health_flags.clone();
        let context = GovernorContext {
            catalog,
            health_flags: &health_flags,
            ceiling: self.config.ceilings.for_category(draft.age_category),
        };
        self.governor.validate(draft, &context)
    }

    async fn persist(
        &self,
        score: &ScoreResult,
        program: &TrainingProgram,
    ) -> AppResult<UpsertOutcome> {
        let upsert = call_with_retry(dependencies::PROGRAM_REPOSITORY, &self.retry, || {
            self.repository.upsert_program(program)
        })
        .await?;
        call_with_retry(dependencies::PROGRAM_REPOSITORY, &self.retry, || {
            self.repository.save_score_snapshot(score)
        })
        .await?;
        Ok(upsert)
    }
}
