// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, assessment builders, and database setup helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `pitchside`
//!
//! Fixtures use fixed timestamps so generated programs are comparable across
//! runs.

use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};
use pitchside::database::Database;
use pitchside::drills::BUILTIN_DRILLS;
use pitchside::models::{Assessment, Metric, Position};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed capture time on a day of March 2025
pub fn captured_on(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, 9, 30, 0).unwrap()
}

/// Assessment with every metric recorded at a typical U17 level
pub fn complete_assessment(player_id: &str, assessment_id: &str, day: u32) -> Assessment {
    Assessment::new(player_id, assessment_id, 16, Position::Midfielder, captured_on(day))
        .with_metric(Metric::Sprint30m, 4.6)
        .with_metric(Metric::EnduranceDistance, 1880.0)
        .with_metric(Metric::AerobicCapacity, 54.0)
        .with_metric(Metric::JumpHeight, 43.0)
        .with_metric(Metric::BodyFat, 12.5)
        .with_metric(Metric::BallControl, 3.0)
        .with_metric(Metric::PassingAccuracy, 71.0)
        .with_metric(Metric::DribblingSuccess, 62.0)
        .with_metric(Metric::ShootingAccuracy, 50.0)
        .with_metric(Metric::DefensiveDuelsWon, 57.0)
        .with_metric(Metric::GameIntelligence, 3.0)
        .with_metric(Metric::Positioning, 4.0)
        .with_metric(Metric::DecisionMaking, 3.0)
        .with_metric(Metric::Coachability, 4.0)
        .with_metric(Metric::MentalToughness, 3.0)
}

/// Assessment at the top of every scale
pub fn all_max_assessment(player_id: &str, assessment_id: &str) -> Assessment {
    let mut assessment = physically_untested_assessment(player_id, assessment_id);
    for (metric, value) in [
        (Metric::Sprint30m, 3.9),
        (Metric::EnduranceDistance, 2600.0),
        (Metric::AerobicCapacity, 62.0),
        (Metric::JumpHeight, 55.0),
        (Metric::BodyFat, 9.0),
    ] {
        assessment = assessment.with_metric(metric, value);
    }
    assessment
}

/// Perfect technical, tactical, and psychological ratings with no physical
/// tests, so speed, cardio, and gym rank first for planning
pub fn physically_untested_assessment(player_id: &str, assessment_id: &str) -> Assessment {
    Assessment::new(player_id, assessment_id, 16, Position::Forward, captured_on(3))
        .with_metric(Metric::BallControl, 5.0)
        .with_metric(Metric::PassingAccuracy, 100.0)
        .with_metric(Metric::DribblingSuccess, 100.0)
        .with_metric(Metric::ShootingAccuracy, 100.0)
        .with_metric(Metric::DefensiveDuelsWon, 100.0)
        .with_metric(Metric::GameIntelligence, 5.0)
        .with_metric(Metric::Positioning, 5.0)
        .with_metric(Metric::DecisionMaking, 5.0)
        .with_metric(Metric::Coachability, 5.0)
        .with_metric(Metric::MentalToughness, 5.0)
}

/// Fresh in-memory database with the schema applied
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::new("sqlite::memory:").await?)
}

/// In-memory database holding the built-in drill catalog
pub async fn create_seeded_database() -> Result<Database> {
    let database = create_test_database().await?;
    let manager = database.drills();
    for data in BUILTIN_DRILLS {
        manager.upsert_drill(&data.to_drill()).await?;
    }
    Ok(database)
}
