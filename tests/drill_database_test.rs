// ABOUTME: Unit tests for the drill database module and database-backed drill library
// ABOUTME: Tests upsert, lookup, filtered listing, counting, and fallback sourcing of drills
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

//! Drill Database Unit Tests
//!
//! Tests the `DrillManager` database operations:
//! - Upsert and lookup by id
//! - Category listing with duration and contraindication filters
//! - Counting and clearing
//! - `DrillLibrary` sourcing in each mode

#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{create_seeded_database, create_test_database};
use pitchside::config::DrillSourceMode;
use pitchside::drills::{
    DatabaseDrillLibrary, DrillLibrary, DrillLibraryProvider, StaticDrillLibrary, BUILTIN_DRILLS,
};
use pitchside::models::{Drill, DrillCategory, DrillFilter, Intensity};

fn custom_drill(id: &str, category: DrillCategory, minutes: u32) -> Drill {
    Drill {
        id: id.into(),
        name: "Club Drill".into(),
        category,
        description: "Club-specific drill".into(),
        duration_minutes: Some(minutes),
        sets: Some(3),
        reps: None,
        intensity: Some(Intensity::Medium),
        equipment: vec!["cones".into(), "bibs".into()],
        coaching_points: vec!["Scan before receiving".into()],
        contraindications: vec!["Concussion_Protocol".into()],
    }
}

// ============================================================================
// DrillManager
// ============================================================================

#[tokio::test]
async fn test_upsert_and_get_drill() {
    let database = create_test_database().await.unwrap();
    let manager = database.drills();
    let drill = custom_drill("club-rondo-5v2", DrillCategory::Possession, 18);

    manager.upsert_drill(&drill).await.unwrap();

    let stored = manager.get_drill("club-rondo-5v2").await.unwrap();
    assert_eq!(stored, Some(drill));
    assert!(manager.get_drill("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_out_of_range_stored_counts_are_rejected() {
    let database = create_test_database().await.unwrap();
    let manager = database.drills();
    manager
        .upsert_drill(&custom_drill("club-shuttles", DrillCategory::Cardio, 20))
        .await
        .unwrap();
    sqlx::query("UPDATE drills SET sets = -3 WHERE id = ?")
        .bind("club-shuttles")
        .execute(database.pool())
        .await
        .unwrap();

    let err = manager.get_drill("club-shuttles").await.unwrap_err();
    assert!(err.message.contains("sets"), "{}", err.message);

    sqlx::query("UPDATE drills SET sets = 3, duration_minutes = 5000000000 WHERE id = ?")
        .bind("club-shuttles")
        .execute(database.pool())
        .await
        .unwrap();
    let err = manager.get_drill("club-shuttles").await.unwrap_err();
    assert!(err.message.contains("duration_minutes"), "{}", err.message);
}

#[tokio::test]
async fn test_upsert_replaces_existing_drill() {
    let database = create_test_database().await.unwrap();
    let manager = database.drills();
    manager
        .upsert_drill(&custom_drill("club-sprints", DrillCategory::SpeedAgility, 15))
        .await
        .unwrap();

    let mut revised = custom_drill("club-sprints", DrillCategory::SpeedAgility, 12);
    revised.contraindications = vec!["hamstring_strain".into()];
    manager.upsert_drill(&revised).await.unwrap();

    assert_eq!(manager.count_drills(None).await.unwrap(), 1);
    let stored = manager.get_drill("club-sprints").await.unwrap().unwrap();
    assert_eq!(stored.duration_minutes, Some(12));
    assert_eq!(stored.contraindications, vec!["hamstring_strain".to_owned()]);
}

#[tokio::test]
async fn test_list_drills_sorted_and_filtered() {
    let database = create_seeded_database().await.unwrap();
    let manager = database.drills();

    let all = manager
        .list_drills(DrillCategory::SpeedAgility, &DrillFilter::default())
        .await
        .unwrap();
    let ids: Vec<&str> = all.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "speed-acceleration-starts",
            "speed-ladder-footwork",
            "speed-reactive-mirror"
        ]
    );

    let short = DrillFilter {
        max_duration_minutes: Some(10),
        ..DrillFilter::default()
    };
    let quick = manager
        .list_drills(DrillCategory::SpeedAgility, &short)
        .await
        .unwrap();
    assert_eq!(quick.len(), 1);
    assert_eq!(quick[0].id, "speed-reactive-mirror");

    let safe = manager
        .list_drills(
            DrillCategory::SpeedAgility,
            &DrillFilter::excluding(vec!["ANKLE_SPRAIN".into()]),
        )
        .await
        .unwrap();
    assert_eq!(safe.len(), 1);
    assert_eq!(safe[0].id, "speed-acceleration-starts");

    let limited = DrillFilter {
        limit: Some(2),
        ..DrillFilter::default()
    };
    assert_eq!(
        manager
            .list_drills(DrillCategory::Cardio, &limited)
            .await
            .unwrap()
            .len(),
        2
    );
}

#[tokio::test]
async fn test_count_and_clear() {
    let database = create_seeded_database().await.unwrap();
    let manager = database.drills();

    assert_eq!(
        manager.count_drills(None).await.unwrap(),
        BUILTIN_DRILLS.len() as u64
    );
    for category in DrillCategory::ALL {
        assert_eq!(manager.count_drills(Some(category)).await.unwrap(), 3);
    }

    let removed = manager.clear().await.unwrap();
    assert_eq!(removed, BUILTIN_DRILLS.len() as u64);
    assert_eq!(manager.count_drills(None).await.unwrap(), 0);
}

// ============================================================================
// Drill Library Modes
// ============================================================================

#[tokio::test]
async fn test_database_library_serves_seeded_drills() {
    let database = create_seeded_database().await.unwrap();
    let library = DatabaseDrillLibrary::new(&database);

    let drills = library
        .list_drills(DrillCategory::Prehab, &DrillFilter::default())
        .await
        .unwrap();
    assert_eq!(library.source_name(), "database");
    assert_eq!(drills.len(), 3);
    assert!(drills.windows(2).all(|w| w[0].id < w[1].id));
}

#[tokio::test]
async fn test_auto_mode_fills_empty_categories_from_builtin() {
    let database = create_test_database().await.unwrap();
    database
        .drills()
        .upsert_drill(&custom_drill("club-rondo-5v2", DrillCategory::Possession, 18))
        .await
        .unwrap();
    let library = DrillLibrary::new(
        DrillSourceMode::Auto,
        Some(Box::new(DatabaseDrillLibrary::new(&database))),
        StaticDrillLibrary::builtin(),
    );

    let possession = library
        .list_drills(DrillCategory::Possession, &DrillFilter::default())
        .await
        .unwrap();
    assert_eq!(possession.len(), 1);
    assert_eq!(possession[0].id, "club-rondo-5v2");

    let gym = library
        .list_drills(DrillCategory::Gym, &DrillFilter::default())
        .await
        .unwrap();
    assert_eq!(gym.len(), 3);
    assert!(gym.iter().all(|d| d.id.starts_with("gym-")));
}

#[tokio::test]
async fn test_db_mode_does_not_fall_back() {
    let database = create_test_database().await.unwrap();
    let library = DrillLibrary::new(
        DrillSourceMode::Db,
        Some(Box::new(DatabaseDrillLibrary::new(&database))),
        StaticDrillLibrary::builtin(),
    );

    let gym = library
        .list_drills(DrillCategory::Gym, &DrillFilter::default())
        .await
        .unwrap();
    assert!(gym.is_empty());
    assert_eq!(library.mode(), DrillSourceMode::Db);
}

#[tokio::test]
async fn test_db_mode_without_database_is_config_error() {
    let library = DrillLibrary::new(DrillSourceMode::Db, None, StaticDrillLibrary::builtin());
    let err = library
        .list_drills(DrillCategory::Gym, &DrillFilter::default())
        .await
        .unwrap_err();
    assert!(!err.is_validation());
    assert!(err.message.contains("DRILL_SOURCE"));
}
