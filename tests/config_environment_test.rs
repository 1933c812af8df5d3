// ABOUTME: Unit tests for service configuration loaded from the environment
// ABOUTME: Validates drill source parsing, dependency policy, defaults, and error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pitchside::config::{DependencyConfig, DrillSourceMode, ServerConfig};
use pitchside::constants::defaults;
use pitchside::logging::{LogFormat, LoggingConfig};
use pitchside::pipeline::RetryPolicy;
use serial_test::serial;
use std::env;
use std::time::Duration;

const SERVICE_VARS: [&str; 5] = [
    "DATABASE_URL",
    "DRILL_SOURCE",
    "DEPENDENCY_TIMEOUT_MS",
    "DEPENDENCY_RETRY_BACKOFF_MS",
    "LOG_FORMAT",
];

fn clear_service_env() {
    for var in SERVICE_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_drill_source_mode_parsing() {
    assert_eq!("auto".parse::<DrillSourceMode>().unwrap(), DrillSourceMode::Auto);
    assert_eq!("DB".parse::<DrillSourceMode>().unwrap(), DrillSourceMode::Db);
    assert_eq!(
        "database".parse::<DrillSourceMode>().unwrap(),
        DrillSourceMode::Db
    );
    assert_eq!(
        " Static ".parse::<DrillSourceMode>().unwrap(),
        DrillSourceMode::Static
    );
    assert!("redis".parse::<DrillSourceMode>().is_err());
    assert_eq!(DrillSourceMode::default(), DrillSourceMode::Auto);
    assert_eq!(DrillSourceMode::Db.to_string(), "db");
}

#[test]
fn test_dependency_config_durations() {
    let config = DependencyConfig {
        timeout_ms: 1500,
        retry_backoff_ms: 50,
    };
    assert_eq!(config.timeout(), Duration::from_millis(1500));
    assert_eq!(config.retry_backoff(), Duration::from_millis(50));

    let policy = RetryPolicy::from_config(&config);
    assert_eq!(policy.timeout, Duration::from_millis(1500));
    assert_eq!(policy.backoff, Duration::from_millis(50));
    assert_eq!(policy.max_attempts, defaults::DEPENDENCY_MAX_ATTEMPTS);
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::parse("json"), LogFormat::Json);
    assert_eq!(LogFormat::parse("COMPACT"), LogFormat::Compact);
    assert_eq!(LogFormat::parse("anything"), LogFormat::Pretty);
}

#[test]
#[serial]
fn test_server_config_defaults() {
    clear_service_env();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.database_url, defaults::DATABASE_URL);
    assert_eq!(config.drill_source, DrillSourceMode::Auto);
    assert_eq!(config.dependency.timeout_ms, defaults::DEPENDENCY_TIMEOUT_MS);
    assert_eq!(
        config.dependency.retry_backoff_ms,
        defaults::DEPENDENCY_RETRY_BACKOFF_MS
    );
    assert!(config.summary().contains("drill_source=auto"));
}

#[test]
#[serial]
fn test_server_config_reads_overrides() {
    clear_service_env();
    env::set_var("DATABASE_URL", "sqlite:/tmp/pitchside-test.db");
    env::set_var("DRILL_SOURCE", "static");
    env::set_var("DEPENDENCY_TIMEOUT_MS", "750");
    env::set_var("DEPENDENCY_RETRY_BACKOFF_MS", "25");
    env::set_var("LOG_FORMAT", "json");

    let config = ServerConfig::from_env();
    clear_service_env();
    let config = config.unwrap();

    assert_eq!(config.database_url, "sqlite:/tmp/pitchside-test.db");
    assert_eq!(config.drill_source, DrillSourceMode::Static);
    assert_eq!(config.dependency.timeout(), Duration::from_millis(750));
    assert_eq!(config.dependency.retry_backoff(), Duration::from_millis(25));
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
#[serial]
fn test_server_config_rejects_invalid_values() {
    clear_service_env();
    env::set_var("DRILL_SOURCE", "cloud");
    assert!(ServerConfig::from_env().is_err());

    clear_service_env();
    env::set_var("DEPENDENCY_TIMEOUT_MS", "soon");
    let err = ServerConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("DEPENDENCY_TIMEOUT_MS"));

    clear_service_env();
    env::set_var("DEPENDENCY_TIMEOUT_MS", "0");
    assert!(ServerConfig::from_env().is_err());

    clear_service_env();
}

#[test]
fn test_validate_rejects_blank_database_url() {
    let config = ServerConfig {
        database_url: "   ".into(),
        drill_source: DrillSourceMode::Static,
        dependency: DependencyConfig::default(),
        logging: LoggingConfig::default(),
    };
    assert!(config.validate().is_err());
}
