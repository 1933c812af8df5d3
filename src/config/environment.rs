// ABOUTME: Environment configuration for the generation service
// ABOUTME: Parses database location, drill source mode, and dependency call policy from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

use crate::constants::defaults;
use crate::logging::LoggingConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Where the drill library reads its catalog from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrillSourceMode {
    /// Database first, built-in catalog when the database errors or has no
    /// drills for a category
    #[default]
    Auto,
    /// Database only; failures surface to the caller
    Db,
    /// Built-in catalog only
    Static,
}

impl DrillSourceMode {
    /// Lowercase name as accepted by `DRILL_SOURCE`
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Db => "db",
            Self::Static => "static",
        }
    }
}

impl FromStr for DrillSourceMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "db" | "database" => Ok(Self::Db),
            "static" => Ok(Self::Static),
            other => Err(anyhow::anyhow!(
                "Invalid DRILL_SOURCE '{other}', expected auto, db or static"
            )),
        }
    }
}

impl fmt::Display for DrillSourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timeout and retry policy for drill library and repository calls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencyConfig {
    /// Timeout for one call in milliseconds
    pub timeout_ms: u64,
    /// Backoff before the retry in milliseconds
    pub retry_backoff_ms: u64,
}

impl Default for DependencyConfig {
    fn default() -> Self {
        Self {
            timeout_ms: defaults::DEPENDENCY_TIMEOUT_MS,
            retry_backoff_ms: defaults::DEPENDENCY_RETRY_BACKOFF_MS,
        }
    }
}

impl DependencyConfig {
    /// Timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Backoff as a `Duration`
    #[must_use]
    pub const fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }
}

/// Service configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `SQLite` connection string
    pub database_url: String,
    /// Drill catalog sourcing
    pub drill_source: DrillSourceMode,
    /// Dependency call policy
    pub dependency: DependencyConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if a
    /// timeout is zero
    pub fn from_env() -> Result<Self> {
        let config = Self {
            database_url: env_var_or("DATABASE_URL", defaults::DATABASE_URL),
            drill_source: env_var_or("DRILL_SOURCE", DrillSourceMode::Auto.as_str()).parse()?,
            dependency: DependencyConfig {
                timeout_ms: env_var_or(
                    "DEPENDENCY_TIMEOUT_MS",
                    &defaults::DEPENDENCY_TIMEOUT_MS.to_string(),
                )
                .parse()
                .context("Invalid DEPENDENCY_TIMEOUT_MS value")?,
                retry_backoff_ms: env_var_or(
                    "DEPENDENCY_RETRY_BACKOFF_MS",
                    &defaults::DEPENDENCY_RETRY_BACKOFF_MS.to_string(),
                )
                .parse()
                .context("Invalid DEPENDENCY_RETRY_BACKOFF_MS value")?,
            },
            logging: LoggingConfig::from_env(),
        };

        config.validate()?;
        info!(
            drill_source = %config.drill_source,
            timeout_ms = config.dependency.timeout_ms,
            retry_backoff_ms = config.dependency.retry_backoff_ms,
            "Loaded service configuration"
        );
        Ok(config)
    }

    /// Validate cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns an error when the database URL is empty or the timeout is zero
    pub fn validate(&self) -> Result<()> {
        if self.database_url.trim().is_empty() {
            anyhow::bail!("DATABASE_URL must not be empty");
        }
        if self.dependency.timeout_ms == 0 {
            anyhow::bail!("DEPENDENCY_TIMEOUT_MS must be greater than zero");
        }
        Ok(())
    }

    /// Summary safe to print at startup
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "database={} drill_source={} timeout={}ms backoff={}ms",
            self.database_url,
            self.drill_source,
            self.dependency.timeout_ms,
            self.dependency.retry_backoff_ms
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
