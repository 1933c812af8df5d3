// ABOUTME: Drill catalog seeding utility for Pitchside
// ABOUTME: Writes the built-in drills for all nine categories into the drills table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

//! Drill catalog seeder.
//!
//! Usage:
//! ```bash
//! # Seed drills (uses DATABASE_URL, RUST_LOG and LOG_FORMAT from environment)
//! cargo run --bin seed-drills
//!
//! # Override database URL
//! cargo run --bin seed-drills -- --database-url sqlite:./data/pitchside.db
//!
//! # Force re-seed (replaces existing drills)
//! cargo run --bin seed-drills -- --force -v
//! ```

use anyhow::Result;
use clap::Parser;
use pitchside::config::ServerConfig;
use pitchside::database::Database;
use pitchside::drills::BUILTIN_DRILLS;
use pitchside::logging::LoggingConfig;
use pitchside::models::DrillCategory;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "seed-drills",
    about = "Pitchside Drill Catalog Seeder",
    long_about = "Create the built-in technical, tactical, possession, speed, cardio, gym, mobility, recovery, and prehab drills"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Force re-seed even if drills already exist
    #[arg(long)]
    force: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let mut logging = LoggingConfig::from_env();
    if args.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    info!("=== Pitchside Drill Catalog Seeder ===");

    let config = ServerConfig::from_env()?;
    let database_url = args.database_url.unwrap_or(config.database_url);

    info!("Connecting to database: {}", database_url);
    let database = Database::new(&database_url).await?;
    let manager = database.drills();

    let existing = manager.count_drills(None).await?;
    if existing > 0 && !args.force {
        info!(
            "Drill catalog already seeded ({} drills). Use --force to re-seed.",
            existing
        );
        return Ok(());
    }

    if args.force && existing > 0 {
        let removed = manager.clear().await?;
        info!("Removed {} existing drills", removed);
    }

    info!("Seeding {} drills...", BUILTIN_DRILLS.len());
    for data in BUILTIN_DRILLS {
        manager.upsert_drill(&data.to_drill()).await?;
        debug!(drill_id = data.id, category = %data.category, "Seeded drill");
    }

    info!("");
    info!("=== Seeding Complete ===");
    for category in DrillCategory::ALL {
        let count = manager.count_drills(Some(category)).await?;
        info!("{:>14}: {} drills", category.as_str(), count);
    }

    Ok(())
}
