//! CLI module for the users API
//!
//! Provides subcommands:
//! - `serve`: HTTP server, optionally seeding the database first
//! - `seed`: database seeder tool

pub mod seed;
pub mod serve;

use anyhow::Context;
use clap::{Parser, Subcommand};
use sqlx::PgPool;

use crate::config::AppConfig;
use crate::infrastructure::{logging, storage};

/// Users API - CRUD service for user records
#[derive(Debug, Parser)]
#[command(name = "users-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(serve::ServeArgs),

    /// Seed or roll back the database
    Seed(seed::SeedArgs),
}

/// Load `.env`, configuration and logging, then validate
pub(crate) fn load_config() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    logging::init_logging(&config.logging);

    config.validate().context("Invalid configuration")?;
    config.log_summary();

    Ok(config)
}

/// Connect to the database and bring the schema up to date
pub(crate) async fn open_database(config: &AppConfig) -> anyhow::Result<PgPool> {
    let pool = storage::connect(&config.database)
        .await
        .context("Failed to connect to database")?;

    storage::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    Ok(pool)
}
