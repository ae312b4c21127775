//! Seed command - database seeder tool

use std::sync::Arc;

use anyhow::Context;
use clap::{Args, ValueEnum};
use thiserror::Error;

use crate::domain::SeedStore;
use crate::infrastructure::seed::{setup_seeders, SeederManager};
use crate::infrastructure::user::PostgresUserRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeedAction {
    /// Run all seeders, or only the one named by `--seeder`
    Seed,
    /// Roll back all seeders in reverse order
    Rollback,
    /// Print the registered seeders
    List,
}

/// Arguments for the seed command
#[derive(Debug, Args, Clone)]
#[command(after_help = "Examples:\n  \
    users-api seed --action seed\n  \
    users-api seed --action seed --seeder UserSeeder\n  \
    users-api seed --action rollback\n  \
    users-api seed --action list\n\n\
    Database settings come from the environment or a .env file.")]
pub struct SeedArgs {
    /// Action to perform
    #[arg(long, value_enum, default_value_t = SeedAction::Seed)]
    pub action: SeedAction,

    /// Specific seeder to run
    #[arg(long)]
    pub seeder: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedUsageError {
    #[error("Rollback of specific seeders is not supported yet")]
    NamedRollback,
}

impl SeedArgs {
    /// Reject combinations the seeder tool cannot honor
    pub fn check(&self) -> Result<(), SeedUsageError> {
        match (self.action, &self.seeder) {
            (SeedAction::Rollback, Some(_)) => Err(SeedUsageError::NamedRollback),
            _ => Ok(()),
        }
    }
}

/// Run the seeder tool
pub async fn run(args: SeedArgs) -> anyhow::Result<()> {
    args.check()?;

    let config = super::load_config()?;
    let pool = super::open_database(&config).await?;
    let repository = Arc::new(PostgresUserRepository::new(pool));
    let manager = setup_seeders(SeedStore::new(repository));

    execute(&args, &manager)
        .await
        .context("Seeder action failed")
}

async fn execute(args: &SeedArgs, manager: &SeederManager) -> anyhow::Result<()> {
    match (args.action, args.seeder.as_deref()) {
        (SeedAction::Seed, Some(name)) => manager.run_seeder(name).await?,
        (SeedAction::Seed, None) => manager.run_all().await?,
        (SeedAction::Rollback, Some(_)) => return Err(SeedUsageError::NamedRollback.into()),
        (SeedAction::Rollback, None) => manager.rollback_all().await?,
        (SeedAction::List, _) => print!("{}", format_seeder_list(&manager.list())),
    }

    Ok(())
}

fn format_seeder_list(names: &[&str]) -> String {
    let mut out = String::from("Available Seeders:\n");

    for (i, name) in names.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, name));
    }

    out
}
