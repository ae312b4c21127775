//! Seeder manager - ordered execution of registered seeders

use tracing::info;

use crate::domain::seed::{SeedStore, Seeder, SeederError};

/// Runs seeders in registration order and rolls them back in reverse
///
/// Execution stops at the first failure; earlier seeders are not undone.
#[derive(Debug)]
pub struct SeederManager {
    store: SeedStore,
    seeders: Vec<Box<dyn Seeder>>,
}

impl SeederManager {
    pub fn new(store: SeedStore) -> Self {
        Self {
            store,
            seeders: Vec::new(),
        }
    }

    /// Append a seeder; callers are responsible for dependency order
    pub fn register(&mut self, seeder: impl Seeder + 'static) {
        self.seeders.push(Box::new(seeder));
    }

    pub async fn run_all(&self) -> Result<(), SeederError> {
        info!("Starting database seeding...");

        for seeder in &self.seeders {
            self.run(seeder.as_ref()).await?;
        }

        info!("Database seeding completed successfully");
        Ok(())
    }

    pub async fn rollback_all(&self) -> Result<(), SeederError> {
        info!("Starting database seeding rollback...");

        for seeder in self.seeders.iter().rev() {
            info!(seeder = seeder.name(), "Rolling back seeder");

            seeder
                .rollback(&self.store)
                .await
                .map_err(|source| SeederError::Rollback {
                    name: seeder.name().to_string(),
                    source,
                })?;

            info!(seeder = seeder.name(), "Completed rollback");
        }

        info!("Database seeding rollback completed successfully");
        Ok(())
    }

    /// Run a single seeder by name
    pub async fn run_seeder(&self, name: &str) -> Result<(), SeederError> {
        let seeder = self
            .seeders
            .iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| SeederError::NotFound(name.to_string()))?;

        self.run(seeder.as_ref()).await
    }

    /// Seeder names in registration order
    pub fn list(&self) -> Vec<&str> {
        self.seeders.iter().map(|s| s.name()).collect()
    }

    async fn run(&self, seeder: &dyn Seeder) -> Result<(), SeederError> {
        info!(seeder = seeder.name(), "Running seeder");

        seeder
            .run(&self.store)
            .await
            .map_err(|source| SeederError::Run {
                name: seeder.name().to_string(),
                source,
            })?;

        info!(seeder = seeder.name(), "Completed seeder");
        Ok(())
    }
}
