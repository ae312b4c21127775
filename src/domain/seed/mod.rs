//! Seed domain
//!
//! A seeder is a named, idempotent unit of initial data with a matching
//! rollback. Seeders write through the repositories bundled in [`SeedStore`].

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::user::UserRepository;
use crate::domain::DomainError;

/// Repositories available to seeders
#[derive(Debug, Clone)]
pub struct SeedStore {
    pub users: Arc<dyn UserRepository>,
}

impl SeedStore {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

/// A single seed step
#[async_trait]
pub trait Seeder: Send + Sync + Debug {
    /// Unique name used for lookup and logging
    fn name(&self) -> &str;

    /// Populate data; running twice must not duplicate anything
    async fn run(&self, store: &SeedStore) -> Result<(), DomainError>;

    /// Remove the data `run` inserted; missing rows are not an error
    async fn rollback(&self, store: &SeedStore) -> Result<(), DomainError>;
}

/// Errors surfaced by the seeder manager
#[derive(Debug, Error)]
pub enum SeederError {
    #[error("failed to run seeder {name}: {source}")]
    Run {
        name: String,
        #[source]
        source: DomainError,
    },

    #[error("failed to rollback seeder {name}: {source}")]
    Rollback {
        name: String,
        #[source]
        source: DomainError,
    },

    #[error("seeder {0} not found")]
    NotFound(String),
}
