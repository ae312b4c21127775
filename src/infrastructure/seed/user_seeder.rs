//! Seeder for the fixed set of demo users

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::seed::{SeedStore, Seeder};
use crate::domain::user::User;
use crate::domain::DomainError;

/// (name, email) pairs inserted by [`UserSeeder`]
pub const SEED_USERS: [(&str, &str); 10] = [
    ("John Doe", "john.doe@example.com"),
    ("Jane Smith", "jane.smith@example.com"),
    ("Bob Johnson", "bob.johnson@example.com"),
    ("Alice Brown", "alice.brown@example.com"),
    ("Charlie Wilson", "charlie.wilson@example.com"),
    ("Diana Martinez", "diana.martinez@example.com"),
    ("Eve Davis", "eve.davis@example.com"),
    ("Frank Miller", "frank.miller@example.com"),
    ("Grace Lee", "grace.lee@example.com"),
    ("Henry Taylor", "henry.taylor@example.com"),
];

#[derive(Debug, Default)]
pub struct UserSeeder;

impl UserSeeder {
    pub const NAME: &'static str = "UserSeeder";

    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Seeder for UserSeeder {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn run(&self, store: &SeedStore) -> Result<(), DomainError> {
        for (name, email) in SEED_USERS {
            match store.users.get_by_email(email).await {
                Ok(_) => {
                    info!(email, "User already exists, skipping");
                    continue;
                }
                Err(e) if e.is_not_found() => {}
                Err(e) => {
                    return Err(DomainError::storage(format!(
                        "error checking existing user {}: {}",
                        email, e
                    )));
                }
            }

            let user = User::new(name, email)?;
            store.users.create(user).await.map_err(|e| {
                DomainError::storage(format!("failed to create user {}: {}", email, e))
            })?;

            info!(name, email, "Created user");
        }

        Ok(())
    }

    async fn rollback(&self, store: &SeedStore) -> Result<(), DomainError> {
        for (_, email) in SEED_USERS {
            let deleted = store.users.delete_by_email(email).await.map_err(|e| {
                DomainError::storage(format!("failed to delete user {}: {}", email, e))
            })?;

            if deleted {
                info!(email, "Deleted user");
            } else {
                debug!(email, "User already absent");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::domain::user::UserRepository;
    use crate::infrastructure::user::InMemoryUserRepository;

    fn setup() -> (SeedStore, Arc<InMemoryUserRepository>) {
        let repository = Arc::new(InMemoryUserRepository::new());
        (SeedStore::new(repository.clone()), repository)
    }

    #[tokio::test]
    async fn test_run_inserts_all_users() {
        let (store, repository) = setup();

        UserSeeder::new().run(&store).await.unwrap();

        let users = repository.get_all().await.unwrap();
        assert_eq!(users.len(), 10);
        for (name, email) in SEED_USERS {
            let user = repository.get_by_email(email).await.unwrap();
            assert_eq!(user.name(), name);
        }
    }

    #[tokio::test]
    async fn test_run_is_idempotent() {
        let (store, repository) = setup();
        let seeder = UserSeeder::new();

        seeder.run(&store).await.unwrap();
        seeder.run(&store).await.unwrap();

        let users = repository.get_all().await.unwrap();
        assert_eq!(users.len(), 10);
        for (_, email) in SEED_USERS {
            assert_eq!(users.iter().filter(|u| u.email() == email).count(), 1);
        }
    }

    #[tokio::test]
    async fn test_run_skips_existing_user_with_different_name() {
        let (store, repository) = setup();
        repository
            .create(User::new("Johnny", "john.doe@example.com").unwrap())
            .await
            .unwrap();

        UserSeeder::new().run(&store).await.unwrap();

        assert_eq!(repository.len().await, 10);
        let john = repository.get_by_email("john.doe@example.com").await.unwrap();
        assert_eq!(john.name(), "Johnny");
    }

    #[tokio::test]
    async fn test_rollback_removes_only_seeded_users() {
        let (store, repository) = setup();
        let seeder = UserSeeder::new();
        repository
            .create(User::new("Keep", "keep@example.com").unwrap())
            .await
            .unwrap();

        seeder.run(&store).await.unwrap();
        seeder.rollback(&store).await.unwrap();

        let users = repository.get_all().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email(), "keep@example.com");
    }

    #[tokio::test]
    async fn test_rollback_without_seeded_data() {
        let (store, repository) = setup();

        UserSeeder::new().rollback(&store).await.unwrap();

        assert!(repository.is_empty().await);
    }

    #[tokio::test]
    async fn test_run_reports_storage_failure_with_email() {
        let (store, repository) = setup();
        repository.set_should_fail(true);

        let err = UserSeeder::new().run(&store).await.unwrap_err();

        assert!(matches!(err, DomainError::Storage { .. }));
        assert!(err.to_string().contains("john.doe@example.com"));
    }
}
