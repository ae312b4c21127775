//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use crate::domain::user::{persisted_id, User, UserId, UserRepository};
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, User>,
    last_id: i64,
}

impl Table {
    fn email_taken(&self, email: &str, except: Option<i64>) -> bool {
        self.rows
            .iter()
            .any(|(id, u)| u.email() == email && Some(*id) != except)
    }
}

/// In-memory implementation of UserRepository
///
/// Mirrors the PostgreSQL table: sequential IDs and a unique email constraint.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<Table>>,
    should_fail: Arc<AtomicBool>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail with a storage error
    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn check_should_fail(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::storage("In-memory repository configured to fail"));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, mut user: User) -> Result<User, DomainError> {
        self.check_should_fail()?;
        let mut table = self.table.write().await;

        if table.email_taken(user.email(), None) {
            return Err(DomainError::already_exists(
                "User with this email already exists",
            ));
        }

        table.last_id += 1;
        let id = UserId::new(table.last_id)?;
        user.assign_id(id);
        table.rows.insert(id.value(), user.clone());

        Ok(user)
    }

    async fn get_by_id(&self, id: UserId) -> Result<User, DomainError> {
        self.check_should_fail()?;
        let table = self.table.read().await;

        table
            .rows
            .get(&id.value())
            .cloned()
            .ok_or_else(|| DomainError::not_found("User not found"))
    }

    async fn get_by_email(&self, email: &str) -> Result<User, DomainError> {
        self.check_should_fail()?;
        let table = self.table.read().await;

        table
            .rows
            .values()
            .find(|u| u.email() == email)
            .cloned()
            .ok_or_else(|| DomainError::not_found("User not found"))
    }

    async fn get_all(&self) -> Result<Vec<User>, DomainError> {
        self.check_should_fail()?;
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        self.check_should_fail()?;
        let id = persisted_id(user)?;
        let mut table = self.table.write().await;

        if !table.rows.contains_key(&id.value()) {
            return Err(DomainError::not_found("User not found"));
        }

        // Mirrors the unique index: a plain store failure, not a create conflict
        if table.email_taken(user.email(), Some(id.value())) {
            return Err(DomainError::storage(
                "duplicate key value violates unique constraint \"idx_users_email\"",
            ));
        }

        table.rows.insert(id.value(), user.clone());
        Ok(())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.check_should_fail()
    }

    async fn delete(&self, id: UserId) -> Result<(), DomainError> {
        self.check_should_fail()?;
        let mut table = self.table.write().await;

        match table.rows.remove(&id.value()) {
            Some(_) => Ok(()),
            None => Err(DomainError::not_found("User not found")),
        }
    }

    async fn delete_by_email(&self, email: &str) -> Result<bool, DomainError> {
        self.check_should_fail()?;
        let mut table = self.table.write().await;
        let before = table.rows.len();

        table.rows.retain(|_, u| u.email() != email);

        Ok(table.rows.len() < before)
    }
}
