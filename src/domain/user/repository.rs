//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{User, UserId};
use crate::domain::DomainError;

/// Repository trait for user storage
///
/// Lookup misses and zero-row updates/deletes are reported as
/// `DomainError::NotFound`; every other backend failure as `DomainError::Storage`.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Persist a new user, returning it with the store-assigned ID
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Get a user by ID
    async fn get_by_id(&self, id: UserId) -> Result<User, DomainError>;

    /// Get a user by email
    async fn get_by_email(&self, email: &str) -> Result<User, DomainError>;

    /// List all users
    async fn get_all(&self) -> Result<Vec<User>, DomainError>;

    /// Overwrite the stored name and email of an existing user
    async fn update(&self, user: &User) -> Result<(), DomainError>;

    /// Delete a user by ID
    async fn delete(&self, id: UserId) -> Result<(), DomainError>;

    /// Delete a user by email, returning whether a row was removed
    async fn delete_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Cheap round trip proving the store is reachable
    async fn ping(&self) -> Result<(), DomainError>;

    /// Check if an email is already taken
    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        match self.get_by_email(email).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// ID of a user that is about to be written back, or NotFound if it was never persisted
pub(crate) fn persisted_id(user: &User) -> Result<UserId, DomainError> {
    user.id()
        .ok_or_else(|| DomainError::not_found("User has not been persisted"))
}
