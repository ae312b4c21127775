//! User service - create/read/update/delete use cases

use std::sync::Arc;

use tracing::debug;

use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

/// Request for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

/// Request for updating a user
///
/// An empty field means "leave unchanged", so a field can never be cleared.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
}

/// User service for the CRUD use cases
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a new user
    ///
    /// The email check runs before the insert without a transaction, so two
    /// concurrent creates can both pass it; the store's unique index decides.
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        if self.repository.email_exists(&request.email).await? {
            return Err(DomainError::already_exists(
                "User with this email already exists",
            ));
        }

        let user = User::new(request.name, request.email)?;
        let user = self.repository.create(user).await?;

        debug!(user_id = ?user.id(), "Created user");
        Ok(user)
    }

    /// Get a user by ID
    pub async fn get(&self, id: UserId) -> Result<User, DomainError> {
        self.repository.get_by_id(id).await
    }

    /// List all users
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.repository.get_all().await
    }

    /// Update a user's name and/or email
    pub async fn update(&self, id: UserId, request: UpdateUserRequest) -> Result<User, DomainError> {
        let mut user = self.repository.get_by_id(id).await?;

        if !request.name.is_empty() {
            user.update_name(request.name)?;
        }

        if !request.email.is_empty() {
            user.update_email(request.email)?;
        }

        self.repository.update(&user).await?;
        Ok(user)
    }

    /// Check that the backing store answers
    pub async fn ping(&self) -> Result<(), DomainError> {
        self.repository.ping().await
    }

    /// Delete a user
    pub async fn delete(&self, id: UserId) -> Result<(), DomainError> {
        self.repository.get_by_id(id).await?;
        self.repository.delete(id).await
    }
}
