//! Application state for shared services

use std::sync::Arc;

use crate::config::AppSettings;
use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::user::{CreateUserRequest, UpdateUserRequest, UserService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub info: Arc<AppInfo>,
}

impl AppState {
    /// Build the state around any user repository
    pub fn new<R: UserRepository + 'static>(repository: Arc<R>, info: AppInfo) -> Self {
        Self {
            user_service: Arc::new(UserService::new(repository)),
            info: Arc::new(info),
        }
    }
}

/// Informational values shown by the root endpoint
#[derive(Debug, Clone)]
pub struct AppInfo {
    pub environment: String,
    pub test_message: Option<String>,
    pub version: String,
}

impl AppInfo {
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self {
            environment: settings.environment.clone(),
            test_message: Some(settings.test_message.clone()).filter(|m| !m.is_empty()),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError>;
    async fn get(&self, id: UserId) -> Result<User, DomainError>;
    async fn list(&self) -> Result<Vec<User>, DomainError>;
    async fn update(&self, id: UserId, request: UpdateUserRequest) -> Result<User, DomainError>;
    async fn delete(&self, id: UserId) -> Result<(), DomainError>;
    async fn ping(&self) -> Result<(), DomainError>;
}

#[async_trait::async_trait]
impl<R: UserRepository + 'static> UserServiceTrait for UserService<R> {
    async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        UserService::create(self, request).await
    }

    async fn get(&self, id: UserId) -> Result<User, DomainError> {
        UserService::get(self, id).await
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        UserService::list(self).await
    }

    async fn update(&self, id: UserId, request: UpdateUserRequest) -> Result<User, DomainError> {
        UserService::update(self, id, request).await
    }

    async fn delete(&self, id: UserId) -> Result<(), DomainError> {
        UserService::delete(self, id).await
    }

    async fn ping(&self) -> Result<(), DomainError> {
        UserService::ping(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_info_from_settings() {
        let settings = AppSettings {
            test_message: "hi".to_string(),
            environment: "staging".to_string(),
        };

        let info = AppInfo::from_settings(&settings);
        assert_eq!(info.environment, "staging");
        assert_eq!(info.test_message.as_deref(), Some("hi"));
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_app_info_without_test_message() {
        let info = AppInfo::from_settings(&AppSettings::default());
        assert!(info.test_message.is_none());
    }
}
