//! User entity and related types

use super::validation::{validate_email, validate_name, UserValidationError};

/// User identifier - assigned by the store, always positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a store-assigned identifier
    pub fn new(id: i64) -> Result<Self, UserValidationError> {
        if id <= 0 {
            return Err(UserValidationError::InvalidId(id.to_string()));
        }

        Ok(Self(id))
    }

    /// Parse an identifier from its textual form (e.g. a path segment)
    pub fn parse(value: &str) -> Result<Self, UserValidationError> {
        let id = value
            .trim()
            .parse::<i64>()
            .map_err(|_| UserValidationError::InvalidId(value.to_string()))?;

        Self::new(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User entity
///
/// `id` stays `None` until the repository persists the user. Only the
/// validating constructors build one, so name and email are never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: Option<UserId>,
    name: String,
    email: String,
}

impl User {
    /// Create a new, not yet persisted user
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let name = name.into();
        let email = email.into();

        validate_name(&name)?;
        validate_email(&email)?;

        Ok(Self {
            id: None,
            name,
            email,
        })
    }

    /// Rebuild a persisted user
    pub fn with_id(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let mut user = Self::new(name, email)?;
        user.id = Some(id);
        Ok(user)
    }

    // Getters

    pub fn id(&self) -> Option<UserId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    // Mutators

    /// Record the identity assigned by the store
    pub fn assign_id(&mut self, id: UserId) {
        self.id = Some(id);
    }

    /// Replace the name
    pub fn update_name(&mut self, name: impl Into<String>) -> Result<(), UserValidationError> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Replace the email
    pub fn update_email(&mut self, email: impl Into<String>) -> Result<(), UserValidationError> {
        let email = email.into();
        validate_email(&email)?;
        self.email = email;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new("John Doe", "john.doe@example.com").unwrap();

        assert_eq!(user.name(), "John Doe");
        assert_eq!(user.email(), "john.doe@example.com");
        assert!(user.id().is_none());
    }

    #[test]
    fn test_user_creation_rejects_empty_fields() {
        assert_eq!(
            User::new("", "x@example.com"),
            Err(UserValidationError::EmptyName)
        );
        assert_eq!(User::new("x", ""), Err(UserValidationError::EmptyEmail));
    }

    #[test]
    fn test_user_with_id() {
        let id = UserId::new(42).unwrap();
        let user = User::with_id(id, "Jane", "jane@example.com").unwrap();

        assert_eq!(user.id(), Some(id));
    }

    #[test]
    fn test_update_name() {
        let mut user = User::new("John", "john@example.com").unwrap();

        user.update_name("Johnny").unwrap();
        assert_eq!(user.name(), "Johnny");
    }

    #[test]
    fn test_update_rejects_empty_and_keeps_value() {
        let mut user = User::new("John", "john@example.com").unwrap();

        assert_eq!(user.update_name(""), Err(UserValidationError::EmptyName));
        assert_eq!(user.update_email(""), Err(UserValidationError::EmptyEmail));
        assert_eq!(user.name(), "John");
        assert_eq!(user.email(), "john@example.com");
    }

    #[test]
    fn test_user_id_rejects_non_positive() {
        assert!(UserId::new(0).is_err());
        assert!(UserId::new(-3).is_err());
        assert_eq!(UserId::new(1).unwrap().value(), 1);
    }

    #[test]
    fn test_user_id_parse() {
        assert_eq!(UserId::parse("17").unwrap().value(), 17);
        assert_eq!(
            UserId::parse("abc"),
            Err(UserValidationError::InvalidId("abc".to_string()))
        );
        assert!(UserId::parse("-1").is_err());
        assert!(UserId::parse("").is_err());
    }

    #[test]
    fn test_with_id_validates_fields() {
        let id = UserId::new(3).unwrap();

        assert_eq!(User::with_id(id, "", "a@x.com"), Err(UserValidationError::EmptyName));
        assert_eq!(User::with_id(id, "A", ""), Err(UserValidationError::EmptyEmail));

        let user = User::with_id(id, "A", "a@x.com").unwrap();
        assert_eq!(user.id(), Some(id));
    }
}
