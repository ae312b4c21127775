//! Domain layer - Core business entities and ports

pub mod error;
pub mod seed;
pub mod user;

pub use error::DomainError;
pub use seed::{SeedStore, Seeder, SeederError};
pub use user::{User, UserId, UserRepository, UserValidationError};
