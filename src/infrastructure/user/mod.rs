//! User infrastructure module
//!
//! This module provides the PostgreSQL and in-memory user repositories and
//! the user service that orchestrates the CRUD use cases on top of them.

mod postgres_repository;
mod repository;
mod service;

pub use postgres_repository::PostgresUserRepository;
pub use repository::InMemoryUserRepository;
pub use service::{CreateUserRequest, UpdateUserRequest, UserService};
