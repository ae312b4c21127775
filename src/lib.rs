//! Users API
//!
//! A CRUD service over user records backed by PostgreSQL, plus a seeder
//! tool that populates and rolls back sample data.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
