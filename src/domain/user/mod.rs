//! User domain
//!
//! This module provides the user entity, its field validation, and the
//! repository trait implemented by the storage backends.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserId};
pub(crate) use repository::persisted_id;
pub use repository::UserRepository;
pub use validation::{validate_email, validate_name, UserValidationError};
