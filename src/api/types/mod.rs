//! Shared API types

pub mod error;
pub mod json;

pub use error::{ApiError, ErrorResponse};
pub use json::Json;
