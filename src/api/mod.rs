//! API layer - HTTP endpoints and middleware

pub mod health;
pub mod info;
pub mod middleware;
pub mod router;
pub mod state;
pub mod types;
pub mod users;

#[cfg(test)]
mod test_utils;

pub use router::create_router;
pub use state::{AppInfo, AppState};
