//! Infrastructure layer - storage, seeding and logging implementations

pub mod logging;
pub mod seed;
pub mod storage;
pub mod user;
