//! Database seeding
//!
//! Seeders are registered explicitly, in dependency order, by [`register_all_seeders`].

mod manager;
mod registry;
mod user_seeder;

pub use manager::SeederManager;
pub use registry::{register_all_seeders, setup_seeders};
pub use user_seeder::{UserSeeder, SEED_USERS};
