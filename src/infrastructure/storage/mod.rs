//! Storage infrastructure - PostgreSQL pool and schema migrations

pub mod migrations;
mod pool;

pub use migrations::{run_migrations, schema_migrations, Migration, PostgresMigrator};
pub use pool::{connect, connect_options};
