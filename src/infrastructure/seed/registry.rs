//! Registration of the built-in seeders

use super::manager::SeederManager;
use super::user_seeder::UserSeeder;
use crate::domain::seed::SeedStore;

/// Register all seeders in dependency order
///
/// New seeders go here, after the seeders whose data they depend on.
pub fn register_all_seeders(manager: &mut SeederManager) {
    manager.register(UserSeeder::new());
}

/// Create a manager with every built-in seeder registered
pub fn setup_seeders(store: SeedStore) -> SeederManager {
    let mut manager = SeederManager::new(store);
    register_all_seeders(&mut manager);
    manager
}
