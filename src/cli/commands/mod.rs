pub mod config;
pub mod item;
pub mod system;

use crate::cli::registry::CommandRegistry;

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    for entry in item::definitions() {
        registry.register(entry);
    }
    for entry in config::definitions() {
        registry.register(entry);
    }
    for entry in system::definitions() {
        registry.register(entry);
    }
}
