mod charged_projectiles;

pub use charged_projectiles::{ChargedProjectiles, ChargedProjectilesComponent};

use crate::registry::CheckRegistry;

/// Registry with every built-in check, component-era checks first.
pub fn default_registry() -> CheckRegistry {
    CheckRegistry::new()
        .with(ChargedProjectilesComponent)
        .with(ChargedProjectiles)
}
