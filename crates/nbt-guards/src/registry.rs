use crate::check::NbtCheck;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Key-to-check table. Filled once at startup, then shared read-only.
#[derive(Clone, Default)]
pub struct CheckRegistry {
    checks: HashMap<String, Arc<dyn NbtCheck>>,
}

impl CheckRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps the check's name and every alias to it. A later registration
    /// under an already used key replaces the earlier one.
    pub fn register<C: NbtCheck + 'static>(&mut self, check: C) -> &mut Self {
        let check: Arc<dyn NbtCheck> = Arc::new(check);
        let name = check.name().to_string();
        let aliases: Vec<String> = check.aliases().iter().map(|a| a.to_string()).collect();
        for key in std::iter::once(name).chain(aliases) {
            if self.checks.contains_key(&key) {
                debug!(key = %key, "nbt check superseded by later registration");
            }
            self.checks.insert(key, Arc::clone(&check));
        }
        self
    }

    pub fn with<C: NbtCheck + 'static>(mut self, check: C) -> Self {
        self.register(check);
        self
    }

    pub fn lookup(&self, key: &str) -> Option<&dyn NbtCheck> {
        self.checks.get(key).map(|c| c.as_ref())
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.checks.keys().map(String::as_str)
    }
}

impl fmt::Debug for CheckRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.keys().collect();
        keys.sort_unstable();
        f.debug_struct("CheckRegistry").field("keys", &keys).finish()
    }
}
