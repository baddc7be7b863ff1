use crate::verdict::Strictness;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;

/// Vanilla NBT nesting limit; deeper trees are rejected outright.
pub const MAX_NESTING_DEPTH: usize = 512;
pub const DEFAULT_MAX_NON_MINECRAFT_KEYS: usize = 16;

/// Settings the guards read on every call.
pub trait ValidationConfig {
    fn strictness(&self) -> Strictness;

    /// Upper bound on non-whitelisted keys summed over the whole tree.
    fn max_non_minecraft_keys(&self) -> usize;

    /// Whitelisted keys are neither counted nor dispatched to checks.
    fn is_whitelisted(&self, key: &str) -> bool;

    fn max_nesting_depth(&self) -> usize {
        MAX_NESTING_DEPTH
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid guard config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("max_nesting_depth must be greater than zero")]
    ZeroNestingDepth,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GuardConfig {
    pub strictness: Strictness,
    pub max_non_minecraft_keys: usize,
    pub nbt_whitelist: BTreeSet<String>,
    pub max_nesting_depth: usize,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            strictness: Strictness::default(),
            max_non_minecraft_keys: DEFAULT_MAX_NON_MINECRAFT_KEYS,
            nbt_whitelist: BTreeSet::new(),
            max_nesting_depth: MAX_NESTING_DEPTH,
        }
    }
}

impl GuardConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let cfg: GuardConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_nesting_depth == 0 {
            return Err(ConfigError::ZeroNestingDepth);
        }
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading guard config {}", path.display()))?;
        let cfg = Self::from_json_str(&raw)
            .with_context(|| format!("parsing guard config {}", path.display()))?;
        Ok(cfg)
    }

    pub fn whitelist<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nbt_whitelist.extend(keys.into_iter().map(Into::into));
        self
    }
}

impl ValidationConfig for GuardConfig {
    fn strictness(&self) -> Strictness {
        self.strictness
    }

    fn max_non_minecraft_keys(&self) -> usize {
        self.max_non_minecraft_keys
    }

    fn is_whitelisted(&self, key: &str) -> bool {
        self.nbt_whitelist.contains(key)
    }

    fn max_nesting_depth(&self) -> usize {
        self.max_nesting_depth
    }
}
