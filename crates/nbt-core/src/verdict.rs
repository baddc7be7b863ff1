use serde::{Deserialize, Serialize};
use std::fmt;

/// Key recorded when the key-threshold guard trips.
pub const KEY_THRESHOLD: &str = "key_threshold";

/// Outcome of a single check. Ordered `Pass < Fail < Critical`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Pass,
    Fail,
    Critical,
}

impl Verdict {
    pub fn fails(self) -> bool {
        self != Verdict::Pass
    }

    pub fn is_critical(self) -> bool {
        self == Verdict::Critical
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::Fail => "FAIL",
            Verdict::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position on the strictness scale. Used both as the configured level and
/// as a check's minimum tolerance.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    Lenient,
    #[default]
    Average,
    Strict,
}

impl Strictness {
    /// Whether a check with `tolerance` runs at this strictness.
    pub fn permits(self, tolerance: Strictness) -> bool {
        tolerance <= self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FailedEntry {
    pub key: String,
    pub verdict: Verdict,
}

impl FailedEntry {
    pub fn new(key: impl Into<String>, verdict: Verdict) -> Self {
        Self {
            key: key.into(),
            verdict,
        }
    }

    pub fn key_threshold() -> Self {
        Self::new(KEY_THRESHOLD, Verdict::Critical)
    }

    pub fn is_non_critical_failure(&self) -> bool {
        self.verdict == Verdict::Fail
    }
}

/// Failures in the order they were discovered. Empty means the tag passed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct FailedEntrySet {
    entries: Vec<FailedEntry>,
}

impl FailedEntrySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: FailedEntry) {
        self.entries.push(entry);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FailedEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    pub fn contains_critical(&self) -> bool {
        self.first_critical().is_some()
    }

    pub fn first_critical(&self) -> Option<&FailedEntry> {
        self.entries.iter().find(|e| e.verdict.is_critical())
    }

    pub fn first_non_critical(&self) -> Option<&FailedEntry> {
        self.entries.iter().find(|e| e.is_non_critical_failure())
    }

    pub fn last_non_critical(&self) -> Option<&FailedEntry> {
        self.entries.iter().rev().find(|e| e.is_non_critical_failure())
    }
}

impl<'a> IntoIterator for &'a FailedEntrySet {
    type Item = &'a FailedEntry;
    type IntoIter = std::slice::Iter<'a, FailedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<FailedEntry> for FailedEntrySet {
    fn from_iter<I: IntoIterator<Item = FailedEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
