//! Turns an aggregate report into a single accept/reject decision.
//!
//! The two directions pick the reported entry differently. Both let a
//! critical entry win over any non-critical one, but among non-critical
//! failures inbound reports the last and outbound reports the first.

use crate::aggregate::check_all;
use crate::registry::CheckRegistry;
use nbt_core::{FailedEntry, FailedEntrySet, TagCompound, ValidationConfig, Verdict};
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Client to server.
    Inbound,
    /// Server to client.
    Outbound,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Inbound => "inbound",
            Direction::Outbound => "outbound",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A packet whose item NBT must not be accepted or sent as is.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Error)]
#[error(
    "{direction} {packet} rejected: nbt key `{key}` on {item} in slot {slot} is {verdict}"
)]
pub struct NbtRejection {
    pub direction: Direction,
    pub packet: String,
    pub item: String,
    pub slot: i32,
    pub key: String,
    pub verdict: Verdict,
    /// The rejection came from a critical entry.
    pub critical: bool,
}

impl NbtRejection {
    fn from_entry(
        direction: Direction,
        entry: &FailedEntry,
        slot: i32,
        item_name: &str,
        packet_name: &str,
    ) -> Self {
        let rejection = Self {
            direction,
            packet: packet_name.to_string(),
            item: item_name.to_string(),
            slot,
            key: entry.key.clone(),
            verdict: entry.verdict,
            critical: entry.verdict.is_critical(),
        };
        warn!(
            direction = direction.as_str(),
            packet = packet_name,
            item = item_name,
            slot,
            key = %entry.key,
            verdict = entry.verdict.as_str(),
            "nbt not permitted"
        );
        rejection
    }
}

/// The first critical entry, otherwise the last non-critical failure.
pub fn select_inbound(failed: &FailedEntrySet) -> Option<&FailedEntry> {
    let mut last_non_critical = None;
    for entry in failed {
        if entry.verdict.is_critical() {
            return Some(entry);
        }
        if entry.verdict.fails() {
            last_non_critical = Some(entry);
        }
    }
    last_non_critical
}

/// The first critical entry, otherwise the first non-critical failure.
pub fn select_outbound(failed: &FailedEntrySet) -> Option<&FailedEntry> {
    failed
        .first_critical()
        .or_else(|| failed.first_non_critical())
}

/// Validates item NBT received from a client.
pub fn check_inbound(
    registry: &CheckRegistry,
    slot: i32,
    tag: &dyn TagCompound,
    item_name: &str,
    packet_name: &str,
    config: &dyn ValidationConfig,
) -> Result<(), NbtRejection> {
    let failed = check_all(registry, tag, item_name, config);
    match select_inbound(&failed) {
        Some(entry) => Err(NbtRejection::from_entry(
            Direction::Inbound,
            entry,
            slot,
            item_name,
            packet_name,
        )),
        None => Ok(()),
    }
}

/// Validates item NBT about to be sent to a client.
pub fn check_outbound(
    registry: &CheckRegistry,
    slot: i32,
    tag: &dyn TagCompound,
    item_name: &str,
    packet_name: &str,
    config: &dyn ValidationConfig,
) -> Result<(), NbtRejection> {
    let failed = check_all(registry, tag, item_name, config);
    match select_outbound(&failed) {
        Some(entry) => Err(NbtRejection::from_entry(
            Direction::Outbound,
            entry,
            slot,
            item_name,
            packet_name,
        )),
        None => Ok(()),
    }
}
