use crate::registry::CheckRegistry;
use crate::threshold::tag_meets_key_threshold;
use nbt_core::{FailedEntry, FailedEntrySet, TagCompound, ValidationConfig, Verdict};
use tracing::debug;

/// Any list longer than this is rejected as critical, registered check or not.
pub const MAX_LIST_LEN: usize = 128;

/// Runs the key-threshold guard and every applicable registered check
/// against `tag`. Failures are returned in discovery order; an empty set
/// means the tag passed.
///
/// Keys without a registered check are opaque data owned by other systems
/// and only consume key budget.
pub fn check_all(
    registry: &CheckRegistry,
    tag: &dyn TagCompound,
    item_name: &str,
    config: &dyn ValidationConfig,
) -> FailedEntrySet {
    let mut failed = FailedEntrySet::new();

    if !tag_meets_key_threshold(tag, config) {
        failed.push(FailedEntry::key_threshold());
    }

    let strictness = config.strictness();

    for key in tag.keys() {
        if let Some(list) = tag.get_list(key) {
            if list.len() > MAX_LIST_LEN {
                debug!(key, len = list.len(), item = item_name, "oversized nbt list");
                failed.push(FailedEntry::new(key, Verdict::Critical));
                continue;
            }
        }

        if config.is_whitelisted(key) {
            continue;
        }

        let Some(check) = registry.lookup(key) else {
            continue;
        };

        if !strictness.permits(check.tolerance()) {
            debug!(
                key,
                check = check.name(),
                tolerance = ?check.tolerance(),
                strictness = ?strictness,
                "nbt check skipped at current strictness"
            );
            continue;
        }

        let verdict = check.check(tag, item_name, config);
        if verdict.fails() {
            failed.push(FailedEntry::new(key, verdict));
        }
    }

    failed
}
