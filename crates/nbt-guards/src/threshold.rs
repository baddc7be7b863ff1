use nbt_core::{TagCompound, ValidationConfig};
use tracing::debug;

/// Walks every nested compound and sums the non-reserved, non-whitelisted
/// keys. Returns `false` as soon as the sum passes
/// `max_non_minecraft_keys`, or when nesting goes deeper than
/// `max_nesting_depth`.
pub fn tag_meets_key_threshold(tag: &dyn TagCompound, config: &dyn ValidationConfig) -> bool {
    let max_keys = config.max_non_minecraft_keys();
    let max_depth = config.max_nesting_depth();
    let mut counted = 0usize;
    let mut pending = vec![(tag, 1usize)];

    while let Some((compound, depth)) = pending.pop() {
        if depth > max_depth {
            debug!(depth, max_depth, "nbt nesting exceeds depth ceiling");
            return false;
        }

        for key in compound.non_reserved_keys() {
            if config.is_whitelisted(key) {
                continue;
            }
            counted += 1;
            if counted > max_keys {
                debug!(counted, max_keys, key, "nbt key threshold exceeded");
                return false;
            }
        }

        for key in compound.keys() {
            if let Some(child) = compound.get_compound(key) {
                pending.push((child, depth + 1));
            }
        }
    }

    true
}
