use nbt_core::TagCompound;

/// Wrapper key holding flat item NBT (pre-component item data).
pub const LEGACY_ITEM_KEY: &str = "tag";
/// Wrapper key holding a serialized item stack in componentized form.
pub const MODERN_ITEM_KEY: &str = "item";
pub const COMPONENTS_KEY: &str = "components";

/// Finds the item metadata inside a wrapper compound such as a container
/// slot or a charged projectile. `None` means there is nothing to validate.
///
/// `tag` takes precedence over `item`; under `item`, a `components`
/// compound is preferred over the stack itself. A wrapper key holding a
/// non-compound value yields `None`.
pub fn extract_item_nbt(wrapper: &dyn TagCompound) -> Option<&dyn TagCompound> {
    if wrapper.has_key(LEGACY_ITEM_KEY) {
        return wrapper.get_compound(LEGACY_ITEM_KEY);
    }
    if wrapper.has_key(MODERN_ITEM_KEY) {
        let item = wrapper.get_compound(MODERN_ITEM_KEY)?;
        if item.has_key(COMPONENTS_KEY) {
            return item.get_compound(COMPONENTS_KEY);
        }
        return Some(item);
    }
    None
}
