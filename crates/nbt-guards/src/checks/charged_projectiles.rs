use crate::check::NbtCheck;
use crate::extract::{extract_item_nbt, COMPONENTS_KEY};
use nbt_core::{Strictness, TagCompound, TagList, TagType, ValidationConfig, Verdict};

const EMPTY_POTION_SUFFIX: &str = "empty";

/// Crossbow projectiles loaded with an emptied potion. Such a charge cannot
/// be produced in survival and is the signature of a duplication exploit.
pub struct ChargedProjectiles;

impl ChargedProjectiles {
    pub const KEY: &'static str = "ChargedProjectiles";
}

impl NbtCheck for ChargedProjectiles {
    fn name(&self) -> &str {
        Self::KEY
    }

    fn tolerance(&self) -> Strictness {
        Strictness::Average
    }

    fn check(
        &self,
        tag: &dyn TagCompound,
        _item_name: &str,
        _config: &dyn ValidationConfig,
    ) -> Verdict {
        let Some(projectiles) = compound_list(tag, Self::KEY) else {
            return Verdict::Pass;
        };

        for i in 0..projectiles.len() {
            let Some(projectile) = projectiles.get_compound(i) else {
                continue;
            };
            let potion = extract_item_nbt(projectile).and_then(|inner| inner.get_string("Potion"));
            if potion.is_some_and(|p| p.ends_with(EMPTY_POTION_SUFFIX)) {
                return Verdict::Fail;
            }
        }

        Verdict::Pass
    }
}

/// Same signature on componentized items, where each projectile is a full
/// item stack and the potion lives in `minecraft:potion_contents`.
pub struct ChargedProjectilesComponent;

impl ChargedProjectilesComponent {
    pub const KEY: &'static str = "minecraft:charged_projectiles";
    const ALIASES: &'static [&'static str] = &["charged_projectiles"];
    const POTION_CONTENTS: &'static str = "minecraft:potion_contents";
}

impl NbtCheck for ChargedProjectilesComponent {
    fn name(&self) -> &str {
        Self::KEY
    }

    fn aliases(&self) -> &[&str] {
        Self::ALIASES
    }

    fn tolerance(&self) -> Strictness {
        Strictness::Average
    }

    fn check(
        &self,
        tag: &dyn TagCompound,
        _item_name: &str,
        _config: &dyn ValidationConfig,
    ) -> Verdict {
        let Some(projectiles) = std::iter::once(Self::KEY)
            .chain(Self::ALIASES.iter().copied())
            .find_map(|key| compound_list(tag, key))
        else {
            return Verdict::Pass;
        };

        for i in 0..projectiles.len() {
            let Some(projectile) = projectiles.get_compound(i) else {
                continue;
            };
            let Some(components) =
                extract_item_nbt(projectile).or_else(|| projectile.get_compound(COMPONENTS_KEY))
            else {
                continue;
            };
            if potion_id(components).is_some_and(|p| p.ends_with(EMPTY_POTION_SUFFIX)) {
                return Verdict::Fail;
            }
        }

        Verdict::Pass
    }
}

fn potion_id(components: &dyn TagCompound) -> Option<&str> {
    const POTION: &str = ChargedProjectilesComponent::POTION_CONTENTS;
    if let Some(id) = components.get_string(POTION) {
        return Some(id);
    }
    components.get_compound(POTION)?.get_string("potion")
}

/// A list of compounds under `key`. Lists of any other element type are
/// treated as absent.
fn compound_list<'a>(tag: &'a dyn TagCompound, key: &str) -> Option<&'a dyn TagList> {
    tag.get_list(key)
        .filter(|list| list.element_type() == TagType::Compound)
}
