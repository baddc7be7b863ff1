//! Read-only view of an NBT-style tag tree.
//!
//! Validation never owns the tree it inspects. Servers hand over whatever
//! representation their network layer decoded, wrapped in these two traits,
//! and every accessor answers `None` rather than failing when a key is
//! missing or holds a different type.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TagType {
    End,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    ByteArray,
    String,
    List,
    Compound,
    IntArray,
    LongArray,
}

/// A map-like tag node with unique keys.
pub trait TagCompound {
    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Keys the host does not recognise as game-defined. These are what the
    /// key-threshold budget counts. Defaults to every key.
    fn non_reserved_keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        self.keys()
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Type of the value stored under `key`, if present.
    fn tag_type_of(&self, key: &str) -> Option<TagType>;

    fn has_key(&self, key: &str) -> bool {
        self.tag_type_of(key).is_some()
    }

    fn has_key_of_type(&self, key: &str, ty: TagType) -> bool {
        self.tag_type_of(key) == Some(ty)
    }

    fn get_string(&self, key: &str) -> Option<&str>;

    fn get_compound(&self, key: &str) -> Option<&dyn TagCompound>;

    fn get_list(&self, key: &str) -> Option<&dyn TagList>;
}

/// An ordered, homogeneously typed sequence of tags.
pub trait TagList {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Declared element type. Empty lists usually report `TagType::End`.
    fn element_type(&self) -> TagType;

    fn get_string(&self, index: usize) -> Option<&str>;

    fn get_compound(&self, index: usize) -> Option<&dyn TagCompound>;

    fn get_list(&self, index: usize) -> Option<&dyn TagList>;
}
