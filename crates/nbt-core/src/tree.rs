//! Owned, in-memory tag tree implementing [`TagCompound`] and [`TagList`].
//!
//! Hosts that already decode packets into their own structures only need the
//! traits; this representation exists for adapters that build trees from
//! JSON fixtures and for exercising the guards directly.

use crate::tag::{TagCompound, TagList, TagType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Keys in this namespace are game-defined components and never count
/// toward the non-reserved key budget.
pub const RESERVED_NAMESPACE: &str = "minecraft:";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TagError {
    #[error("list expects {expected:?} elements, found {found:?}")]
    ElementTypeMismatch { expected: TagType, found: TagType },
    #[error("duplicate compound key: {0}")]
    DuplicateKey(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Tag {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(ListTag),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Tag {
    pub fn tag_type(&self) -> TagType {
        match self {
            Tag::Byte(_) => TagType::Byte,
            Tag::Short(_) => TagType::Short,
            Tag::Int(_) => TagType::Int,
            Tag::Long(_) => TagType::Long,
            Tag::Float(_) => TagType::Float,
            Tag::Double(_) => TagType::Double,
            Tag::ByteArray(_) => TagType::ByteArray,
            Tag::String(_) => TagType::String,
            Tag::List(_) => TagType::List,
            Tag::Compound(_) => TagType::Compound,
            Tag::IntArray(_) => TagType::IntArray,
            Tag::LongArray(_) => TagType::LongArray,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Tag::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Tag::Compound(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListTag> {
        match self {
            Tag::List(l) => Some(l),
            _ => None,
        }
    }
}

impl From<&str> for Tag {
    fn from(value: &str) -> Self {
        Tag::String(value.to_string())
    }
}

impl From<String> for Tag {
    fn from(value: String) -> Self {
        Tag::String(value)
    }
}

impl From<i32> for Tag {
    fn from(value: i32) -> Self {
        Tag::Int(value)
    }
}

impl From<Compound> for Tag {
    fn from(value: Compound) -> Self {
        Tag::Compound(value)
    }
}

impl From<ListTag> for Tag {
    fn from(value: ListTag) -> Self {
        Tag::List(value)
    }
}

/// Insertion-ordered compound with unique keys and constant-time lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(String, Tag)>", into = "Vec<(String, Tag)>")]
pub struct Compound {
    entries: Vec<(String, Tag)>,
    index: HashMap<String, usize>,
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `tag` under `key`, replacing (in place) and returning any
    /// previous value.
    pub fn insert(&mut self, key: impl Into<String>, tag: impl Into<Tag>) -> Option<Tag> {
        let key = key.into();
        let tag = tag.into();
        match self.index.get(&key) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, tag)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, tag));
                None
            }
        }
    }

    pub fn with(mut self, key: impl Into<String>, tag: impl Into<Tag>) -> Self {
        self.insert(key, tag);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tag)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl TryFrom<Vec<(String, Tag)>> for Compound {
    type Error = TagError;

    fn try_from(entries: Vec<(String, Tag)>) -> Result<Self, Self::Error> {
        let mut out = Compound::new();
        for (key, tag) in entries {
            if out.index.contains_key(&key) {
                return Err(TagError::DuplicateKey(key));
            }
            out.insert(key, tag);
        }
        Ok(out)
    }
}

impl From<Compound> for Vec<(String, Tag)> {
    fn from(value: Compound) -> Self {
        value.entries
    }
}

impl TagCompound for Compound {
    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.entries.iter().map(|(k, _)| k.as_str()))
    }

    fn non_reserved_keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.keys().filter(|k| !k.starts_with(RESERVED_NAMESPACE)))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn tag_type_of(&self, key: &str) -> Option<TagType> {
        self.get(key).map(Tag::tag_type)
    }

    fn get_string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Tag::as_str)
    }

    fn get_compound(&self, key: &str) -> Option<&dyn TagCompound> {
        self.get(key)
            .and_then(Tag::as_compound)
            .map(|c| c as &dyn TagCompound)
    }

    fn get_list(&self, key: &str) -> Option<&dyn TagList> {
        self.get(key).and_then(Tag::as_list).map(|l| l as &dyn TagList)
    }
}

#[derive(Deserialize)]
struct RawListTag {
    element_type: TagType,
    elements: Vec<Tag>,
}

/// Homogeneous list. An empty list declared as `TagType::End` adopts the
/// type of its first element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawListTag")]
pub struct ListTag {
    element_type: TagType,
    elements: Vec<Tag>,
}

impl Default for ListTag {
    fn default() -> Self {
        Self::new(TagType::End)
    }
}

impl ListTag {
    pub fn new(element_type: TagType) -> Self {
        Self {
            element_type,
            elements: Vec::new(),
        }
    }

    pub fn of(
        element_type: TagType,
        elements: impl IntoIterator<Item = Tag>,
    ) -> Result<Self, TagError> {
        let mut list = Self::new(element_type);
        for tag in elements {
            list.push(tag)?;
        }
        Ok(list)
    }

    pub fn push(&mut self, tag: Tag) -> Result<(), TagError> {
        let found = tag.tag_type();
        if self.elements.is_empty() && self.element_type == TagType::End {
            self.element_type = found;
        } else if found != self.element_type {
            return Err(TagError::ElementTypeMismatch {
                expected: self.element_type,
                found,
            });
        }
        self.elements.push(tag);
        Ok(())
    }

    pub fn elements(&self) -> &[Tag] {
        &self.elements
    }
}

impl TryFrom<RawListTag> for ListTag {
    type Error = TagError;

    fn try_from(raw: RawListTag) -> Result<Self, Self::Error> {
        ListTag::of(raw.element_type, raw.elements)
    }
}

impl TagList for ListTag {
    fn len(&self) -> usize {
        self.elements.len()
    }

    fn element_type(&self) -> TagType {
        self.element_type
    }

    fn get_string(&self, index: usize) -> Option<&str> {
        self.elements.get(index).and_then(Tag::as_str)
    }

    fn get_compound(&self, index: usize) -> Option<&dyn TagCompound> {
        self.elements
            .get(index)
            .and_then(Tag::as_compound)
            .map(|c| c as &dyn TagCompound)
    }

    fn get_list(&self, index: usize) -> Option<&dyn TagList> {
        self.elements
            .get(index)
            .and_then(Tag::as_list)
            .map(|l| l as &dyn TagList)
    }
}
