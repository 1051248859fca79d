use std::ops::Deref;

use serde_json::Value;

use crate::descriptor::FieldDescriptor;

/// One value stored under a key of an object shape.
#[derive(Debug, Clone)]
pub enum ShapeEntry {
    Field(FieldDescriptor),
    /// Incidental non-field data attached to the shape; never converted.
    Metadata(Value),
}

impl ShapeEntry {
    pub fn as_field(&self) -> Option<&FieldDescriptor> {
        match self {
            ShapeEntry::Field(f) => Some(f),
            ShapeEntry::Metadata(_) => None,
        }
    }
}

/// Ordered `key -> entry` mapping of an object descriptor.
///
/// Keys are unique: inserting an existing key replaces its entry in place,
/// keeping the original position.
#[derive(Debug, Clone, Default)]
pub struct Shape(Vec<(String, ShapeEntry)>);

impl Shape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, FieldDescriptor)>,
    {
        let mut shape = Self::new();
        for (key, field) in fields {
            shape.insert(key, ShapeEntry::Field(field));
        }
        shape
    }

    pub fn insert(&mut self, key: impl Into<String>, entry: ShapeEntry) {
        let key = key.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = entry,
            None => self.0.push((key, entry)),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, field: FieldDescriptor) -> Self {
        self.insert(key, ShapeEntry::Field(field));
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, ShapeEntry::Metadata(value.into()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&ShapeEntry> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, e)| e)
    }

    /// Declared fields in order, metadata entries skipped.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldDescriptor)> {
        self.0
            .iter()
            .filter_map(|(k, e)| e.as_field().map(|f| (k.as_str(), f)))
    }

    pub fn as_slice(&self) -> &[(String, ShapeEntry)] {
        &self.0
    }
}

impl Deref for Shape {
    type Target = [(String, ShapeEntry)];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
