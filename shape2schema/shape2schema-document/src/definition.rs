//! Output model: what a document-store schema constructor consumes.

use std::{
    fmt::{Display, Formatter, Result},
    ops::Deref,
};

use serde_json::Value;

/// Type marker understood by the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaType {
    String,
    Number,
    Boolean,
    Date,
    /// Accepts any value.
    Mixed,
}

impl SchemaType {
    pub fn name(&self) -> &'static str {
        match self {
            SchemaType::String => "String",
            SchemaType::Number => "Number",
            SchemaType::Boolean => "Boolean",
            SchemaType::Date => "Date",
            SchemaType::Mixed => "Mixed",
        }
    }
}

impl Display for SchemaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}

/// Enumerated string field: `{ type: String, enum: [...] }`.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumSpec {
    /// Allowed values in declared order.
    pub options: Vec<Value>,
    pub base: SchemaType,
}

impl EnumSpec {
    pub fn new(options: Vec<Value>) -> Self {
        Self {
            options,
            base: SchemaType::String,
        }
    }
}

/// Target-side type of one field, before default annotation.
#[derive(Debug, Clone, PartialEq)]
pub enum MappedType {
    Scalar(SchemaType),
    Object(SchemaDefinition),
    /// Single-element array form; the element spec may carry its own default.
    Array(Box<FieldSpec>),
    Enum(EnumSpec),
}

impl From<SchemaType> for MappedType {
    fn from(value: SchemaType) -> Self {
        MappedType::Scalar(value)
    }
}

/// A [`MappedType`], optionally annotated with a default value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldSpec {
    Bare(MappedType),
    WithDefault { mapped: MappedType, default: Value },
}

impl FieldSpec {
    pub fn with_default(mapped: MappedType, default: Value) -> Self {
        FieldSpec::WithDefault { mapped, default }
    }

    pub fn mapped(&self) -> &MappedType {
        match self {
            FieldSpec::Bare(mapped) | FieldSpec::WithDefault { mapped, .. } => mapped,
        }
    }

    pub fn default(&self) -> Option<&Value> {
        match self {
            FieldSpec::Bare(_) => None,
            FieldSpec::WithDefault { default, .. } => Some(default),
        }
    }
}

impl From<MappedType> for FieldSpec {
    fn from(value: MappedType) -> Self {
        FieldSpec::Bare(value)
    }
}

impl From<SchemaType> for FieldSpec {
    fn from(value: SchemaType) -> Self {
        FieldSpec::Bare(MappedType::Scalar(value))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SchemaField {
    pub name: String,
    pub spec: FieldSpec,
}

impl SchemaField {
    pub fn new(name: impl Into<String>, spec: impl Into<FieldSpec>) -> Self {
        Self {
            name: name.into(),
            spec: spec.into(),
        }
    }
}

/// Ordered `field name -> FieldSpec` mapping for one object shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchemaDefinition(Vec<SchemaField>);

impl SchemaDefinition {
    pub fn new(fields: Vec<SchemaField>) -> Self {
        Self(fields)
    }

    pub fn as_slice(&self) -> &[SchemaField] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SchemaField> {
        self.0.iter()
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.0.iter().find(|f| f.name == name).map(|f| &f.spec)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|f| f.name.as_str())
    }

    /// JSON form accepted by document-store schema constructors.
    pub fn to_json(&self) -> Value {
        crate::json::definition_to_json(self)
    }
}

impl From<Vec<SchemaField>> for SchemaDefinition {
    fn from(value: Vec<SchemaField>) -> Self {
        Self(value)
    }
}

impl From<SchemaDefinition> for Vec<SchemaField> {
    fn from(value: SchemaDefinition) -> Self {
        value.0
    }
}

impl AsRef<[SchemaField]> for SchemaDefinition {
    fn as_ref(&self) -> &[SchemaField] {
        self.as_slice()
    }
}

impl Deref for SchemaDefinition {
    type Target = [SchemaField];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl Display for SchemaDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = crate::format::format_schema_definition(self)?;
        f.write_str(&text)
    }
}
