//! Tagged-union representation of a source type tree.

use std::{
    fmt::{Debug, Formatter, Result},
    sync::Arc,
};

use serde_json::Value;

use crate::shape::Shape;

/// Produces the value captured by a `default` layer.
#[derive(Clone)]
pub enum DefaultProducer {
    /// Constant value, cloned on every evaluation.
    Value(Value),
    /// Closure evaluated each time the layer is unwrapped.
    Fn(Arc<dyn Fn() -> Value + Send + Sync>),
}

impl DefaultProducer {
    pub fn produce(&self) -> Value {
        match self {
            DefaultProducer::Value(v) => v.clone(),
            DefaultProducer::Fn(f) => f(),
        }
    }
}

impl Debug for DefaultProducer {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            DefaultProducer::Value(v) => f.debug_tuple("Value").field(v).finish(),
            DefaultProducer::Fn(_) => f.write_str("Fn(..)"),
        }
    }
}

impl From<Value> for DefaultProducer {
    fn from(value: Value) -> Self {
        DefaultProducer::Value(value)
    }
}

/// A node describing one field's declared type.
///
/// Leaf kinds are `String`, `Number`, `Boolean` and `Date`; composites are
/// `Object`, `Array`, `Enum`, `NativeEnum` and `Union`; `Nullable`,
/// `Optional` and `Default` are modifier layers wrapping exactly one inner
/// descriptor. `Null`, `Literal`, `BigInt` and `Other` exist in source trees
/// but have no document-schema counterpart on their own.
#[derive(Debug, Clone)]
pub enum FieldDescriptor {
    String,
    Number,
    Boolean,
    Date,
    Object(Shape),
    Array(Box<FieldDescriptor>),
    Enum(Vec<String>),
    /// Declared `(key, value)` members of a native enumeration.
    NativeEnum(Vec<(String, Value)>),
    Union(Vec<FieldDescriptor>),
    Nullable(Box<FieldDescriptor>),
    Optional(Box<FieldDescriptor>),
    Default {
        inner: Box<FieldDescriptor>,
        producer: DefaultProducer,
    },
    Null,
    Literal(Value),
    BigInt,
    /// Any other kind, carried by name for diagnostics.
    Other(String),
}

impl FieldDescriptor {
    pub fn string() -> Self {
        FieldDescriptor::String
    }

    pub fn number() -> Self {
        FieldDescriptor::Number
    }

    pub fn boolean() -> Self {
        FieldDescriptor::Boolean
    }

    pub fn date() -> Self {
        FieldDescriptor::Date
    }

    pub fn null() -> Self {
        FieldDescriptor::Null
    }

    pub fn literal(value: impl Into<Value>) -> Self {
        FieldDescriptor::Literal(value.into())
    }

    /// Object descriptor built from `(key, descriptor)` pairs in declared order.
    pub fn object<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, FieldDescriptor)>,
    {
        FieldDescriptor::Object(Shape::from_fields(fields))
    }

    pub fn array(element: FieldDescriptor) -> Self {
        FieldDescriptor::Array(Box::new(element))
    }

    pub fn enumeration<S, I>(options: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        FieldDescriptor::Enum(options.into_iter().map(Into::into).collect())
    }

    pub fn native_enum<K, V, I>(members: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        FieldDescriptor::NativeEnum(
            members
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn union(members: impl IntoIterator<Item = FieldDescriptor>) -> Self {
        FieldDescriptor::Union(members.into_iter().collect())
    }

    pub fn nullable(self) -> Self {
        FieldDescriptor::Nullable(Box::new(self))
    }

    pub fn optional(self) -> Self {
        FieldDescriptor::Optional(Box::new(self))
    }

    /// Wrap in a default layer holding a constant value.
    pub fn default_value(self, value: impl Into<Value>) -> Self {
        FieldDescriptor::Default {
            inner: Box::new(self),
            producer: DefaultProducer::Value(value.into()),
        }
    }

    /// Wrap in a default layer whose value is produced on demand.
    pub fn default_with<F>(self, producer: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        FieldDescriptor::Default {
            inner: Box::new(self),
            producer: DefaultProducer::Fn(Arc::new(producer)),
        }
    }

    /// The wrapped descriptor of a modifier layer, `None` for every other kind.
    pub fn inner(&self) -> Option<&FieldDescriptor> {
        match self {
            FieldDescriptor::Nullable(inner)
            | FieldDescriptor::Optional(inner)
            | FieldDescriptor::Default { inner, .. } => Some(inner),
            _ => None,
        }
    }

    pub fn is_modifier(&self) -> bool {
        self.inner().is_some()
    }

    /// True for the null type and for a literal whose value is null.
    pub fn is_null_literal(&self) -> bool {
        matches!(
            self,
            FieldDescriptor::Null | FieldDescriptor::Literal(Value::Null)
        )
    }

    pub fn type_name(&self) -> &str {
        match self {
            FieldDescriptor::String => "string",
            FieldDescriptor::Number => "number",
            FieldDescriptor::Boolean => "boolean",
            FieldDescriptor::Date => "date",
            FieldDescriptor::Object(_) => "object",
            FieldDescriptor::Array(_) => "array",
            FieldDescriptor::Enum(_) => "enum",
            FieldDescriptor::NativeEnum(_) => "native_enum",
            FieldDescriptor::Union(_) => "union",
            FieldDescriptor::Nullable(_) => "nullable",
            FieldDescriptor::Optional(_) => "optional",
            FieldDescriptor::Default { .. } => "default",
            FieldDescriptor::Null => "null",
            FieldDescriptor::Literal(_) => "literal",
            FieldDescriptor::BigInt => "bigint",
            FieldDescriptor::Other(name) => name.as_str(),
        }
    }
}
