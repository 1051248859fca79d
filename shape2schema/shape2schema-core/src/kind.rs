//! Kind classification of core descriptors.

use std::fmt::{Display, Formatter, Result};

use crate::descriptor::FieldDescriptor;

/// Closed set of kinds the converter knows how to map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    String,
    Number,
    Boolean,
    Date,
    Array,
    Object,
    Enum,
    NativeEnum,
    Union,
    Unsupported,
}

impl Kind {
    pub fn name(&self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Boolean => "boolean",
            Kind::Date => "date",
            Kind::Array => "array",
            Kind::Object => "object",
            Kind::Enum => "enum",
            Kind::NativeEnum => "native_enum",
            Kind::Union => "union",
            Kind::Unsupported => "unsupported",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}

/// Tag a core descriptor with its [`Kind`].
///
/// Dispatch is on the descriptor variant alone. Modifier layers are expected
/// to be stripped by [`unwrap`](crate::unwrap) first and classify as
/// [`Kind::Unsupported`], as does every kind outside the closed set.
pub fn classify(core: &FieldDescriptor) -> Kind {
    match core {
        FieldDescriptor::String => Kind::String,
        FieldDescriptor::Number => Kind::Number,
        FieldDescriptor::Boolean => Kind::Boolean,
        FieldDescriptor::Date => Kind::Date,
        FieldDescriptor::Array(_) => Kind::Array,
        FieldDescriptor::Object(_) => Kind::Object,
        FieldDescriptor::Enum(_) => Kind::Enum,
        FieldDescriptor::NativeEnum(_) => Kind::NativeEnum,
        FieldDescriptor::Union(_) => Kind::Union,
        FieldDescriptor::Nullable(_)
        | FieldDescriptor::Optional(_)
        | FieldDescriptor::Default { .. }
        | FieldDescriptor::Null
        | FieldDescriptor::Literal(_)
        | FieldDescriptor::BigInt
        | FieldDescriptor::Other(_) => Kind::Unsupported,
    }
}
