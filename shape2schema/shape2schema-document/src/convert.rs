//! Descriptor tree -> [`SchemaDefinition`] conversion.

use serde_json::Value;
use shape2schema_core::{FieldDescriptor, Kind, Shape, Unwrapped, classify, unwrap};
use tracing::{debug, trace};

use crate::{
    definition::{EnumSpec, FieldSpec, MappedType, SchemaDefinition, SchemaField, SchemaType},
    error::ConvertError,
    policy::{ConvertOptions, DefaultPrecedence},
};

/// Path reported when the root descriptor itself cannot be converted.
pub const ROOT_PATH: &str = "<root>";

/// Convert an object descriptor into a [`SchemaDefinition`] covering its
/// declared fields. Modifier layers around the root object are ignored.
///
/// # Errors
///
/// Returns [`ConvertError::UnsupportedType`] if the root is not an object or
/// any field, at any depth, has an unsupported core kind.
pub fn convert_object(descriptor: &FieldDescriptor) -> Result<SchemaDefinition, ConvertError> {
    convert_object_with_options(descriptor, ConvertOptions::default())
}

/// [`convert_object`] with explicit [`ConvertOptions`].
pub fn convert_object_with_options(
    descriptor: &FieldDescriptor,
    options: ConvertOptions,
) -> Result<SchemaDefinition, ConvertError> {
    match strip_modifiers(descriptor) {
        FieldDescriptor::Object(shape) => Converter { options }.walk(None, shape),
        other => Err(unsupported(ROOT_PATH, other)),
    }
}

/// Convert the declared fields of `shape`, skipping metadata entries.
pub fn convert_shape(shape: &Shape) -> Result<SchemaDefinition, ConvertError> {
    convert_shape_with_options(shape, ConvertOptions::default())
}

/// [`convert_shape`] with explicit [`ConvertOptions`].
pub fn convert_shape_with_options(
    shape: &Shape,
    options: ConvertOptions,
) -> Result<SchemaDefinition, ConvertError> {
    Converter { options }.walk(None, shape)
}

/// Map a single field descriptor to its [`FieldSpec`].
pub fn map_field(name: &str, descriptor: &FieldDescriptor) -> Result<FieldSpec, ConvertError> {
    map_field_with_options(name, descriptor, ConvertOptions::default())
}

/// [`map_field`] with explicit [`ConvertOptions`].
pub fn map_field_with_options(
    name: &str,
    descriptor: &FieldDescriptor,
    options: ConvertOptions,
) -> Result<FieldSpec, ConvertError> {
    Converter { options }.map(name, descriptor)
}

struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// `parent` is `None` at the root; child paths are dot-joined onto it.
    fn walk(&self, parent: Option<&str>, shape: &Shape) -> Result<SchemaDefinition, ConvertError> {
        let mut fields = Vec::with_capacity(shape.len());
        let mut skipped = 0usize;

        for (key, entry) in shape.iter() {
            let Some(descriptor) = entry.as_field() else {
                skipped += 1;
                continue;
            };
            let path = match parent {
                Some(parent) => format!("{parent}.{key}"),
                None => key.clone(),
            };
            fields.push(SchemaField::new(key.clone(), self.map(&path, descriptor)?));
        }

        debug!(
            path = parent.unwrap_or(ROOT_PATH),
            fields = fields.len(),
            skipped,
            "converted object shape"
        );
        Ok(fields.into())
    }

    fn map(&self, path: &str, descriptor: &FieldDescriptor) -> Result<FieldSpec, ConvertError> {
        let Unwrapped {
            core,
            mut nullable,
            default_value,
            ..
        } = unwrap(descriptor);

        // union(T, null) is mapped as T, nullable regardless of T's own layers.
        let mut core = core;
        while let Some(other) = nullable_union_member(core) {
            core = strip_modifiers(other);
            nullable = true;
        }

        let kind = classify(core);
        trace!(
            path,
            %kind,
            nullable,
            has_default = default_value.is_some(),
            "mapping field"
        );

        let mapped = self.map_core(path, core, kind)?;
        Ok(self.annotate(mapped, nullable, default_value))
    }

    fn map_core(
        &self,
        path: &str,
        core: &FieldDescriptor,
        kind: Kind,
    ) -> Result<MappedType, ConvertError> {
        let mapped = match (kind, core) {
            (Kind::String, _) => MappedType::Scalar(SchemaType::String),
            (Kind::Number, _) => MappedType::Scalar(SchemaType::Number),
            (Kind::Boolean, _) => MappedType::Scalar(SchemaType::Boolean),
            (Kind::Date, _) => MappedType::Scalar(SchemaType::Date),
            (Kind::Array, FieldDescriptor::Array(element)) => {
                let element_path = format!("{path}[]");
                let element_spec = match (classify(element), element.as_ref()) {
                    (Kind::Object, FieldDescriptor::Object(shape)) => {
                        FieldSpec::Bare(MappedType::Object(self.walk(Some(&element_path), shape)?))
                    }
                    _ => self.map(&element_path, element)?,
                };
                MappedType::Array(Box::new(element_spec))
            }
            (Kind::Object, FieldDescriptor::Object(shape)) => {
                MappedType::Object(self.walk(Some(path), shape)?)
            }
            (Kind::Enum, FieldDescriptor::Enum(options)) => MappedType::Enum(EnumSpec::new(
                options.iter().cloned().map(Value::String).collect(),
            )),
            (Kind::NativeEnum, FieldDescriptor::NativeEnum(members)) => MappedType::Enum(
                EnumSpec::new(members.iter().map(|(_, value)| value.clone()).collect()),
            ),
            (Kind::Union, _) => MappedType::Scalar(SchemaType::Mixed),
            _ => return Err(unsupported(path, core)),
        };
        Ok(mapped)
    }

    fn annotate(
        &self,
        mapped: MappedType,
        nullable: bool,
        default_value: Option<Value>,
    ) -> FieldSpec {
        match (self.options.default_precedence, nullable, default_value) {
            (DefaultPrecedence::NullDefault, true, _) | (_, true, None) => {
                FieldSpec::with_default(mapped, Value::Null)
            }
            (_, _, Some(default)) => FieldSpec::with_default(mapped, default),
            (_, false, None) => FieldSpec::Bare(mapped),
        }
    }
}

/// The non-null member of a two-member union whose other member is a null
/// literal.
fn nullable_union_member(core: &FieldDescriptor) -> Option<&FieldDescriptor> {
    let FieldDescriptor::Union(members) = core else {
        return None;
    };
    match members.as_slice() {
        [member, null] | [null, member] if null.is_null_literal() => Some(member),
        _ => None,
    }
}

/// Follow modifier layers without evaluating default producers.
fn strip_modifiers(descriptor: &FieldDescriptor) -> &FieldDescriptor {
    let mut core = descriptor;
    while let Some(inner) = core.inner() {
        core = inner;
    }
    core
}

fn unsupported(path: &str, core: &FieldDescriptor) -> ConvertError {
    ConvertError::UnsupportedType {
        path: path.to_string(),
        type_name: core.type_name().to_string(),
    }
}
