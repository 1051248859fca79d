//! Document-schema conversion layer for `shape2schema`.
//!
//! Converts a `shape2schema-core` object descriptor into a
//! [`SchemaDefinition`]: an ordered `field name -> FieldSpec` mapping in the
//! form document-store schema constructors accept.
//!
//! Mapping rules:
//! - `string` / `number` / `boolean` / `date` map to the matching
//!   [`SchemaType`] marker.
//! - Objects map to a nested [`SchemaDefinition`].
//! - Arrays map to a single-element array holding the element's spec; an
//!   object element becomes `[{ ...nested definition }]`.
//! - Enums map to `{ type: String, enum: [...] }`; native enums use their
//!   declared values.
//! - `union(T, null)` maps as `T` with `default: null`; every other union
//!   maps to `Mixed`.
//! - A nullable field without a default gets `default: null`; a captured
//!   default is emitted as `default: <value>`.
//!
//! # Typical Flow
//! ```rust
//! use shape2schema_core::FieldDescriptor;
//! use shape2schema_document::convert_object;
//!
//! let user = FieldDescriptor::object([
//!     ("name", FieldDescriptor::string().default_value("Bob")),
//!     ("age", FieldDescriptor::number()),
//! ]);
//! let definition = convert_object(&user)?;
//! assert_eq!(definition.keys().collect::<Vec<_>>(), ["name", "age"]);
//! # Ok::<(), shape2schema_document::ConvertError>(())
//! ```
pub mod convert;
pub mod definition;
pub mod error;
pub mod format;
mod json;
pub mod policy;

pub use convert::{
    ROOT_PATH, convert_object, convert_object_with_options, convert_shape,
    convert_shape_with_options, map_field, map_field_with_options,
};
pub use definition::{EnumSpec, FieldSpec, MappedType, SchemaDefinition, SchemaField, SchemaType};
pub use error::ConvertError;
pub use format::format_schema_definition;
pub use policy::{ConvertOptions, DefaultPrecedence};
