//! Modifier unwrapping.

use serde_json::Value;

use crate::descriptor::FieldDescriptor;

/// Result of stripping every modifier layer from a descriptor.
#[derive(Debug, Clone)]
pub struct Unwrapped<'a> {
    /// Innermost descriptor; never a modifier layer.
    pub core: &'a FieldDescriptor,
    pub nullable: bool,
    pub optional: bool,
    /// Value produced by the outermost `default` layer.
    pub default_value: Option<Value>,
}

/// Strip nullable/optional/default layers until a descriptor without an inner
/// layer is reached.
///
/// Layers may repeat and appear in any order. When several `default` layers
/// are stacked only the outermost one is evaluated, since that is the value
/// the source library would apply. A descriptor without modifiers comes back
/// unchanged with every flag cleared.
pub fn unwrap(descriptor: &FieldDescriptor) -> Unwrapped<'_> {
    let mut out = Unwrapped {
        core: descriptor,
        nullable: false,
        optional: false,
        default_value: None,
    };

    loop {
        match out.core {
            FieldDescriptor::Nullable(inner) => {
                out.nullable = true;
                out.core = inner;
            }
            FieldDescriptor::Optional(inner) => {
                out.optional = true;
                out.core = inner;
            }
            FieldDescriptor::Default { inner, producer } => {
                if out.default_value.is_none() {
                    out.default_value = Some(producer.produce());
                }
                out.core = inner;
            }
            _ => return out,
        }
    }
}
