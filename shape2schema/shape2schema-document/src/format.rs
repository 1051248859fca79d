use std::fmt::{Error, Result, Write as _};

use serde_json::Value;

use crate::definition::{EnumSpec, FieldSpec, MappedType, SchemaDefinition};

/// Format a schema definition in a readable style:
/// scalar, enum and array-of-scalar fields are rendered in one line, nested
/// objects are rendered as indented blocks. Nested fields follow the same rule.
pub fn format_schema_definition(def: &SchemaDefinition) -> std::result::Result<String, Error> {
    let mut out = String::new();

    for field in def.iter() {
        format_labeled(&field.name, field.spec.mapped(), field.spec.default(), 0, &mut out)?;
    }

    Ok(out)
}

fn format_labeled(
    label: &str,
    mapped: &MappedType,
    default: Option<&Value>,
    indent: usize,
    out: &mut String,
) -> Result {
    let pad = " ".repeat(indent);
    match inline_spec(mapped, default) {
        Some(text) => writeln!(out, "{pad}{label}: {text}"),
        None => {
            writeln!(out, "{pad}{label}:")?;
            format_block(mapped, default, indent + 4, out)
        }
    }
}

fn format_block(
    mapped: &MappedType,
    default: Option<&Value>,
    indent: usize,
    out: &mut String,
) -> Result {
    let pad = " ".repeat(indent);

    if let Some(default) = default {
        format_labeled("type", mapped, None, indent, out)?;
        return writeln!(out, "{pad}default: {default}");
    }

    match mapped {
        MappedType::Object(def) => {
            for child in def.iter() {
                format_labeled(&child.name, child.spec.mapped(), child.spec.default(), indent, out)?;
            }
            Ok(())
        }
        MappedType::Array(element) => {
            format_labeled("item", element.mapped(), element.default(), indent, out)
        }
        MappedType::Scalar(t) => writeln!(out, "{pad}{t}"),
        MappedType::Enum(spec) => writeln!(out, "{pad}{}", inline_enum(spec, None)),
    }
}

/// One-line rendering, or `None` when the spec needs a block.
fn inline_spec(mapped: &MappedType, default: Option<&Value>) -> Option<String> {
    match (mapped, default) {
        (_, None) => inline_mapped(mapped),
        (MappedType::Enum(spec), Some(_)) => Some(inline_enum(spec, default)),
        (_, Some(default)) => {
            inline_mapped(mapped).map(|t| format!("{{ type: {t}, default: {default} }}"))
        }
    }
}

fn inline_mapped(mapped: &MappedType) -> Option<String> {
    match mapped {
        MappedType::Scalar(t) => Some(t.name().to_string()),
        MappedType::Enum(spec) => Some(inline_enum(spec, None)),
        MappedType::Array(element) => {
            inline_spec(element.mapped(), element.default()).map(|t| format!("[{t}]"))
        }
        MappedType::Object(def) if def.is_empty() => Some("{}".to_string()),
        MappedType::Object(_) => None,
    }
}

fn inline_enum(spec: &EnumSpec, default: Option<&Value>) -> String {
    let options: Vec<String> = spec.options.iter().map(Value::to_string).collect();
    let mut text = format!("{{ type: {}, enum: [{}]", spec.base, options.join(", "));
    if let Some(default) = default {
        text.push_str(&format!(", default: {default}"));
    }
    text.push_str(" }");
    text
}
