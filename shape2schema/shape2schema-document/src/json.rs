//! JSON rendering of the output model.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::definition::{EnumSpec, FieldSpec, MappedType, SchemaDefinition, SchemaType};

pub(crate) fn definition_to_json(def: &SchemaDefinition) -> Value {
    let map: Map<String, Value> = def
        .iter()
        .map(|f| (f.name.clone(), field_spec_to_json(&f.spec)))
        .collect();
    Value::Object(map)
}

fn field_spec_to_json(spec: &FieldSpec) -> Value {
    match spec {
        FieldSpec::Bare(mapped) => mapped_type_to_json(mapped),
        // Enum annotations are merged into the enum object itself.
        FieldSpec::WithDefault {
            mapped: MappedType::Enum(spec),
            default,
        } => {
            let mut map = enum_to_map(spec);
            map.insert("default".to_string(), default.clone());
            Value::Object(map)
        }
        FieldSpec::WithDefault { mapped, default } => {
            let mut map = Map::new();
            map.insert("type".to_string(), mapped_type_to_json(mapped));
            map.insert("default".to_string(), default.clone());
            Value::Object(map)
        }
    }
}

fn mapped_type_to_json(mapped: &MappedType) -> Value {
    match mapped {
        MappedType::Scalar(t) => Value::String(t.name().to_string()),
        MappedType::Object(def) => definition_to_json(def),
        MappedType::Array(element) => Value::Array(vec![field_spec_to_json(element)]),
        MappedType::Enum(spec) => Value::Object(enum_to_map(spec)),
    }
}

fn enum_to_map(spec: &EnumSpec) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(
        "type".to_string(),
        Value::String(spec.base.name().to_string()),
    );
    map.insert("enum".to_string(), Value::Array(spec.options.clone()));
    map
}

impl Serialize for SchemaType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl Serialize for MappedType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        mapped_type_to_json(self).serialize(serializer)
    }
}

impl Serialize for FieldSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        field_spec_to_json(self).serialize(serializer)
    }
}

impl Serialize for SchemaDefinition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        definition_to_json(self).serialize(serializer)
    }
}
