use serde_json::json;
use shape2schema_core::{FieldDescriptor, Shape};
use shape2schema_document::{
    ConvertError, ConvertOptions, DefaultPrecedence, EnumSpec, FieldSpec, MappedType,
    SchemaType, convert_object, convert_object_with_options, convert_shape, map_field,
    map_field_with_options,
};

fn bare(t: SchemaType) -> FieldSpec {
    FieldSpec::Bare(MappedType::Scalar(t))
}

fn null_default(t: SchemaType) -> FieldSpec {
    FieldSpec::with_default(MappedType::Scalar(t), json!(null))
}

#[test]
fn primitives_map_to_bare_markers() -> Result<(), ConvertError> {
    let user = FieldDescriptor::object([
        ("name", FieldDescriptor::string()),
        ("age", FieldDescriptor::number()),
        ("isHappy", FieldDescriptor::boolean()),
        ("birthday", FieldDescriptor::date()),
    ]);

    let def = convert_object(&user)?;

    assert_eq!(def.len(), 4);
    assert_eq!(def.get("name"), Some(&bare(SchemaType::String)));
    assert_eq!(def.get("age"), Some(&bare(SchemaType::Number)));
    assert_eq!(def.get("isHappy"), Some(&bare(SchemaType::Boolean)));
    assert_eq!(def.get("birthday"), Some(&bare(SchemaType::Date)));
    assert_eq!(
        def.to_json(),
        json!({"name": "String", "age": "Number", "isHappy": "Boolean", "birthday": "Date"})
    );
    Ok(())
}

#[test]
fn captured_defaults_are_annotated() -> Result<(), ConvertError> {
    let user = FieldDescriptor::object([
        ("name", FieldDescriptor::string().default_value("Bob")),
        ("age", FieldDescriptor::number().default_value(3)),
    ]);

    let def = convert_object(&user)?;

    assert_eq!(
        def.get("name"),
        Some(&FieldSpec::with_default(
            MappedType::Scalar(SchemaType::String),
            json!("Bob")
        ))
    );
    assert_eq!(
        def.to_json(),
        json!({
            "name": {"type": "String", "default": "Bob"},
            "age": {"type": "Number", "default": 3},
        })
    );
    Ok(())
}

#[test]
fn optional_nullable_gets_null_default() -> Result<(), ConvertError> {
    let spec = map_field("deletedAt", &FieldDescriptor::string().optional().nullable())?;
    assert_eq!(spec, null_default(SchemaType::String));
    Ok(())
}

#[test]
fn optional_alone_is_not_annotated() -> Result<(), ConvertError> {
    let spec = map_field("nickname", &FieldDescriptor::string().optional())?;
    assert_eq!(spec, bare(SchemaType::String));
    Ok(())
}

#[test]
fn explicit_default_wins_over_nullable_by_default() -> Result<(), ConvertError> {
    let desc = FieldDescriptor::string().nullable().default_value("x");

    let spec = map_field("status", &desc)?;
    assert_eq!(spec.default(), Some(&json!("x")));

    let options = ConvertOptions::new().with_default_precedence(DefaultPrecedence::NullDefault);
    let spec = map_field_with_options("status", &desc, options)?;
    assert_eq!(spec.default(), Some(&json!(null)));
    Ok(())
}

#[test]
fn nested_objects_recurse_fully() -> Result<(), ConvertError> {
    let person = FieldDescriptor::object([
        ("name", FieldDescriptor::string()),
        (
            "address",
            FieldDescriptor::object([
                ("street", FieldDescriptor::string()),
                ("zip", FieldDescriptor::number().nullable()),
            ]),
        ),
    ]);

    let def = convert_object(&person)?;

    let Some(FieldSpec::Bare(MappedType::Object(address))) = def.get("address") else {
        panic!("expected nested definition, got {:?}", def.get("address"));
    };
    assert_eq!(address.keys().collect::<Vec<_>>(), vec!["street", "zip"]);
    assert_eq!(address.get("zip"), Some(&null_default(SchemaType::Number)));
    Ok(())
}

#[test]
fn array_of_primitive_is_single_element_array() -> Result<(), ConvertError> {
    let def = convert_object(&FieldDescriptor::object([(
        "tags",
        FieldDescriptor::array(FieldDescriptor::string()),
    )]))?;

    assert_eq!(def.to_json(), json!({"tags": ["String"]}));
    Ok(())
}

#[test]
fn array_of_object_holds_one_nested_shape() -> Result<(), ConvertError> {
    let def = convert_object(&FieldDescriptor::object([(
        "items",
        FieldDescriptor::array(FieldDescriptor::object([
            ("name", FieldDescriptor::string()),
            ("value", FieldDescriptor::number()),
        ])),
    )]))?;

    assert_eq!(
        def.to_json(),
        json!({"items": [{"name": "String", "value": "Number"}]})
    );
    Ok(())
}

#[test]
fn array_element_modifiers_are_honored() -> Result<(), ConvertError> {
    let spec = map_field(
        "scores",
        &FieldDescriptor::array(FieldDescriptor::number().nullable()).default_value(json!([])),
    )?;

    let expected = FieldSpec::with_default(
        MappedType::Array(Box::new(null_default(SchemaType::Number))),
        json!([]),
    );
    assert_eq!(spec, expected);
    Ok(())
}

#[test]
fn enums_keep_declared_order() -> Result<(), ConvertError> {
    let spec = map_field("role", &FieldDescriptor::enumeration(["admin", "user", "guest"]))?;

    assert_eq!(
        spec,
        FieldSpec::Bare(MappedType::Enum(EnumSpec::new(vec![
            json!("admin"),
            json!("user"),
            json!("guest"),
        ])))
    );
    Ok(())
}

#[test]
fn native_enum_uses_values_not_keys() -> Result<(), ConvertError> {
    let def = convert_object(&FieldDescriptor::object([(
        "color",
        FieldDescriptor::native_enum([("Red", "red"), ("Green", "green")]),
    )]))?;

    assert_eq!(
        def.to_json(),
        json!({"color": {"type": "String", "enum": ["red", "green"]}})
    );
    Ok(())
}

#[test]
fn enum_default_is_merged_into_enum_object() -> Result<(), ConvertError> {
    let def = convert_object(&FieldDescriptor::object([(
        "role",
        FieldDescriptor::enumeration(["admin", "user"]).default_value("user"),
    )]))?;

    assert_eq!(
        def.to_json(),
        json!({"role": {"type": "String", "enum": ["admin", "user"], "default": "user"}})
    );
    Ok(())
}

#[test]
fn general_union_maps_to_mixed() -> Result<(), ConvertError> {
    let spec = map_field(
        "salutation",
        &FieldDescriptor::union([FieldDescriptor::string(), FieldDescriptor::literal("Dr.")]),
    )?;
    assert_eq!(spec, bare(SchemaType::Mixed));
    Ok(())
}

#[test]
fn union_with_null_maps_other_member_with_null_default() -> Result<(), ConvertError> {
    let leading_null = map_field(
        "a",
        &FieldDescriptor::union([FieldDescriptor::null(), FieldDescriptor::number()]),
    )?;
    let trailing_null = map_field(
        "b",
        &FieldDescriptor::union([FieldDescriptor::string(), FieldDescriptor::literal(json!(null))]),
    )?;

    assert_eq!(leading_null, null_default(SchemaType::Number));
    assert_eq!(trailing_null, null_default(SchemaType::String));
    Ok(())
}

#[test]
fn union_with_null_ignores_member_default() -> Result<(), ConvertError> {
    let spec = map_field(
        "a",
        &FieldDescriptor::union([
            FieldDescriptor::string().default_value("ignored"),
            FieldDescriptor::null(),
        ]),
    )?;
    assert_eq!(spec, null_default(SchemaType::String));
    Ok(())
}

#[test]
fn union_with_null_keeps_outer_default() -> Result<(), ConvertError> {
    let spec = map_field(
        "a",
        &FieldDescriptor::union([FieldDescriptor::string(), FieldDescriptor::null()])
            .default_value("outer"),
    )?;
    assert_eq!(spec.default(), Some(&json!("outer")));
    Ok(())
}

#[test]
fn three_member_union_with_null_is_mixed() -> Result<(), ConvertError> {
    let spec = map_field(
        "a",
        &FieldDescriptor::union([
            FieldDescriptor::string(),
            FieldDescriptor::number(),
            FieldDescriptor::null(),
        ]),
    )?;
    assert_eq!(spec, bare(SchemaType::Mixed));
    Ok(())
}

#[test]
fn unsupported_kind_names_the_field() {
    let err = convert_object(&FieldDescriptor::object([
        ("name", FieldDescriptor::string()),
        ("count", FieldDescriptor::BigInt),
    ]))
    .unwrap_err();

    assert_eq!(
        err,
        ConvertError::UnsupportedType {
            path: "count".to_string(),
            type_name: "bigint".to_string(),
        }
    );
    assert_eq!(err.to_string(), "unsupported type 'bigint' for field 'count'");
}

#[test]
fn unsupported_kind_path_is_qualified_when_nested() {
    let err = convert_object(&FieldDescriptor::object([(
        "orders",
        FieldDescriptor::array(FieldDescriptor::object([(
            "meta",
            FieldDescriptor::object([("raw", FieldDescriptor::Other("tuple".to_string()))]),
        )])),
    )]))
    .unwrap_err();

    assert_eq!(err.path(), "orders[].meta.raw");
}

#[test]
fn unsupported_array_element_is_reported() {
    let err = map_field("ids", &FieldDescriptor::array(FieldDescriptor::BigInt)).unwrap_err();
    assert_eq!(err.path(), "ids[]");
}

#[test]
fn standalone_literal_is_unsupported() {
    let err = map_field("title", &FieldDescriptor::literal("Dr.")).unwrap_err();
    assert_eq!(err.to_string(), "unsupported type 'literal' for field 'title'");
}

#[test]
fn metadata_entries_are_skipped() -> Result<(), ConvertError> {
    let shape = Shape::new()
        .with_field("a", FieldDescriptor::string())
        .with_metadata("_def", json!({"typeName": "ZodObject"}))
        .with_field("b", FieldDescriptor::number());

    let def = convert_shape(&shape)?;

    assert_eq!(def.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    Ok(())
}

#[test]
fn root_modifiers_are_ignored() -> Result<(), ConvertError> {
    let desc = FieldDescriptor::object([("a", FieldDescriptor::string())])
        .optional()
        .nullable();

    let def = convert_object(&desc)?;
    assert_eq!(def.get("a"), Some(&bare(SchemaType::String)));
    Ok(())
}

#[test]
fn non_object_root_is_rejected() {
    let err = convert_object(&FieldDescriptor::string()).unwrap_err();
    assert_eq!(err.path(), "<root>");
}

#[test]
fn conversion_is_repeatable() -> Result<(), ConvertError> {
    let desc = FieldDescriptor::object([
        ("a", FieldDescriptor::string().nullable()),
        ("b", FieldDescriptor::array(FieldDescriptor::date())),
    ]);
    let options = ConvertOptions::default();

    assert_eq!(
        convert_object_with_options(&desc, options)?,
        convert_object_with_options(&desc, options)?
    );
    Ok(())
}
