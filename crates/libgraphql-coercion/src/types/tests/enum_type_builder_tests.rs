use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::EnumTypeBuilder;
use crate::types::InputType;
use crate::types::TypesMapBuilder;
use crate::types::tests::test_utils;
use crate::Value;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[test]
fn visit_enum_def_preserves_value_order() -> Result<()> {
    let enum_name = "Color";
    let enum_def =
        test_utils::parse_enum_type_def(
            enum_name,
            format!("enum {enum_name} {{ RED GREEN BLUE }}").as_str(),
        )
        .expect("parse error")
        .expect("no enum type def found");
    let schema_path = PathBuf::from("str://0");

    let mut types_map_builder = TypesMapBuilder::new();
    let mut enum_builder = EnumTypeBuilder::new();
    enum_builder.visit_type_def(
        &mut types_map_builder,
        Some(schema_path.as_path()),
        &enum_def,
    )?;
    let enum_type = test_utils::get_enum_type(&mut types_map_builder, enum_name);

    assert_eq!(enum_type.name(), enum_name);
    assert_eq!(enum_type.def_location(), &loc::SourceLocation::SchemaFile(
        loc::FilePosition {
            col: 1,
            file: Box::new(schema_path),
            line: 1,
        },
    ));
    assert_eq!(
        enum_type.values().keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["RED", "GREEN", "BLUE"],
    );
    let red = enum_type.value("RED").expect("RED is defined");
    assert_eq!(red.value(), &Value::String("RED".to_string()));

    Ok(())
}

#[test]
fn visit_enum_def_with_duplicate_value_fails() {
    let enum_def =
        test_utils::parse_enum_type_def("Color", "enum Color { RED RED }")
            .expect("parse error")
            .expect("no enum type def found");

    let mut types_map_builder = TypesMapBuilder::new();
    let mut enum_builder = EnumTypeBuilder::new();
    let result = enum_builder.visit_type_def(
        &mut types_map_builder,
        None,
        &enum_def,
    );

    assert!(matches!(
        result,
        Err(SchemaBuildError::DuplicateEnumValueDefinition { enum_name, value_name, .. })
            if enum_name == "Color" && value_name == "RED",
    ));
}

#[test]
fn visit_enum_def_with_reserved_value_name_fails() {
    let enum_def =
        test_utils::parse_enum_type_def("Flag", "enum Flag { null }")
            .expect("parse error")
            .expect("no enum type def found");

    let mut types_map_builder = TypesMapBuilder::new();
    let mut enum_builder = EnumTypeBuilder::new();
    let result = enum_builder.visit_type_def(
        &mut types_map_builder,
        None,
        &enum_def,
    );

    assert!(matches!(
        result,
        Err(SchemaBuildError::InvalidEnumValueName { value_name, .. })
            if value_name == "null",
    ));
}

#[test]
fn extension_before_definition_is_applied_at_finalize() -> Result<()> {
    let schema_path = Path::new("str://0");
    let enum_ext =
        test_utils::parse_enum_type_ext("Color", "extend enum Color { BLUE }")
            .expect("parse error")
            .expect("no enum type ext found");
    let enum_def =
        test_utils::parse_enum_type_def("Color", "enum Color { RED }")
            .expect("parse error")
            .expect("no enum type def found");

    let mut types_map_builder = TypesMapBuilder::new();
    let mut enum_builder = EnumTypeBuilder::new();
    enum_builder.visit_type_extension(
        &mut types_map_builder,
        Some(schema_path),
        enum_ext,
    )?;
    enum_builder.visit_type_def(
        &mut types_map_builder,
        Some(schema_path),
        &enum_def,
    )?;
    enum_builder.finalize(&mut types_map_builder)?;

    let enum_type = test_utils::get_enum_type(&mut types_map_builder, "Color");
    assert_eq!(
        enum_type.values().keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["RED", "BLUE"],
    );

    Ok(())
}

#[test]
fn extension_of_undefined_type_fails_at_finalize() -> Result<()> {
    let enum_ext =
        test_utils::parse_enum_type_ext("Color", "extend enum Color { BLUE }")
            .expect("parse error")
            .expect("no enum type ext found");

    let mut types_map_builder = TypesMapBuilder::new();
    let mut enum_builder = EnumTypeBuilder::new();
    enum_builder.visit_type_extension(&mut types_map_builder, None, enum_ext)?;

    assert_eq!(
        enum_builder.finalize(&mut types_map_builder),
        Err(SchemaBuildError::ExtensionOfUndefinedType {
            type_name: "Color".to_string(),
            extension_location: loc::SourceLocation::Schema,
        }),
    );

    Ok(())
}

#[test]
fn extension_of_non_enum_type_fails() {
    let enum_ext =
        test_utils::parse_enum_type_ext("Int", "extend enum Int { ONE }")
            .expect("parse error")
            .expect("no enum type ext found");

    let mut types_map_builder = TypesMapBuilder::new();
    let mut enum_builder = EnumTypeBuilder::new();
    let result = enum_builder.visit_type_extension(
        &mut types_map_builder,
        None,
        enum_ext,
    );

    assert!(matches!(
        result,
        Err(SchemaBuildError::InvalidExtensionType {
            schema_type: InputType::Scalar(_),
            ..
        }),
    ));
}
