use crate::loc;
use crate::types::TypeAnnotation;
use crate::types::TypeAnnotationParseError;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, TypeAnnotationParseError>;

#[test]
fn builders_render_graphql_syntax() {
    let annot = TypeAnnotation::list(
        TypeAnnotation::named("Int").non_null(),
    ).non_null();

    assert_eq!(annot.to_string(), "[Int!]!");
    assert_eq!(annot.innermost_named_type_name(), "Int");
    assert!(annot.is_non_null());
    assert!(!annot.nullable());
    assert_eq!(annot.nullable_type().to_string(), "[Int!]");
}

#[test]
fn non_null_is_idempotent() {
    let annot = TypeAnnotation::named("String").non_null().non_null();
    assert_eq!(annot.to_string(), "String!");
}

#[test]
fn parses_named_list_and_non_null_syntax() -> Result<()> {
    let annot: TypeAnnotation = "[ [Color!] ]!".parse()?;

    assert_eq!(annot.to_string(), "[[Color!]]!");
    assert!(annot.is_equivalent_to(
        &TypeAnnotation::list(
            TypeAnnotation::list(TypeAnnotation::named("Color").non_null()),
        ).non_null(),
    ));

    Ok(())
}

#[test]
fn parse_errors() {
    assert_eq!(
        "".parse::<TypeAnnotation>(),
        Err(TypeAnnotationParseError::ExpectedTypeName {
            found: "".to_string(),
        }),
    );
    assert_eq!(
        "[Int".parse::<TypeAnnotation>(),
        Err(TypeAnnotationParseError::UnclosedList {
            found: "".to_string(),
        }),
    );
    assert_eq!(
        "Int! extra".parse::<TypeAnnotation>(),
        Err(TypeAnnotationParseError::TrailingInput {
            trailing: "extra".to_string(),
        }),
    );
    assert!("1Int".parse::<TypeAnnotation>().is_err());
}

#[test]
fn equivalence_ignores_ref_locations() {
    let file_loc = loc::SourceLocation::SchemaFile(loc::FilePosition {
        col: 3,
        file: Box::new(PathBuf::from("schema.graphql")),
        line: 7,
    });
    let annot1 = TypeAnnotation::named_at("Int", file_loc.to_owned()).non_null();
    let annot2 = TypeAnnotation::named("Int").non_null();

    assert_ne!(annot1, annot2);
    assert!(annot1.is_equivalent_to(&annot2));
    assert!(!annot1.is_equivalent_to(&TypeAnnotation::named("Int")));
    assert_eq!(annot1.ref_location(), &file_loc);
}
