use crate::loc;
use crate::CoercionErrorReport;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "Input object fields may declare their types as a reference to an \
        input object type only if it does not create a circular chain of types \
        that cannot be broken with at least one nullable or list field. \
        Unbroken input-object cycle found: {}",
        circular_field_path.join(" -> "),
    )]
    CircularInputFieldChain {
        circular_field_path: Vec<String>,
    },

    #[error(
        "The default value declared for the `{type_name}.{field_name}` input \
        field is not valid for its type:\n{}",
        errors.iter()
            .map(|err| format!("    - {err}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    InvalidDefaultValue {
        def_location: loc::SourceLocation,
        errors: Vec<CoercionErrorReport>,
        field_name: String,
        type_name: String,
    },

    #[error(
        "Input fields can not be declared with a non-input type: The \
        `{parent_type_name}.{field_name}` field is an input field, but the \
        `{invalid_type_name}` type is a non-input type."
    )]
    InvalidInputFieldWithOutputType {
        def_location: loc::SourceLocation,
        field_name: String,
        invalid_type_name: String,
        parent_type_name: String,
    },

    #[error("There is no type defined with the name `{undefined_type_name}`")]
    UndefinedTypeName {
        ref_location: loc::SourceLocation,
        undefined_type_name: String,
    },
}
