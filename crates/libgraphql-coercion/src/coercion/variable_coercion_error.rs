use crate::coercion::CoercionErrorReport;
use crate::path::print_path;
use thiserror::Error;

/// Errors found while coercing a set of variable values (see
/// [`coerce_variable_values()`](crate::coerce_variable_values)).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum VariableCoercionError {
    #[error(
        "Variable \"${variable_name}\" expected value of type \
        \"{type_annotation}\" which cannot be used as an input type."
    )]
    NonInputType {
        type_annotation: String,
        variable_name: String,
    },

    #[error(
        "Variable \"${variable_name}\" has an invalid default value: {}",
        report.error(),
    )]
    InvalidDefaultValue {
        report: CoercionErrorReport,
        variable_name: String,
    },

    #[error(
        "Variable \"${variable_name}\" got invalid value {}{}; {}",
        report.invalid_value(),
        if report.path().is_empty() {
            String::new()
        } else {
            format!(" at \"{variable_name}{}\"", print_path(report.path()))
        },
        report.error(),
    )]
    InvalidValue {
        report: CoercionErrorReport,
        variable_name: String,
    },

    #[error(
        "Variable \"${variable_name}\" of non-null type \"{type_annotation}\" \
        must not be null."
    )]
    NullForNonNullVariable {
        type_annotation: String,
        variable_name: String,
    },

    #[error(
        "Variable \"${variable_name}\" of required type \"{type_annotation}\" \
        was not provided."
    )]
    RequiredVariableNotProvided {
        type_annotation: String,
        variable_name: String,
    },

    #[error(
        "Too many errors processing variables, error limit reached. Execution \
        aborted."
    )]
    TooManyErrors,
}
