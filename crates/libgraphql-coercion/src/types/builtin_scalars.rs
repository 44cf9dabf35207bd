//! Parse functions for the
//! [built-in scalars](https://spec.graphql.org/October2021/#sec-Scalars.Built-in-Scalars)
//! registered in every [`Schema`](crate::schema::Schema).

use crate::loc;
use crate::types::ScalarParseError;
use crate::types::ScalarParseOutcome;
use crate::types::ScalarType;
use crate::Value;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, ScalarParseError>;

pub const BOOLEAN_TYPE_NAME: &str = "Boolean";
pub const FLOAT_TYPE_NAME: &str = "Float";
pub const ID_TYPE_NAME: &str = "ID";
pub const INT_TYPE_NAME: &str = "Int";
pub const STRING_TYPE_NAME: &str = "String";

#[derive(Clone, Debug, Error, PartialEq)]
pub enum BuiltinScalarParseError {
    #[error("Boolean cannot represent a non boolean value: {0}")]
    NonBooleanValue(String),

    #[error("Float cannot represent non numeric value: {0}")]
    NonNumericFloatValue(String),

    #[error("Int cannot represent non-integer value: {0}")]
    NonIntegerValue(String),

    #[error("Int cannot represent non 32-bit signed integer value: {0}")]
    NonInt32Value(String),

    #[error("ID cannot represent value: {0}")]
    NonIdValue(String),

    #[error("String cannot represent a non string value: {0}")]
    NonStringValue(String),
}

/// Accepts booleans only.
pub fn parse_boolean(value: &Value) -> Result<ScalarParseOutcome> {
    match value {
        Value::Bool(_) => Ok(ScalarParseOutcome::Parsed(value.clone())),
        _ => Err(BuiltinScalarParseError::NonBooleanValue(value.to_string()).into()),
    }
}

/// Accepts integers, finite floats and numeric strings.
pub fn parse_float(value: &Value) -> Result<ScalarParseOutcome> {
    let num = match value {
        Value::Float(num) => Some(*num),
        Value::Int(num) => Some(*num as f64),
        Value::String(str) => parse_numeric_str(str),
        _ => None,
    };

    match num {
        Some(num) if num.is_finite() =>
            Ok(ScalarParseOutcome::Parsed(Value::Float(num))),
        _ => Err(BuiltinScalarParseError::NonNumericFloatValue(value.to_string()).into()),
    }
}

/// Accepts strings and integers; integers are converted to their decimal
/// string form.
pub fn parse_id(value: &Value) -> Result<ScalarParseOutcome> {
    match value {
        Value::String(_) => Ok(ScalarParseOutcome::Parsed(value.clone())),
        Value::Int(num) => Ok(ScalarParseOutcome::Parsed(Value::String(num.to_string()))),
        _ => Err(BuiltinScalarParseError::NonIdValue(value.to_string()).into()),
    }
}

/// Accepts integers, integral floats and numeric strings that fit within a
/// signed 32-bit integer.
pub fn parse_int(value: &Value) -> Result<ScalarParseOutcome> {
    let num = match value {
        Value::Int(num) => {
            return if i32::try_from(*num).is_ok() {
                Ok(ScalarParseOutcome::Parsed(Value::Int(*num)))
            } else {
                Err(BuiltinScalarParseError::NonInt32Value(value.to_string()).into())
            };
        },
        Value::Float(num) => *num,
        Value::String(str) => match parse_numeric_str(str) {
            Some(num) => num,
            None => return Err(
                BuiltinScalarParseError::NonIntegerValue(value.to_string()).into()
            ),
        },
        _ => return Err(
            BuiltinScalarParseError::NonIntegerValue(value.to_string()).into()
        ),
    };

    if num.is_nan() || num > i32::MAX as f64 || num < i32::MIN as f64 {
        return Err(BuiltinScalarParseError::NonInt32Value(value.to_string()).into());
    }
    if num.fract() != 0.0 {
        return Err(BuiltinScalarParseError::NonIntegerValue(value.to_string()).into());
    }
    Ok(ScalarParseOutcome::Parsed(Value::Int(num as i64)))
}

/// Accepts strings; booleans and numbers are converted to their string form.
pub fn parse_string(value: &Value) -> Result<ScalarParseOutcome> {
    match value {
        Value::String(_) => Ok(ScalarParseOutcome::Parsed(value.clone())),
        Value::Bool(_) | Value::Float(_) | Value::Int(_) =>
            Ok(ScalarParseOutcome::Parsed(Value::String(value.to_string()))),
        _ => Err(BuiltinScalarParseError::NonStringValue(value.to_string()).into()),
    }
}

pub(crate) fn builtin_scalar_types() -> Vec<ScalarType> {
    let builtin = |name: &str, parse_fn: fn(&Value) -> Result<ScalarParseOutcome>| {
        ScalarType {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            description: None,
            name: name.to_string(),
            parse_fn: Arc::new(parse_fn),
        }
    };

    vec![
        builtin(BOOLEAN_TYPE_NAME, parse_boolean),
        builtin(FLOAT_TYPE_NAME, parse_float),
        builtin(ID_TYPE_NAME, parse_id),
        builtin(INT_TYPE_NAME, parse_int),
        builtin(STRING_TYPE_NAME, parse_string),
    ]
}

fn parse_numeric_str(str: &str) -> Option<f64> {
    let trimmed = str.trim();
    if trimmed.is_empty() {
        return None;
    }
    // Rust's float parser also accepts words like "inf" and "NaN".
    if !trimmed.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+' || c == '.') {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
