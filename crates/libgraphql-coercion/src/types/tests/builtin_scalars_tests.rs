use crate::types::builtin_scalars;
use crate::types::builtin_scalars::BuiltinScalarParseError;
use crate::types::ScalarParseError;
use crate::types::ScalarParseOutcome;
use crate::Value;

fn parse_error(err: ScalarParseError) -> BuiltinScalarParseError {
    *err.downcast::<BuiltinScalarParseError>()
        .expect("error is a BuiltinScalarParseError")
}

mod int {
    use super::*;

    #[test]
    fn accepts_32bit_integers() {
        assert_eq!(
            builtin_scalars::parse_int(&Value::Int(42)).unwrap(),
            ScalarParseOutcome::Parsed(Value::Int(42)),
        );
        assert_eq!(
            builtin_scalars::parse_int(&Value::Int(i32::MIN.into())).unwrap(),
            ScalarParseOutcome::Parsed(Value::Int(i32::MIN.into())),
        );
    }

    #[test]
    fn accepts_integral_floats_and_numeric_strings() {
        assert_eq!(
            builtin_scalars::parse_int(&Value::Float(3.0)).unwrap(),
            ScalarParseOutcome::Parsed(Value::Int(3)),
        );
        assert_eq!(
            builtin_scalars::parse_int(&Value::from("-12")).unwrap(),
            ScalarParseOutcome::Parsed(Value::Int(-12)),
        );
    }

    #[test]
    fn rejects_fractional_values() {
        let err = parse_error(builtin_scalars::parse_int(&Value::Float(1.5)).unwrap_err());
        assert_eq!(err, BuiltinScalarParseError::NonIntegerValue("1.5".to_string()));
        assert_eq!(err.to_string(), "Int cannot represent non-integer value: 1.5");
    }

    #[test]
    fn rejects_values_outside_32bit_range() {
        let too_big = Value::Int(i64::from(i32::MAX) + 1);
        let err = parse_error(builtin_scalars::parse_int(&too_big).unwrap_err());
        assert_eq!(
            err.to_string(),
            "Int cannot represent non 32-bit signed integer value: 2147483648",
        );
    }

    #[test]
    fn rejects_non_numeric_values() {
        let err = parse_error(builtin_scalars::parse_int(&Value::from("abc")).unwrap_err());
        assert_eq!(err.to_string(), "Int cannot represent non-integer value: \"abc\"");

        let err = parse_error(builtin_scalars::parse_int(&Value::Bool(true)).unwrap_err());
        assert_eq!(err.to_string(), "Int cannot represent non-integer value: true");
    }
}

mod float {
    use super::*;

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        assert_eq!(
            builtin_scalars::parse_float(&Value::Int(2)).unwrap(),
            ScalarParseOutcome::Parsed(Value::Float(2.0)),
        );
        assert_eq!(
            builtin_scalars::parse_float(&Value::Float(-0.25)).unwrap(),
            ScalarParseOutcome::Parsed(Value::Float(-0.25)),
        );
        assert_eq!(
            builtin_scalars::parse_float(&Value::from("1e3")).unwrap(),
            ScalarParseOutcome::Parsed(Value::Float(1000.0)),
        );
    }

    #[test]
    fn rejects_non_finite_and_non_numeric_values() {
        assert!(builtin_scalars::parse_float(&Value::Float(f64::INFINITY)).is_err());
        assert!(builtin_scalars::parse_float(&Value::from("NaN")).is_err());

        let err = parse_error(
            builtin_scalars::parse_float(&Value::List(vec![])).unwrap_err(),
        );
        assert_eq!(err.to_string(), "Float cannot represent non numeric value: []");
    }
}

mod string {
    use super::*;

    #[test]
    fn stringifies_scalar_values() {
        assert_eq!(
            builtin_scalars::parse_string(&Value::from("abc")).unwrap(),
            ScalarParseOutcome::Parsed(Value::from("abc")),
        );
        assert_eq!(
            builtin_scalars::parse_string(&Value::Bool(false)).unwrap(),
            ScalarParseOutcome::Parsed(Value::from("false")),
        );
        assert_eq!(
            builtin_scalars::parse_string(&Value::Int(7)).unwrap(),
            ScalarParseOutcome::Parsed(Value::from("7")),
        );
        assert_eq!(
            builtin_scalars::parse_string(&Value::Float(1.5)).unwrap(),
            ScalarParseOutcome::Parsed(Value::from("1.5")),
        );
    }

    #[test]
    fn rejects_composite_values() {
        let value = Value::object([("a", Value::Int(1))]);
        let err = parse_error(builtin_scalars::parse_string(&value).unwrap_err());
        assert_eq!(err.to_string(), "String cannot represent a non string value: { a: 1 }");
    }
}

#[test]
fn boolean_accepts_only_booleans() {
    assert_eq!(
        builtin_scalars::parse_boolean(&Value::Bool(true)).unwrap(),
        ScalarParseOutcome::Parsed(Value::Bool(true)),
    );

    let err = parse_error(builtin_scalars::parse_boolean(&Value::Int(1)).unwrap_err());
    assert_eq!(err.to_string(), "Boolean cannot represent a non boolean value: 1");
}

#[test]
fn id_accepts_strings_and_integers() {
    assert_eq!(
        builtin_scalars::parse_id(&Value::from("abc")).unwrap(),
        ScalarParseOutcome::Parsed(Value::from("abc")),
    );
    assert_eq!(
        builtin_scalars::parse_id(&Value::Int(5)).unwrap(),
        ScalarParseOutcome::Parsed(Value::from("5")),
    );

    let err = parse_error(builtin_scalars::parse_id(&Value::Float(1.5)).unwrap_err());
    assert_eq!(err.to_string(), "ID cannot represent value: 1.5");
}
