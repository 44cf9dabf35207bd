use crate::coercion::CoercionError;
use crate::coercion::CoercionErrorKind;
use crate::coercion::CoercionErrorReport;
use crate::coercion::CoercionErrorSink;
use crate::coercion::CollectErrors;
use crate::coercion::FailFast;
use crate::path::path_to_segments;
use crate::path::Path;
use crate::schema::Schema;
use crate::suggestions::did_you_mean;
use crate::suggestions::suggestion_list;
use crate::types::EnumType;
use crate::types::InputObjectType;
use crate::types::InputType;
use crate::types::ScalarParseOutcome;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::Value;
use indexmap::IndexMap;

/// Coerce `value` to `type_annotation`, failing on the first error.
///
/// The returned error's message is prefixed with the invalid value and the
/// path at which it was found (see [`FailFast`]).
///
/// # Panics
///
/// Panics if `type_annotation` refers to a type that isn't defined in
/// `schema`. Use [`Schema::is_defined()`] to check annotations that don't
/// come from the schema itself.
pub fn coerce_input_value(
    schema: &Schema,
    value: &Value,
    type_annotation: &TypeAnnotation,
) -> Result<Value, CoercionError> {
    coerce_input_value_with(schema, value, type_annotation, &mut FailFast)
}

/// Coerce `value` to `type_annotation`, collecting every error.
///
/// The coerced value is returned even when errors were found; it holds
/// [`Value::Undefined`] wherever an error prevented a result.
///
/// # Panics
///
/// See [`coerce_input_value()`].
pub fn coerce_input_value_collecting(
    schema: &Schema,
    value: &Value,
    type_annotation: &TypeAnnotation,
) -> (Value, Vec<CoercionErrorReport>) {
    let mut collector = CollectErrors::new();
    let coerced = match coerce_input_value_with(schema, value, type_annotation, &mut collector) {
        Ok(coerced) => coerced,
        Err(never) => match never {},
    };
    (coerced, collector.into_reports())
}

/// Coerce `value` to `type_annotation`, handing each error to `on_error` as
/// it's discovered. Coercion aborts as soon as `on_error` returns `Err`.
///
/// # Panics
///
/// See [`coerce_input_value()`].
pub fn coerce_input_value_with<S: CoercionErrorSink + ?Sized>(
    schema: &Schema,
    value: &Value,
    type_annotation: &TypeAnnotation,
    on_error: &mut S,
) -> Result<Value, S::Error> {
    InputValueCoercer {
        on_error,
        schema,
    }.coerce(value, type_annotation, None)
}

struct InputValueCoercer<'a, S: ?Sized> {
    on_error: &'a mut S,
    schema: &'a Schema,
}
impl<S: CoercionErrorSink + ?Sized> InputValueCoercer<'_, S> {
    fn coerce(
        &mut self,
        value: &Value,
        type_annotation: &TypeAnnotation,
        path: Option<&Path<'_>>,
    ) -> Result<Value, S::Error> {
        match type_annotation {
            TypeAnnotation::NonNull(inner_type) => {
                if value.is_null_or_undefined() {
                    self.report(path, value, CoercionError::new(
                        CoercionErrorKind::NonNullViolation,
                        format!(
                            "Expected non-nullable type \"{type_annotation}\" \
                            not to be null.",
                        ),
                    ))?;
                    return Ok(Value::Undefined);
                }
                self.coerce(value, inner_type, path)
            },

            _ if value.is_null_or_undefined() => Ok(Value::Null),

            TypeAnnotation::List(item_type) => match value {
                Value::List(items) => {
                    let mut coerced_items = Vec::with_capacity(items.len());
                    for (idx, item) in items.iter().enumerate() {
                        let item_path = Path::extend(path, idx);
                        coerced_items.push(
                            self.coerce(item, item_type, Some(&item_path))?,
                        );
                    }
                    Ok(Value::List(coerced_items))
                },

                // Lists accept a single item in place of a list of one.
                _ => Ok(Value::List(vec![self.coerce(value, item_type, path)?])),
            },

            TypeAnnotation::Named(type_ref) => {
                let schema = self.schema;
                let named_type = type_ref.deref(schema)
                    .expect("type is present in schema");
                match named_type {
                    InputType::Enum(enum_type) =>
                        self.coerce_enum(value, enum_type, path),
                    InputType::InputObject(inputobj_type) =>
                        self.coerce_input_object(value, inputobj_type, path),
                    InputType::Scalar(scalar_type) =>
                        self.coerce_scalar(value, scalar_type, path),
                }
            },
        }
    }

    fn coerce_enum(
        &mut self,
        value: &Value,
        enum_type: &EnumType,
        path: Option<&Path<'_>>,
    ) -> Result<Value, S::Error> {
        if let Some(enum_value) = value.as_str().and_then(|name| enum_type.value(name)) {
            return Ok(enum_value.value().clone());
        }

        let input_str = match value {
            Value::String(value_name) => value_name.to_owned(),
            _ => value.to_string(),
        };
        let suggestions = suggestion_list(
            input_str.as_str(),
            enum_type.values().keys(),
        );
        self.report(path, value, CoercionError::new(
            CoercionErrorKind::EnumValueNotFound,
            format!(
                "Expected type \"{}\".{}",
                enum_type.name(),
                did_you_mean(Some("the enum value"), &suggestions),
            ),
        ))?;
        Ok(Value::Undefined)
    }

    fn coerce_input_object(
        &mut self,
        value: &Value,
        inputobj_type: &InputObjectType,
        path: Option<&Path<'_>>,
    ) -> Result<Value, S::Error> {
        let Value::Object(entries) = value else {
            self.report(path, value, CoercionError::new(
                CoercionErrorKind::NotAnObject,
                format!("Expected type \"{}\" to be an object.", inputobj_type.name()),
            ))?;
            return Ok(Value::Undefined);
        };

        let mut coerced_fields = IndexMap::with_capacity(inputobj_type.fields().len());
        for (field_name, field) in inputobj_type.fields() {
            let field_type = field.type_annotation();
            match entries.get(field_name) {
                None | Some(Value::Undefined) => {
                    if let Some(default_value) = field.default_value() {
                        coerced_fields.insert(field_name.to_owned(), default_value.clone());
                    } else if field_type.is_non_null() {
                        self.report(path, value, CoercionError::new(
                            CoercionErrorKind::RequiredFieldMissing,
                            format!(
                                "Field \"{field_name}\" of required type \
                                \"{field_type}\" was not provided.",
                            ),
                        ))?;
                    }
                },

                Some(field_value) => {
                    let field_path = Path::extend(path, field_name.as_str());
                    let coerced_value =
                        self.coerce(field_value, field_type, Some(&field_path))?;
                    coerced_fields.insert(field_name.to_owned(), coerced_value);
                },
            }
        }

        for key in entries.keys() {
            if inputobj_type.field(key).is_some() {
                continue;
            }
            let suggestions = suggestion_list(
                key.as_str(),
                inputobj_type.fields().keys(),
            );
            self.report(path, value, CoercionError::new(
                CoercionErrorKind::UnknownField,
                format!(
                    "Field \"{key}\" is not defined by type \"{}\".{}",
                    inputobj_type.name(),
                    did_you_mean(None, &suggestions),
                ),
            ))?;
        }

        Ok(Value::Object(coerced_fields))
    }

    fn coerce_scalar(
        &mut self,
        value: &Value,
        scalar_type: &ScalarType,
        path: Option<&Path<'_>>,
    ) -> Result<Value, S::Error> {
        let error = match scalar_type.parse_value(value) {
            Ok(ScalarParseOutcome::Null) => return Ok(Value::Null),

            Ok(ScalarParseOutcome::Parsed(Value::Undefined))
            | Ok(ScalarParseOutcome::Rejected) => CoercionError::new(
                CoercionErrorKind::ScalarParseRejected,
                format!("Expected type \"{}\".", scalar_type.name()),
            ),

            Ok(ScalarParseOutcome::Parsed(parsed)) => return Ok(parsed),

            Err(err) => match err.downcast::<CoercionError>() {
                Ok(coercion_err) => *coercion_err,
                Err(err) => CoercionError::new(
                    CoercionErrorKind::ScalarParseFailure,
                    format!("Expected type \"{}\". {err}", scalar_type.name()),
                ).with_source(err),
            },
        };
        self.report(path, value, error)?;
        Ok(Value::Undefined)
    }

    fn report(
        &mut self,
        path: Option<&Path<'_>>,
        invalid_value: &Value,
        error: CoercionError,
    ) -> Result<(), S::Error> {
        let report = CoercionErrorReport::new(
            path_to_segments(path),
            invalid_value.clone(),
            error,
        );
        log::trace!("Input value coercion error: {report}");
        self.on_error.on_error(report)
    }
}
