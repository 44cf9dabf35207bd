use crate::coercion::coerce_input_value_collecting;
use crate::coercion::coerce_input_value_with;
use crate::coercion::CoercionErrorReport;
use crate::coercion::VariableCoercionError;
use crate::schema::Schema;
use crate::Value;
use crate::Variable;
use indexmap::IndexMap;

/// A reasonable error limit for [`coerce_variable_values()`] when coercing
/// untrusted input.
pub const DEFAULT_MAX_VARIABLE_ERRORS: usize = 50;

/// Coerce the raw `inputs` of an operation against its `variables`
/// definitions.
///
/// Every error is collected until `max_errors` errors have been found; the
/// next error aborts coercion and [`VariableCoercionError::TooManyErrors`] is
/// appended to the errors returned.
///
/// Variables that are absent from `inputs` but declare a default value are
/// given the coerced default. Absent nullable variables without a default are
/// left out of the result.
pub fn coerce_variable_values(
    schema: &Schema,
    variables: &[Variable],
    inputs: &IndexMap<String, Value>,
    max_errors: Option<usize>,
) -> Result<IndexMap<String, Value>, Vec<VariableCoercionError>> {
    let mut errors = VariableErrors {
        errors: vec![],
        max_errors,
    };

    match coerce_variables(schema, variables, inputs, &mut errors) {
        Ok(coerced) if errors.errors.is_empty() => Ok(coerced),
        Ok(_) => Err(errors.errors),
        Err(ErrorLimitReached) => {
            log::debug!(
                "Aborted variable coercion after {} errors",
                errors.errors.len(),
            );
            let mut errors = errors.errors;
            errors.push(VariableCoercionError::TooManyErrors);
            Err(errors)
        },
    }
}

struct ErrorLimitReached;

struct VariableErrors {
    errors: Vec<VariableCoercionError>,
    max_errors: Option<usize>,
}
impl VariableErrors {
    fn push(
        &mut self,
        error: VariableCoercionError,
    ) -> Result<(), ErrorLimitReached> {
        if self.max_errors.is_some_and(|max_errors| self.errors.len() >= max_errors) {
            return Err(ErrorLimitReached);
        }
        self.errors.push(error);
        Ok(())
    }
}

fn coerce_variables(
    schema: &Schema,
    variables: &[Variable],
    inputs: &IndexMap<String, Value>,
    errors: &mut VariableErrors,
) -> Result<IndexMap<String, Value>, ErrorLimitReached> {
    let mut coerced_values = IndexMap::with_capacity(variables.len());
    for variable in variables {
        let variable_name = variable.name();
        let type_annotation = variable.type_annotation();

        if !schema.is_defined(type_annotation) {
            errors.push(VariableCoercionError::NonInputType {
                type_annotation: type_annotation.to_string(),
                variable_name: variable_name.to_string(),
            })?;
            continue;
        }

        match inputs.get(variable_name) {
            None | Some(Value::Undefined) => {
                if let Some(default_value) = variable.default_value() {
                    let (coerced, reports) = coerce_input_value_collecting(
                        schema,
                        default_value,
                        type_annotation,
                    );
                    if reports.is_empty() {
                        coerced_values.insert(variable_name.to_string(), coerced);
                    }
                    for report in reports {
                        errors.push(VariableCoercionError::InvalidDefaultValue {
                            report,
                            variable_name: variable_name.to_string(),
                        })?;
                    }
                } else if type_annotation.is_non_null() {
                    errors.push(VariableCoercionError::RequiredVariableNotProvided {
                        type_annotation: type_annotation.to_string(),
                        variable_name: variable_name.to_string(),
                    })?;
                }
            },

            Some(Value::Null) if type_annotation.is_non_null() =>
                errors.push(VariableCoercionError::NullForNonNullVariable {
                    type_annotation: type_annotation.to_string(),
                    variable_name: variable_name.to_string(),
                })?,

            Some(value) => {
                let coerced = coerce_input_value_with(
                    schema,
                    value,
                    type_annotation,
                    &mut |report: CoercionErrorReport| {
                        errors.push(VariableCoercionError::InvalidValue {
                            report,
                            variable_name: variable_name.to_string(),
                        })
                    },
                )?;
                coerced_values.insert(variable_name.to_string(), coerced);
            },
        }
    }
    Ok(coerced_values)
}
