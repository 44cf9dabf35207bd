mod coerce_input_value;
mod coerce_variable_values;
mod coercion_error;
mod coercion_error_report;
mod coercion_error_sink;
mod variable_coercion_error;

pub use coerce_input_value::coerce_input_value;
pub use coerce_input_value::coerce_input_value_collecting;
pub use coerce_input_value::coerce_input_value_with;
pub use coerce_variable_values::coerce_variable_values;
pub use coerce_variable_values::DEFAULT_MAX_VARIABLE_ERRORS;
pub use coercion_error::CoercionError;
pub use coercion_error::CoercionErrorKind;
pub use coercion_error_report::CoercionErrorReport;
pub use coercion_error_sink::CoercionErrorSink;
pub use coercion_error_sink::CollectErrors;
pub use coercion_error_sink::FailFast;
pub use variable_coercion_error::VariableCoercionError;

#[cfg(test)]
mod tests;
