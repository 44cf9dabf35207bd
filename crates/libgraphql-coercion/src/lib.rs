//! Coercion of GraphQL input values (variables, argument literals) into the
//! canonical representation demanded by a GraphQL
//! [input type](https://spec.graphql.org/October2021/#sec-Input-and-Output-Types).
//!
//! The entry points live in [`coercion`]: [`coerce_input_value`] fails on the
//! first error, while [`coerce_input_value_with`] accepts any
//! [`CoercionErrorSink`] so that callers can collect every error in a single
//! pass.

pub mod ast;
pub mod coercion;
mod file_reader;
pub mod loc;
mod named_ref;
pub mod path;
pub mod schema;
pub mod suggestions;
pub mod types;
mod value;
mod variable;

pub use coercion::coerce_input_value;
pub use coercion::coerce_input_value_collecting;
pub use coercion::coerce_input_value_with;
pub use coercion::coerce_variable_values;
pub use coercion::CoercionError;
pub use coercion::CoercionErrorKind;
pub use coercion::CoercionErrorReport;
pub use coercion::CoercionErrorSink;
pub use coercion::CollectErrors;
pub use coercion::DEFAULT_MAX_VARIABLE_ERRORS;
pub use coercion::FailFast;
pub use coercion::VariableCoercionError;
pub use file_reader::ReadContentError;
pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
pub use value::Value;
pub use variable::Variable;

#[cfg(test)]
mod tests;
