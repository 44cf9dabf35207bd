use crate::coercion::CoercionError;
use crate::path::print_path;
use crate::path::PathSegment;
use crate::Value;

/// Everything known about a single coercion failure: where in the input it
/// happened, the value found there and what was wrong with it.
#[derive(Clone, Debug, PartialEq)]
pub struct CoercionErrorReport {
    error: CoercionError,
    invalid_value: Value,
    path: Vec<PathSegment>,
}
impl CoercionErrorReport {
    pub fn new(
        path: Vec<PathSegment>,
        invalid_value: Value,
        error: CoercionError,
    ) -> Self {
        Self {
            error,
            invalid_value,
            path,
        }
    }

    pub fn error(&self) -> &CoercionError {
        &self.error
    }

    pub fn into_error(self) -> CoercionError {
        self.error
    }

    /// The error with its message prefixed by the invalid value and (if
    /// non-empty) the path at which it was found, e.g.
    /// `Invalid value "x" at "value.ids[1]": Expected type "Int". ...`.
    pub fn into_prefixed_error(self) -> CoercionError {
        let prefix = self.message_prefix();
        self.error.with_message_prefix(prefix.as_str())
    }

    pub fn invalid_value(&self) -> &Value {
        &self.invalid_value
    }

    /// The path from the root of the input to the invalid value, root first.
    pub fn path(&self) -> &[PathSegment] {
        self.path.as_slice()
    }

    fn message_prefix(&self) -> String {
        if self.path.is_empty() {
            format!("Invalid value {}: ", self.invalid_value)
        } else {
            format!(
                "Invalid value {} at \"value{}\": ",
                self.invalid_value,
                print_path(&self.path),
            )
        }
    }
}
/// Renders the prefixed message (see [`CoercionErrorReport::into_prefixed_error()`]).
impl std::fmt::Display for CoercionErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.message_prefix(), self.error)
    }
}
