use std::sync::Arc;
use thiserror::Error;

/// The ways in which a value can fail to coerce to an input type.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CoercionErrorKind {
    /// Raised by a scalar parse function to explain a failure in its own
    /// words. Such errors are reported without any added context.
    Custom,

    /// A string that doesn't name any of the enum type's values, or a
    /// non-string value for an enum type.
    EnumValueNotFound,

    /// A null (or absent) value for a non-null type.
    NonNullViolation,

    /// A non-object value for an input object type.
    NotAnObject,

    /// An input object value that omits a non-null field without a default.
    RequiredFieldMissing,

    /// A scalar parse function failed with an error of its own.
    ScalarParseFailure,

    /// A scalar parse function rejected the value without explanation.
    ScalarParseRejected,

    /// An input object value with a key that the type doesn't declare.
    UnknownField,
}

#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub struct CoercionError {
    kind: CoercionErrorKind,
    message: String,
    #[source]
    source: Option<Arc<dyn std::error::Error + Send + Sync>>,
}
impl CoercionError {
    pub fn new(kind: CoercionErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// An error of kind [`CoercionErrorKind::Custom`], for scalar parse
    /// functions that want their message reported as-is.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::new(CoercionErrorKind::Custom, message)
    }

    /// Attach the lower-level error that caused this one.
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        self.source = Some(Arc::from(source.into()));
        self
    }

    pub fn kind(&self) -> CoercionErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// The same error with `prefix` prepended to its message.
    pub(crate) fn with_message_prefix(self, prefix: &str) -> Self {
        Self {
            message: format!("{prefix}{}", self.message),
            ..self
        }
    }
}
/// Sources are compared by presence only.
impl std::cmp::PartialEq for CoercionError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.message == other.message
            && self.source.is_some() == other.source.is_some()
    }
}
