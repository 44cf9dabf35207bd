use crate::loc;
use crate::Value;
use std::sync::Arc;

/// The error type a [`ScalarParseFn`] may fail with.
///
/// A parser that fails with a [`CoercionError`](crate::CoercionError) has its
/// error forwarded to the error sink unchanged. Any other error is wrapped
/// into a [`CoercionError`](crate::CoercionError) that keeps it as its
/// [`source()`](std::error::Error::source).
pub type ScalarParseError = Box<dyn std::error::Error + Send + Sync>;

/// Converts an external value into a scalar's internal representation.
///
/// Parse functions are never called with [`Value::Null`] or
/// [`Value::Undefined`].
pub type ScalarParseFn = Arc<
    dyn Fn(&Value) -> Result<ScalarParseOutcome, ScalarParseError> + Send + Sync
>;

/// The successful outcomes of a [`ScalarParseFn`].
#[derive(Clone, Debug, PartialEq)]
pub enum ScalarParseOutcome {
    /// The input was accepted and represents null.
    Null,

    /// The input was accepted and parsed into the given value.
    ///
    /// `Parsed(Value::Undefined)` is treated the same as
    /// [`ScalarParseOutcome::Rejected`].
    Parsed(Value),

    /// The input is not acceptable for this scalar, without a more specific
    /// explanation.
    Rejected,
}

/// Represents a
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone)]
pub struct ScalarType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) parse_fn: ScalarParseFn,
}

impl ScalarType {
    pub fn new(
        name: impl Into<String>,
        parse_fn: impl Fn(&Value) -> Result<ScalarParseOutcome, ScalarParseError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::Schema,
            description: None,
            name: name.into(),
            parse_fn: Arc::new(parse_fn),
        }
    }

    /// A custom scalar that accepts any non-null value as-is.
    pub fn with_identity_parser(name: impl Into<String>) -> Self {
        Self::new(name, |value| Ok(ScalarParseOutcome::Parsed(value.clone())))
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`ScalarType`] was defined.
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// The description of this [`ScalarType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_builtin(&self) -> bool {
        self.def_location == loc::SourceLocation::GraphQLBuiltIn
    }

    /// The name of this [`ScalarType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parse_value(
        &self,
        value: &Value,
    ) -> Result<ScalarParseOutcome, ScalarParseError> {
        (self.parse_fn)(value)
    }
}
impl std::fmt::Debug for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarType")
            .field("def_location", &self.def_location)
            .field("description", &self.description)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
impl std::cmp::PartialEq for ScalarType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.def_location == other.def_location
            && self.description == other.description
            && Arc::ptr_eq(&self.parse_fn, &other.parse_fn)
    }
}
