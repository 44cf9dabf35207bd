use crate::loc;
use crate::path::PathSegment;
use crate::types::TypeAnnotation;
use crate::Value;

/// Represents an
/// [input field](https://spec.graphql.org/October2021/#InputFieldsDefinition)
/// defined on an [crate::types::InputObjectType].
#[derive(Clone, Debug, PartialEq)]
pub struct InputField {
    /// Paths (within the default value) of enum literals written in SDL.
    pub(crate) default_enum_literals: Vec<(Vec<PathSegment>, String)>,
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) default_value: Option<Value>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl InputField {
    pub fn new(name: impl Into<String>, type_annotation: TypeAnnotation) -> Self {
        Self {
            default_enum_literals: vec![],
            def_location: loc::SourceLocation::Schema,
            default_value: None,
            description: None,
            name: name.into(),
            type_annotation,
        }
    }

    /// Declare a default value for this field, written in its external
    /// (input) form. [`SchemaBuilder::build()`](crate::schema::SchemaBuilder::build)
    /// coerces it against the field's type and stores the coerced result.
    pub fn with_default_value(mut self, default_value: impl Into<Value>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`InputField`] was defined.
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// The value used when input omits this field, if one was declared.
    ///
    /// Note that `Some(Value::Null)` (an explicit `= null` default) differs
    /// from `None` (no default).
    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// The description of this [`InputField`] as defined in the schema
    /// (e.g. in a `"""`-string immediately before the input field definition).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The name of this [`InputField`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The [`TypeAnnotation`] specifying the schema-defined type of this
    /// [`InputField`].
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
