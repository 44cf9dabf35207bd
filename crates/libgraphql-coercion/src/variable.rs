use crate::loc;
use crate::types::TypeAnnotation;
use crate::Value;

/// A variable definition, e.g. `$limit: Int = 10`, as declared by an
/// operation.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) default_value: Option<Value>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Variable {
    /// `name` is given without its leading `$`.
    pub fn new(name: impl Into<String>, type_annotation: TypeAnnotation) -> Self {
        Self {
            def_location: loc::SourceLocation::Schema,
            default_value: None,
            name: name.into(),
            type_annotation,
        }
    }

    /// Declare a default value, written in its external (input) form.
    pub fn with_default_value(mut self, default_value: impl Into<Value>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn with_def_location(mut self, def_location: loc::SourceLocation) -> Self {
        self.def_location = def_location;
        self
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
