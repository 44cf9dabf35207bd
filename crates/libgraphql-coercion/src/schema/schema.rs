use crate::schema::SchemaBuilder;
use crate::types::InputType;
use crate::types::TypeAnnotation;
use std::collections::HashMap;

/// Represents a fully typechecked and immutable registry of GraphQL input
/// types.
///
/// Every named type referenced from within a [`Schema`] (by an input field's
/// [`TypeAnnotation`]) is guaranteed to be defined in it.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) types: HashMap<String, InputType>,
}
impl Schema {
    /// Returns a [`HashMap<String, InputType>`] containing all types defined
    /// within this [`Schema`].
    ///
    /// [^note] This map includes both types defined while building this
    /// [`Schema`] as well as the built-in scalars like `Int`.
    pub fn all_types(&self) -> &HashMap<String, InputType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn get_type(&self, name: &str) -> Option<&InputType> {
        self.types.get(name)
    }

    /// Indicates whether every named type referenced by `type_annotation` is
    /// defined in this [`Schema`].
    pub fn is_defined(&self, type_annotation: &TypeAnnotation) -> bool {
        self.types.contains_key(type_annotation.innermost_named_type_name())
    }
}
