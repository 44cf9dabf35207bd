use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::InputField;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects)
/// defined within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, InputField>,
    pub(crate) name: String,
}

impl InputObjectType {
    /// Create an [`InputObjectType`] whose fields are ordered as given.
    ///
    /// Fails if two fields share a name or if a field name starts with `__`.
    pub fn new(
        name: impl Into<String>,
        fields: impl IntoIterator<Item = InputField>,
    ) -> Result<Self> {
        let mut type_ = Self {
            def_location: loc::SourceLocation::Schema,
            description: None,
            fields: IndexMap::new(),
            name: name.into(),
        };
        for field in fields {
            type_.add_field(field)?;
        }
        Ok(type_)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub(crate) fn add_field(&mut self, field: InputField) -> Result<()> {
        // The input field must not have a name which begins with the
        // characters "__" (two underscores).
        //
        // https://spec.graphql.org/October2021/#sel-IAHhBXDDBDCAACCTx5b
        if field.name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                field_name: field.name.to_owned(),
                location: field.def_location.to_owned(),
                type_name: self.name.to_owned(),
            });
        }

        if let Some(existing_field) = self.fields.get(field.name()) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                field_def1: existing_field.def_location.to_owned(),
                field_def2: field.def_location.to_owned(),
                field_name: field.name.to_owned(),
                type_name: self.name.to_owned(),
            });
        }

        self.fields.insert(field.name.to_owned(), field);
        Ok(())
    }

    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`InputObjectType`] was defined.
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Look up one of this type's [`InputField`]s by name.
    pub fn field(&self, name: &str) -> Option<&InputField> {
        self.fields.get(name)
    }

    /// The [`InputField`]s of this type, in definition order.
    pub fn fields(&self) -> &IndexMap<String, InputField> {
        &self.fields
    }

    /// The name of this [`InputObjectType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
