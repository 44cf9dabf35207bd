use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::EnumValue;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) values: IndexMap<String, EnumValue>,
}

impl EnumType {
    /// Create an [`EnumType`] whose values are ordered as given.
    ///
    /// Fails if two values share a name or if a value is named `true`,
    /// `false` or `null`.
    pub fn new(
        name: impl Into<String>,
        values: impl IntoIterator<Item = EnumValue>,
    ) -> Result<Self> {
        let mut enum_type = Self {
            def_location: loc::SourceLocation::Schema,
            description: None,
            name: name.into(),
            values: IndexMap::new(),
        };
        for value in values {
            enum_type.add_value(value)?;
        }
        Ok(enum_type)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub(crate) fn add_value(&mut self, value: EnumValue) -> Result<()> {
        // https://spec.graphql.org/October2021/#EnumValue
        if matches!(value.name(), "true" | "false" | "null") {
            return Err(SchemaBuildError::InvalidEnumValueName {
                enum_name: self.name.to_owned(),
                location: value.def_location.to_owned(),
                value_name: value.name.to_owned(),
            });
        }

        if let Some(existing_value) = self.values.get(value.name()) {
            return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                enum_name: self.name.to_owned(),
                value_def1: existing_value.def_location.to_owned(),
                value_def2: value.def_location.to_owned(),
                value_name: value.name.to_owned(),
            });
        }

        self.values.insert(value.name.to_owned(), value);
        Ok(())
    }

    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`EnumType`] was defined.
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The name of this [`EnumType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Look up one of this type's [`EnumValue`]s by name.
    pub fn value(&self, name: &str) -> Option<&EnumValue> {
        self.values.get(name)
    }

    /// The [`EnumValue`]s of this type, in definition order.
    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }
}
