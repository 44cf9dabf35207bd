use crate::loc;
use crate::Value;

/// Represents an
/// [enum value](https://spec.graphql.org/October2021/#sec-Enum-Value) defined
/// within a specific [`EnumType`](crate::types::EnumType).
///
/// Each enum value has a `name` (what external input must spell) and a
/// `value` (the internal payload that coercion produces for it). Enum values
/// loaded from a schema document use their name as their payload.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) value: Value,
}

impl EnumValue {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            def_location: loc::SourceLocation::Schema,
            description: None,
            value: Value::String(name.to_owned()),
            name,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Use `value` as the internal payload of this enum value.
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`EnumValue`] was defined.
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The name of this [`EnumValue`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The internal payload produced when coercing this [`EnumValue`].
    pub fn value(&self) -> &Value {
        &self.value
    }
}
