use crate::loc;
use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::named_ref::NamedRef;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::InputObjectType;
use crate::types::ScalarType;

/// Represents a named GraphQL
/// [input type](https://spec.graphql.org/October2021/#sec-Input-and-Output-Types)
/// defined within a [`Schema`].
///
/// The set of variants is closed: every named input type is either an enum,
/// an input object or a scalar. Wrapping types (lists and non-null) are
/// represented by [`TypeAnnotation`](crate::types::TypeAnnotation).
#[derive(Clone, Debug, PartialEq)]
pub enum InputType {
    Enum(Box<EnumType>),
    InputObject(Box<InputObjectType>),
    Scalar(Box<ScalarType>),
}
impl InputType {
    /// Unwrap the [`EnumType`] if this type is one.
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    /// Unwrap the [`InputObjectType`] if this type is one.
    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    /// Unwrap the [`ScalarType`] if this type is one.
    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    /// The [`SourceLocation`](loc::SourceLocation) indicating where this type
    /// was defined.
    pub fn def_location(&self) -> &loc::SourceLocation {
        match self {
            Self::Enum(type_) => type_.def_location(),
            Self::InputObject(type_) => type_.def_location(),
            Self::Scalar(type_) => type_.def_location(),
        }
    }

    /// A human-readable name for the kind of this type (e.g. in error
    /// messages).
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Enum(_) => "enum",
            Self::InputObject(_) => "input object",
            Self::Scalar(_) => "scalar",
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Enum(type_) => type_.name(),
            Self::InputObject(type_) => type_.name(),
            Self::Scalar(type_) => type_.name(),
        }
    }
}
impl DerefByName for InputType {
    type Source = Schema;
    type RefLocation = loc::SourceLocation;

    fn deref_name<'a>(
        schema: &'a Schema,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> {
        schema.types.get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string())
        )
    }
}
impl std::convert::From<EnumType> for InputType {
    fn from(value: EnumType) -> Self {
        Self::Enum(Box::new(value))
    }
}
impl std::convert::From<InputObjectType> for InputType {
    fn from(value: InputObjectType) -> Self {
        Self::InputObject(Box::new(value))
    }
}
impl std::convert::From<ScalarType> for InputType {
    fn from(value: ScalarType) -> Self {
        Self::Scalar(Box::new(value))
    }
}

pub type NamedInputTypeRef = NamedRef<
    /* TSource = */ Schema,
    /* TRefLocation = */ loc::SourceLocation,
    /* TResource = */ InputType,
>;
