use crate::ast;
use crate::loc;
use crate::types::NamedInputTypeRef;
use thiserror::Error;

type Result<T> = std::result::Result<T, TypeAnnotationParseError>;

/// Represents the annotated type of an
/// [`InputField`](crate::types::InputField) or
/// [`Variable`](crate::Variable), e.g. `[Int!]!`.
///
/// `List` and `NonNull` wrap another annotation; `Named` refers to an
/// [`InputType`](crate::types::InputType) by name, to be resolved against a
/// [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    List(Box<TypeAnnotation>),
    Named(NamedInputTypeRef),
    NonNull(Box<TypeAnnotation>),
}
impl TypeAnnotation {
    /// A list of `item_type`.
    pub fn list(item_type: TypeAnnotation) -> Self {
        Self::List(Box::new(item_type))
    }

    /// A reference to the named type `type_name`.
    pub fn named(type_name: impl AsRef<str>) -> Self {
        Self::named_at(type_name, loc::SourceLocation::Schema)
    }

    pub fn named_at(
        type_name: impl AsRef<str>,
        ref_location: loc::SourceLocation,
    ) -> Self {
        Self::Named(NamedInputTypeRef::new(type_name, ref_location))
    }

    /// Wrap this annotation as non-nullable. Wrapping an annotation that is
    /// already non-nullable returns it unchanged.
    pub fn non_null(self) -> Self {
        if self.is_non_null() {
            self
        } else {
            Self::NonNull(Box::new(self))
        }
    }

    pub(crate) fn from_ast_type(
        ref_location: &loc::SourceLocation,
        ast_type: &ast::query::Type,
    ) -> Self {
        match ast_type {
            ast::query::Type::ListType(inner) =>
                Self::list(Self::from_ast_type(ref_location, inner)),

            ast::query::Type::NamedType(name) =>
                Self::named_at(name, ref_location.to_owned()),

            ast::query::Type::NonNullType(inner) =>
                Self::from_ast_type(ref_location, inner).non_null(),
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedInputTypeRef`] from it.
    pub fn innermost_named_type_ref(&self) -> &NamedInputTypeRef {
        match self {
            Self::List(inner) | Self::NonNull(inner) =>
                inner.innermost_named_type_ref(),
            Self::Named(type_ref) => type_ref,
        }
    }

    pub fn innermost_named_type_name(&self) -> &str {
        self.innermost_named_type_ref().name()
    }

    /// Check if two type annotations are definitionally equal.
    ///
    /// Source locations are ignored.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::List(self_inner), Self::List(other_inner))
                | (Self::NonNull(self_inner), Self::NonNull(other_inner))
                => self_inner.is_equivalent_to(other_inner),
            (Self::Named(self_ref), Self::Named(other_ref))
                => self_ref.name() == other_ref.name(),
            _ => false,
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        !self.is_non_null()
    }

    /// The annotation with any outer non-null wrapper removed.
    pub fn nullable_type(&self) -> &TypeAnnotation {
        if let Self::NonNull(inner) = self {
            inner
        } else {
            self
        }
    }

    pub fn ref_location(&self) -> &loc::SourceLocation {
        self.innermost_named_type_ref().ref_location()
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::Named(type_ref) => write!(f, "{}", type_ref.name()),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

/// Parses GraphQL type syntax such as `[Int!]!`.
impl std::str::FromStr for TypeAnnotation {
    type Err = TypeAnnotationParseError;

    fn from_str(input: &str) -> Result<Self> {
        let (annot, rest) = parse_type(input)?;
        if !rest.trim().is_empty() {
            return Err(TypeAnnotationParseError::TrailingInput {
                trailing: rest.trim().to_string(),
            });
        }
        Ok(annot)
    }
}

fn parse_type(input: &str) -> Result<(TypeAnnotation, &str)> {
    let input = input.trim_start();
    if let Some(rest) = input.strip_prefix('[') {
        let (item_annot, rest) = parse_type(rest)?;
        let rest = rest.trim_start().strip_prefix(']').ok_or_else(|| {
            TypeAnnotationParseError::UnclosedList {
                found: rest.trim().to_string(),
            }
        })?;
        Ok(parse_non_null_suffix(TypeAnnotation::list(item_annot), rest))
    } else {
        let name_len =
            input.find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(input.len());
        let name = &input[..name_len];
        if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(TypeAnnotationParseError::ExpectedTypeName {
                found: input.to_string(),
            });
        }
        Ok(parse_non_null_suffix(
            TypeAnnotation::named(name),
            &input[name_len..],
        ))
    }
}

fn parse_non_null_suffix(annot: TypeAnnotation, rest: &str) -> (TypeAnnotation, &str) {
    if let Some(rest) = rest.trim_start().strip_prefix('!') {
        (annot.non_null(), rest)
    } else {
        (annot, rest)
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeAnnotationParseError {
    #[error("Expected a type name but found `{found}`")]
    ExpectedTypeName {
        found: String,
    },

    #[error("Unexpected input after type annotation: `{trailing}`")]
    TrailingInput {
        trailing: String,
    },

    #[error("Expected `]` to close list type but found `{found}`")]
    UnclosedList {
        found: String,
    },
}
