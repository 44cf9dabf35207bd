pub mod builtin_scalars;
mod enum_type;
mod enum_type_builder;
mod enum_value;
mod input_field;
mod input_object_type;
mod input_object_type_builder;
mod input_object_type_validator;
mod input_type;
mod scalar_type;
mod scalar_type_builder;
mod type_annotation;
mod type_builder;
mod types_map_builder;

pub use enum_type::EnumType;
pub(crate) use enum_type_builder::EnumTypeBuilder;
pub use enum_value::EnumValue;
pub use input_field::InputField;
pub use input_object_type::InputObjectType;
pub(crate) use input_object_type_builder::InputObjectTypeBuilder;
use input_object_type_validator::InputObjectTypeValidator;
pub use input_type::InputType;
pub use input_type::NamedInputTypeRef;
pub use scalar_type::ScalarParseError;
pub use scalar_type::ScalarParseFn;
pub use scalar_type::ScalarParseOutcome;
pub use scalar_type::ScalarType;
pub(crate) use scalar_type_builder::ScalarTypeBuilder;
pub use type_annotation::TypeAnnotation;
pub use type_annotation::TypeAnnotationParseError;
pub(crate) use type_builder::AstExtension;
pub(crate) use type_builder::PendingExtensions;
pub(crate) use type_builder::TypeBuilder;
pub(crate) use type_builder::TypeBuilderHelpers;
pub(crate) use types_map_builder::TypesMapBuilder;

#[cfg(test)]
mod tests;
