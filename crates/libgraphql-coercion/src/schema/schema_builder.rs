use crate::ast;
use crate::coercion::coerce_input_value_collecting;
use crate::coercion::CoercionError;
use crate::coercion::CoercionErrorKind;
use crate::coercion::CoercionErrorReport;
use crate::file_reader;
use crate::loc;
use crate::path::PathSegment;
use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::types::EnumTypeBuilder;
use crate::types::InputField;
use crate::types::InputObjectTypeBuilder;
use crate::types::InputType;
use crate::types::ScalarParseError;
use crate::types::ScalarParseFn;
use crate::types::ScalarParseOutcome;
use crate::types::ScalarTypeBuilder;
use crate::types::TypeAnnotation;
use crate::types::TypesMapBuilder;
use crate::Value;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for building a [Schema].
///
/// Types can be added programmatically (via [`SchemaBuilder::add_type()`]),
/// loaded from GraphQL SDL (via [`SchemaBuilder::load_str()`] and friends) or
/// both. Only the input-type subset of SDL is retained: `scalar`, `enum` and
/// `input` definitions along with their extensions. Output-type definitions
/// are skipped, but their names are remembered so that an input field that
/// refers to one can be reported.
pub struct SchemaBuilder {
    enum_builder: EnumTypeBuilder,
    inputobject_builder: InputObjectTypeBuilder,
    scalar_builder: ScalarTypeBuilder,
    scalar_parsers: Vec<(String, ScalarParseFn)>,
    types_map_builder: TypesMapBuilder,
}
impl SchemaBuilder {
    /// Add a programmatically-defined type to the schema.
    pub fn add_type(mut self, type_: impl Into<InputType>) -> Result<Self> {
        let type_ = type_.into();
        let type_name = type_.name().to_string();
        let def_location = type_.def_location().to_owned();
        self.types_map_builder.add_new_type(
            type_name.as_str(),
            &def_location,
            type_,
        )?;
        Ok(self)
    }

    pub fn build(mut self) -> Result<Schema> {
        self.enum_builder.finalize(&mut self.types_map_builder)?;
        self.inputobject_builder.finalize(&mut self.types_map_builder)?;
        self.scalar_builder.finalize(&mut self.types_map_builder)?;

        for (type_name, parse_fn) in self.scalar_parsers {
            match self.types_map_builder.get_type_mut(type_name.as_str()) {
                Some(InputType::Scalar(scalar_type)) =>
                    scalar_type.parse_fn = parse_fn,

                Some(non_scalar_type) =>
                    return Err(SchemaBuildError::ScalarParserForNonScalarType {
                        type_kind: non_scalar_type.kind_name(),
                        type_name,
                    }),

                None =>
                    return Err(SchemaBuildError::ScalarParserForUndefinedType {
                        type_name,
                    }),
            }
        }

        let mut schema = Schema {
            types: self.types_map_builder.into_types_map()?,
        };
        coerce_default_values(&mut schema)?;
        Ok(schema)
    }

    pub fn new() -> Self {
        Self {
            enum_builder: EnumTypeBuilder::new(),
            inputobject_builder: InputObjectTypeBuilder::new(),
            scalar_builder: ScalarTypeBuilder::new(),
            scalar_parsers: vec![],
            types_map_builder: TypesMapBuilder::new(),
        }
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let ast_doc =
            graphql_parser::schema::parse_schema::<String>(content)
                .map_err(|err| SchemaBuildError::ParseError {
                    file: file_path.to_owned(),
                    err: err.to_string(),
                })?.into_static();

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_deref(), def)?;
        }

        Ok(self)
    }

    /// Replace the parse function of a scalar type. The scalar may be defined
    /// before or after this call (e.g. in SDL loaded later); it's looked up
    /// when the schema is built.
    pub fn register_scalar_parser(
        mut self,
        type_name: impl Into<String>,
        parse_fn: impl Fn(&Value) -> std::result::Result<ScalarParseOutcome, ScalarParseError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.scalar_parsers.push((type_name.into(), Arc::new(parse_fn)));
        self
    }

    fn visit_ast_def(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::DirectiveDefinition(directive_def) => {
                log::debug!(
                    "Skipping definition of the `@{}` directive",
                    directive_def.name,
                );
                Ok(())
            },
            Definition::SchemaDefinition(_) => {
                log::debug!("Skipping schema definition block");
                Ok(())
            },
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) =>
                self.visit_ast_type_extension(file_path, type_ext),
        }
    }

    fn visit_ast_output_type_def(
        &mut self,
        file_path: Option<&Path>,
        type_name: &str,
        pos: &ast::AstPos,
    ) -> Result<()> {
        log::debug!("Skipping definition of the `{type_name}` output type");
        self.types_map_builder.add_output_type_name(
            type_name,
            &loc::SourceLocation::from_schema_ast_position(file_path, pos),
        )
    }

    fn visit_ast_output_type_extension(
        &mut self,
        file_path: Option<&Path>,
        type_name: &str,
        pos: &ast::AstPos,
    ) -> Result<()> {
        if let Some(input_type) = self.types_map_builder.get_type(type_name) {
            return Err(SchemaBuildError::InvalidExtensionType {
                schema_type: input_type.clone(),
                extension_location: loc::SourceLocation::from_schema_ast_position(
                    file_path,
                    pos,
                ),
            });
        }
        log::debug!("Skipping extension of the `{type_name}` output type");
        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: Option<&Path>,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;
        match type_def {
            TypeDefinition::Enum(enum_def) =>
                self.enum_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    &enum_def,
                ),

            TypeDefinition::InputObject(inputobj_def) =>
                self.inputobject_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    &inputobj_def,
                ),

            TypeDefinition::Interface(iface_def) =>
                self.visit_ast_output_type_def(
                    file_path,
                    iface_def.name.as_str(),
                    &iface_def.position,
                ),

            TypeDefinition::Object(obj_def) =>
                self.visit_ast_output_type_def(
                    file_path,
                    obj_def.name.as_str(),
                    &obj_def.position,
                ),

            TypeDefinition::Scalar(scalar_def) =>
                self.scalar_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    &scalar_def,
                ),

            TypeDefinition::Union(union_def) =>
                self.visit_ast_output_type_def(
                    file_path,
                    union_def.name.as_str(),
                    &union_def.position,
                ),
        }
    }

    fn visit_ast_type_extension(
        &mut self,
        file_path: Option<&Path>,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;
        match ext {
            TypeExtension::Enum(enum_ext) =>
                self.enum_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    enum_ext,
                ),

            TypeExtension::InputObject(inputobj_ext) =>
                self.inputobject_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    inputobj_ext,
                ),

            TypeExtension::Interface(iface_ext) =>
                self.visit_ast_output_type_extension(
                    file_path,
                    iface_ext.name.as_str(),
                    &iface_ext.position,
                ),

            TypeExtension::Object(obj_ext) =>
                self.visit_ast_output_type_extension(
                    file_path,
                    obj_ext.name.as_str(),
                    &obj_ext.position,
                ),

            TypeExtension::Scalar(scalar_ext) =>
                self.scalar_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    scalar_ext,
                ),

            TypeExtension::Union(union_ext) =>
                self.visit_ast_output_type_extension(
                    file_path,
                    union_ext.name.as_str(),
                    &union_ext.position,
                ),
        }
    }
}
impl std::fmt::Debug for SchemaBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaBuilder")
            .field("enum_builder", &self.enum_builder)
            .field("inputobject_builder", &self.inputobject_builder)
            .field("scalar_builder", &self.scalar_builder)
            .field(
                "scalar_parsers",
                &self.scalar_parsers.iter()
                    .map(|(type_name, _)| type_name)
                    .collect::<Vec<_>>(),
            )
            .field("types_map_builder", &self.types_map_builder)
            .finish()
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Coerce every declared input-field default value against its field's type
/// and store the coerced form in its place.
///
/// Input objects are visited so that the types a field refers to have their
/// own defaults coerced first. Defaults that fill in nested fields during
/// coercion are then already in their coerced form.
fn coerce_default_values(schema: &mut Schema) -> Result<()> {
    let mut errors = vec![];
    for type_name in default_value_coercion_order(schema) {
        let Some(InputType::InputObject(inputobj_type)) = schema.types.get(&type_name) else {
            continue;
        };

        let mut coerced_defaults = vec![];
        for (field_name, field) in inputobj_type.fields() {
            let Some(default_value) = field.default_value() else {
                continue;
            };

            let field_errors = misplaced_enum_literals(schema, field);
            if !field_errors.is_empty() {
                errors.push(TypeValidationError::InvalidDefaultValue {
                    def_location: field.def_location().to_owned(),
                    errors: field_errors,
                    field_name: field_name.to_owned(),
                    type_name: type_name.to_owned(),
                });
                continue;
            }

            let (coerced, field_errors) = coerce_input_value_collecting(
                schema,
                default_value,
                field.type_annotation(),
            );
            if field_errors.is_empty() {
                coerced_defaults.push((field_name.to_owned(), coerced));
            } else {
                errors.push(TypeValidationError::InvalidDefaultValue {
                    def_location: field.def_location().to_owned(),
                    errors: field_errors,
                    field_name: field_name.to_owned(),
                    type_name: type_name.to_owned(),
                });
            }
        }

        if let Some(InputType::InputObject(inputobj_type)) = schema.types.get_mut(&type_name) {
            for (field_name, coerced) in coerced_defaults {
                if let Some(field) = inputobj_type.fields.get_mut(&field_name) {
                    field.default_value = Some(coerced);
                }
            }
        }
    }

    if !errors.is_empty() {
        return Err(SchemaBuildError::TypeValidationErrors { errors });
    }

    Ok(())
}

/// Enum literals in an SDL default value are only valid where the field's type
/// expects an enum. Elsewhere an enum literal would pass for
/// a string once converted to a [`Value`].
fn misplaced_enum_literals(
    schema: &Schema,
    field: &InputField,
) -> Vec<CoercionErrorReport> {
    field.default_enum_literals.iter().filter_map(|(path, enum_literal)| {
        let Some(InputType::Scalar(scalar_type)) =
            input_type_at_path(schema, field.type_annotation(), path) else {
            return None;
        };
        Some(CoercionErrorReport::new(
            path.to_owned(),
            Value::String(enum_literal.to_owned()),
            CoercionError::new(
                CoercionErrorKind::ScalarParseRejected,
                format!("Expected type \"{}\".", scalar_type.name()),
            ),
        ))
    }).collect()
}

/// The named type that the value at `path` (within a value of
/// `type_annotation`) is coerced to, if the path can be followed.
fn input_type_at_path<'a>(
    schema: &'a Schema,
    mut type_annotation: &'a TypeAnnotation,
    path: &[PathSegment],
) -> Option<&'a InputType> {
    for segment in path {
        type_annotation = match segment {
            PathSegment::Index(_) => match type_annotation.nullable_type() {
                TypeAnnotation::List(item_type) => item_type.as_ref(),
                _ => return None,
            },

            PathSegment::Field(field_name) => {
                let Some(InputType::InputObject(inputobj_type)) =
                    schema.types.get(type_annotation.innermost_named_type_name()) else {
                    return None;
                };
                inputobj_type.field(field_name)?.type_annotation()
            },
        };
    }
    schema.types.get(type_annotation.innermost_named_type_name())
}

/// Input object type names, each listed after every input object its fields
/// refer to (cycles are cut where they're first found).
fn default_value_coercion_order(schema: &Schema) -> Vec<String> {
    fn visit<'a>(
        schema: &'a Schema,
        type_name: &'a str,
        visited: &mut HashSet<&'a str>,
        order: &mut Vec<String>,
    ) {
        if !visited.insert(type_name) {
            return;
        }
        if let Some(InputType::InputObject(inputobj_type)) = schema.types.get(type_name) {
            for field in inputobj_type.fields().values() {
                let field_type_name = field.type_annotation().innermost_named_type_name();
                visit(schema, field_type_name, visited, order);
            }
            order.push(type_name.to_string());
        }
    }

    let mut type_names: Vec<&String> = schema.types.keys().collect();
    type_names.sort();

    let mut visited = HashSet::new();
    let mut order = vec![];
    for type_name in type_names {
        visit(schema, type_name.as_str(), &mut visited, &mut order);
    }
    order
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error(
        "The `{enum_name}` enum defines the `{value_name}` value more than once"
    )]
    DuplicateEnumValueDefinition {
        enum_name: String,
        value_def1: loc::SourceLocation,
        value_def2: loc::SourceLocation,
        value_name: String,
    },

    #[error(
        "The `{type_name}` input object defines the `{field_name}` field more \
        than once"
    )]
    DuplicateFieldNameDefinition {
        field_def1: loc::SourceLocation,
        field_def2: loc::SourceLocation,
        field_name: String,
        type_name: String,
    },

    #[error("Multiple GraphQL types with the name `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error(
        "Attempted to extend the `{type_name}` type, which is not defined \
        elsewhere"
    )]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_location: loc::SourceLocation,
    },

    #[error(
        "Attempted to extend the `{}` type using a name that corresponds to a \
        different kind of type",
        schema_type.name(),
    )]
    InvalidExtensionType {
        schema_type: InputType,
        extension_location: loc::SourceLocation,
    },

    #[error(
        "Field names must not start with `__`: `{type_name}.{field_name}`"
    )]
    InvalidDunderPrefixedFieldName {
        field_name: String,
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error("Type names must not start with `__`: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Enum values can not be named `true`, `false` or `null`, but the \
        `{enum_name}` enum defines a value named `{value_name}`"
    )]
    InvalidEnumValueName {
        enum_name: String,
        location: loc::SourceLocation,
        value_name: String,
    },

    #[error(
        "Error parsing schema{}: {err}",
        file.as_ref()
            .map(|file| format!(" file `{}`", file.display()))
            .unwrap_or_default(),
    )]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error(
        "A scalar parser was registered for `{type_name}`, but `{type_name}` \
        is defined as a {type_kind} type"
    )]
    ScalarParserForNonScalarType {
        type_kind: &'static str,
        type_name: String,
    },

    #[error(
        "A scalar parser was registered for `{type_name}`, but no type with \
        that name is defined"
    )]
    ScalarParserForUndefinedType {
        type_name: String,
    },

    #[error("Failure while trying to read a schema file from disk")]
    SchemaFileReadError(#[source] Box<file_reader::ReadContentError>),

    #[error(
        "Encountered the following type-validation errors while building the \
        schema:\n\n{}",
        errors.iter()
            .map(|s| format!("  * {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },

    #[error(
        "Default values must be constant, but the default value of \
        `{type_name}.{field_name}` refers to the `${variable_name}` variable"
    )]
    VariableInDefaultValue {
        field_name: String,
        location: loc::SourceLocation,
        type_name: String,
        variable_name: String,
    },
}

