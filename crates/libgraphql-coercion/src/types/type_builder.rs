use crate::ast;
use crate::loc;
use crate::path::PathSegment;
use crate::schema::SchemaBuildError;
use crate::types::InputField;
use crate::types::InputType;
use crate::types::TypeAnnotation;
use crate::types::TypesMapBuilder;
use crate::Value;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

pub(crate) trait TypeBuilder: Sized {
    type AstTypeDef;
    type AstTypeExtension;

    fn finalize(self, types_map_builder: &mut TypesMapBuilder) -> Result<()>;

    fn visit_type_def(
        &mut self,
        types_map_builder: &mut TypesMapBuilder,
        file_path: Option<&Path>,
        def: &Self::AstTypeDef,
    ) -> Result<()>;

    fn visit_type_extension(
        &mut self,
        types_map_builder: &mut TypesMapBuilder,
        file_path: Option<&Path>,
        ext: Self::AstTypeExtension,
    ) -> Result<()>;
}

/// The parts of an AST type-extension node needed to find the type it
/// extends.
pub(crate) trait AstExtension {
    fn name(&self) -> &str;
    fn position(&self) -> &ast::AstPos;

    fn location(&self, file_path: Option<&Path>) -> loc::SourceLocation {
        loc::SourceLocation::from_schema_ast_position(file_path, self.position())
    }
}
impl AstExtension for ast::schema::EnumTypeExtension {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn position(&self) -> &ast::AstPos {
        &self.position
    }
}
impl AstExtension for ast::schema::InputObjectTypeExtension {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn position(&self) -> &ast::AstPos {
        &self.position
    }
}
impl AstExtension for ast::schema::ScalarTypeExtension {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn position(&self) -> &ast::AstPos {
        &self.position
    }
}

/// Type extensions visited before the type they extend was defined. SDL
/// documents may extend a type above its definition, or in another file.
#[derive(Debug)]
pub(crate) struct PendingExtensions<TExt> {
    queue: Vec<(Option<PathBuf>, TExt)>,
}
impl<TExt: AstExtension> PendingExtensions<TExt> {
    pub fn new() -> Self {
        Self {
            queue: vec![],
        }
    }

    pub fn defer(&mut self, file_path: Option<&Path>, ext: TExt) {
        log::trace!("Deferring extension of `{}` until it is defined", ext.name());
        self.queue.push((file_path.map(Path::to_path_buf), ext));
    }

    /// Hand each deferred extension to `merge` along with the type it
    /// extends, in the order the extensions were visited.
    pub fn merge_all(
        self,
        types_builder: &mut TypesMapBuilder,
        mut merge: impl FnMut(&mut InputType, Option<&Path>, &TExt) -> Result<()>,
    ) -> Result<()> {
        for (file_path, ext) in self.queue {
            let Some(target) = types_builder.get_type_mut(ext.name()) else {
                return Err(SchemaBuildError::ExtensionOfUndefinedType {
                    type_name: ext.name().to_string(),
                    extension_location: ext.location(file_path.as_deref()),
                });
            };
            merge(target, file_path.as_deref(), &ext)?;
        }
        Ok(())
    }
}

pub(crate) struct TypeBuilderHelpers;
impl TypeBuilderHelpers {
    pub fn inputobject_fields_from_ast(
        inputobj_def_location: &loc::SourceLocation,
        type_name: &str,
        input_fields: &[ast::schema::InputValue],
    ) -> Result<Vec<InputField>> {
        let mut fields = Vec::with_capacity(input_fields.len());
        for field in input_fields {
            let fielddef_srcloc =
                inputobj_def_location.with_ast_position(&field.position);

            let mut default_enum_literals = vec![];
            let default_value = match &field.default_value {
                Some(ast_value) => Some(Self::value_from_ast(
                    ast_value,
                    &fielddef_srcloc,
                    type_name,
                    field.name.as_str(),
                    &mut vec![],
                    &mut default_enum_literals,
                )?),
                None => None,
            };

            fields.push(InputField {
                default_enum_literals,
                default_value,
                description: field.description.to_owned(),
                name: field.name.to_string(),
                type_annotation: TypeAnnotation::from_ast_type(
                    // Unfortunately, graphql_parser doesn't give us a location for
                    // the actual field-definition's type.
                    &fielddef_srcloc,
                    &field.value_type,
                ),
                def_location: fielddef_srcloc,
            });
        }
        Ok(fields)
    }

    /// Convert a default-value literal into its external [`Value`] form.
    ///
    /// Enum literals become strings holding the enum value's name, which is
    /// how enum values are spelled in external input. The path of each one
    /// is pushed onto `enum_literals` so the schema builder can check that it
    /// sits where an enum type is expected.
    fn value_from_ast(
        ast_value: &ast::query::Value,
        location: &loc::SourceLocation,
        type_name: &str,
        field_name: &str,
        path: &mut Vec<PathSegment>,
        enum_literals: &mut Vec<(Vec<PathSegment>, String)>,
    ) -> Result<Value> {
        Ok(match ast_value {
            ast::query::Value::Boolean(value) => Value::Bool(*value),

            ast::query::Value::Enum(name) => {
                enum_literals.push((path.clone(), name.to_owned()));
                Value::String(name.to_owned())
            },

            ast::query::Value::Float(value) => Value::Float(*value),

            ast::query::Value::Int(number) => match number.as_i64() {
                Some(int) => Value::Int(int),
                None => Value::Float(f64::NAN),
            },

            ast::query::Value::List(items) => {
                let mut values = Vec::with_capacity(items.len());
                for (idx, item) in items.iter().enumerate() {
                    path.push(PathSegment::Index(idx));
                    let value = Self::value_from_ast(
                        item,
                        location,
                        type_name,
                        field_name,
                        path,
                        enum_literals,
                    );
                    path.pop();
                    values.push(value?);
                }
                Value::List(values)
            },

            ast::query::Value::Null => Value::Null,

            ast::query::Value::Object(entries) => {
                let mut fields = IndexMap::with_capacity(entries.len());
                for (key, value) in entries {
                    path.push(PathSegment::Field(key.to_owned()));
                    let value = Self::value_from_ast(
                        value,
                        location,
                        type_name,
                        field_name,
                        path,
                        enum_literals,
                    );
                    path.pop();
                    fields.insert(key.to_owned(), value?);
                }
                Value::Object(fields)
            },

            ast::query::Value::String(value) => Value::String(value.to_owned()),

            ast::query::Value::Variable(variable_name) =>
                return Err(SchemaBuildError::VariableInDefaultValue {
                    field_name: field_name.to_string(),
                    location: location.to_owned(),
                    type_name: type_name.to_string(),
                    variable_name: variable_name.to_owned(),
                }),
        })
    }
}
