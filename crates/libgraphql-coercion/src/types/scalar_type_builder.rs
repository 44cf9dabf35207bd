use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::AstExtension;
use crate::types::InputType;
use crate::types::PendingExtensions;
use crate::types::ScalarType;
use crate::types::TypeBuilder;
use crate::types::TypesMapBuilder;
use inherent::inherent;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Scalars defined in SDL start out with an identity parser. A custom parser
/// can be attached afterward via
/// [`SchemaBuilder::register_scalar_parser()`](crate::schema::SchemaBuilder::register_scalar_parser).
#[derive(Debug)]
pub(crate) struct ScalarTypeBuilder {
    pending_extensions: PendingExtensions<ast::schema::ScalarTypeExtension>,
}

impl ScalarTypeBuilder {
    pub fn new() -> Self {
        Self {
            pending_extensions: PendingExtensions::new(),
        }
    }

    /// Scalar extensions can only add directives, which carry no meaning for
    /// coercion. All that's left to check is that the extended type is a
    /// scalar.
    fn merge_type_extension(
        target: &mut InputType,
        ext_file_path: Option<&Path>,
        ext: &ast::schema::ScalarTypeExtension,
    ) -> Result<()> {
        match target {
            InputType::Scalar(_) => Ok(()),
            _ => Err(SchemaBuildError::InvalidExtensionType {
                schema_type: target.clone(),
                extension_location: ext.location(ext_file_path),
            }),
        }
    }
}

#[inherent]
impl TypeBuilder for ScalarTypeBuilder {
    type AstTypeDef = ast::schema::ScalarType;
    type AstTypeExtension = ast::schema::ScalarTypeExtension;

    pub(crate) fn finalize(self, types_builder: &mut TypesMapBuilder) -> Result<()> {
        self.pending_extensions.merge_all(types_builder, Self::merge_type_extension)
    }

    pub(crate) fn visit_type_def(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: Option<&Path>,
        def: &<Self as TypeBuilder>::AstTypeDef,
    ) -> Result<()> {
        let def_srcloc = loc::SourceLocation::from_schema_ast_position(
            file_path,
            &def.position,
        );

        let mut scalar_type = ScalarType::with_identity_parser(def.name.as_str());
        if let Some(description) = &def.description {
            scalar_type = scalar_type.with_description(description.as_str());
        }
        scalar_type.def_location = def_srcloc.to_owned();

        types_builder.add_new_type(
            def.name.as_str(),
            &def_srcloc,
            scalar_type.into(),
        )
    }

    pub(crate) fn visit_type_extension(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: Option<&Path>,
        ext: <Self as TypeBuilder>::AstTypeExtension,
    ) -> Result<()> {
        match types_builder.get_type_mut(ext.name.as_str()) {
            Some(target) => Self::merge_type_extension(target, file_path, &ext),
            None => {
                self.pending_extensions.defer(file_path, ext);
                Ok(())
            },
        }
    }
}
