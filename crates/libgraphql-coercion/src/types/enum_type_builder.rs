use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::AstExtension;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::InputType;
use crate::types::PendingExtensions;
use crate::types::TypeBuilder;
use crate::types::TypesMapBuilder;
use inherent::inherent;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct EnumTypeBuilder {
    pending_extensions: PendingExtensions<ast::schema::EnumTypeExtension>,
}

impl EnumTypeBuilder {
    pub fn new() -> Self {
        Self {
            pending_extensions: PendingExtensions::new(),
        }
    }

    /// SDL enum values are represented internally by their own name.
    fn enum_values_from_ast<'a>(
        parent_srcloc: &'a loc::SourceLocation,
        values: &'a [ast::schema::EnumValue],
    ) -> impl Iterator<Item = EnumValue> + 'a {
        values.iter().map(|ast_value| {
            let mut value = EnumValue::new(ast_value.name.as_str());
            value.def_location = parent_srcloc.with_ast_position(&ast_value.position);
            value.description = ast_value.description.to_owned();
            value
        })
    }

    fn merge_type_extension(
        target: &mut InputType,
        ext_file_path: Option<&Path>,
        ext: &ast::schema::EnumTypeExtension,
    ) -> Result<()> {
        let ext_srcloc = ext.location(ext_file_path);
        let InputType::Enum(enum_type) = target else {
            return Err(SchemaBuildError::InvalidExtensionType {
                schema_type: target.clone(),
                extension_location: ext_srcloc,
            });
        };

        for value in Self::enum_values_from_ast(&ext_srcloc, &ext.values) {
            enum_type.add_value(value)?;
        }
        Ok(())
    }
}

#[inherent]
impl TypeBuilder for EnumTypeBuilder {
    type AstTypeDef = ast::schema::EnumType;
    type AstTypeExtension = ast::schema::EnumTypeExtension;

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

        let mut enum_type = EnumType::new(
            def.name.as_str(),
            Self::enum_values_from_ast(&def_srcloc, &def.values),
        )?;
        if let Some(description) = &def.description {
            enum_type = enum_type.with_description(description.as_str());
        }
        enum_type.def_location = def_srcloc.to_owned();

        types_builder.add_new_type(
            def.name.as_str(),
            &def_srcloc,
            enum_type.into(),
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
