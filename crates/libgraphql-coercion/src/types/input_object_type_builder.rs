use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::AstExtension;
use crate::types::InputObjectType;
use crate::types::InputType;
use crate::types::PendingExtensions;
use crate::types::TypeBuilder;
use crate::types::TypeBuilderHelpers;
use crate::types::TypesMapBuilder;
use inherent::inherent;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct InputObjectTypeBuilder {
    pending_extensions: PendingExtensions<ast::schema::InputObjectTypeExtension>,
}

impl InputObjectTypeBuilder {
    pub fn new() -> Self {
        Self {
            pending_extensions: PendingExtensions::new(),
        }
    }

    fn merge_type_extension(
        target: &mut InputType,
        ext_file_path: Option<&Path>,
        ext: &ast::schema::InputObjectTypeExtension,
    ) -> Result<()> {
        let ext_srcloc = ext.location(ext_file_path);
        let InputType::InputObject(inputobj_type) = target else {
            return Err(SchemaBuildError::InvalidExtensionType {
                schema_type: target.clone(),
                extension_location: ext_srcloc,
            });
        };

        let ext_fields = TypeBuilderHelpers::inputobject_fields_from_ast(
            &ext_srcloc,
            ext.name.as_str(),
            &ext.fields,
        )?;
        for field in ext_fields {
            inputobj_type.add_field(field)?;
        }
        Ok(())
    }
}

#[inherent]
impl TypeBuilder for InputObjectTypeBuilder {
    type AstTypeDef = ast::schema::InputObjectType;
    type AstTypeExtension = ast::schema::InputObjectTypeExtension;

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

        let fields = TypeBuilderHelpers::inputobject_fields_from_ast(
            &def_srcloc,
            def.name.as_str(),
            &def.fields,
        )?;
        let mut inputobj_type = InputObjectType::new(def.name.as_str(), fields)?;
        if let Some(description) = &def.description {
            inputobj_type = inputobj_type.with_description(description.as_str());
        }
        inputobj_type.def_location = def_srcloc.to_owned();

        types_builder.add_new_type(
            def.name.as_str(),
            &def_srcloc,
            inputobj_type.into(),
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
