use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::builtin_scalars;
use crate::types::InputObjectTypeValidator;
use crate::types::InputType;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct TypesMapBuilder {
    /// Names of object, interface and union types seen while loading SDL.
    /// They are never coercion targets, but they do occupy their names.
    pub(super) output_type_names: HashMap<String, loc::SourceLocation>,
    pub(super) types: HashMap<String, InputType>,
}
impl TypesMapBuilder {
    pub fn new() -> Self {
        Self {
            output_type_names: HashMap::new(),
            types: builtin_scalars::builtin_scalar_types()
                .into_iter()
                .map(|scalar_type| (scalar_type.name().to_string(), scalar_type.into()))
                .collect(),
        }
    }

    fn check_new_type_name(
        &self,
        type_name: &str,
        type_loc: &loc::SourceLocation,
    ) -> Result<()> {
        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location: type_loc.to_owned(),
                type_name: type_name.to_string(),
            });
        }

        let conflicting_def_location =
            self.types.get(type_name)
                .map(|type_| type_.def_location())
                .or_else(|| self.output_type_names.get(type_name));
        if let Some(conflicting_def_location) = conflicting_def_location {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                def1: conflicting_def_location.to_owned(),
                def2: type_loc.to_owned(),
            });
        }

        Ok(())
    }

    pub fn add_new_type(
        &mut self,
        type_name: &str,
        type_loc: &loc::SourceLocation,
        type_: InputType,
    ) -> Result<()> {
        self.check_new_type_name(type_name, type_loc)?;
        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    pub fn add_output_type_name(
        &mut self,
        type_name: &str,
        type_loc: &loc::SourceLocation,
    ) -> Result<()> {
        self.check_new_type_name(type_name, type_loc)?;
        self.output_type_names.insert(type_name.to_string(), type_loc.to_owned());
        Ok(())
    }

    pub fn get_type(&self, type_name: &str) -> Option<&InputType> {
        self.types.get(type_name)
    }

    pub fn get_type_mut(
        &mut self,
        type_name: &str,
    ) -> Option<&mut InputType> {
        self.types.get_mut(type_name)
    }

    pub fn into_types_map(self) -> Result<HashMap<String, InputType>> {
        // Final validation of all types together, in name order so that errors
        // are reported deterministically.
        let mut type_names: Vec<&String> = self.types.keys().collect();
        type_names.sort();

        let mut errors = vec![];
        for type_ in type_names.into_iter().filter_map(|name| self.types.get(name)) {
            match type_ {
                InputType::Enum(_)
                | InputType::Scalar(_)
                    => (),

                InputType::InputObject(type_) => errors.append(
                    &mut InputObjectTypeValidator::new(
                        type_,
                        &self.types,
                        &self.output_type_names,
                    ).validate()
                ),
            }
        }

        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        Ok(self.types)
    }
}
