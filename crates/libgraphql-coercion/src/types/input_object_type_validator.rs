use crate::loc;
use crate::schema::TypeValidationError;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InputType;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::collections::HashSet;

pub(super) struct InputObjectTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    output_type_names: &'a HashMap<String, loc::SourceLocation>,
    type_: &'a InputObjectType,
    types_map: &'a HashMap<String, InputType>,
}
impl<'a> InputObjectTypeValidator<'a> {
    pub fn new(
        type_: &'a InputObjectType,
        types_map: &'a HashMap<String, InputType>,
        output_type_names: &'a HashMap<String, loc::SourceLocation>,
    ) -> Self {
        Self {
            errors: vec![],
            output_type_names,
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        let fields = self.type_.fields();
        self.validate_fields_recursive(
            self.type_.name(),
            fields,
            &mut vec![],
            HashSet::from([self.type_.name()]),
        );
        self.errors
    }

    fn validate_fields_recursive(
        &mut self,
        type_name: &'a str,
        fields: &'a IndexMap<String, InputField>,
        path: &mut Vec<(&'a str, Option<&'a str>)>,
        seen_type_names: HashSet<&'a str>,
    ) {
        // Field types of nested input objects are checked when those types
        // are validated themselves.
        let is_root_type = path.is_empty();

        for (field_name, field) in fields {
            let type_annot = field.type_annotation();
            let innermost_type_name = type_annot.innermost_named_type_name();

            let innermost_type = match self.types_map.get(innermost_type_name) {
                Some(innermost_type) => innermost_type,

                // Input object fields can not be declared with an output type.
                //
                // https://spec.graphql.org/October2021/#sel-IAHhBXDDBFCAACEB4iG
                None if self.output_type_names.contains_key(innermost_type_name) => {
                    if is_root_type {
                        self.errors.push(
                            TypeValidationError::InvalidInputFieldWithOutputType {
                                def_location: type_annot.ref_location().to_owned(),
                                field_name: field_name.to_owned(),
                                invalid_type_name: innermost_type_name.to_string(),
                                parent_type_name: type_name.to_owned(),
                            }
                        );
                    }
                    continue
                },

                None => {
                    if is_root_type {
                        self.errors.push(TypeValidationError::UndefinedTypeName {
                            ref_location: type_annot.ref_location().to_owned(),
                            undefined_type_name: innermost_type_name.to_string(),
                        });
                    }
                    continue
                },
            };

            // Look for input-type cycles that aren't broken by a nullable or
            // list-typed field.
            //
            // https://spec.graphql.org/October2021/#sec-Input-Objects.Type-Validation
            if is_cycle_breaking(type_annot) {
                continue;
            }

            path.extend_from_slice(&[
                (type_name, Some(field_name)),
                (innermost_type_name, None),
            ]);
            if seen_type_names.contains(innermost_type_name) {
                // Only the type that closes the chain back onto itself
                // reports, so each cycle is reported once per member type.
                if innermost_type_name == self.type_.name() {
                    self.errors.push(TypeValidationError::CircularInputFieldChain {
                        circular_field_path: path.iter().map(|(type_name, field_name)| {
                            if let Some(field_name) = field_name {
                                format!("{type_name}.{field_name}")
                            } else {
                                type_name.to_string()
                            }
                        }).collect(),
                    });
                }
            } else if let InputType::InputObject(inputobj_type) = innermost_type {
                let mut seen_type_names = seen_type_names.clone();
                seen_type_names.insert(innermost_type_name);
                self.validate_fields_recursive(
                    innermost_type_name,
                    inputobj_type.fields(),
                    path,
                    seen_type_names,
                );
            }
            path.truncate(path.len() - 2);
        }
    }
}

/// Only a non-null, non-list field can make an input object impossible to
/// construct: a nullable field can be null and a list can be empty.
fn is_cycle_breaking(type_annot: &TypeAnnotation) -> bool {
    !matches!(
        type_annot,
        TypeAnnotation::NonNull(inner) if matches!(**inner, TypeAnnotation::Named(_)),
    )
}
