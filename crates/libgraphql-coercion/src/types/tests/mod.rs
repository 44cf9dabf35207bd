mod builtin_scalars_tests;
mod enum_type_builder_tests;
mod type_annotation_tests;
