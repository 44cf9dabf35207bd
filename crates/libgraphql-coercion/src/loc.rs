use crate::ast;
use std::path::Path;
use std::path::PathBuf;

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// includes a PathBuf to the file.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FilePosition {
    pub col: usize,
    pub file: Box<PathBuf>,
    pub line: usize,
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.col)
    }
}

/// Where a type, field or type reference was defined.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum SourceLocation {
    /// Built into every schema (e.g. the `Int` scalar).
    GraphQLBuiltIn,

    /// Defined programmatically or loaded from a string without a file path.
    Schema,

    /// Loaded from a schema file.
    SchemaFile(FilePosition),
}
impl SourceLocation {
    pub(crate) fn from_schema_ast_position(
        file_path: Option<&Path>,
        pos: &ast::AstPos,
    ) -> Self {
        if let Some(file_path) = file_path {
            Self::SchemaFile(FilePosition {
                col: pos.column,
                file: Box::new(file_path.to_path_buf()),
                line: pos.line,
            })
        } else {
            Self::Schema
        }
    }

    /// Produce a location in the same file as `self` but at a different AST
    /// position.
    pub(crate) fn with_ast_position(&self, pos: &ast::AstPos) -> Self {
        match self {
            Self::GraphQLBuiltIn => Self::GraphQLBuiltIn,
            Self::Schema => Self::Schema,
            Self::SchemaFile(file_pos) => Self::SchemaFile(FilePosition {
                col: pos.column,
                file: file_pos.file.clone(),
                line: pos.line,
            }),
        }
    }
}
impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GraphQLBuiltIn => write!(f, "<builtin>"),
            Self::Schema => write!(f, "<schema>"),
            Self::SchemaFile(file_pos) => write!(f, "{file_pos}"),
        }
    }
}
