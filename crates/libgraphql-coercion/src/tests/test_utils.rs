use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::types::TypeAnnotation;

pub(crate) const SEARCH_SCHEMA: &str = "
    enum Color { RED BLUE }

    input Filter {
        id: Int!
        tag: Color = RED
    }

    input Search {
        name: String
        filters: [Filter!]
        limit: Int = 10
        exact: Boolean!
    }

    type User { id: ID! }
";

/// A [`Schema`] built from [`SEARCH_SCHEMA`].
pub(crate) fn search_schema() -> Schema {
    SchemaBuilder::new()
        .load_str(None, SEARCH_SCHEMA)
        .expect("SEARCH_SCHEMA loads")
        .build()
        .expect("SEARCH_SCHEMA builds")
}

/// Parse a type annotation written in GraphQL syntax, e.g. `[Int!]!`.
pub(crate) fn annot(type_str: &str) -> TypeAnnotation {
    type_str.parse().expect("valid type annotation")
}
