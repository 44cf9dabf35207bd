use libgraphql_coercion::Value;

pub const SEARCH_SCHEMA: &str = "
    enum Color { RED GREEN BLUE }

    input Filter {
        id: Int!
        tag: Color = RED
        labels: [String!]
    }

    input Search {
        name: String
        filters: [Filter!]
        limit: Int = 10
        exact: Boolean!
    }
";

/// A `Search` input holding `num_filters` valid filters.
pub fn search_value(num_filters: usize) -> Value {
    let filters: Vec<Value> =
        (0..num_filters)
            .map(|idx| Value::object([
                ("id", Value::Int(idx as i64)),
                ("tag", Value::from(if idx % 2 == 0 { "GREEN" } else { "BLUE" })),
                ("labels", Value::from(vec!["a", "b"])),
            ]))
            .collect();

    Value::object([
        ("name", Value::from("cats")),
        ("filters", Value::List(filters)),
        ("exact", Value::Bool(true)),
    ])
}

/// A `Search` input in which every filter has an invalid `id` and a
/// misspelled field.
pub fn invalid_search_value(num_filters: usize) -> Value {
    let filters: Vec<Value> =
        (0..num_filters)
            .map(|idx| Value::object([
                ("id", Value::from(format!("id-{idx}"))),
                ("lables", Value::from(vec!["a"])),
            ]))
            .collect();

    Value::object([
        ("filters", Value::List(filters)),
        ("exact", Value::Bool(true)),
    ])
}
