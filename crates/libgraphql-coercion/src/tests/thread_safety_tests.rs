use crate::coerce_input_value;
use crate::tests::test_utils;
use crate::Value;
use rayon::prelude::IntoParallelIterator;
use rayon::prelude::ParallelIterator;

#[test]
fn one_schema_coerces_on_many_threads() {
    let schema = test_utils::search_schema();
    let filter_type = test_utils::annot("[Filter!]!");

    let results: Vec<_> = (0..256_i64).into_par_iter().map(|idx| {
        let input = Value::object([("id", Value::Int(idx))]);
        coerce_input_value(&schema, &input, &filter_type)
    }).collect();

    for (idx, result) in results.into_iter().enumerate() {
        assert_eq!(result, Ok(Value::List(vec![Value::object([
            ("id", Value::Int(idx as i64)),
            ("tag", Value::from("RED")),
        ])])));
    }
}
