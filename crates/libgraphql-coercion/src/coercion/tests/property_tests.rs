use crate::coerce_input_value;
use crate::coerce_input_value_collecting;
use crate::tests::test_utils::annot;
use crate::tests::test_utils::search_schema;
use crate::types::TypeAnnotation;
use crate::CoercionErrorKind;
use crate::Value;
use proptest::prelude::*;

fn type_annotation() -> impl Strategy<Value = TypeAnnotation> {
    let named = prop_oneof![
        Just("Boolean"),
        Just("Color"),
        Just("Filter"),
        Just("Int"),
        Just("Search"),
        Just("String"),
    ].prop_map(TypeAnnotation::named);

    named.prop_recursive(3, 8, 1, |inner| prop_oneof![
        inner.clone().prop_map(TypeAnnotation::list),
        inner.prop_map(TypeAnnotation::non_null),
    ])
}

fn filter_value() -> impl Strategy<Value = Value> {
    (any::<i32>(), proptest::option::of(prop_oneof![Just("RED"), Just("BLUE")]))
        .prop_map(|(id, tag)| {
            let mut fields = vec![("id", Value::from(id))];
            if let Some(tag) = tag {
                fields.push(("tag", Value::from(tag)));
            }
            Value::object(fields)
        })
}

fn search_value() -> impl Strategy<Value = Value> {
    (
        proptest::option::of(".*"),
        proptest::option::of(proptest::collection::vec(filter_value(), 0..4)),
        proptest::option::of(any::<i32>()),
        any::<bool>(),
    ).prop_map(|(name, filters, limit, exact)| {
        let mut fields = vec![];
        if let Some(name) = name {
            fields.push(("name", Value::from(name)));
        }
        if let Some(filters) = filters {
            fields.push(("filters", Value::List(filters)));
        }
        if let Some(limit) = limit {
            fields.push(("limit", Value::from(limit)));
        }
        fields.push(("exact", Value::from(exact)));
        Value::object(fields)
    })
}

proptest! {
    #[test]
    fn null_coerces_to_null_for_nullable_types(annot in type_annotation()) {
        let schema = search_schema();
        let nullable_annot = annot.nullable_type();

        let (coerced, errors) =
            coerce_input_value_collecting(&schema, &Value::Null, nullable_annot);
        prop_assert_eq!(coerced, Value::Null);
        prop_assert!(errors.is_empty());
    }

    #[test]
    fn null_fails_once_for_non_null_types(annot in type_annotation()) {
        let schema = search_schema();
        let non_null_annot = annot.non_null();

        let (coerced, errors) =
            coerce_input_value_collecting(&schema, &Value::Null, &non_null_annot);
        prop_assert_eq!(coerced, Value::Undefined);
        prop_assert_eq!(errors.len(), 1);
        prop_assert_eq!(errors[0].error().kind(), CoercionErrorKind::NonNullViolation);
        prop_assert!(errors[0].path().is_empty());
    }

    #[test]
    fn int_lists_are_preserved(items in proptest::collection::vec(
        proptest::option::of(any::<i32>()),
        0..8,
    )) {
        let schema = search_schema();
        let input = Value::List(
            items.iter()
                .map(|item| item.map_or(Value::Null, Value::from))
                .collect(),
        );

        prop_assert_eq!(
            coerce_input_value(&schema, &input, &annot("[Int]")),
            Ok(input),
        );
    }

    #[test]
    fn single_int_is_promoted(item in any::<i32>()) {
        let schema = search_schema();

        prop_assert_eq!(
            coerce_input_value(&schema, &Value::from(item), &annot("[Int!]!")),
            Ok(Value::List(vec![Value::from(item)])),
        );
    }

    #[test]
    fn coercing_a_coerced_value_changes_nothing(input in search_value()) {
        let schema = search_schema();
        let search_annot = annot("Search!");

        let (coerced, errors) =
            coerce_input_value_collecting(&schema, &input, &search_annot);
        prop_assert!(errors.is_empty(), "unexpected errors: {:?}", errors);

        let (recoerced, errors) =
            coerce_input_value_collecting(&schema, &coerced, &search_annot);
        prop_assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
        prop_assert_eq!(recoerced, coerced);
    }
}
