use crate::coerce_input_value;
use crate::coerce_input_value_with;
use crate::path::PathSegment;
use crate::tests::test_utils::annot;
use crate::tests::test_utils::search_schema;
use crate::CoercionError;
use crate::CoercionErrorKind;
use crate::CoercionErrorReport;
use crate::CollectErrors;
use crate::Value;

fn three_bad_ints() -> Value {
    Value::from(vec!["a", "b", "c"])
}

#[test]
fn fail_fast_stops_at_first_error() {
    let schema = search_schema();

    let err = coerce_input_value(&schema, &three_bad_ints(), &annot("[Int]"))
        .expect_err("no item is an Int");
    assert_eq!(
        err.message(),
        "Invalid value \"a\" at \"value[0]\": Expected type \"Int\". Int cannot \
        represent non-integer value: \"a\"",
    );
}

#[test]
fn collect_errors_sink() {
    let schema = search_schema();
    let mut collector = CollectErrors::new();

    let coerced = coerce_input_value_with(
        &schema,
        &three_bad_ints(),
        &annot("[Int]"),
        &mut collector,
    );
    assert!(matches!(coerced, Ok(Value::List(items)) if items.len() == 3));
    assert!(!collector.is_empty());

    let paths: Vec<_> =
        collector.reports()
            .iter()
            .map(|report| report.path().to_vec())
            .collect();
    assert_eq!(paths, vec![
        vec![PathSegment::Index(0)],
        vec![PathSegment::Index(1)],
        vec![PathSegment::Index(2)],
    ]);
}

#[test]
fn closure_sink_can_abort() {
    let schema = search_schema();
    let mut seen = vec![];

    let result = coerce_input_value_with(
        &schema,
        &three_bad_ints(),
        &annot("[Int]"),
        &mut |report: CoercionErrorReport| {
            seen.push(report.path().to_vec());
            if seen.len() == 2 { Err("stop") } else { Ok(()) }
        },
    );
    assert_eq!(result, Err("stop"));
    assert_eq!(seen, vec![
        vec![PathSegment::Index(0)],
        vec![PathSegment::Index(1)],
    ]);
}

#[test]
fn report_display_and_prefixed_error() {
    let report = CoercionErrorReport::new(
        vec![PathSegment::from("ids"), PathSegment::from(1_usize)],
        Value::from("x"),
        CoercionError::custom("Not an id."),
    );
    assert_eq!(report.to_string(), "Invalid value \"x\" at \"value.ids[1]\": Not an id.");

    let err = report.clone().into_prefixed_error();
    assert_eq!(err.kind(), CoercionErrorKind::Custom);
    assert_eq!(err.message(), report.to_string());
    assert_eq!(report.into_error().message(), "Not an id.");
}

#[test]
fn coercion_error_equality_ignores_source_identity() {
    let with_source = |source: &str| {
        CoercionError::custom("bad").with_source(source.to_string())
    };

    assert_eq!(with_source("a"), with_source("b"));
    assert_ne!(with_source("a"), CoercionError::custom("bad"));
}
