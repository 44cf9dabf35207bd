use crate::Value;

mod inspect {
    use super::*;

    #[test]
    fn leaves() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Undefined.to_string(), "undefined");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::Float(2.0).to_string(), "2");
        assert_eq!(Value::Float(1.5).to_string(), "1.5");
        assert_eq!(Value::Float(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::Float(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Value::from("say \"hi\"").to_string(), r#""say \"hi\"""#);
    }

    #[test]
    fn containers() {
        assert_eq!(Value::List(vec![]).to_string(), "[]");
        assert_eq!(Value::Object(Default::default()).to_string(), "{}");
        assert_eq!(
            Value::object([
                ("id", Value::from("5")),
                ("tags", Value::from(vec![1, 2])),
            ]).to_string(),
            "{ id: \"5\", tags: [1, 2] }",
        );
    }

    #[test]
    fn deep_containers_collapse() {
        let nested_lists = Value::from(vec![Value::from(vec![Value::from(vec![1])])]);
        assert_eq!(nested_lists.to_string(), "[[[Array]]]");

        let nested_objects = Value::object([
            ("a", Value::object([("b", Value::object([("c", Value::Int(1))]))])),
        ]);
        assert_eq!(nested_objects.to_string(), "{ a: { b: [Object] } }");
    }

    #[test]
    fn long_lists_are_truncated() {
        let eleven = Value::from((0..11).collect::<Vec<i64>>());
        assert_eq!(eleven.to_string(), "[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, ... 1 more item]");

        let twelve = Value::from((0..12).collect::<Vec<i64>>());
        assert!(twelve.to_string().ends_with("9, ... 2 more items]"));
    }
}

mod json {
    use super::*;

    #[test]
    fn from_json_keeps_key_order_and_number_kinds() {
        let value = Value::from(serde_json::json!({
            "z": 1,
            "a": 1.5,
            "m": [true, null, "x"],
        }));

        assert_eq!(value, Value::object([
            ("z", Value::Int(1)),
            ("a", Value::Float(1.5)),
            ("m", Value::List(vec![Value::Bool(true), Value::Null, Value::from("x")])),
        ]));
    }

    #[test]
    fn undefined_has_no_json_form() {
        let value = Value::object([
            ("kept", Value::List(vec![Value::Int(1), Value::Undefined])),
            ("dropped", Value::Undefined),
            ("nan", Value::Float(f64::NAN)),
        ]);

        assert_eq!(
            value.to_json(),
            serde_json::json!({"kept": [1, null], "nan": null}),
        );
    }
}
