use serde_json::json;
use treelens::{
    ArrayRead, FrozenNode, FrozenValue, Kind, NodeRead, ObjectRead, json::JsonNode,
    yaml::YamlNode,
};

#[test]
fn test_freeze_scalars() {
    let cases = [
        (json!(null), Kind::Null),
        (json!(true), Kind::Bool),
        (json!(5), Kind::Integer),
        (json!(2.5), Kind::Double),
        (json!("hello"), Kind::String),
    ];
    for (document, kind) in &cases {
        let node = JsonNode::new(document);
        let frozen = node.freeze();
        assert_eq!(frozen.kind(), *kind);
        assert!(frozen.equal_to(&node, true));
    }
}

#[test]
fn test_clone_equals_original() {
    let document = json!({
        "a": [1, 2.5, "x", true, null],
        "b": {"c": false, "d": [{"e": 1}]},
    });
    let node = JsonNode::new(&document);
    let frozen = node.freeze();
    assert!(frozen.clone().equal_to(&node, true));
    assert_eq!(frozen.clone(), frozen);
}

#[test]
fn test_snapshot_outlives_source_document() {
    let frozen = {
        let document = json!({"a": 1});
        JsonNode::new(&document).freeze()
    };
    // The source document is gone; the snapshot still reads fully.
    let node = frozen.node();
    assert_eq!(
        node.get_object().unwrap().find("a").unwrap().get_integer(),
        Some(1)
    );
}

#[test]
fn test_equal_across_representations() {
    let yaml_document: serde_yaml::Value =
        serde_yaml::from_str("a:\n  - 1\n  - 2\nb: x\n").unwrap();
    let json_document = json!({"a": [1, 2], "b": "x"});

    let frozen = JsonNode::new(&json_document).freeze();
    assert!(frozen.equal_to(&YamlNode::new(&yaml_document), true));

    let frozen = YamlNode::new(&yaml_document).freeze();
    assert!(frozen.equal_to(&JsonNode::new(&json_document), true));
}

#[test]
fn test_strict_and_numeric_equality() {
    let integer = json!(5);
    let double = json!(5.0);

    let frozen = JsonNode::new(&integer).freeze();
    assert!(!frozen.equal_to(&JsonNode::new(&double), true));
    assert!(frozen.equal_to(&JsonNode::new(&double), false));

    // Booleans never participate in numeric coercion.
    let boolean = json!(true);
    let one = json!(1);
    let frozen = JsonNode::new(&one).freeze();
    assert!(!frozen.equal_to(&JsonNode::new(&boolean), false));
}

#[test]
fn test_object_equality_ignores_member_order() {
    let left = json!({"a": 1, "b": 2});
    let right = json!({"b": 2, "a": 1});
    let frozen = JsonNode::new(&left).freeze();
    assert!(frozen.equal_to(&JsonNode::new(&right), true));

    let shorter = json!({"a": 1});
    assert!(!frozen.equal_to(&JsonNode::new(&shorter), true));
}

#[test]
fn test_from_node_matches_native_conversion() {
    let document = json!({"a": [1, {"b": "c"}], "d": 2.5});
    let node = JsonNode::new(&document);
    assert_eq!(FrozenValue::from_node(&node), node.freeze());
}

#[test]
fn test_frozen_node_views() {
    let frozen = FrozenValue::Object(vec![
        ("a".to_owned(), FrozenValue::Integer(1)),
        (
            "b".to_owned(),
            FrozenValue::Array(vec![FrozenValue::Bool(true), FrozenValue::Null]),
        ),
    ]);
    let node = frozen.node();
    assert!(node.is_object());
    assert_eq!(node.get_object_size(), Some(2));

    let object = node.get_object().unwrap();
    assert_eq!(object.find("a").unwrap().get_integer(), Some(1));
    assert!(object.find("A").is_none());

    let array = object.find("b").unwrap().get_array().unwrap();
    assert_eq!(array.len(), 2);
    assert_eq!(array.get(0).unwrap().get_bool(), Some(true));
    assert!(array.get(1).unwrap().is_null());

    let names: Vec<String> = object.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["a", "b"]);
}

#[test]
fn test_unbound_frozen_node() {
    let node = FrozenNode::unbound();
    assert!(!node.is_bound());
    assert!(node.is_null());
    assert_eq!(node.freeze(), FrozenValue::Null);
    assert_eq!(node.as_array().unwrap().len(), 0);
    assert_eq!(node.as_object().unwrap().len(), 0);
}

#[test]
fn test_default_is_null() {
    assert_eq!(FrozenValue::default(), FrozenValue::Null);
    assert_eq!(FrozenValue::default().kind(), Kind::Null);
}
