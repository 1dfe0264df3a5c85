use serde_json::json;
use treelens::{
    ArrayRead, Error, FrozenNode, Kind, NodeRead, ObjectRead, json::JsonNode, yaml::YamlNode,
};

#[test]
fn test_bool_is_not_a_number() {
    let document = json!(true);
    let node = JsonNode::new(&document);
    assert!(node.is_bool());
    assert!(!node.is_integer());
    assert!(!node.is_number());
    assert!(node.get_integer().is_none());
    assert!(node.get_number().is_none());
}

#[test]
fn test_integer_and_double_are_exclusive() {
    let document = json!(1);
    let node = JsonNode::new(&document);
    assert!(node.is_integer());
    assert!(!node.is_double());
    assert!(node.is_number());
    assert!(node.get_double().is_none());
    assert_eq!(node.get_number(), Some(1.0));

    let document = json!(1.0);
    let node = JsonNode::new(&document);
    assert!(node.is_double());
    assert!(!node.is_integer());
    assert!(node.get_integer().is_none());
}

#[test]
fn test_null_is_not_a_composite() {
    let document = json!(null);
    let node = JsonNode::new(&document);
    assert!(node.is_null());
    assert!(!node.is_array());
    assert!(!node.is_object());
    assert!(matches!(
        node.as_array(),
        Err(Error::TypeMismatch(Kind::Array, Kind::Null))
    ));
    assert!(matches!(
        node.as_object(),
        Err(Error::TypeMismatch(Kind::Object, Kind::Null))
    ));
}

#[test]
fn test_large_unsigned_integer() {
    let document = json!(u64::MAX);
    let node = JsonNode::new(&document);
    // Integral kind, but out of the signed range the getter reports.
    assert!(node.is_integer());
    assert!(node.get_integer().is_none());
    assert_eq!(node.get_number(), Some(u64::MAX as f64));
}

#[test]
fn test_strict_type_representations() {
    assert!(JsonNode::has_strict_types());
    assert!(YamlNode::has_strict_types());
    assert!(FrozenNode::has_strict_types());
}

#[test]
fn test_empty_composites() {
    let document = json!([]);
    let node = JsonNode::new(&document);
    assert_eq!(node.get_array_size(), Some(0));
    assert!(node.get_array().unwrap().is_empty());

    let document = json!({});
    let node = JsonNode::new(&document);
    assert_eq!(node.get_object_size(), Some(0));
    assert!(node.get_object().unwrap().is_empty());
}

#[test]
fn test_size_getters_require_matching_kind() {
    let document = json!({"a": 1});
    let node = JsonNode::new(&document);
    assert!(node.get_array_size().is_none());
    assert_eq!(node.get_object_size(), Some(1));
}

#[test]
fn test_error_display() {
    let error = Error::TypeMismatch(Kind::Array, Kind::String);
    assert_eq!(
        error.to_string(),
        "kind mismatch: expected array value, got string"
    );
    let error = Error::DepthExceeded(16);
    assert_eq!(
        error.to_string(),
        "value nesting exceeds the materialization depth limit of 16"
    );
}
