use serde_json::json;
use treelens::{
    ArrayRead, ArraySink, NodeRead, NodeSink, ObjectRead, ObjectSink,
    json::{JsonDocument, JsonNodeMut},
};

#[test]
fn test_scalar_writes() {
    let document = JsonDocument::new(json!(null));
    let root = document.root();

    root.set_integer(42);
    assert_eq!(root.get_integer(), Some(42));

    root.set_string("hello");
    assert_eq!(root.get_string().as_deref(), Some("hello"));

    root.set_bool(true);
    assert_eq!(root.get_bool(), Some(true));

    root.set_double(1.5);
    assert_eq!(root.get_double(), Some(1.5));

    assert_eq!(document.into_inner(), json!(1.5));
}

#[test]
fn test_create_member_is_idempotent() {
    let document = JsonDocument::new(json!({}));
    let root = document.root();
    let object = root.get_object().unwrap();

    let first = object.create("a");
    let second = object.create("a");
    assert_eq!(object.len(), 1);

    // Both handles address the same slot.
    first.set_integer(7);
    assert_eq!(second.get_integer(), Some(7));
    second.set_integer(8);
    assert_eq!(first.get_integer(), Some(8));

    // Repeated creation never disturbs the existing value.
    let third = object.create("a");
    assert_eq!(third.get_integer(), Some(8));
    assert_eq!(object.len(), 1);

    assert_eq!(document.into_inner(), json!({"a": 8}));
}

#[test]
fn test_create_element_appends_null_slot() {
    let document = JsonDocument::new(json!([1, 2]));
    let root = document.root();
    let array = root.get_array().unwrap();

    let slot = array.create();
    assert_eq!(array.len(), 3);
    assert!(slot.is_null());
    slot.set_integer(3);

    assert_eq!(document.into_inner(), json!([1, 2, 3]));
}

#[test]
fn test_resize_past_appends_null_slots() {
    let document = JsonDocument::new(json!([]));
    let root = document.root();
    let array = root.get_array().unwrap();

    array.resize_past(2);
    assert_eq!(array.len(), 3);
    assert_eq!(document.snapshot(), json!([null, null, null]));

    // Already long enough: nothing changes.
    array.resize_past(1);
    assert_eq!(array.len(), 3);
}

#[test]
fn test_set_as_composite_preserves_matching_kind() {
    let document = JsonDocument::new(json!({"x": 1}));
    let root = document.root();

    // Already an object: members survive.
    root.set_as_object();
    assert_eq!(document.snapshot(), json!({"x": 1}));

    // Kind change replaces the value.
    root.set_as_array();
    assert_eq!(document.snapshot(), json!([]));

    root.set_as_object();
    assert_eq!(document.snapshot(), json!({}));
}

#[test]
fn test_nested_structure_building() {
    let document = JsonDocument::new(json!({}));
    let root = document.root();

    let object = root.get_object().unwrap();
    let child = object.create("child");
    child.set_as_object();
    let grandchild = child.get_object().unwrap().create("values");
    grandchild.set_as_array();
    let values = grandchild.get_array().unwrap();
    values.create().set_integer(1);
    values.create().set_integer(2);

    assert_eq!(
        document.into_inner(),
        json!({"child": {"values": [1, 2]}})
    );
}

#[test]
fn test_member_iteration_order_and_mutation() {
    let document = JsonDocument::new(json!({"b": 1, "a": 2, "c": 3}));
    let root = document.root();
    let object = root.get_object().unwrap();

    let names: Vec<String> = object.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["b", "a", "c"]);

    let reversed: Vec<String> = object.iter().rev().map(|(name, _)| name).collect();
    assert_eq!(reversed, ["c", "a", "b"]);

    // Iteration holds no borrow of the document, so writes through the
    // yielded handles are fine.
    for (_, member) in object.iter() {
        member.set_integer(0);
    }
    assert_eq!(document.snapshot(), json!({"b": 0, "a": 0, "c": 0}));

    let element_sum: i64 = document
        .root()
        .get_object()
        .unwrap()
        .iter()
        .filter_map(|(_, member)| member.get_integer())
        .sum();
    assert_eq!(element_sum, 0);
}

#[test]
fn test_element_iteration() {
    let document = JsonDocument::new(json!([10, 20, 30]));
    let root = document.root();
    let array = root.get_array().unwrap();

    let values: Vec<i64> = array
        .iter()
        .map(|element| element.get_integer().unwrap())
        .collect();
    assert_eq!(values, [10, 20, 30]);

    for element in array.iter().rev() {
        element.set_bool(false);
    }
    assert_eq!(document.snapshot(), json!([false, false, false]));
}

#[test]
fn test_unbound_handle_is_a_noop() {
    let unbound = JsonNodeMut::unbound();
    assert!(!unbound.is_bound());
    assert!(unbound.is_null());

    unbound.set_integer(1);
    unbound.set_as_object();
    assert!(unbound.is_null());

    let object = unbound.as_object().unwrap();
    assert_eq!(object.len(), 0);
    let slot = object.create("a");
    assert!(!slot.is_bound());
    slot.set_integer(5);
    assert!(slot.get_integer().is_none());

    let array = unbound.as_array().unwrap();
    assert!(!array.create().is_bound());
    array.resize_past(4);
    assert_eq!(array.len(), 0);
}

#[test]
fn test_stale_handle_behaves_unbound() {
    let document = JsonDocument::new(json!({"a": 1}));
    let root = document.root();
    let member = root.get_object().unwrap().find("a").unwrap();
    assert_eq!(member.get_integer(), Some(1));

    // Replacing the parent invalidates the member's path.
    root.set_as_array();
    assert!(!member.is_bound());
    assert!(member.get_integer().is_none());
    member.set_integer(9);
    assert_eq!(document.into_inner(), json!([]));
}

#[test]
fn test_find_addresses_live_slot() {
    let document = JsonDocument::new(json!({"a": 1}));
    let root = document.root();
    let object = root.get_object().unwrap();

    let found = object.find("a").unwrap();
    found.set_integer(2);
    assert_eq!(object.find("a").unwrap().get_integer(), Some(2));
    assert!(object.find("missing").is_none());
}

#[test]
fn test_snapshot_and_into_inner() {
    let document = JsonDocument::new(json!({"a": 1}));
    let before = document.snapshot();
    document.root().get_object().unwrap().create("b").set_integer(2);
    assert_eq!(before, json!({"a": 1}));
    assert_eq!(document.into_inner(), json!({"a": 1, "b": 2}));
}
