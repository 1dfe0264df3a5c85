use std::{iter, slice, sync::LazyLock};

use serde_json::{Map, Value};

use super::number_kind;
use crate::{
    FrozenValue, Kind,
    adapter::{ArrayRead, ArraySink, NodeRead, NodeSink, ObjectRead, ObjectSink},
};

// Backing storage for object views constructed from an unbound node.
static EMPTY_MAP: LazyLock<Map<String, Value>> = LazyLock::new(Map::new);

/// Borrowed read-only node over a [`serde_json::Value`].
///
/// Copyable and non-owning; the caller keeps the document alive for the
/// lifetime of every handle derived from it. The write surface is a
/// no-op, so generic population code runs against this type without
/// effect.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonNode<'doc> {
    value: Option<&'doc Value>,
}

impl<'doc> JsonNode<'doc> {
    #[inline]
    pub fn new(value: &'doc Value) -> Self {
        Self { value: Some(value) }
    }

    pub const fn unbound() -> Self {
        Self { value: None }
    }
}

/// Borrowed view over the elements of a JSON array.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonArray<'doc> {
    items: &'doc [Value],
}

/// Borrowed view over the members of a JSON object.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonObject<'doc> {
    map: Option<&'doc Map<String, Value>>,
}

pub type JsonArrayIter<'doc> =
    iter::Map<slice::Iter<'doc, Value>, fn(&'doc Value) -> JsonNode<'doc>>;

pub type JsonObjectIter<'doc> = iter::Map<
    serde_json::map::Iter<'doc>,
    fn((&'doc String, &'doc Value)) -> (String, JsonNode<'doc>),
>;

impl<'doc> NodeRead for JsonNode<'doc> {
    type Array = JsonArray<'doc>;
    type Object = JsonObject<'doc>;

    fn kind(&self) -> Kind {
        match self.value {
            None | Some(Value::Null) => Kind::Null,
            Some(Value::Bool(_)) => Kind::Bool,
            Some(Value::Number(number)) => number_kind(number),
            Some(Value::String(_)) => Kind::String,
            Some(Value::Array(_)) => Kind::Array,
            Some(Value::Object(_)) => Kind::Object,
        }
    }

    #[inline]
    fn is_bound(&self) -> bool {
        self.value.is_some()
    }

    fn get_bool(&self) -> Option<bool> {
        self.value.and_then(Value::as_bool)
    }

    fn get_integer(&self) -> Option<i64> {
        match self.value {
            Some(Value::Number(number)) => number.as_i64(),
            _ => None,
        }
    }

    fn get_double(&self) -> Option<f64> {
        match self.value {
            Some(Value::Number(number)) if number_kind(number) == Kind::Double => {
                number.as_f64()
            }
            _ => None,
        }
    }

    fn get_string(&self) -> Option<String> {
        self.value.and_then(Value::as_str).map(str::to_owned)
    }

    fn get_array(&self) -> Option<JsonArray<'doc>> {
        match self.value {
            Some(Value::Array(items)) => Some(JsonArray { items }),
            _ => None,
        }
    }

    fn get_object(&self) -> Option<JsonObject<'doc>> {
        match self.value {
            Some(Value::Object(map)) => Some(JsonObject { map: Some(map) }),
            _ => None,
        }
    }

    fn get_number(&self) -> Option<f64> {
        match self.value {
            Some(Value::Number(number)) => number.as_f64(),
            _ => None,
        }
    }

    fn freeze(&self) -> FrozenValue {
        self.value.map(FrozenValue::from).unwrap_or_default()
    }

    fn has_strict_types() -> bool {
        true
    }
}

impl<'doc> ArrayRead for JsonArray<'doc> {
    type Node = JsonNode<'doc>;
    type Iter = JsonArrayIter<'doc>;

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<JsonNode<'doc>> {
        self.items.get(index).map(JsonNode::new)
    }

    fn iter(&self) -> Self::Iter {
        self.items
            .iter()
            .map(JsonNode::new as fn(&'doc Value) -> JsonNode<'doc>)
    }
}

impl<'doc> ObjectRead for JsonObject<'doc> {
    type Node = JsonNode<'doc>;
    type Iter = JsonObjectIter<'doc>;

    #[inline]
    fn len(&self) -> usize {
        self.map.map_or(0, Map::len)
    }

    fn find(&self, name: &str) -> Option<JsonNode<'doc>> {
        self.map.and_then(|map| map.get(name)).map(JsonNode::new)
    }

    fn iter(&self) -> Self::Iter {
        fn entry<'a>(member: (&'a String, &'a Value)) -> (String, JsonNode<'a>) {
            (member.0.clone(), JsonNode::new(member.1))
        }
        self.map
            .unwrap_or_else(|| LazyLock::force(&EMPTY_MAP))
            .iter()
            .map(entry as fn((&'doc String, &'doc Value)) -> (String, JsonNode<'doc>))
    }
}

impl<'doc> NodeSink for JsonNode<'doc> {
    const WRITABLE: bool = false;

    fn set_bool(&self, _value: bool) {}
    fn set_integer(&self, _value: i64) {}
    fn set_double(&self, _value: f64) {}
    fn set_string(&self, _value: &str) {}
    fn set_as_array(&self) {}
    fn set_as_object(&self) {}
}

impl<'doc> ArraySink for JsonArray<'doc> {
    fn create(&self) -> JsonNode<'doc> {
        JsonNode::unbound()
    }
}

impl<'doc> ObjectSink for JsonObject<'doc> {
    fn create(&self, _name: &str) -> JsonNode<'doc> {
        JsonNode::unbound()
    }
}
