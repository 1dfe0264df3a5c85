//! Read-only adapter over `serde_yaml` documents.
//!
//! [`YamlNode`] wraps a caller-owned [`serde_yaml::Value`]. Tagged values
//! are transparently unwrapped to the value they carry. Only string-keyed
//! mapping members are visible through the object view; YAML's non-string
//! keys have no counterpart in this data model and are skipped
//! consistently by `len`, `find`, and iteration.

use std::{iter, slice};

use serde_yaml::{Mapping, Number, Value};

use crate::{
    FrozenValue, Kind,
    adapter::{ArrayRead, ArraySink, NodeRead, NodeSink, ObjectRead, ObjectSink},
};

fn number_kind(number: &Number) -> Kind {
    if number.is_i64() || number.is_u64() {
        Kind::Integer
    } else {
        Kind::Double
    }
}

fn untagged(mut value: &Value) -> &Value {
    while let Value::Tagged(tagged) = value {
        value = &tagged.value;
    }
    value
}

/// Borrowed read-only node over a [`serde_yaml::Value`].
#[derive(Clone, Copy, Debug, Default)]
pub struct YamlNode<'doc> {
    value: Option<&'doc Value>,
}

impl<'doc> YamlNode<'doc> {
    #[inline]
    pub fn new(value: &'doc Value) -> Self {
        Self {
            value: Some(untagged(value)),
        }
    }

    pub const fn unbound() -> Self {
        Self { value: None }
    }
}

/// Borrowed view over the elements of a YAML sequence.
#[derive(Clone, Copy, Debug, Default)]
pub struct YamlArray<'doc> {
    items: &'doc [Value],
}

/// Borrowed view over the string-keyed members of a YAML mapping.
#[derive(Clone, Copy, Debug, Default)]
pub struct YamlObject<'doc> {
    map: Option<&'doc Mapping>,
}

pub type YamlArrayIter<'doc> =
    iter::Map<slice::Iter<'doc, Value>, fn(&'doc Value) -> YamlNode<'doc>>;

pub type YamlObjectIter<'doc> = std::vec::IntoIter<(String, YamlNode<'doc>)>;

impl<'doc> NodeRead for YamlNode<'doc> {
    type Array = YamlArray<'doc>;
    type Object = YamlObject<'doc>;

    fn kind(&self) -> Kind {
        match self.value {
            None | Some(Value::Null) => Kind::Null,
            Some(Value::Bool(_)) => Kind::Bool,
            Some(Value::Number(number)) => number_kind(number),
            Some(Value::String(_)) => Kind::String,
            Some(Value::Sequence(_)) => Kind::Array,
            Some(Value::Mapping(_)) => Kind::Object,
            // `new` unwraps tags eagerly; classify by the carried value.
            Some(Value::Tagged(tagged)) => YamlNode::new(&tagged.value).kind(),
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

    fn get_array(&self) -> Option<YamlArray<'doc>> {
        match self.value {
            Some(Value::Sequence(items)) => Some(YamlArray { items }),
            _ => None,
        }
    }

    fn get_object(&self) -> Option<YamlObject<'doc>> {
        match self.value {
            Some(Value::Mapping(map)) => Some(YamlObject { map: Some(map) }),
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

impl<'doc> ArrayRead for YamlArray<'doc> {
    type Node = YamlNode<'doc>;
    type Iter = YamlArrayIter<'doc>;

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<YamlNode<'doc>> {
        self.items.get(index).map(YamlNode::new)
    }

    fn iter(&self) -> Self::Iter {
        self.items
            .iter()
            .map(YamlNode::new as fn(&'doc Value) -> YamlNode<'doc>)
    }
}

impl<'doc> ObjectRead for YamlObject<'doc> {
    type Node = YamlNode<'doc>;
    type Iter = YamlObjectIter<'doc>;

    fn len(&self) -> usize {
        self.map.map_or(0, |map| {
            map.iter().filter(|(name, _)| name.as_str().is_some()).count()
        })
    }

    fn find(&self, name: &str) -> Option<YamlNode<'doc>> {
        let map = self.map?;
        map.iter()
            .find(|(member, _)| member.as_str() == Some(name))
            .map(|(_, value)| YamlNode::new(value))
    }

    fn iter(&self) -> Self::Iter {
        let members: Vec<_> = self
            .map
            .into_iter()
            .flat_map(Mapping::iter)
            .filter_map(|(name, value)| {
                Some((name.as_str()?.to_owned(), YamlNode::new(value)))
            })
            .collect();
        members.into_iter()
    }
}

impl<'doc> NodeSink for YamlNode<'doc> {
    const WRITABLE: bool = false;

    fn set_bool(&self, _value: bool) {}
    fn set_integer(&self, _value: i64) {}
    fn set_double(&self, _value: f64) {}
    fn set_string(&self, _value: &str) {}
    fn set_as_array(&self) {}
    fn set_as_object(&self) {}
}

impl<'doc> ArraySink for YamlArray<'doc> {
    fn create(&self) -> YamlNode<'doc> {
        YamlNode::unbound()
    }
}

impl<'doc> ObjectSink for YamlObject<'doc> {
    fn create(&self, _name: &str) -> YamlNode<'doc> {
        YamlNode::unbound()
    }
}

impl From<&Value> for FrozenValue {
    fn from(value: &Value) -> Self {
        match untagged(value) {
            Value::Null => FrozenValue::Null,
            Value::Bool(value) => FrozenValue::Bool(*value),
            Value::Number(number) => match number.as_i64() {
                Some(value) => FrozenValue::Integer(value),
                None => number
                    .as_f64()
                    .map_or(FrozenValue::Null, FrozenValue::Double),
            },
            Value::String(value) => FrozenValue::String(value.clone()),
            Value::Sequence(items) => {
                FrozenValue::Array(items.iter().map(FrozenValue::from).collect())
            }
            Value::Mapping(members) => FrozenValue::Object(
                members
                    .iter()
                    .filter_map(|(name, member)| {
                        Some((name.as_str()?.to_owned(), FrozenValue::from(member)))
                    })
                    .collect(),
            ),
            Value::Tagged(_) => FrozenValue::Null,
        }
    }
}
