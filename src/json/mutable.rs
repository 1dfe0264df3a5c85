use std::{cell::RefCell, ops::Range};

use serde_json::{Map, Value};

use crate::{
    FrozenValue, Kind, Result,
    adapter::{ArrayRead, ArraySink, NodeRead, NodeSink, ObjectRead, ObjectSink},
};

/// An owning, mutable JSON document.
///
/// The document hands out [`JsonNodeMut`] handles that address positions
/// by their path from the root rather than by reference, so any number of
/// live handles may point at the same position and a write through one is
/// observable through the others. Single-threaded by construction; the
/// caller keeps the document alive for the lifetime of every handle.
#[derive(Debug)]
pub struct JsonDocument {
    root: RefCell<Value>,
}

impl JsonDocument {
    pub fn new(root: Value) -> Self {
        Self {
            root: RefCell::new(root),
        }
    }

    /// A mutable handle over the document root.
    pub fn root(&self) -> JsonNodeMut<'_> {
        JsonNodeMut {
            document: Some(self),
            path: Vec::new(),
        }
    }

    /// Consumes the document and returns the value it holds.
    pub fn into_inner(self) -> Value {
        self.root.into_inner()
    }

    /// A clone of the value currently held.
    pub fn snapshot(&self) -> Value {
        self.root.borrow().clone()
    }
}

impl Default for JsonDocument {
    fn default() -> Self {
        Self::new(Value::Null)
    }
}

impl From<Value> for JsonDocument {
    fn from(root: Value) -> Self {
        Self::new(root)
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Step {
    Member(String),
    Element(usize),
}

/// Mutable node handle into a [`JsonDocument`].
///
/// A handle addresses its position by path, resolved against the document
/// on every operation; a handle whose path no longer resolves behaves as
/// unbound. `Default` constructs the unbound handle.
#[derive(Clone, Debug, Default)]
pub struct JsonNodeMut<'doc> {
    document: Option<&'doc JsonDocument>,
    path: Vec<Step>,
}

impl<'doc> JsonNodeMut<'doc> {
    pub fn unbound() -> Self {
        Self::default()
    }

    fn child(&self, step: Step) -> Self {
        match self.document {
            Some(document) => {
                let mut path = self.path.clone();
                path.push(step);
                Self {
                    document: Some(document),
                    path,
                }
            }
            None => Self::default(),
        }
    }

    fn read<R>(&self, f: impl FnOnce(&Value) -> R) -> Option<R> {
        let document = self.document?;
        let root = document.root.borrow();
        let mut current: &Value = &root;
        for step in &self.path {
            current = match step {
                Step::Member(name) => current.get(name.as_str())?,
                Step::Element(index) => current.get(*index)?,
            };
        }
        Some(f(current))
    }

    fn write(&self, f: impl FnOnce(&mut Value)) {
        let _ = self.write_and(f);
    }

    fn write_and<R>(&self, f: impl FnOnce(&mut Value) -> R) -> Option<R> {
        let document = self.document?;
        let mut root = document.root.borrow_mut();
        let mut current: &mut Value = &mut root;
        for step in &self.path {
            current = match step {
                Step::Member(name) => current.get_mut(name.as_str())?,
                Step::Element(index) => current.get_mut(*index)?,
            };
        }
        Some(f(current))
    }
}

/// Mutable view over the elements of a JSON array.
#[derive(Clone, Debug, Default)]
pub struct JsonArrayMut<'doc> {
    node: JsonNodeMut<'doc>,
}

/// Mutable view over the members of a JSON object.
#[derive(Clone, Debug, Default)]
pub struct JsonObjectMut<'doc> {
    node: JsonNodeMut<'doc>,
}

impl<'doc> NodeRead for JsonNodeMut<'doc> {
    type Array = JsonArrayMut<'doc>;
    type Object = JsonObjectMut<'doc>;

    fn kind(&self) -> Kind {
        self.read(|value| match value {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(number) => super::number_kind(number),
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        })
        .unwrap_or(Kind::Null)
    }

    fn is_bound(&self) -> bool {
        self.read(|_| ()).is_some()
    }

    fn get_bool(&self) -> Option<bool> {
        self.read(Value::as_bool).flatten()
    }

    fn get_integer(&self) -> Option<i64> {
        self.read(|value| match value {
            Value::Number(number) => number.as_i64(),
            _ => None,
        })
        .flatten()
    }

    fn get_double(&self) -> Option<f64> {
        self.read(|value| match value {
            Value::Number(number) if super::number_kind(number) == Kind::Double => {
                number.as_f64()
            }
            _ => None,
        })
        .flatten()
    }

    fn get_string(&self) -> Option<String> {
        self.read(|value| value.as_str().map(str::to_owned)).flatten()
    }

    fn get_array(&self) -> Option<JsonArrayMut<'doc>> {
        self.read(Value::is_array).unwrap_or(false).then(|| JsonArrayMut {
            node: self.clone(),
        })
    }

    fn get_object(&self) -> Option<JsonObjectMut<'doc>> {
        self.read(Value::is_object)
            .unwrap_or(false)
            .then(|| JsonObjectMut { node: self.clone() })
    }

    fn get_number(&self) -> Option<f64> {
        self.read(|value| match value {
            Value::Number(number) => number.as_f64(),
            _ => None,
        })
        .flatten()
    }

    fn freeze(&self) -> FrozenValue {
        self.read(|value| FrozenValue::from(value)).unwrap_or_default()
    }

    fn has_strict_types() -> bool {
        true
    }
}

impl<'doc> NodeSink for JsonNodeMut<'doc> {
    const WRITABLE: bool = true;

    fn set_bool(&self, value: bool) {
        self.write(|slot| *slot = Value::Bool(value));
    }

    fn set_integer(&self, value: i64) {
        self.write(|slot| *slot = Value::from(value));
    }

    fn set_double(&self, value: f64) {
        self.write(|slot| *slot = Value::from(value));
    }

    fn set_string(&self, value: &str) {
        self.write(|slot| *slot = Value::String(value.to_owned()));
    }

    fn set_as_array(&self) {
        self.write(|slot| {
            if !slot.is_array() {
                *slot = Value::Array(Vec::new());
            }
        });
    }

    fn set_as_object(&self) {
        self.write(|slot| {
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
        });
    }

    // Same-representation fast path: one assignment, no recursive walk.
    // Unlike the generic path this replaces composite values wholesale.
    fn set_frozen(&self, value: &FrozenValue) -> Result<()> {
        self.write(|slot| *slot = Value::from(value));
        Ok(())
    }
}

impl<'doc> ArrayRead for JsonArrayMut<'doc> {
    type Node = JsonNodeMut<'doc>;
    type Iter = JsonArrayIterMut<'doc>;

    fn len(&self) -> usize {
        self.node
            .read(|value| value.as_array().map_or(0, Vec::len))
            .unwrap_or(0)
    }

    fn get(&self, index: usize) -> Option<JsonNodeMut<'doc>> {
        (index < self.len()).then(|| self.node.child(Step::Element(index)))
    }

    fn iter(&self) -> Self::Iter {
        JsonArrayIterMut {
            node: self.node.clone(),
            range: 0..self.len(),
        }
    }
}

impl<'doc> ArraySink for JsonArrayMut<'doc> {
    fn create(&self) -> JsonNodeMut<'doc> {
        let index = self
            .node
            .write_and(|value| match value {
                Value::Array(items) => {
                    items.push(Value::Null);
                    Some(items.len() - 1)
                }
                _ => None,
            })
            .flatten();
        match index {
            Some(index) => self.node.child(Step::Element(index)),
            None => JsonNodeMut::unbound(),
        }
    }
}

impl<'doc> ObjectRead for JsonObjectMut<'doc> {
    type Node = JsonNodeMut<'doc>;
    type Iter = JsonObjectIterMut<'doc>;

    fn len(&self) -> usize {
        self.node
            .read(|value| value.as_object().map_or(0, Map::len))
            .unwrap_or(0)
    }

    fn find(&self, name: &str) -> Option<JsonNodeMut<'doc>> {
        self.node
            .read(|value| value.get(name).is_some())
            .unwrap_or(false)
            .then(|| self.node.child(Step::Member(name.to_owned())))
    }

    fn iter(&self) -> Self::Iter {
        // Snapshot the member names so iteration never holds a borrow of
        // the document across caller code.
        let names = self
            .node
            .read(|value| {
                value
                    .as_object()
                    .map(|map| map.keys().cloned().collect::<Vec<_>>())
                    .unwrap_or_default()
            })
            .unwrap_or_default();
        JsonObjectIterMut {
            node: self.node.clone(),
            names: names.into_iter(),
        }
    }
}

impl<'doc> ObjectSink for JsonObjectMut<'doc> {
    fn create(&self, name: &str) -> JsonNodeMut<'doc> {
        let created = self
            .node
            .write_and(|value| match value {
                Value::Object(map) => {
                    map.entry(name).or_insert(Value::Null);
                    true
                }
                _ => false,
            })
            .unwrap_or(false);
        if created {
            self.node.child(Step::Member(name.to_owned()))
        } else {
            JsonNodeMut::unbound()
        }
    }
}

/// Iterator over the elements of a [`JsonArrayMut`].
#[derive(Clone, Debug)]
pub struct JsonArrayIterMut<'doc> {
    node: JsonNodeMut<'doc>,
    range: Range<usize>,
}

impl<'doc> Iterator for JsonArrayIterMut<'doc> {
    type Item = JsonNodeMut<'doc>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.range.next()?;
        Some(self.node.child(Step::Element(index)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<'doc> DoubleEndedIterator for JsonArrayIterMut<'doc> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let index = self.range.next_back()?;
        Some(self.node.child(Step::Element(index)))
    }
}

impl<'doc> ExactSizeIterator for JsonArrayIterMut<'doc> {}

/// Iterator over the members of a [`JsonObjectMut`].
#[derive(Clone, Debug)]
pub struct JsonObjectIterMut<'doc> {
    node: JsonNodeMut<'doc>,
    names: std::vec::IntoIter<String>,
}

impl<'doc> Iterator for JsonObjectIterMut<'doc> {
    type Item = (String, JsonNodeMut<'doc>);

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.names.next()?;
        let node = self.node.child(Step::Member(name.clone()));
        Some((name, node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.names.size_hint()
    }
}

impl<'doc> DoubleEndedIterator for JsonObjectIterMut<'doc> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let name = self.names.next_back()?;
        let node = self.node.child(Step::Member(name.clone()));
        Some((name, node))
    }
}

impl<'doc> ExactSizeIterator for JsonObjectIterMut<'doc> {}
