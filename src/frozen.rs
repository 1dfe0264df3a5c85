use std::{iter, slice};

use crate::{
    Kind, Result,
    adapter::{ArrayRead, ArraySink, NodeRead, NodeSink, ObjectRead, ObjectSink},
};

/// An owned, representation-independent snapshot of a document value.
///
/// A frozen value owns all nested data and keeps no reference to the tree
/// it was copied from, so it outlives that tree. It is the natural shape
/// for long-lived constants computed from one document and later written
/// into others, possibly backed by different representations.
///
/// Object members keep the order they were frozen in.
///
/// # Example
///
/// ```
/// use treelens::{NodeRead, json::{JsonDocument, JsonNode}};
///
/// let defaults = serde_json::json!({"retries": 3});
/// let frozen = JsonNode::new(&defaults).freeze();
///
/// let document = JsonDocument::new(serde_json::json!({}));
/// frozen.set_value_into(&document.root()).unwrap();
/// assert_eq!(document.into_inner(), defaults);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FrozenValue {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Double(f64),
    String(String),
    Array(Vec<FrozenValue>),
    Object(Vec<(String, FrozenValue)>),
}

impl FrozenValue {
    pub fn kind(&self) -> Kind {
        match self {
            FrozenValue::Null => Kind::Null,
            FrozenValue::Bool(_) => Kind::Bool,
            FrozenValue::Integer(_) => Kind::Integer,
            FrozenValue::Double(_) => Kind::Double,
            FrozenValue::String(_) => Kind::String,
            FrozenValue::Array(_) => Kind::Array,
            FrozenValue::Object(_) => Kind::Object,
        }
    }

    /// A read-only node view over this snapshot, making it usable wherever
    /// a document node is expected.
    #[inline]
    pub fn node(&self) -> FrozenNode<'_> {
        FrozenNode { value: Some(self) }
    }

    /// Deep-copies a node of any representation into a snapshot.
    ///
    /// Representations with a native frozen conversion use that instead;
    /// this is the generic path that works against the read capability
    /// alone.
    pub fn from_node<N: NodeRead>(node: &N) -> Self {
        match node.kind() {
            Kind::Null => FrozenValue::Null,
            Kind::Bool => node.get_bool().map(FrozenValue::Bool).unwrap_or_default(),
            Kind::Integer => node
                .get_integer()
                .map(FrozenValue::Integer)
                .or_else(|| node.get_number().map(FrozenValue::Double))
                .unwrap_or_default(),
            Kind::Double => node
                .get_double()
                .map(FrozenValue::Double)
                .unwrap_or_default(),
            Kind::String => node
                .get_string()
                .map(FrozenValue::String)
                .unwrap_or_default(),
            Kind::Array => FrozenValue::Array(
                node.get_array()
                    .map(|array| {
                        array
                            .iter()
                            .map(|element| Self::from_node(&element))
                            .collect()
                    })
                    .unwrap_or_default(),
            ),
            Kind::Object => FrozenValue::Object(
                node.get_object()
                    .map(|object| {
                        object
                            .iter()
                            .map(|(name, member)| (name, Self::from_node(&member)))
                            .collect()
                    })
                    .unwrap_or_default(),
            ),
        }
    }

    /// Structural equality against a node of any representation.
    ///
    /// In strict mode kinds must match exactly, so an integer never equals
    /// a double; in non-strict mode numeric kinds compare by numeric
    /// value.
    pub fn equal_to<N: NodeRead>(&self, other: &N, strict: bool) -> bool {
        crate::equal(&self.node(), other, strict)
    }

    /// Writes this snapshot's value into a destination node.
    ///
    /// Dispatches through [`NodeSink::set_frozen`], so destinations with a
    /// native fast path copy in a single assignment and all others take
    /// the generic materialization path. Writing into a read-only or
    /// unbound destination is a silent no-op.
    pub fn set_value_into<D: NodeSink>(&self, destination: &D) -> Result<()>
    where
        <D as NodeRead>::Array: ArraySink,
        <D as NodeRead>::Object: ObjectSink,
    {
        destination.set_frozen(self)
    }
}

/// Read-only node view over a [`FrozenValue`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FrozenNode<'v> {
    value: Option<&'v FrozenValue>,
}

impl<'v> FrozenNode<'v> {
    #[inline]
    pub fn new(value: &'v FrozenValue) -> Self {
        Self { value: Some(value) }
    }

    pub const fn unbound() -> Self {
        Self { value: None }
    }
}

/// View over the elements of a frozen array.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrozenArray<'v> {
    items: &'v [FrozenValue],
}

/// View over the members of a frozen object.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrozenObject<'v> {
    members: &'v [(String, FrozenValue)],
}

pub type FrozenArrayIter<'v> =
    iter::Map<slice::Iter<'v, FrozenValue>, fn(&'v FrozenValue) -> FrozenNode<'v>>;

pub type FrozenObjectIter<'v> = iter::Map<
    slice::Iter<'v, (String, FrozenValue)>,
    fn(&'v (String, FrozenValue)) -> (String, FrozenNode<'v>),
>;

impl<'v> NodeRead for FrozenNode<'v> {
    type Array = FrozenArray<'v>;
    type Object = FrozenObject<'v>;

    fn kind(&self) -> Kind {
        self.value.map(FrozenValue::kind).unwrap_or(Kind::Null)
    }

    #[inline]
    fn is_bound(&self) -> bool {
        self.value.is_some()
    }

    fn get_bool(&self) -> Option<bool> {
        match self.value {
            Some(FrozenValue::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    fn get_integer(&self) -> Option<i64> {
        match self.value {
            Some(FrozenValue::Integer(value)) => Some(*value),
            _ => None,
        }
    }

    fn get_double(&self) -> Option<f64> {
        match self.value {
            Some(FrozenValue::Double(value)) => Some(*value),
            _ => None,
        }
    }

    fn get_string(&self) -> Option<String> {
        match self.value {
            Some(FrozenValue::String(value)) => Some(value.clone()),
            _ => None,
        }
    }

    fn get_array(&self) -> Option<FrozenArray<'v>> {
        match self.value {
            Some(FrozenValue::Array(items)) => Some(FrozenArray { items }),
            _ => None,
        }
    }

    fn get_object(&self) -> Option<FrozenObject<'v>> {
        match self.value {
            Some(FrozenValue::Object(members)) => Some(FrozenObject { members }),
            _ => None,
        }
    }

    fn freeze(&self) -> FrozenValue {
        self.value.cloned().unwrap_or_default()
    }

    fn has_strict_types() -> bool {
        true
    }
}

impl<'v> ArrayRead for FrozenArray<'v> {
    type Node = FrozenNode<'v>;
    type Iter = FrozenArrayIter<'v>;

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<FrozenNode<'v>> {
        self.items.get(index).map(FrozenNode::new)
    }

    fn iter(&self) -> Self::Iter {
        self.items
            .iter()
            .map(FrozenNode::new as fn(&'v FrozenValue) -> FrozenNode<'v>)
    }
}

impl<'v> ObjectRead for FrozenObject<'v> {
    type Node = FrozenNode<'v>;
    type Iter = FrozenObjectIter<'v>;

    #[inline]
    fn len(&self) -> usize {
        self.members.len()
    }

    fn find(&self, name: &str) -> Option<FrozenNode<'v>> {
        self.members
            .iter()
            .find(|(member, _)| member.as_str() == name)
            .map(|(_, value)| FrozenNode::new(value))
    }

    fn iter(&self) -> Self::Iter {
        fn entry<'a>(member: &'a (String, FrozenValue)) -> (String, FrozenNode<'a>) {
            (member.0.clone(), FrozenNode::new(&member.1))
        }
        self.members
            .iter()
            .map(entry as fn(&'v (String, FrozenValue)) -> (String, FrozenNode<'v>))
    }
}

// Snapshots never mutate; the sink side exists so generic algorithms can
// treat a frozen tree like any other (read-only) destination.
impl<'v> NodeSink for FrozenNode<'v> {
    const WRITABLE: bool = false;

    fn set_bool(&self, _value: bool) {}
    fn set_integer(&self, _value: i64) {}
    fn set_double(&self, _value: f64) {}
    fn set_string(&self, _value: &str) {}
    fn set_as_array(&self) {}
    fn set_as_object(&self) {}
}

impl<'v> ArraySink for FrozenArray<'v> {
    fn create(&self) -> FrozenNode<'v> {
        FrozenNode::unbound()
    }
}

impl<'v> ObjectSink for FrozenObject<'v> {
    fn create(&self, _name: &str) -> FrozenNode<'v> {
        FrozenNode::unbound()
    }
}
