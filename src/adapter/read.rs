use crate::{Error, FrozenValue, Kind, Result};

/// Read access to one position in an externally-owned document tree.
///
/// A node is a non-owning handle; `Default` constructs the unbound handle,
/// which behaves as a null value for every read operation and never fails.
/// Typed getters report a value only when the node's kind matches exactly;
/// a mismatch is a normal traversal outcome, not an error.
///
/// Implementations provide the mechanics of reading one concrete
/// representation; the provided methods layer the shared classification and
/// container-construction semantics on top, so all representations behave
/// consistently.
pub trait NodeRead: Clone + Default + Sized {
    type Array: ArrayRead<Node = Self>;
    type Object: ObjectRead<Node = Self>;

    /// The kind of value currently held; `Kind::Null` when unbound.
    fn kind(&self) -> Kind;

    /// Whether this handle currently refers to a position in a document.
    fn is_bound(&self) -> bool;

    fn get_bool(&self) -> Option<bool>;
    fn get_integer(&self) -> Option<i64>;
    fn get_double(&self) -> Option<f64>;
    fn get_string(&self) -> Option<String>;

    /// Returns an array view, if the node holds an array.
    fn get_array(&self) -> Option<Self::Array>;

    /// Returns an object view, if the node holds an object.
    fn get_object(&self) -> Option<Self::Object>;

    /// Deep-copies the current value into an owned snapshot that outlives
    /// the document.
    fn freeze(&self) -> FrozenValue;

    /// Whether this representation distinguishes integer from
    /// floating-point storage. A static property of the representation,
    /// used by generic equality and coercion logic upstream.
    fn has_strict_types() -> bool;

    #[inline]
    fn is_null(&self) -> bool {
        self.kind() == Kind::Null
    }

    #[inline]
    fn is_bool(&self) -> bool {
        self.kind() == Kind::Bool
    }

    /// True for integral values; always false for booleans.
    #[inline]
    fn is_integer(&self) -> bool {
        self.kind() == Kind::Integer
    }

    #[inline]
    fn is_double(&self) -> bool {
        self.kind() == Kind::Double
    }

    /// True for integer or double values; never for booleans.
    #[inline]
    fn is_number(&self) -> bool {
        self.kind().is_number()
    }

    #[inline]
    fn is_string(&self) -> bool {
        self.kind() == Kind::String
    }

    /// False when the node holds null, even if the backing representation
    /// conflates absent with null.
    #[inline]
    fn is_array(&self) -> bool {
        self.kind() == Kind::Array
    }

    #[inline]
    fn is_object(&self) -> bool {
        self.kind() == Kind::Object
    }

    /// The numeric value as a double, for integer and double nodes alike.
    #[inline]
    fn get_number(&self) -> Option<f64> {
        match self.kind() {
            Kind::Integer => self.get_integer().map(|value| value as f64),
            Kind::Double => self.get_double(),
            _ => None,
        }
    }

    #[inline]
    fn get_array_size(&self) -> Option<usize> {
        self.get_array().map(|array| array.len())
    }

    #[inline]
    fn get_object_size(&self) -> Option<usize> {
        self.get_object().map(|object| object.len())
    }

    /// Constructs an array view, failing on a bound node of another kind.
    ///
    /// An unbound node always yields an empty view.
    fn as_array(&self) -> Result<Self::Array> {
        if !self.is_bound() {
            return Ok(<Self::Array>::default());
        }
        self.get_array()
            .ok_or(Error::TypeMismatch(Kind::Array, self.kind()))
    }

    /// Constructs an object view, failing on a bound node of another kind.
    ///
    /// An unbound node always yields an empty view.
    fn as_object(&self) -> Result<Self::Object> {
        if !self.is_bound() {
            return Ok(<Self::Object>::default());
        }
        self.get_object()
            .ok_or(Error::TypeMismatch(Kind::Object, self.kind()))
    }
}

/// An iterable view over the elements of an array node.
///
/// Views are cheap to clone and borrow the caller's document; iteration
/// yields fresh node handles, never references into internal storage, and
/// restarts by calling [`iter`](ArrayRead::iter) again. Element order is
/// the backing representation's storage order.
pub trait ArrayRead: Clone + Default + Sized {
    type Node: NodeRead;
    type Iter: Iterator<Item = Self::Node> + DoubleEndedIterator + ExactSizeIterator;

    /// Element count; 0 for the unbound view.
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<Self::Node>;

    fn iter(&self) -> Self::Iter;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An iterable view over the members of an object node.
///
/// Iteration yields `(name, node)` pairs with owned name strings, in the
/// backing representation's member order. Names are compared by exact byte
/// equality, never normalized.
pub trait ObjectRead: Clone + Default + Sized {
    type Node: NodeRead;
    type Iter: Iterator<Item = (String, Self::Node)> + DoubleEndedIterator + ExactSizeIterator;

    /// Member count; 0 for the unbound view.
    fn len(&self) -> usize;

    /// Exact-match member lookup; `None` when no member has that name.
    fn find(&self, name: &str) -> Option<Self::Node>;

    fn iter(&self) -> Self::Iter;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }
}
