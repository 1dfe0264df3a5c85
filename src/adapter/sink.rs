use crate::{
    FrozenValue, Result,
    adapter::read::{ArrayRead, NodeRead, ObjectRead},
};

/// Write access to a node, implemented by every representation.
///
/// Whether writes have any effect is decided when the adapter type is
/// chosen, not per operation: read-only representations implement every
/// operation here as a no-op and report [`WRITABLE`](NodeSink::WRITABLE)
/// as `false`, while mutable representations perform real mutations.
/// Generic code can therefore materialize values into any destination
/// without runtime representation checks; callers that must know whether a
/// destination accepts writes consult `WRITABLE` rather than waiting for a
/// failure that will never come.
///
/// Writes through an unbound handle are no-ops on every representation.
/// Handles to the same position may alias; concurrent mutation from
/// multiple threads is a caller violation, the sink performs no locking.
pub trait NodeSink: NodeRead
where
    Self::Array: ArraySink,
    Self::Object: ObjectSink,
{
    /// Whether writes through this representation have any effect.
    const WRITABLE: bool;

    fn set_bool(&self, value: bool);
    fn set_integer(&self, value: i64);
    fn set_double(&self, value: f64);
    fn set_string(&self, value: &str);

    /// Converts the node to an array. A node that already holds an array
    /// keeps its elements; any other kind is replaced by an empty array.
    fn set_as_array(&self);

    /// Converts the node to an object. A node that already holds an object
    /// keeps its members; any other kind is replaced by an empty object.
    fn set_as_object(&self);

    /// Writes a frozen snapshot into this node.
    ///
    /// The default takes the generic materialization path, which merges
    /// additively into composite destinations. Representations may
    /// override it with a native single-assignment fast path, which
    /// replaces the destination value wholesale.
    fn set_frozen(&self, value: &FrozenValue) -> Result<()> {
        crate::assign(self, &value.node())
    }
}

/// Write access to an array view.
pub trait ArraySink: ArrayRead {
    /// Appends one null-valued element and returns a handle to it.
    ///
    /// Over an unbound view, or through a read-only representation, the
    /// returned handle is unbound and later writes through it vanish.
    fn create(&self) -> Self::Node;

    /// Appends null-valued elements until `len() > index`.
    fn resize_past(&self, index: usize) {
        while self.len() <= index {
            if !self.create().is_bound() {
                break;
            }
        }
    }
}

/// Write access to an object view.
pub trait ObjectSink: ObjectRead {
    /// Returns a handle to the member named `name`, inserting a
    /// null-valued member first when absent.
    ///
    /// Idempotent: repeated calls with the same name address the same
    /// slot and never disturb an existing value. Over an unbound view, or
    /// through a read-only representation, the returned handle is unbound.
    fn create(&self, name: &str) -> Self::Node;
}
