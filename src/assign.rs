//! Recursive materialization of a value into a destination node.
//!
//! The algorithm works only against the adapter capability set, which is
//! what lets a value read through one representation populate a document
//! backed by another. Whether the destination accepts writes at all was
//! decided when its adapter type was chosen: over a read-only type the
//! whole operation folds to a no-op, with no per-node checks.

use crate::{
    Error, Kind, Result,
    adapter::{ArrayRead, ArraySink, NodeRead, NodeSink, ObjectRead, ObjectSink},
};

/// Default ceiling on materialization recursion depth.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Writes `source`'s value into `destination` with the default depth
/// ceiling.
///
/// Composite destinations are merged additively: members or elements
/// already present in the destination but absent from the source survive.
/// Re-assigning the same source is idempotent for scalar leaves but leaves
/// destination siblings untouched rather than reverting them. A null
/// source writes nothing.
///
/// Writing into a read-only destination is defined behavior (a silent
/// no-op), not an error; callers that must know whether a destination can
/// accept writes check [`NodeSink::WRITABLE`].
pub fn assign<S, D>(destination: &D, source: &S) -> Result<()>
where
    S: NodeRead,
    D: NodeSink,
    D::Array: ArraySink,
    D::Object: ObjectSink,
{
    assign_with_limit(destination, source, DEFAULT_MAX_DEPTH)
}

/// [`assign`] with an explicit recursion ceiling.
///
/// Fails with [`Error::DepthExceeded`] when the source value nests deeper
/// than `max_depth` levels; this is the only failure the operation can
/// produce.
pub fn assign_with_limit<S, D>(destination: &D, source: &S, max_depth: usize) -> Result<()>
where
    S: NodeRead,
    D: NodeSink,
    D::Array: ArraySink,
    D::Object: ObjectSink,
{
    if !D::WRITABLE {
        return Ok(());
    }
    assign_at(destination, source, 0, max_depth)
}

fn assign_at<S, D>(destination: &D, source: &S, depth: usize, max_depth: usize) -> Result<()>
where
    S: NodeRead,
    D: NodeSink,
    D::Array: ArraySink,
    D::Object: ObjectSink,
{
    if depth >= max_depth {
        return Err(Error::DepthExceeded(max_depth));
    }
    match source.kind() {
        Kind::Object => {
            destination.set_as_object();
            if let (Some(members), Some(target)) = (source.get_object(), destination.get_object())
            {
                for (name, member) in members.iter() {
                    let slot = target.create(&name);
                    assign_at(&slot, &member, depth + 1, max_depth)?;
                }
            }
        }
        Kind::Array => {
            destination.set_as_array();
            if let (Some(elements), Some(target)) = (source.get_array(), destination.get_array()) {
                for element in elements.iter() {
                    let slot = target.create();
                    assign_at(&slot, &element, depth + 1, max_depth)?;
                }
            }
        }
        Kind::String => {
            if let Some(value) = source.get_string() {
                destination.set_string(&value);
            }
        }
        Kind::Bool => {
            if let Some(value) = source.get_bool() {
                destination.set_bool(value);
            }
        }
        Kind::Double => {
            if let Some(value) = source.get_double() {
                destination.set_double(value);
            }
        }
        Kind::Integer => {
            if let Some(value) = source.get_integer() {
                destination.set_integer(value);
            }
        }
        // The protocol has no branch for null: a null source writes
        // nothing and the destination keeps its value.
        Kind::Null => {}
    }
    Ok(())
}
