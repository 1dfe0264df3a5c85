//! Uniform adapter layer over JSON-like document trees.
//!
//! Callers wrap a position in an externally-owned tree in a node handle,
//! classify it, descend through array/object views, freeze subtrees into
//! owned snapshots, and materialize values into destinations that may be
//! backed by a different representation — or by none that accepts writes,
//! in which case the whole write path is a compile-time no-op.

mod adapter;
mod assign;
mod compare;
mod error;
mod frozen;
mod kind;

#[cfg(feature = "serde")]
mod de;
#[cfg(feature = "json")]
pub mod json;
#[cfg(feature = "serde")]
mod ser;
#[cfg(feature = "yaml")]
pub mod yaml;

pub use adapter::ArrayRead;
pub use adapter::ArraySink;
pub use adapter::NodeRead;
pub use adapter::NodeSink;
pub use adapter::ObjectRead;
pub use adapter::ObjectSink;

pub use assign::DEFAULT_MAX_DEPTH;
pub use assign::assign;
pub use assign::assign_with_limit;

pub use compare::equal;

pub use error::Error;
pub use error::Result;

pub use frozen::FrozenArray;
pub use frozen::FrozenArrayIter;
pub use frozen::FrozenNode;
pub use frozen::FrozenObject;
pub use frozen::FrozenObjectIter;
pub use frozen::FrozenValue;

pub use kind::Kind;
