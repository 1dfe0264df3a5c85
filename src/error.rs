//! Error types for adapter operations.
//!
//! This module contains the [`Error`] type which represents the failures
//! that adapter operations can report. Ordinary type mismatches during
//! polymorphic traversal are not errors; typed getters report those as
//! `None`. Only strict container construction and the materialization
//! recursion ceiling produce an [`Error`].
//!
//! # Example
//!
//! ```
//! use treelens::{Error, Kind, NodeRead, json::JsonNode};
//!
//! let document = serde_json::json!({"a": 1});
//! let node = JsonNode::new(&document);
//! match node.as_array() {
//!     Err(Error::TypeMismatch(expected, actual)) => {
//!         assert_eq!(expected, Kind::Array);
//!         assert_eq!(actual, Kind::Object);
//!     }
//!     _ => panic!("an object must not view as an array"),
//! }
//! ```

use std::fmt::{self, Display};

use crate::Kind;

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents all possible errors that adapter operations can
/// report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A container view was requested over a bound node of another kind.
    ///
    /// Constructing an array or object view only fails when the node is
    /// bound and holds a different kind; an unbound node always yields an
    /// empty container. The first field is the requested kind, the second
    /// the kind actually held.
    TypeMismatch(Kind, Kind),

    /// Materialization recursed deeper than the configured ceiling.
    ///
    /// Carries the ceiling that was in effect. See
    /// [`assign_with_limit`](crate::assign_with_limit).
    DepthExceeded(usize),
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::TypeMismatch(expected, actual) => formatter.write_str(&format!(
                "kind mismatch: expected {expected} value, got {actual}"
            )),
            Error::DepthExceeded(limit) => formatter.write_str(&format!(
                "value nesting exceeds the materialization depth limit of {limit}"
            )),
        }
    }
}

impl std::error::Error for Error {}
