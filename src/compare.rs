use crate::{
    Kind,
    adapter::{ArrayRead, NodeRead, ObjectRead},
};

/// Structural equality between two nodes of any representations.
///
/// In strict mode kinds must match exactly: an integer never equals a
/// double, even when numerically equal. In non-strict mode the numeric
/// kinds compare by numeric value across kind. Arrays compare pairwise in
/// order; objects compare by member lookup, so member order never affects
/// the result. Unbound nodes equal null.
pub fn equal<A, B>(lhs: &A, rhs: &B, strict: bool) -> bool
where
    A: NodeRead,
    B: NodeRead,
{
    match lhs.kind() {
        Kind::Null => rhs.is_null(),
        Kind::Bool => match (lhs.get_bool(), rhs.get_bool()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
        Kind::Integer | Kind::Double if !strict => match (lhs.get_number(), rhs.get_number()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
        Kind::Integer => match (lhs.get_integer(), rhs.get_integer()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
        Kind::Double => match (lhs.get_double(), rhs.get_double()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
        Kind::String => match (lhs.get_string(), rhs.get_string()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
        Kind::Array => {
            let (Some(a), Some(b)) = (lhs.get_array(), rhs.get_array()) else {
                return false;
            };
            a.len() == b.len()
                && a.iter()
                    .zip(b.iter())
                    .all(|(x, y)| equal(&x, &y, strict))
        }
        Kind::Object => {
            let (Some(a), Some(b)) = (lhs.get_object(), rhs.get_object()) else {
                return false;
            };
            a.len() == b.len()
                && a.iter().all(|(name, member)| {
                    b.find(&name)
                        .is_some_and(|other| equal(&member, &other, strict))
                })
        }
    }
}
