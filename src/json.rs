//! Adapters over `serde_json` documents.
//!
//! Two representations live here. [`JsonNode`] is a borrowed, read-only
//! wrapper over a caller-owned [`serde_json::Value`]; its write surface is
//! a no-op. [`JsonDocument`] owns a value and hands out [`JsonNodeMut`]
//! handles whose writes take real effect, including handles that alias the
//! same position.

mod borrowed;
mod mutable;

pub use borrowed::JsonArray;
pub use borrowed::JsonArrayIter;
pub use borrowed::JsonNode;
pub use borrowed::JsonObject;
pub use borrowed::JsonObjectIter;

pub use mutable::JsonArrayIterMut;
pub use mutable::JsonArrayMut;
pub use mutable::JsonDocument;
pub use mutable::JsonNodeMut;
pub use mutable::JsonObjectIterMut;
pub use mutable::JsonObjectMut;

use serde_json::{Number, Value};

use crate::{FrozenValue, Kind};

fn number_kind(number: &Number) -> Kind {
    if number.is_i64() || number.is_u64() {
        Kind::Integer
    } else {
        Kind::Double
    }
}

impl From<&Value> for FrozenValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => FrozenValue::Null,
            Value::Bool(value) => FrozenValue::Bool(*value),
            Value::Number(number) => match number.as_i64() {
                Some(value) => FrozenValue::Integer(value),
                None => number
                    .as_f64()
                    .map_or(FrozenValue::Null, FrozenValue::Double),
            },
            Value::String(value) => FrozenValue::String(value.clone()),
            Value::Array(items) => {
                FrozenValue::Array(items.iter().map(FrozenValue::from).collect())
            }
            Value::Object(members) => FrozenValue::Object(
                members
                    .iter()
                    .map(|(name, member)| (name.clone(), FrozenValue::from(member)))
                    .collect(),
            ),
        }
    }
}

impl From<&FrozenValue> for Value {
    fn from(value: &FrozenValue) -> Self {
        match value {
            FrozenValue::Null => Value::Null,
            FrozenValue::Bool(value) => Value::Bool(*value),
            FrozenValue::Integer(value) => Value::from(*value),
            FrozenValue::Double(value) => Value::from(*value),
            FrozenValue::String(value) => Value::String(value.clone()),
            FrozenValue::Array(items) => Value::Array(items.iter().map(Value::from).collect()),
            FrozenValue::Object(members) => Value::Object(
                members
                    .iter()
                    .map(|(name, member)| (name.clone(), Value::from(member)))
                    .collect(),
            ),
        }
    }
}
