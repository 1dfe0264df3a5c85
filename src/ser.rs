//! Serde serialization for frozen values.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::FrozenValue;

impl Serialize for FrozenValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FrozenValue::Null => serializer.serialize_unit(),
            FrozenValue::Bool(value) => serializer.serialize_bool(*value),
            FrozenValue::Integer(value) => serializer.serialize_i64(*value),
            FrozenValue::Double(value) => serializer.serialize_f64(*value),
            FrozenValue::String(value) => serializer.serialize_str(value),
            FrozenValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            FrozenValue::Object(members) => {
                let mut map = serializer.serialize_map(Some(members.len()))?;
                for (name, member) in members {
                    map.serialize_entry(name, member)?;
                }
                map.end()
            }
        }
    }
}
