//! Serde deserialization for frozen values.

use std::fmt;

use serde::de::{Deserialize, Deserializer, Error, MapAccess, SeqAccess, Visitor};

use crate::FrozenValue;

struct FrozenValueVisitor;

impl<'de> Visitor<'de> for FrozenValueVisitor {
    type Value = FrozenValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON-like value")
    }

    fn visit_bool<E: Error>(self, value: bool) -> Result<FrozenValue, E> {
        Ok(FrozenValue::Bool(value))
    }

    fn visit_i64<E: Error>(self, value: i64) -> Result<FrozenValue, E> {
        Ok(FrozenValue::Integer(value))
    }

    fn visit_u64<E: Error>(self, value: u64) -> Result<FrozenValue, E> {
        Ok(match i64::try_from(value) {
            Ok(value) => FrozenValue::Integer(value),
            Err(_) => FrozenValue::Double(value as f64),
        })
    }

    fn visit_f64<E: Error>(self, value: f64) -> Result<FrozenValue, E> {
        Ok(FrozenValue::Double(value))
    }

    fn visit_str<E: Error>(self, value: &str) -> Result<FrozenValue, E> {
        Ok(FrozenValue::String(value.to_owned()))
    }

    fn visit_string<E: Error>(self, value: String) -> Result<FrozenValue, E> {
        Ok(FrozenValue::String(value))
    }

    fn visit_unit<E: Error>(self) -> Result<FrozenValue, E> {
        Ok(FrozenValue::Null)
    }

    fn visit_none<E: Error>(self) -> Result<FrozenValue, E> {
        Ok(FrozenValue::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<FrozenValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        FrozenValue::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<FrozenValue, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(FrozenValue::Array(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<FrozenValue, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut members = Vec::new();
        while let Some(member) = map.next_entry::<String, FrozenValue>()? {
            members.push(member);
        }
        Ok(FrozenValue::Object(members))
    }
}

impl<'de> Deserialize<'de> for FrozenValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FrozenValueVisitor)
    }
}
