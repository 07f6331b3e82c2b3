//! Runtime value types for decision contexts and results
//!
//! The `Value` enum is JSON-shaped with two additions: numbers keep their
//! `Number` variant and sets are distinct from arrays. Human-readable formats
//! write plain JSON (sets become arrays, numbers lose their type); binary
//! formats write the tagged form and round-trip every variant.

use super::number::{untyped_literal, Number, JSON_NUMBER_TOKEN};
use bigdecimal::BigDecimal;
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Runtime value type
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Null value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Number value
    Number(Number),
    /// String value
    String(String),
    /// Ordered sequence of values
    Array(Vec<Value>),
    /// Unordered collection without duplicates
    Set(Vec<Value>),
    /// Object (key-value map)
    Object(HashMap<String, Value>),
}

impl Value {
    /// Build a set, dropping duplicate members
    pub fn set(items: impl IntoIterator<Item = Value>) -> Self {
        let mut members: Vec<Value> = Vec::new();
        for item in items {
            if !members.contains(&item) {
                members.push(item);
            }
        }
        Value::Set(members)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Canonical decimal form of a numeric value
    pub fn as_decimal(&self) -> Option<BigDecimal> {
        self.as_number().and_then(|n| n.to_decimal().ok())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a key in an object value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v.into())
    }
}

impl From<BigDecimal> for Value {
    fn from(v: BigDecimal) -> Self {
        Value::Number(Number::Decimal(v))
    }
}

impl From<Number> for Value {
    fn from(v: Number) -> Self {
        Value::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(v: HashMap<String, Value>) -> Self {
        Value::Object(v)
    }
}

/// Typed wire form used by non human-readable formats
#[derive(Serialize, Deserialize)]
#[serde(remote = "Value")]
enum TaggedValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Set(Vec<Value>),
    Object(HashMap<String, Value>),
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !serializer.is_human_readable() {
            return TaggedValue::serialize(self, serializer);
        }

        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) | Value::Set(items) => serializer.collect_seq(items),
            Value::Object(map) => serializer.collect_map(map),
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Number(Number::Int(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(Value::Number(Number::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Number(Number::Float(v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Value, A::Error> {
        let mut map = HashMap::with_capacity(access.size_hint().unwrap_or(0));
        let first = match access.next_key::<String>()? {
            Some(key) => key,
            None => return Ok(Value::Object(map)),
        };

        // serde_json passes numbers it keeps as raw text through a one-entry map
        if first == JSON_NUMBER_TOKEN {
            let text: String = access.next_value()?;
            return untyped_literal(&text)
                .map(Value::Number)
                .ok_or_else(|| de::Error::invalid_value(de::Unexpected::Str(&text), &self));
        }

        map.insert(first, access.next_value()?);
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            map.insert(key, value);
        }
        Ok(Value::Object(map))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(ValueVisitor)
        } else {
            TaggedValue::deserialize(deserializer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_value_null() {
        let val = Value::default();
        assert!(val.is_null());
    }

    #[test]
    fn test_set_drops_duplicates() {
        let set = Value::set(vec![Value::from(1), Value::from(2), Value::from(1)]);
        assert_eq!(set, Value::Set(vec![Value::from(1), Value::from(2)]));
    }

    #[test]
    fn test_value_object_lookup() {
        let mut map = HashMap::new();
        map.insert("name".to_string(), Value::from("Alice"));
        map.insert("age".to_string(), Value::from(25));
        let val = Value::Object(map);

        assert_eq!(val.get("name").and_then(Value::as_str), Some("Alice"));
        assert_eq!(val.get("age").and_then(Value::as_decimal), Some(BigDecimal::from(25)));
        assert!(val.get("missing").is_none());
        assert!(Value::from(true).get("name").is_none());
    }

    #[test]
    fn test_value_serde_json() {
        let json = r#"{"count": 42, "ratio": 0.5, "active": true, "tags": ["a", "b"], "none": null}"#;
        let val: Value = serde_json::from_str(json).unwrap();

        assert_eq!(val.get("count"), Some(&Value::Number(Number::Int(42))));
        assert_eq!(val.get("ratio"), Some(&Value::Number(Number::Float(0.5))));
        assert_eq!(val.get("active"), Some(&Value::Bool(true)));
        assert_eq!(
            val.get("tags"),
            Some(&Value::Array(vec![Value::from("a"), Value::from("b")]))
        );
        assert_eq!(val.get("none"), Some(&Value::Null));

        let written = serde_json::to_string(&val).unwrap();
        let reread: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(reread, val);
    }

    #[test]
    fn test_json_flattens_sets_and_decimals() {
        let val = Value::Set(vec![Value::from(BigDecimal::from_str("1.5").unwrap())]);
        assert_eq!(serde_json::to_string(&val).unwrap(), "[1.5]");

        let reread: Value = serde_json::from_str("[1.5]").unwrap();
        assert_eq!(reread, Value::Array(vec![Value::Number(Number::Float(1.5))]));
    }

    #[test]
    fn test_json_keeps_large_integers_exact() {
        let big = BigDecimal::from_str("123456789012345678901234567").unwrap();
        let mut map = HashMap::new();
        map.insert("Total".to_string(), Value::from(big.clone()));
        let val = Value::Object(map);

        let written = serde_json::to_string(&val).unwrap();
        assert_eq!(written, r#"{"Total":123456789012345678901234567}"#);

        let reread: Value = serde_json::from_str(&written).unwrap();
        let total = reread.get("Total").unwrap();
        assert!(matches!(total, Value::Number(Number::BigInt(_))));
        assert_eq!(total.as_decimal(), Some(big));
    }

    #[test]
    fn test_msgpack_keeps_sets_and_decimals() {
        let mut map = HashMap::new();
        map.insert(
            "members".to_string(),
            Value::set(vec![Value::from("x"), Value::from(BigDecimal::from_str("0.1").unwrap())]),
        );
        map.insert("nothing".to_string(), Value::Null);
        let val = Value::Object(map);

        let bytes = rmp_serde::to_vec_named(&val).unwrap();
        let decoded: Value = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(decoded, val);
    }
}
