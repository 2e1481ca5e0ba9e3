//! Conversions between `serde_json::Value` and [`Value`].
//!
//! Lets decoded JSON documents be validated directly.
//!
//! # Examples
//!
//! ```
//! use nebula_watch::prelude::*;
//! use serde_json::json;
//!
//! let payload = Value::from(json!({ "name": "alice", "scores": [90, 85] }));
//!
//! let scores = instance_of(Kind::Str) >> (container(instance_of(Kind::Int)) | instance_of(Kind::Str));
//! assert!(scores.test(&payload));
//! ```

use crate::foundation::{Map, Value};

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => number(&n),
            serde_json::Value::String(s) => Self::Str(s),
            serde_json::Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            serde_json::Value::Object(fields) => Self::Map(
                fields
                    .into_iter()
                    .map(|(k, v)| (Self::Str(k), Self::from(v)))
                    .collect::<Map>(),
            ),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        Self::from(json.clone())
    }
}

/// Integers that fit `i64` stay integers; everything else is a float.
fn number(n: &serde_json::Number) -> Value {
    match n.as_i64() {
        Some(i) => Value::Int(i),
        None => n.as_f64().map_or(Value::Null, Value::Float),
    }
}

/// Converts a value back to JSON.
///
/// Returns `None` for values JSON cannot represent: types, objects,
/// streams, functions, bytes, non-finite floats and maps with non-string
/// keys. Tuples become arrays.
///
/// ```
/// use nebula_watch::foundation::Value;
/// use nebula_watch::json::to_json;
/// use serde_json::json;
///
/// assert_eq!(to_json(&Value::list([1, 2])), Some(json!([1, 2])));
/// assert_eq!(to_json(&Value::bytes(*b"raw")), None);
/// ```
pub fn to_json(value: &Value) -> Option<serde_json::Value> {
    Some(match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(i) => serde_json::Value::from(*i),
        Value::Float(f) => serde_json::Number::from_f64(*f).map(serde_json::Value::Number)?,
        Value::Str(s) => serde_json::Value::String(s.clone()),
        Value::List(items) | Value::Tuple(items) => {
            serde_json::Value::Array(items.iter().map(to_json).collect::<Option<_>>()?)
        }
        Value::Map(map) => serde_json::Value::Object(
            map.iter()
                .map(|(k, v)| Some((k.as_str()?.to_owned(), to_json(v)?)))
                .collect::<Option<_>>()?,
        ),
        Value::Bytes(_)
        | Value::Type(_)
        | Value::Object(_)
        | Value::Stream(_)
        | Value::Function(_) => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Kind;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        assert_eq!(Value::from(json!(null)), Value::Null);
        assert_eq!(Value::from(json!(true)), Value::Bool(true));
        assert_eq!(Value::from(json!(42)), Value::Int(42));
        assert_eq!(Value::from(json!(1.5)).kind(), Kind::Float);
        assert_eq!(Value::from(json!("x")), Value::from("x"));
    }

    #[test]
    fn test_large_unsigned_becomes_float() {
        assert_eq!(Value::from(json!(u64::MAX)).kind(), Kind::Float);
    }

    #[test]
    fn test_arrays_and_objects() {
        let value = Value::from(&json!({ "a": [1, 2], "b": { "c": null } }));
        let Value::Map(map) = &value else {
            panic!("expected a map, got {value}");
        };
        assert_eq!(map.get(&Value::from("a")), Some(&Value::list([1, 2])));
        assert_eq!(map.get(&Value::from("b")).map(Value::kind), Some(Kind::Map));
    }

    #[test]
    fn test_to_json_rejects_non_string_keys() {
        assert_eq!(to_json(&Value::map([(1, 2)])), None);
        assert_eq!(to_json(&Value::map([("k", 2)])), Some(json!({ "k": 2 })));
        assert_eq!(to_json(&Value::Float(f64::NAN)), None);
    }
}
