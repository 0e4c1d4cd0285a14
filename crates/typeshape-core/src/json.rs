//! # JSON Conversion
//!
//! Bridges parsed JSON and the dynamic value model. Every JSON document maps
//! onto a `Value`; the reverse direction fails for functions, symbols and
//! non-finite numbers.
//!
//! Numbers become `f64` on the way in. There is no integer kind, so `1` and
//! `1.0` are the same value.

use serde_json::{Map, Number};

use crate::error::ConversionError;
use crate::value::{Record, Value};

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            // as_f64 only fails for arbitrary-precision numbers, which this
            // crate does not enable.
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(Record::from(map)),
        }
    }
}

impl From<Map<String, serde_json::Value>> for Record {
    fn from(map: Map<String, serde_json::Value>) -> Self {
        map.into_iter().map(|(k, v)| (k, Value::from(v))).collect()
    }
}

impl Value {
    /// Convert to JSON. Class tags are dropped; a tagged record becomes a
    /// plain object.
    pub fn to_json(&self) -> Result<serde_json::Value, ConversionError> {
        to_json_at(self, "$")
    }
}

impl Record {
    /// Convert the record's fields to a JSON object.
    pub fn to_json(&self) -> Result<serde_json::Value, ConversionError> {
        record_to_json(self, "$")
    }
}

fn to_json_at(value: &Value, path: &str) -> Result<serde_json::Value, ConversionError> {
    match value {
        Value::Null => Ok(serde_json::Value::Null),
        Value::Bool(b) => Ok(serde_json::Value::Bool(*b)),
        Value::Number(n) => number_to_json(*n),
        Value::String(s) => Ok(serde_json::Value::String(s.clone())),
        Value::Symbol(_) | Value::Function(_) => Err(ConversionError::Unrepresentable {
            kind: value.kind_name().to_string(),
            path: path.to_string(),
        }),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| to_json_at(item, &format!("{path}[{i}]")))
            .collect::<Result<Vec<_>, _>>()
            .map(serde_json::Value::Array),
        Value::Object(record) => record_to_json(record, path),
    }
}

fn record_to_json(record: &Record, path: &str) -> Result<serde_json::Value, ConversionError> {
    let mut map = Map::new();
    for (key, value) in record.iter() {
        map.insert(key.to_string(), to_json_at(value, &format!("{path}.{key}"))?);
    }
    Ok(serde_json::Value::Object(map))
}

/// Integral values inside the i64 range serialize as JSON integers so that
/// `{"count": 3}` survives a round trip unchanged.
fn number_to_json(n: f64) -> Result<serde_json::Value, ConversionError> {
    if !n.is_finite() {
        return Err(ConversionError::NonFiniteNumber(n));
    }
    if n.fract() == 0.0 && n.abs() < 9.0e15 {
        return Ok(serde_json::Value::Number(Number::from(n as i64)));
    }
    Number::from_f64(n)
        .map(serde_json::Value::Number)
        .ok_or(ConversionError::NonFiniteNumber(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClassTag, FunctionValue, Symbol};
    use serde_json::json;

    #[test]
    fn json_objects_become_untagged_records() {
        let value = Value::from(json!({"price": 9.99, "tags": ["a", null], "ok": true}));
        let record = value.as_record().unwrap();
        assert!(record.class().is_none());
        assert_eq!(record.get("price"), Some(&Value::Number(9.99)));
        assert_eq!(
            record.get("tags"),
            Some(&Value::Array(vec![Value::from("a"), Value::Null]))
        );
        assert_eq!(record.get("ok"), Some(&Value::Bool(true)));
    }

    #[test]
    fn integers_become_numbers() {
        assert_eq!(Value::from(json!(3)), Value::Number(3.0));
    }

    #[test]
    fn round_trip_preserves_integers_and_floats() {
        let doc = json!({"count": 3, "price": 7.99, "nested": {"list": [1, "x"]}});
        let back = Value::from(doc.clone()).to_json().unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn tagged_records_serialize_as_plain_objects() {
        let record = Record::tagged(ClassTag::new("Money")).with("value", 6.99);
        assert_eq!(record.to_json().unwrap(), json!({"value": 6.99}));
    }

    #[test]
    fn functions_and_symbols_are_rejected() {
        let record = Record::new()
            .with("cb", FunctionValue::new(|_| Value::Null))
            .with("sym", Symbol::new("s"));
        let err = Value::from(record).to_json().unwrap_err();
        assert_eq!(
            err,
            ConversionError::Unrepresentable {
                kind: "function".into(),
                path: "$.cb".into(),
            }
        );
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        assert_eq!(
            Value::Number(f64::INFINITY).to_json().unwrap_err(),
            ConversionError::NonFiniteNumber(f64::INFINITY)
        );
    }
}
