//! Firestore typed values.
//!
//! The REST API wraps every field in a single-key object naming its type,
//! e.g. `{"stringValue": "x"}` or `{"arrayValue": {"values": [...]}}`. These
//! helpers unwrap them into plain JSON.

use super::error::FirestoreError;
use serde_json::{Map, Number, Value};

/// Decodes a Firestore `fields` object into a plain JSON object.
pub fn decode_fields(fields: &Map<String, Value>) -> Result<Map<String, Value>, FirestoreError> {
    fields
        .iter()
        .map(|(name, value)| {
            decode_value(value)
                .map(|decoded| (name.clone(), decoded))
                .map_err(|e| match e {
                    FirestoreError::Malformed(msg) => {
                        FirestoreError::Malformed(format!("field `{}`: {}", name, msg))
                    }
                    other => other,
                })
        })
        .collect()
}

/// Decodes a single typed value.
pub fn decode_value(value: &Value) -> Result<Value, FirestoreError> {
    let object = value
        .as_object()
        .ok_or_else(|| FirestoreError::Malformed(format!("expected a typed value, got {}", value)))?;

    let mut entries = object.iter();
    let (kind, inner) = match (entries.next(), entries.next()) {
        (Some(entry), None) => entry,
        _ => {
            return Err(FirestoreError::Malformed(format!(
                "typed value must have exactly one key, got {}",
                value
            )));
        }
    };

    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" => inner
            .as_bool()
            .map(Value::Bool)
            .ok_or_else(|| malformed(kind, inner)),
        // int64 is transported as a decimal string.
        "integerValue" => match inner {
            Value::String(s) => s
                .parse::<i64>()
                .map(|n| Value::Number(n.into()))
                .map_err(|_| malformed(kind, inner)),
            Value::Number(n) if n.is_i64() => Ok(Value::Number(n.clone())),
            _ => Err(malformed(kind, inner)),
        },
        "doubleValue" => match inner {
            Value::Number(n) => Ok(Value::Number(n.clone())),
            // NaN and the infinities arrive as strings and have no JSON number.
            Value::String(s) => match s.parse::<f64>() {
                Ok(f) => Ok(Number::from_f64(f).map_or(Value::Null, Value::Number)),
                Err(_) => Err(malformed(kind, inner)),
            },
            _ => Err(malformed(kind, inner)),
        },
        "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" => inner
            .as_str()
            .map(|s| Value::String(s.to_string()))
            .ok_or_else(|| malformed(kind, inner)),
        "geoPointValue" => {
            let point = inner.as_object().ok_or_else(|| malformed(kind, inner))?;
            let mut decoded = Map::new();
            for axis in ["latitude", "longitude"] {
                decoded.insert(
                    axis.to_string(),
                    point.get(axis).cloned().unwrap_or(Value::from(0.0)),
                );
            }
            Ok(Value::Object(decoded))
        }
        "arrayValue" => {
            let values = match inner.get("values") {
                None => return Ok(Value::Array(Vec::new())),
                Some(values) => values.as_array().ok_or_else(|| malformed(kind, inner))?,
            };
            values
                .iter()
                .map(decode_value)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array)
        }
        "mapValue" => match inner.get("fields") {
            None => Ok(Value::Object(Map::new())),
            Some(Value::Object(fields)) => decode_fields(fields).map(Value::Object),
            Some(_) => Err(malformed(kind, inner)),
        },
        other => Err(FirestoreError::Malformed(format!(
            "unknown value type `{}`",
            other
        ))),
    }
}

fn malformed(kind: &str, inner: &Value) -> FirestoreError {
    FirestoreError::Malformed(format!("invalid {}: {}", kind, inner))
}
