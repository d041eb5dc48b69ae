use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A primitive value stored in a report snapshot.
///
/// The persistence collaborator only accepts plain JSON scalars, so there are
/// no array, object, or date variants here. Anything richer must be flattened
/// before it reaches a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum FieldValue {
    /// String value
    String(String),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Boolean(bool),
    /// Null value
    Null,
}

impl From<FieldValue> for serde_json::Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::String(s) => Self::String(s),
            FieldValue::Integer(i) => Self::Number(serde_json::Number::from(i)),
            FieldValue::Float(f) => {
                serde_json::Number::from_f64(f).map_or(Self::Null, Self::Number)
            }
            FieldValue::Boolean(b) => Self::Bool(b),
            FieldValue::Null => Self::Null,
        }
    }
}

impl From<&FieldValue> for serde_json::Value {
    fn from(value: &FieldValue) -> Self {
        value.clone().into()
    }
}

impl TryFrom<&serde_json::Value> for FieldValue {
    type Error = anyhow::Error;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        Ok(match value {
            serde_json::Value::String(s) => Self::String(s.clone()),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    Self::Float(f)
                } else {
                    return Err(anyhow!("unsupported number value: {}", n));
                }
            }
            serde_json::Value::Bool(b) => Self::Boolean(*b),
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                return Err(anyhow!(
                    "snapshot values must be primitives, got {}",
                    value
                ));
            }
        })
    }
}

impl std::hash::Hash for FieldValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self {
            Self::String(s) => {
                0u8.hash(state);
                s.hash(state);
            }
            Self::Integer(i) => {
                1u8.hash(state);
                i.hash(state);
            }
            Self::Float(f) => {
                2u8.hash(state);
                f.to_bits().hash(state); // Bits representation for consistent hashing
            }
            Self::Boolean(b) => {
                3u8.hash(state);
                b.hash(state);
            }
            Self::Null => {
                4u8.hash(state);
            }
        }
    }
}

impl Eq for FieldValue {}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(fl) => write!(f, "{fl}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl FieldValue {
    /// Convenience accessor returning an `f64` representation if this value
    /// is numeric. Returns `None` when the variant is not `Integer` or
    /// `Float`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Borrow the string payload, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip_preserves_primitives() {
        let values = vec![
            FieldValue::String("soja".to_string()),
            FieldValue::Integer(42),
            FieldValue::Float(2.34375),
            FieldValue::Boolean(true),
            FieldValue::Null,
        ];
        for v in values {
            let json: serde_json::Value = (&v).into();
            let back = FieldValue::try_from(&json).unwrap();
            assert_eq!(back, v);
        }
    }

    #[test]
    fn structured_json_is_rejected() {
        let arr = serde_json::json!([1, 2]);
        assert!(FieldValue::try_from(&arr).is_err());
        let obj = serde_json::json!({"a": 1});
        assert!(FieldValue::try_from(&obj).is_err());
    }

    #[test]
    fn non_finite_floats_serialize_as_null() {
        let json: serde_json::Value = FieldValue::Float(f64::NAN).into();
        assert_eq!(json, serde_json::Value::Null);
    }
}
