use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Named inputs of a single calculator invocation.
pub type InputMap = HashMap<String, InputValue>;

/// A value taken from an untyped request body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum InputValue {
    /// String value
    String(String),
    /// Integer value (JSON numbers without a fractional part or exponent)
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Boolean(bool),
    /// Array of `InputValues`
    Array(Vec<InputValue>),
    /// Object/map of string keys to `InputValues`
    Object(HashMap<String, InputValue>),
    /// Null value
    Null,
}

impl TryFrom<&serde_json::Value> for InputValue {
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
                    return Err(anyhow!("Unsupported number value: {}", n));
                }
            }
            serde_json::Value::Bool(b) => Self::Boolean(*b),
            serde_json::Value::Array(arr) => {
                let inner = arr.iter().map(Self::try_from).collect::<Result<Vec<_>, _>>()?;
                Self::Array(inner)
            }
            serde_json::Value::Object(map) => Self::Object(object_entries(map)?),
            serde_json::Value::Null => Self::Null,
        })
    }
}

fn object_entries(map: &serde_json::Map<String, serde_json::Value>) -> Result<InputMap> {
    let mut inner = HashMap::with_capacity(map.len());
    for (k, v) in map {
        inner.insert(k.clone(), InputValue::try_from(v)?);
    }
    Ok(inner)
}

impl From<&str> for InputValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for InputValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for InputValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for InputValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for InputValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl InputValue {
    /// Convert a JSON object into named inputs.
    ///
    /// # Errors
    ///
    /// Fails when `value` is not a JSON object or holds an unsupported number.
    pub fn map_from_json(value: &serde_json::Value) -> Result<InputMap> {
        match value {
            serde_json::Value::Object(map) => object_entries(map),
            other => Err(anyhow!("expected a JSON object, found {}", json_type_name(other))),
        }
    }

    /// Numeric view of the value. Booleans and strings are never treated as numbers.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Integer view of the value; floats are rejected even when integral.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// String view of the value
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Whether this is the null value
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

const fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
