//! Attribute values read from a subject.

use serde::{Serialize, Serializer};

/// A scalar attribute value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// Absent value (`null`).
    #[default]
    Nil,
    /// Boolean.
    Bool(bool),
    /// Integer.
    Integer(i64),
    /// Floating point number.
    Float(f64),
    /// Text.
    Text(String),
}

/// Texts that read as `false` in a boolean context (compared case-insensitively).
const FALSY_TEXTS: &[&str] = &["0", "f", "false", "off", "no", "n"];

impl Value {
    /// Whether the value is `Nil` or empty text.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Nil => true,
            Self::Text(text) => text.is_empty(),
            _ => false,
        }
    }

    /// Textual form used for display and key comparison.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Nil => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Integer(n) => n.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Text(text) => text.clone(),
        }
    }

    /// Boolean interpretation of the value.
    ///
    /// `Nil`, `false`, zero, empty text and the texts `0`, `f`, `false`,
    /// `off`, `no`, `n` are falsy; everything else is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Nil => false,
            Self::Bool(b) => *b,
            Self::Integer(n) => *n != 0,
            Self::Float(f) => *f != 0.0,
            Self::Text(text) => {
                let text = text.trim();
                !text.is_empty()
                    && !FALSY_TEXTS
                        .iter()
                        .any(|falsy| text.eq_ignore_ascii_case(falsy))
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Nil => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Integer(n) => serializer.serialize_i64(*n),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::Text(text) => serializer.serialize_str(text),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}

/// Converts JSON scalars directly; arrays and objects become their JSON text.
impl From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Nil,
            serde_json::Value::Bool(b) => Self::Bool(*b),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Self::Integer)
                .or_else(|| n.as_f64().map(Self::Float))
                .unwrap_or_else(|| Self::Text(n.to_string())),
            serde_json::Value::String(s) => Self::Text(s.clone()),
            other => Self::Text(other.to_string()),
        }
    }
}
