//! The actual-value model: an immutable tree for a parsed JSON document.
//!
//! The crate never parses JSON text. Documents enter through
//! `From<serde_json::Value>` and leave through [`Actual::to_json`] for display.

use crate::enums::ActualKind;
use serde_json::{Number, Value};
use std::collections::BTreeMap;
use std::fmt;

/// A parsed JSON value under test.
#[derive(Clone, Debug, PartialEq)]
pub enum Actual {
    String(String),
    Number(Number),
    Boolean(bool),
    Null,
    Array(Vec<Actual>),
    Object(BTreeMap<String, Actual>),
}

impl Actual {
    pub fn kind(&self) -> ActualKind {
        match self {
            Actual::String(_) => ActualKind::String,
            Actual::Number(_) => ActualKind::Number,
            Actual::Boolean(_) => ActualKind::Boolean,
            Actual::Null => ActualKind::Null,
            Actual::Array(_) => ActualKind::Array,
            Actual::Object(_) => ActualKind::Object,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Actual::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Actual::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().and_then(Number::as_f64)
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Actual::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Actual]> {
        match self {
            Actual::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, Actual>> {
        match self {
            Actual::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up a key when this value is an object.
    pub fn get(&self, key: &str) -> Option<&Actual> {
        self.as_object().and_then(|map| map.get(key))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Actual::Null)
    }

    /// Converts back into a `serde_json::Value`, e.g. for rendering in reports.
    pub fn to_json(&self) -> Value {
        match self {
            Actual::String(s) => Value::String(s.clone()),
            Actual::Number(n) => Value::Number(n.clone()),
            Actual::Boolean(b) => Value::Bool(*b),
            Actual::Null => Value::Null,
            Actual::Array(items) => Value::Array(items.iter().map(Actual::to_json).collect()),
            Actual::Object(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for Actual {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Actual::Null,
            Value::Bool(b) => Actual::Boolean(b),
            Value::Number(n) => Actual::Number(n),
            Value::String(s) => Actual::String(s),
            Value::Array(items) => Actual::Array(items.into_iter().map(Actual::from).collect()),
            Value::Object(map) => Actual::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Actual::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for Actual {
    fn from(value: &Value) -> Self {
        Actual::from(value.clone())
    }
}

impl fmt::Display for Actual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}
