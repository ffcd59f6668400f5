//! Values stored under a config key.

use super::Config;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// A single config entry: a terminal value or a nested section.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// Terminal value (string, number, bool, list or null). Lists are kept
    /// as parsed, including any mappings inside them.
    Value(Value),
    /// Nested mapping materialized as its own config node.
    Section(Config),
}

impl Entry {
    /// Nested section, if this entry is one.
    pub fn as_section(&self) -> Option<&Config> {
        match self {
            Self::Section(section) => Some(section),
            Self::Value(_) => None,
        }
    }

    /// Terminal value, if this entry is one.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Section(_) => None,
        }
    }

    /// String value; `None` for any other type.
    pub fn as_str(&self) -> Option<&str> {
        self.as_value().and_then(Value::as_str)
    }

    /// Boolean value; `None` for any other type.
    pub fn as_bool(&self) -> Option<bool> {
        self.as_value().and_then(Value::as_bool)
    }

    /// Integer value that fits in `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_value().and_then(Value::as_i64)
    }

    /// Integer value that fits in `u64`.
    pub fn as_u64(&self) -> Option<u64> {
        self.as_value().and_then(Value::as_u64)
    }

    /// Numeric value as `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        self.as_value().and_then(Value::as_f64)
    }

    /// List value; `None` for any other type.
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        self.as_value().and_then(Value::as_array)
    }

    /// Whether this entry is an explicit null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }

    /// Whether this entry is a nested section.
    pub fn is_section(&self) -> bool {
        matches!(self, Self::Section(_))
    }

    /// Plain value for this entry; sections are converted recursively.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Value(value) => value.clone(),
            Self::Section(section) => section.to_value(),
        }
    }
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(value) => value.serialize(serializer),
            Self::Section(section) => section.serialize(serializer),
        }
    }
}
