//! Builder for constructing a `Config` in code.

use super::Config;
use crate::ConfigError;
use serde_json::{Map, Value};
use std::panic::Location;
use std::sync::Arc;

/// Builder for a [`Config`] with an explicit origin name or scope prefix.
///
/// When no origin is given, the location that created the builder is used.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    value: Value,
    origin: Option<String>,
    scope: String,
    location: &'static Location<'static>,
}

impl ConfigBuilder {
    pub(crate) fn new(value: Value, location: &'static Location<'static>) -> Self {
        Self {
            value,
            origin: None,
            scope: String::new(),
            location,
        }
    }

    /// Name the file or source this configuration came from.
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Set the dotted scope prefix of the root node, e.g. `"production."`.
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// Validate the root value and materialize the tree.
    pub fn build(self) -> Result<Config, ConfigError> {
        let map = expect_mapping(self.value)?;
        let origin = self
            .origin
            .unwrap_or_else(|| call_site_origin(self.location));
        Ok(Config::materialize(map, Arc::from(origin), self.scope))
    }
}

/// Origin name for configs constructed in code.
pub(crate) fn call_site_origin(location: &Location<'_>) -> String {
    format!("BasicConfig constructed at {location}")
}

/// Accept only a mapping as the root of a config tree.
fn expect_mapping(value: Value) -> Result<Map<String, Value>, ConfigError> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Err(ConfigError::invalid("mapping must not be null")),
        other => Err(ConfigError::invalid(format!(
            "expected a mapping, found {}",
            value_kind(&other)
        ))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}
