//! Parser selection for config documents.

use crate::ConfigError;
use serde_json::Value;
use std::path::Path;

/// Serialization format of a config document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// YAML, the default for unknown extensions.
    #[default]
    Yaml,
    /// Strict JSON.
    Json,
    /// JSON5 (comments, unquoted keys, trailing commas).
    Json5,
}

impl Format {
    /// Pick a format from a file extension, falling back to YAML.
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Self::Json,
            Some("json5") => Self::Json5,
            _ => Self::Yaml,
        }
    }

    /// Parse `contents` into a generic value tree.
    ///
    /// Parser errors are returned as-is; a `~` YAML document yields
    /// `Value::Null`. YAML merge keys (`<<: *defaults`) are resolved.
    pub fn parse(self, contents: &str) -> Result<Value, ConfigError> {
        let value = match self {
            Self::Yaml => {
                let mut document: serde_yaml::Value = serde_yaml::from_str(contents)?;
                document.apply_merge()?;
                serde_yaml::from_value(document)?
            }
            Self::Json => serde_json::from_str(contents)?,
            Self::Json5 => json5::from_str(contents)?,
        };
        Ok(value)
    }
}
