//! Error types for config construction, lookup and loading.

use thiserror::Error;

/// Errors returned while building, reading or loading a config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading a config file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The YAML parser rejected the document.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    /// The JSON parser rejected the document.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// The JSON5 parser rejected the document.
    #[error(transparent)]
    Json5(#[from] json5::Error),
    /// The caller passed something the config cannot be built or read from.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A requested key is absent from the current section.
    #[error("Configuration key '{scope}{key}' is missing in {name}")]
    NotFound {
        name: String,
        scope: String,
        key: String,
    },
    /// A key was expected to hold a nested section but holds a plain value.
    #[error("Configuration key '{scope}{key}' in {name} is not a section")]
    NotASection {
        name: String,
        scope: String,
        key: String,
    },
}

impl ConfigError {
    /// Fully-qualified dotted key for key errors, `None` otherwise.
    pub fn qualified_key(&self) -> Option<String> {
        match self {
            Self::NotFound { scope, key, .. } | Self::NotASection { scope, key, .. } => {
                Some(format!("{scope}{key}"))
            }
            _ => None,
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
