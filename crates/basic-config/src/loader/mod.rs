//! File loaders that compose a parser with `Config` construction.
//!
//! `load_file` wraps a whole document; `load_env` selects one top-level
//! section (typically an environment block such as `development`) and scopes
//! every error raised from it under that section name.

mod format;


pub use format::Format;

use crate::{Config, ConfigBuilder, ConfigError};
use log::{debug, info};
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::Path;

/// Options controlling how a config file is parsed and which part is kept.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Parser to use; detected from the file extension when `None`.
    pub format: Option<Format>,
    /// Top-level section to select instead of the whole document.
    pub section: Option<String>,
}

impl LoadOptions {
    /// Options that load the whole file with a detected parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a parser regardless of the file extension.
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    /// Select a single top-level section, e.g. `"production"`.
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }
}

impl Config {
    /// Load a whole config file. The path becomes the origin name.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load_with_options(path, LoadOptions::new())
    }

    /// Load one top-level section of a config file.
    ///
    /// The returned config is scoped under `"{section}."`, so a missing key
    /// reports e.g. `'development.database'`.
    pub fn load_env(path: impl AsRef<Path>, section: &str) -> Result<Self, ConfigError> {
        Self::load_with_options(path, LoadOptions::new().with_section(section))
    }

    /// Load a config file with explicit parser and section options.
    pub fn load_with_options(
        path: impl AsRef<Path>,
        options: LoadOptions,
    ) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = options.format.unwrap_or_else(|| Format::from_path(path));
        info!("loading config from path: {}", path.display());
        debug!("using {:?} parser for {}", format, path.display());
        let contents = fs::read_to_string(path)?;
        let value = format.parse(&contents)?;
        let origin = path.display().to_string();

        match options.section {
            None => Config::builder(value).origin(origin).build(),
            Some(section) => {
                let selected = select_section(value, &section, &origin)?;
                debug!("selected section '{}' from {}", section, origin);
                Config::builder(selected)
                    .origin(origin)
                    .scope(format!("{section}."))
                    .build()
            }
        }
    }

    /// Parse config text that did not come from a file.
    ///
    /// The caller's location becomes the origin name.
    #[track_caller]
    pub fn parse_str(contents: &str, format: Format) -> Result<Self, ConfigError> {
        let location = Location::caller();
        debug!(
            "loading config from raw contents (len={}, format={:?})",
            contents.len(),
            format
        );
        let value = format.parse(contents)?;
        ConfigBuilder::new(value, location).build()
    }
}

/// Take the sub-document stored under `section` at the top level.
fn select_section(value: Value, section: &str, origin: &str) -> Result<Value, ConfigError> {
    match value {
        Value::Object(mut map) => match map.remove(section) {
            None | Some(Value::Null) => Err(ConfigError::invalid(format!(
                "section '{section}' is missing in {origin}"
            ))),
            Some(selected) => Ok(selected),
        },
        Value::Null => Err(ConfigError::invalid("mapping must not be null")),
        _ => Err(ConfigError::invalid(format!(
            "expected a mapping at the top level of {origin}"
        ))),
    }
}
