//! Immutable configuration tree with scoped, location-aware lookups.
//!
//! A [`Config`] is materialized once from a parsed mapping. Every nested
//! mapping becomes a child `Config` that shares the parent's origin name and
//! extends its scope path, so errors raised deep in the tree still name the
//! file and the fully-qualified key that failed.

mod builder;
mod entry;


pub use builder::ConfigBuilder;
pub use entry::Entry;

use crate::{ConfigError, Key};
use log::trace;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::panic::Location;
use std::sync::Arc;

/// Separator appended to each key when extending a scope path.
const SCOPE_SEPARATOR: char = '.';

/// Read-only view over a parsed configuration mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    entries: BTreeMap<Key, Entry>,
    origin: Arc<str>,
    scope: String,
}

impl Config {
    /// Build a config rooted at `value`, naming the caller as its origin.
    ///
    /// Fails with [`ConfigError::InvalidArgument`] when `value` is null or not
    /// a mapping.
    #[track_caller]
    pub fn new(value: Value) -> Result<Self, ConfigError> {
        ConfigBuilder::new(value, Location::caller()).build()
    }

    /// Build a config from an already-extracted mapping.
    #[track_caller]
    pub fn from_mapping(map: Map<String, Value>) -> Self {
        let origin = builder::call_site_origin(Location::caller());
        Self::materialize(map, Arc::from(origin), String::new())
    }

    /// Start building a config with an explicit origin name or scope prefix.
    #[track_caller]
    pub fn builder(value: Value) -> ConfigBuilder {
        ConfigBuilder::new(value, Location::caller())
    }

    /// Normalize keys and wrap nested mappings, recursing through the tree.
    ///
    /// Parsed documents are trees, so the recursion terminates without any
    /// cycle detection.
    pub(crate) fn materialize(map: Map<String, Value>, origin: Arc<str>, scope: String) -> Self {
        trace!(
            "materializing config node (origin={}, scope={:?}, entries={})",
            origin,
            scope,
            map.len()
        );
        let entries = map
            .into_iter()
            .map(|(raw, value)| {
                let key = Key::normalize(&raw);
                let entry = match value {
                    Value::Object(nested) => {
                        let nested_scope = format!("{scope}{key}{SCOPE_SEPARATOR}");
                        Entry::Section(Self::materialize(
                            nested,
                            Arc::clone(&origin),
                            nested_scope,
                        ))
                    }
                    other => Entry::Value(other),
                };
                (key, entry)
            })
            .collect();
        Self {
            entries,
            origin,
            scope,
        }
    }

    /// Human-readable name of the file or call site this tree came from.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Dotted path from the root to this node (empty at the root).
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Whether `key` is present in this section.
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Look up `key` without failing; `None` when absent.
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// Look up `key`, failing with [`ConfigError::NotFound`] when absent.
    pub fn fetch(&self, key: &str) -> Result<&Entry, ConfigError> {
        self.get(key).ok_or_else(|| self.not_found(key))
    }

    /// Look up a nested section.
    ///
    /// Fails with [`ConfigError::NotFound`] when absent and
    /// [`ConfigError::NotASection`] when the key holds a plain value.
    pub fn section(&self, key: &str) -> Result<&Config, ConfigError> {
        match self.fetch(key)? {
            Entry::Section(section) => Ok(section),
            Entry::Value(_) => Err(ConfigError::NotASection {
                name: self.origin.to_string(),
                scope: self.scope.clone(),
                key: key.to_string(),
            }),
        }
    }

    /// Walk a dotted path such as `"database.primary.host"`.
    ///
    /// Errors are raised by the section where the walk stops, so they carry
    /// that section's scope.
    pub fn fetch_path(&self, path: &str) -> Result<&Entry, ConfigError> {
        let (parents, last) = match path.rsplit_once(SCOPE_SEPARATOR) {
            Some((parents, last)) => (Some(parents), last),
            None => (None, path),
        };
        let mut node = self;
        if let Some(parents) = parents {
            for segment in parents.split(SCOPE_SEPARATOR) {
                node = node.section(segment)?;
            }
        }
        node.fetch(last)
    }

    /// Resolve a member by name on behalf of a dynamic caller.
    ///
    /// Members are plain getters: an absent name fails with
    /// [`ConfigError::NotFound`], and any argument fails with
    /// [`ConfigError::InvalidArgument`] even when the name exists.
    pub fn dispatch(&self, name: &str, args: &[Value]) -> Result<&Entry, ConfigError> {
        let entry = self.fetch(name)?;
        if !args.is_empty() {
            return Err(ConfigError::invalid("getter accepts no arguments"));
        }
        Ok(entry)
    }

    /// Normalized keys of this section, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    /// Entries of this section, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Entry)> {
        self.entries.iter()
    }

    /// Number of entries in this section.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this section has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convert back to a plain mapping, recursing into nested sections.
    pub fn to_mapping(&self) -> Map<String, Value> {
        self.entries
            .iter()
            .map(|(key, entry)| (key.as_str().to_string(), entry.to_value()))
            .collect()
    }

    /// Same as [`Config::to_mapping`], wrapped as a JSON object value.
    pub fn to_value(&self) -> Value {
        Value::Object(self.to_mapping())
    }

    fn not_found(&self, key: &str) -> ConfigError {
        ConfigError::NotFound {
            name: self.origin.to_string(),
            scope: self.scope.clone(),
            key: key.to_string(),
        }
    }
}

impl Serialize for Config {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(&self.entries)
    }
}

impl<'a> IntoIterator for &'a Config {
    type Item = (&'a Key, &'a Entry);
    type IntoIter = std::collections::btree_map::Iter<'a, Key, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
