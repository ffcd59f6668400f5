//! Read-only, hierarchical configuration over parsed YAML/JSON documents.
//!
//! A [`Config`] wraps a parsed mapping, normalizes its keys once, and turns
//! every nested mapping into a nested [`Config`] that remembers where it came
//! from. Missing keys are reported with the fully-qualified dotted path and the
//! file (or call site) the tree originated from.

mod config;
mod error;
mod key;
mod loader;

/// Configuration tree, its entries, and the in-code builder.
pub use config::{Config, ConfigBuilder, Entry};
/// Public error type returned by construction, lookup and loading APIs.
pub use error::ConfigError;
/// Normalized key type.
pub use key::Key;
/// Parser selection and loader options.
pub use loader::{Format, LoadOptions};

#[inline]
/// Initialize logging using env_logger if the "logging" feature is enabled.
///
/// This is a no-op if the feature is not enabled. Calling it more than once is
/// harmless.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::try_init();
    }
}
