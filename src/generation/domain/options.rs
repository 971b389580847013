//! Keyword options forwarded verbatim to backends.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Named backend-specific options.
///
/// Options are opaque to the resolver and facade: they are handed to the
/// backend unchanged, and any unknown-option error comes from the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionMap(Map<String, Value>);

/// Options supplied when a backend is constructed.
pub type BackendOptions = OptionMap;

/// Options supplied with each generation call.
pub type GenerationOptions = OptionMap;

impl OptionMap {
    /// Creates an empty option map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an option.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Returns the option stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns whether no options are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the underlying JSON map.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for OptionMap {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}
