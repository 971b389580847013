//! Declared configuration: capability names mapped to opaque settings.

use super::CapabilityName;
use crate::error::ConfigurationError;
use serde_json::Value;

/// Ordered mapping from capability name to capability-specific settings.
///
/// Settings values are opaque to the composer and handed to service units
/// verbatim. Only the presence of a key drives composition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Configuration {
    entries: Vec<(CapabilityName, Value)>,
}

impl Configuration {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a capability and its settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::DuplicateCapability`] when the name is
    /// already present.
    pub fn insert(&mut self, name: CapabilityName, settings: Value) -> Result<(), ConfigurationError> {
        if self.contains(&name) {
            return Err(ConfigurationError::DuplicateCapability(name.to_string()));
        }
        self.entries.push((name, settings));
        Ok(())
    }

    /// Builds a configuration from raw key/value pairs, preserving order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when a key is not a valid capability
    /// name or appears more than once.
    pub fn from_entries<K, I>(entries: I) -> Result<Self, ConfigurationError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let mut configuration = Self::new();
        for (key, settings) in entries {
            configuration.insert(CapabilityName::new(key)?, settings)?;
        }
        Ok(configuration)
    }

    /// Builds a configuration from a JSON object.
    ///
    /// Key order follows the object's iteration order. `null` yields an
    /// empty configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::NotAMapping`] for non-object documents
    /// and name validation errors for invalid keys.
    pub fn from_json_value(document: Value) -> Result<Self, ConfigurationError> {
        match document {
            Value::Null => Ok(Self::new()),
            Value::Object(map) => Self::from_entries(map),
            other => Err(ConfigurationError::NotAMapping(json_kind(&other).to_owned())),
        }
    }

    /// Parses a YAML document, preserving key order.
    ///
    /// An empty document yields an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Parse`] for malformed YAML,
    /// [`ConfigurationError::NotAMapping`] when the document is not a
    /// mapping, [`ConfigurationError::NonStringKey`] for non-string keys,
    /// and name validation errors for invalid keys.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigurationError> {
        let document: serde_yaml::Value =
            serde_yaml::from_str(text).map_err(ConfigurationError::parse)?;

        let mapping = match document {
            serde_yaml::Value::Null => return Ok(Self::new()),
            serde_yaml::Value::Mapping(mapping) => mapping,
            other => return Err(ConfigurationError::NotAMapping(yaml_kind(&other).to_owned())),
        };

        let mut configuration = Self::new();
        for (key, settings) in mapping {
            let key = match key {
                serde_yaml::Value::String(key) => key,
                other => return Err(ConfigurationError::NonStringKey(yaml_kind(&other).to_owned())),
            };
            let settings = serde_json::to_value(settings).map_err(ConfigurationError::parse)?;
            configuration.insert(CapabilityName::new(key)?, settings)?;
        }
        Ok(configuration)
    }

    /// Returns whether `name` is declared.
    #[must_use]
    pub fn contains(&self, name: &CapabilityName) -> bool {
        self.entries.iter().any(|(declared, _)| declared == name)
    }

    /// Returns the settings declared for `name`.
    #[must_use]
    pub fn get(&self, name: &CapabilityName) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(declared, _)| declared == name)
            .map(|(_, settings)| settings)
    }

    /// Returns the declared names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &CapabilityName> {
        self.entries.iter().map(|(name, _)| name)
    }

    /// Returns the number of declared capabilities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether nothing is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

const fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "boolean",
        serde_yaml::Value::Number(_) => "number",
        serde_yaml::Value::String(_) => "string",
        serde_yaml::Value::Sequence(_) => "sequence",
        serde_yaml::Value::Mapping(_) => "mapping",
        serde_yaml::Value::Tagged(_) => "tagged value",
    }
}
