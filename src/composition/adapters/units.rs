//! Service unit catalog and the standard configured units.

use crate::catalog::Catalog;
use crate::composition::{domain::CapabilityName, ports::ServiceUnit};
use crate::error::ConfigurationError;
use serde_json::Value;

/// Capabilities served by the standard unit catalog.
pub const STANDARD_CAPABILITIES: &[&str] = &[
    "caption",
    "embeddings",
    "extractor",
    "labels",
    "objects",
    "segmentation",
    "similarity",
    "summary",
    "tabular",
    "textractor",
    "transcription",
    "translation",
    "workflow",
];

/// Constructor building a service unit from its capability settings.
pub type UnitConstructor = Box<
    dyn Fn(&CapabilityName, &Value) -> Result<Box<dyn ServiceUnit>, ConfigurationError>
        + Send
        + Sync,
>;

/// Registry of service unit constructors keyed by capability name.
#[derive(Debug, Default)]
pub struct UnitCatalog {
    entries: Catalog<UnitConstructor>,
}

impl UnitCatalog {
    /// Creates an empty unit catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a catalog serving every standard capability with a
    /// [`ConfiguredUnit`].
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for name in STANDARD_CAPABILITIES {
            catalog.register(name, |name, settings| {
                Ok(Box::new(ConfiguredUnit::new(name.clone(), settings.clone())?)
                    as Box<dyn ServiceUnit>)
            });
        }
        catalog
    }

    /// Registers a unit constructor for `capability`.
    ///
    /// A later registration for the same capability replaces the earlier
    /// one.
    pub fn register<F>(&mut self, capability: &str, constructor: F) -> &mut Self
    where
        F: Fn(&CapabilityName, &Value) -> Result<Box<dyn ServiceUnit>, ConfigurationError>
            + Send
            + Sync
            + 'static,
    {
        self.entries.register(capability, Box::new(constructor));
        self
    }

    /// Looks up the constructor for `capability`.
    #[must_use]
    pub fn get(&self, capability: &CapabilityName) -> Option<&UnitConstructor> {
        self.entries.get(capability.as_str())
    }

    /// Returns the catalogued capability names in lexical order.
    pub fn capabilities(&self) -> impl Iterator<Item = &str> {
        self.entries.names()
    }
}

/// Service unit carrying its capability settings and route prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfiguredUnit {
    name: CapabilityName,
    settings: Value,
    route_prefix: String,
}

impl ConfiguredUnit {
    /// Creates a unit for `name` mounted at `/<name>`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidUnitSettings`] when `settings`
    /// is neither `null` nor a mapping.
    pub fn new(name: CapabilityName, settings: Value) -> Result<Self, ConfigurationError> {
        if !(settings.is_null() || settings.is_object()) {
            return Err(ConfigurationError::invalid_unit_settings(
                name.as_str(),
                std::io::Error::other("settings must be a mapping or empty"),
            ));
        }
        let route_prefix = format!("/{name}");
        Ok(Self {
            name,
            settings,
            route_prefix,
        })
    }
}

impl ServiceUnit for ConfiguredUnit {
    fn name(&self) -> &CapabilityName {
        &self.name
    }

    fn settings(&self) -> &Value {
        &self.settings
    }

    fn route_prefix(&self) -> &str {
        &self.route_prefix
    }
}
