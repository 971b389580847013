//! Composition root kinds selectable at startup.

use super::InMemoryCompositionRoot;
use crate::catalog::Catalog;
use crate::composition::{domain::Configuration, ports::CompositionRoot};

/// Root kind used when none is requested.
pub const DEFAULT_ROOT_KIND: &str = "in_memory";

/// Constructor building an empty composition root for a configuration.
pub type RootConstructor = Box<dyn Fn(&Configuration) -> Box<dyn CompositionRoot> + Send + Sync>;

/// Registry of composition root constructors keyed by kind.
#[derive(Debug, Default)]
pub struct RootCatalog {
    entries: Catalog<RootConstructor>,
}

impl RootCatalog {
    /// Creates an empty root catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a catalog with the [`DEFAULT_ROOT_KIND`] in-memory root.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.register(DEFAULT_ROOT_KIND, |_| {
            Box::new(InMemoryCompositionRoot::new()) as Box<dyn CompositionRoot>
        });
        catalog
    }

    /// Registers a root constructor under `kind`.
    pub fn register<F>(&mut self, kind: &str, constructor: F) -> &mut Self
    where
        F: Fn(&Configuration) -> Box<dyn CompositionRoot> + Send + Sync + 'static,
    {
        self.entries.register(kind, Box::new(constructor));
        self
    }

    /// Looks up the constructor registered under exactly `kind`.
    #[must_use]
    pub fn get(&self, kind: &str) -> Option<&RootConstructor> {
        self.entries.get(kind)
    }
}
