//! Extension catalog.

use crate::catalog::Catalog;
use crate::composition::ports::Extension;

/// Zero-argument constructor for a startup extension.
pub type ExtensionConstructor = Box<dyn Fn() -> Box<dyn Extension> + Send + Sync>;

/// Registry of extension constructors keyed by extension name.
#[derive(Debug, Default)]
pub struct ExtensionCatalog {
    entries: Catalog<ExtensionConstructor>,
}

impl ExtensionCatalog {
    /// Creates an empty extension catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an extension constructor under `name`.
    pub fn register<F>(&mut self, name: &str, constructor: F) -> &mut Self
    where
        F: Fn() -> Box<dyn Extension> + Send + Sync + 'static,
    {
        self.entries.register(name, Box::new(constructor));
        self
    }

    /// Looks up the constructor registered under exactly `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ExtensionConstructor> {
        self.entries.get(name)
    }

    /// Returns the registered extension names in lexical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.names()
    }
}
